//! Durable on-disk cache for fetched library resources.
//!
//! This module provides the `CacheRegion`: a named, URL-keyed store of
//! resource bodies that survives restarts. One region, `icons-library`,
//! holds the two tracked documents; a prune pass after each load removes
//! entries left behind by previous deployed versions.

pub mod region;

pub use region::{CacheRegion, CachedEntry};

/// Name of the region holding the icon library documents.
/// Must stay stable across deployments so pruning can find prior entries.
pub const ICONS_LIBRARY_REGION: &str = "icons-library";
