//! Cache-backed loader for a mapping application's icon library.
//!
//! The icon library ships as two JSON documents per deployment: a large
//! icon table and a small category index, both addressed by content-hashed
//! URLs. This crate loads the pair as fast as possible, preferring a
//! durable on-disk cache over the network, and keeps that cache free of
//! entries left behind by previous deployments.

pub mod api;
pub mod cache;
pub mod config;
pub mod library;
pub mod loader;
pub mod models;

pub use cache::{CacheRegion, CachedEntry, ICONS_LIBRARY_REGION};
pub use config::Config;
pub use library::IconLibrary;
pub use loader::{IconLibraryLoader, LoadError};
