//! HTTP client module for the icon library asset host.
//!
//! This module provides the `ResourceClient` for fetching the two
//! published library documents over plain HTTPS. No authentication is
//! involved; the documents are public build artifacts addressed by
//! content-hashed URLs.

pub mod client;
pub mod error;

pub use client::{FetchedResource, ResourceClient};
pub use error::ApiError;
