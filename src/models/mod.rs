//! Data models for the icon library.
//!
//! This module contains the structures the two library documents
//! deserialize into:
//!
//! - `Icon`, `IconStyle`, `SvgVariant`: per-icon rendering metadata
//! - `Category`: display metadata and member icon list
//! - `IconTable`, `CategoryTable`: the document-level mappings

pub mod category;
pub mod icon;

pub use category::{Category, CategoryTable};
pub use icon::{Icon, IconStyle, IconTable, SearchTerms, SvgVariant};
