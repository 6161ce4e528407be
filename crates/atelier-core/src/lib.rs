//! Atelier Core: shared errors and utilities for the content collections.
//!
//! This crate provides the foundational types used across all Atelier crates.
//! It has no internal Atelier dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`util`]: Slug derivation and file discovery

pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};

// Convenience re-exports from util
pub use util::ids::{
    CONTENT_EXTENSIONS, identifier_matches_slug, identifier_matches_slug_with, slug_from_identifier,
    slug_from_identifier_with,
};
