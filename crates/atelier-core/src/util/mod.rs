//! Utility modules for slug derivation and file discovery.
//!
//! # Modules
//!
//! - [`files`]: Async file discovery utilities
//! - [`ids`]: Slug derivation from source identifiers

pub mod files;
pub mod ids;
