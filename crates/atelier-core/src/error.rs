//! Error types for Atelier operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used across
//! all Atelier crates. Uses `thiserror` for derive macros.
//!
//! A slug that matches no source is not an error: lookups return `Ok(None)`.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while loading and querying content collections.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error without path context.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error on a specific file.
    #[error("I/O error on {}: {source}", path.display())]
    IoWithPath {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A deferred source failed to produce its text.
    #[error("Failed to retrieve source '{identifier}': {message}")]
    Retrieval {
        /// Registry identifier of the source.
        identifier: String,
        /// What went wrong.
        message: String,
    },

    /// Frontmatter header is unterminated or not valid YAML.
    #[error("Malformed frontmatter: {0}")]
    MalformedFrontmatter(String),

    /// A required metadata field is absent.
    #[error("Missing required field '{field}' in '{slug}'")]
    MissingField {
        /// Slug of the offending record.
        slug: String,
        /// Name of the missing field.
        field: &'static str,
    },

    /// A metadata field is present but unusable.
    #[error("Invalid field '{field}' in '{slug}': {message}")]
    InvalidField {
        /// Slug of the offending record.
        slug: String,
        /// Name of the field.
        field: &'static str,
        /// What went wrong.
        message: String,
    },

    /// Content not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create an I/O error tagged with the file path.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a retrieval error for a deferred source.
    pub fn retrieval(identifier: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Retrieval {
            identifier: identifier.into(),
            message: message.into(),
        }
    }

    /// Create a malformed frontmatter error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedFrontmatter(msg.into())
    }

    /// Create a missing field error.
    pub fn missing_field(slug: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField {
            slug: slug.into(),
            field,
        }
    }

    /// Create an invalid field error.
    pub fn invalid_field(
        slug: impl Into<String>,
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            slug: slug.into(),
            field,
            message: message.into(),
        }
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Whether the error came from reading a source rather than its content.
    pub fn is_retrieval(&self) -> bool {
        matches!(
            self,
            Error::Io(_) | Error::IoWithPath { .. } | Error::Retrieval { .. }
        )
    }

    /// Whether the error describes bad metadata in an otherwise readable source.
    pub fn is_content(&self) -> bool {
        matches!(
            self,
            Error::MalformedFrontmatter(_) | Error::MissingField { .. } | Error::InvalidField { .. }
        )
    }
}

/// Result type alias using Atelier's Error type.
pub type Result<T> = std::result::Result<T, Error>;
