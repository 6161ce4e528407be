//! # atelier-cli
//!
//! Command-line preview of the website's content collections.
//!
//! Authors run it against a content checkout to see how posts and project
//! pages will be listed, rendered, and cross-linked before publishing.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;

pub use app::run;
pub use cli::{CliArgs, OutputFormat};
pub use config::AtelierConfig;
