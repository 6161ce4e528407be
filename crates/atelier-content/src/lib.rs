//! Frontmatter extraction, Markdown rendering, and content records.
//!
//! This crate turns the raw text of a content file into a
//! [`ContentRecord`]: typed metadata plus rendered HTML, keyed by slug. It has
//! no knowledge of particular collections; each collection defines its own
//! metadata type and implements [`FromFrontmatter`] for it.
//!
//! # Modules
//!
//! - [`markdown`]: Markdown parsing and rendering
//!   - [`markdown::frontmatter`]: YAML frontmatter extraction
//!   - [`markdown::render`]: Markdown to HTML
//!   - [`markdown::excerpt`]: Plain-text excerpts
//! - [`record`]: Content record builder
//!
//! # Example
//!
//! ```rust
//! use atelier_content::{build_record, Frontmatter};
//!
//! let raw = "---\ntitle: Hello\n---\nBody **bold**";
//! let record = build_record(raw, "hello", |fm: &Frontmatter<'_>, _slug: &str, _body: &str| {
//!     Ok(fm.get_str("title").unwrap_or_default().to_string())
//! })
//! .unwrap();
//!
//! assert_eq!(record.meta, "Hello");
//! assert!(record.content.contains("<strong>bold</strong>"));
//! ```

pub mod markdown;
pub mod record;

#[cfg(test)]
mod proptests;

// Re-export commonly used types
pub use markdown::{
    Frontmatter, ParsedDocument, extract_first_paragraph, extract_frontmatter, parse_document,
    render_html, strip_frontmatter,
};
pub use record::{ContentRecord, FromFrontmatter, build_record, build_typed_record};
