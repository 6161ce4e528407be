//! Markdown parsing and rendering utilities.
//!
//! - [`frontmatter`]: YAML frontmatter extraction
//! - [`render`]: Markdown to HTML conversion
//! - [`excerpt`]: Plain-text excerpts from Markdown
//!
//! [`parse_document`] runs the first two in sequence and is what the record
//! builder uses.

pub mod excerpt;
pub mod frontmatter;
pub mod render;

use atelier_core::Result;
use serde_yaml::Mapping;

pub use excerpt::extract_first_paragraph;
pub use frontmatter::{Frontmatter, extract_frontmatter, strip_frontmatter};
pub use render::render_html;

/// A content file split into attributes, Markdown body, and rendered HTML.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// Frontmatter attributes (empty when the file has no header).
    pub attributes: Mapping,
    /// Markdown body after the header.
    pub body: String,
    /// Body rendered to HTML.
    pub html: String,
}

/// Split `raw` into frontmatter and body, then render the body to HTML.
///
/// Fails only when the header is malformed; rendering never fails.
///
/// # Example
///
/// ```rust
/// use atelier_content::markdown::parse_document;
///
/// let doc = parse_document("---\ntitle: X\n---\nBody **bold**").unwrap();
/// assert_eq!(doc.attributes.get("title").and_then(|v| v.as_str()), Some("X"));
/// assert!(doc.html.contains("<strong>bold</strong>"));
/// ```
pub fn parse_document(raw: &str) -> Result<ParsedDocument> {
    let frontmatter = extract_frontmatter(raw)?;
    let html = render_html(frontmatter.body());
    let body = frontmatter.body().to_string();

    Ok(ParsedDocument {
        attributes: frontmatter.into_attributes(),
        body,
        html,
    })
}
