//! Content record builder.
//!
//! A [`ContentRecord`] couples a collection's metadata with the rendered HTML
//! of the body. The slug always comes from the caller (derived from the
//! source identifier), never from the frontmatter.

use atelier_core::Result;
use serde::Serialize;

use crate::markdown::{Frontmatter, extract_frontmatter, render_html};

/// Metadata plus rendered HTML for one content file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentRecord<T> {
    /// Slug derived from the source identifier.
    pub slug: String,
    /// Collection-specific metadata.
    pub meta: T,
    /// Body rendered to HTML.
    pub content: String,
}

impl<T> ContentRecord<T> {
    /// Drop the rendered content, keeping only the metadata.
    pub fn into_meta(self) -> T {
        self.meta
    }
}

/// Metadata types that can be built from frontmatter.
///
/// Implementations apply defaults for optional fields and report
/// [`atelier_core::Error::MissingField`] for required ones.
pub trait FromFrontmatter: Sized {
    /// Build metadata from parsed frontmatter, the record slug, and the
    /// Markdown body.
    fn from_frontmatter(frontmatter: &Frontmatter<'_>, slug: &str, body: &str) -> Result<Self>;
}

/// Build a record from raw text with an explicit transform.
///
/// Fails when the header is malformed or when `transform` fails.
pub fn build_record<T, F>(raw: &str, slug: &str, transform: F) -> Result<ContentRecord<T>>
where
    F: FnOnce(&Frontmatter<'_>, &str, &str) -> Result<T>,
{
    let frontmatter = extract_frontmatter(raw)?;
    let meta = transform(&frontmatter, slug, frontmatter.body())?;
    let content = render_html(frontmatter.body());

    Ok(ContentRecord {
        slug: slug.to_string(),
        meta,
        content,
    })
}

/// Build a record using the metadata type's [`FromFrontmatter`] impl.
pub fn build_typed_record<T: FromFrontmatter>(raw: &str, slug: &str) -> Result<ContentRecord<T>> {
    build_record(raw, slug, T::from_frontmatter)
}
