//! Software project collection.
//!
//! One page per project the company maintains. Projects have no dates or
//! drafts; the catalog lists them alphabetically.

use std::sync::Arc;

use atelier_content::{ContentRecord, Frontmatter, FromFrontmatter};
use atelier_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::loader::{CollectionLoader, ErrorHandling};
use crate::source::SourceRegistry;

/// Metadata for a software project page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftwareMeta {
    /// Slug derived from the file name.
    pub slug: String,
    /// Project name.
    pub title: String,
    /// Source repository URL.
    pub repo: String,
    /// Project website, if it has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// One-line summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl FromFrontmatter for SoftwareMeta {
    fn from_frontmatter(fm: &Frontmatter<'_>, slug: &str, _body: &str) -> Result<Self> {
        let title = non_blank(fm.get_scalar_string("title"))
            .ok_or_else(|| Error::missing_field(slug, "title"))?;
        let repo = non_blank(fm.get_scalar_string("repo"))
            .ok_or_else(|| Error::missing_field(slug, "repo"))?;

        Ok(Self {
            slug: slug.to_string(),
            title,
            repo,
            website: non_blank(fm.get_scalar_string("website")),
            description: non_blank(fm.get_scalar_string("description")),
        })
    }
}

/// Queries over the software collection.
#[derive(Debug, Clone)]
pub struct SoftwareCollection {
    loader: CollectionLoader<SoftwareMeta>,
}

impl SoftwareCollection {
    /// Create a collection over `registry`.
    pub fn new(registry: Arc<SourceRegistry>) -> Self {
        Self {
            loader: CollectionLoader::new(registry),
        }
    }

    /// Set how failing sources are handled.
    pub fn with_error_handling(mut self, handling: ErrorHandling) -> Self {
        self.loader = self.loader.with_error_handling(handling);
        self
    }

    /// The underlying loader, for callers that want the full load report.
    pub fn loader(&self) -> &CollectionLoader<SoftwareMeta> {
        &self.loader
    }

    /// All projects ordered by title, ignoring case. Equal titles keep
    /// discovery order.
    pub async fn list_all(&self) -> Result<Vec<SoftwareMeta>> {
        let mut projects = self.loader.load_metas().await?;
        projects.sort_by_cached_key(|p| p.title.to_lowercase());
        Ok(projects)
    }

    /// A single project page with rendered content, or `None` if no source
    /// matches.
    pub async fn get_one(&self, slug: &str) -> Result<Option<ContentRecord<SoftwareMeta>>> {
        self.loader.load_one(slug).await
    }
}
