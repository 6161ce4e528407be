//! Content collections for the company website.
//!
//! A collection is rebuilt from its [`SourceRegistry`] on every query: sources
//! are resolved, parsed into [`ContentRecord`]s, and the query layer filters,
//! sorts, and ranks the result. Nothing is cached between calls.
//!
//! # Modules
//!
//! - [`source`]: Source accessors and the registry
//! - [`loader`]: Batch and single-slug loading with configurable error handling
//! - [`news`]: News blog metadata and queries
//! - [`software`]: Software project metadata and queries
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use atelier_collection::{NewsCollection, SourceRegistry};
//!
//! # tokio_test::block_on(async {
//! let registry = SourceRegistry::builder()
//!     .resolved(
//!         "news/a.mdx",
//!         "---\ntitle: X\ndate: 2024-01-01\ntags: [x, y]\n---\nBody **bold**",
//!     )
//!     .build();
//! let news = NewsCollection::new(Arc::new(registry));
//!
//! let record = news.get_one("a").await.unwrap().unwrap();
//! assert_eq!(record.meta.title, "X");
//! assert!(record.content.contains("<strong>bold</strong>"));
//!
//! assert!(news.get_one("missing").await.unwrap().is_none());
//! # });
//! ```

pub mod loader;
pub mod news;
pub mod software;
pub mod source;

#[cfg(test)]
mod proptests;

pub use atelier_content::ContentRecord;
pub use loader::{CollectionLoader, ErrorHandling, LoadError, LoadReport};
pub use news::{DEFAULT_RELATED_LIMIT, NewsCollection, NewsMeta, TagCount, relevance};
pub use software::{SoftwareCollection, SoftwareMeta};
pub use source::{SourceAccessor, SourceEntry, SourceRegistry, SourceRegistryBuilder};
