//! Content sources and the source registry.
//!
//! A registry maps path-like identifiers (`news/launch.mdx`) to accessors.
//! An accessor either holds the text already or knows how to fetch it; the
//! loader treats both the same way through [`SourceAccessor::resolve`].
//!
//! Registries are built once, at startup, and are immutable afterwards.
//! Collections share them through an `Arc`.

use std::fmt;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use atelier_core::util::files::{FindOptions, find_all_files, read_file};
use atelier_core::{
    CONTENT_EXTENSIONS, Result, identifier_matches_slug_with, slug_from_identifier_with,
};
use futures::FutureExt;
use futures::future::BoxFuture;

type Retriever = Arc<dyn Fn() -> BoxFuture<'static, Result<String>> + Send + Sync>;

/// Text of a content source, available now or on demand.
#[derive(Clone)]
pub enum SourceAccessor {
    /// Text known at registration time.
    Resolved(String),
    /// Text produced by an async retrieval function.
    Deferred(Retriever),
}

impl SourceAccessor {
    /// Wrap text that is already available.
    pub fn resolved(text: impl Into<String>) -> Self {
        Self::Resolved(text.into())
    }

    /// Wrap a retrieval function. It is invoked on every resolve.
    pub fn deferred<F, Fut>(retrieve: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String>> + Send + 'static,
    {
        Self::Deferred(Arc::new(move || retrieve().boxed()))
    }

    /// Whether the text has to be fetched.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    /// Produce the source text.
    pub async fn resolve(&self) -> Result<String> {
        match self {
            Self::Resolved(text) => Ok(text.clone()),
            Self::Deferred(retrieve) => retrieve().await,
        }
    }
}

impl fmt::Debug for SourceAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved(text) => f
                .debug_tuple("Resolved")
                .field(&format_args!("{} bytes", text.len()))
                .finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// One registered source.
#[derive(Debug, Clone)]
pub struct SourceEntry {
    identifier: String,
    slug: String,
    accessor: SourceAccessor,
}

impl SourceEntry {
    /// The registry identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The slug derived from the identifier.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// The accessor for the source text.
    pub fn accessor(&self) -> &SourceAccessor {
        &self.accessor
    }
}

/// Ordered set of content sources for one collection.
///
/// Slugs are derived by stripping one of the registry's content extensions
/// (`mdx` and `md` unless the builder was given others).
#[derive(Debug, Clone)]
pub struct SourceRegistry {
    entries: Vec<SourceEntry>,
    extensions: Vec<String>,
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SourceRegistry {
    /// Start building a registry.
    pub fn builder() -> SourceRegistryBuilder {
        SourceRegistryBuilder::default()
    }

    /// Discover content files under `dir` and register each as a deferred
    /// source read from disk at load time.
    ///
    /// Identifiers are paths relative to `dir` with `/` separators, in sorted
    /// order.
    pub async fn from_dir<S: AsRef<str>>(dir: &Path, extensions: &[S]) -> Result<Self> {
        let files = find_all_files(dir, FindOptions::with_extensions(extensions)).await?;

        let mut builder = Self::builder().with_extensions(extensions);
        for file in files {
            let path = Arc::new(file.path.clone());
            builder = builder.deferred(file.identifier(), move || {
                let path = Arc::clone(&path);
                async move { read_file(&path).await }
            });
        }

        let registry = builder.build();
        log::debug!(
            "Registered {} sources from {}",
            registry.len(),
            dir.display()
        );
        Ok(registry)
    }

    /// Number of registered sources.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no sources.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in registration order.
    pub fn entries(&self) -> &[SourceEntry] {
        &self.entries
    }

    /// All identifiers in registration order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(SourceEntry::identifier)
    }

    /// Look up an entry by its exact identifier.
    pub fn get(&self, identifier: &str) -> Option<&SourceEntry> {
        self.entries.iter().find(|e| e.identifier == identifier)
    }

    /// Extensions stripped when deriving slugs.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Find the first entry whose identifier resolves to `slug`.
    pub fn find_by_slug(&self, slug: &str) -> Option<&SourceEntry> {
        self.entries
            .iter()
            .find(|e| identifier_matches_slug_with(&e.identifier, slug, &self.extensions))
    }
}

/// Builder for [`SourceRegistry`].
#[derive(Debug)]
pub struct SourceRegistryBuilder {
    sources: Vec<(String, SourceAccessor)>,
    extensions: Vec<String>,
}

impl Default for SourceRegistryBuilder {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            extensions: CONTENT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl SourceRegistryBuilder {
    /// Replace the extensions stripped when deriving slugs.
    pub fn with_extensions<S: AsRef<str>>(mut self, extensions: &[S]) -> Self {
        self.extensions = extensions
            .iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_string())
            .collect();
        self
    }

    /// Register a source. Re-registering an identifier replaces its accessor
    /// in place.
    pub fn insert(mut self, identifier: impl Into<String>, accessor: SourceAccessor) -> Self {
        let identifier = identifier.into();
        match self.sources.iter_mut().find(|(id, _)| *id == identifier) {
            Some((_, existing)) => *existing = accessor,
            None => self.sources.push((identifier, accessor)),
        }
        self
    }

    /// Register text that is already available.
    pub fn resolved(self, identifier: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(identifier, SourceAccessor::resolved(text))
    }

    /// Register a source fetched on demand.
    pub fn deferred<F, Fut>(self, identifier: impl Into<String>, retrieve: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String>> + Send + 'static,
    {
        self.insert(identifier, SourceAccessor::deferred(retrieve))
    }

    /// Finish the registry, deriving each entry's slug.
    pub fn build(self) -> SourceRegistry {
        let extensions = self.extensions;
        let entries = self
            .sources
            .into_iter()
            .map(|(identifier, accessor)| SourceEntry {
                slug: slug_from_identifier_with(&identifier, &extensions),
                identifier,
                accessor,
            })
            .collect();

        SourceRegistry {
            entries,
            extensions,
        }
    }
}
