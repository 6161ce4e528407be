//! Collection loading.
//!
//! The loader walks a [`SourceRegistry`] in order, resolves each source, and
//! builds a [`ContentRecord`] from it. What happens when one source fails is
//! decided by [`ErrorHandling`]:
//!
//! - `FailFast`: the first failure aborts the whole load
//! - `Collect`: failures are recorded in the [`LoadReport`] next to the
//!   records that did load (default)
//! - `Skip`: failures are logged and dropped
//!
//! Nothing is cached. Each call reads every source again.

use std::marker::PhantomData;
use std::sync::Arc;

use atelier_content::{ContentRecord, FromFrontmatter, build_typed_record};
use atelier_core::Result;
use serde::{Deserialize, Serialize};

use crate::source::{SourceEntry, SourceRegistry};

/// What to do when a single source fails to load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorHandling {
    /// Stop on first error.
    FailFast,
    /// Continue and collect errors.
    #[default]
    Collect,
    /// Log and skip problematic sources.
    Skip,
}

/// A source that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadError {
    /// Registry identifier of the source.
    pub identifier: String,
    /// Error message.
    pub message: String,
}

/// Outcome of loading a whole collection.
#[derive(Debug, Clone)]
pub struct LoadReport<M> {
    /// Records in registry order.
    pub records: Vec<ContentRecord<M>>,
    /// Sources that failed (always empty under `FailFast` and `Skip`).
    pub errors: Vec<LoadError>,
    /// Number of sources attempted.
    pub sources_processed: usize,
    /// Number of sources that failed.
    pub sources_skipped: usize,
}

impl<M> LoadReport<M> {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            errors: Vec::new(),
            sources_processed: 0,
            sources_skipped: 0,
        }
    }

    /// Whether every source loaded.
    pub fn is_complete(&self) -> bool {
        self.sources_skipped == 0
    }

    /// Metadata of every loaded record, in registry order.
    pub fn into_metas(self) -> Vec<M> {
        self.records
            .into_iter()
            .map(ContentRecord::into_meta)
            .collect()
    }
}

/// Loads records of metadata type `M` from a registry.
#[derive(Debug)]
pub struct CollectionLoader<M> {
    registry: Arc<SourceRegistry>,
    error_handling: ErrorHandling,
    _meta: PhantomData<fn() -> M>,
}

impl<M> Clone for CollectionLoader<M> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            error_handling: self.error_handling,
            _meta: PhantomData,
        }
    }
}

impl<M: FromFrontmatter> CollectionLoader<M> {
    /// Create a loader over `registry` with the default error handling.
    pub fn new(registry: Arc<SourceRegistry>) -> Self {
        Self {
            registry,
            error_handling: ErrorHandling::default(),
            _meta: PhantomData,
        }
    }

    /// Set the error handling strategy.
    pub fn with_error_handling(mut self, handling: ErrorHandling) -> Self {
        self.error_handling = handling;
        self
    }

    /// The error handling strategy in effect.
    pub fn error_handling(&self) -> ErrorHandling {
        self.error_handling
    }

    /// The registry this loader reads from.
    pub fn registry(&self) -> &SourceRegistry {
        &self.registry
    }

    /// Load every source in the registry.
    pub async fn load_all(&self) -> Result<LoadReport<M>> {
        let mut report = LoadReport::new();

        for entry in self.registry.entries() {
            report.sources_processed += 1;

            match load_entry(entry).await {
                Ok(record) => report.records.push(record),
                Err(e) => {
                    report.sources_skipped += 1;
                    match self.error_handling {
                        ErrorHandling::FailFast => return Err(e),
                        ErrorHandling::Collect => {
                            log::debug!("Collected error for {}: {e}", entry.identifier());
                            report.errors.push(LoadError {
                                identifier: entry.identifier().to_string(),
                                message: e.to_string(),
                            });
                        }
                        ErrorHandling::Skip => {
                            log::warn!("Skipping {}: {e}", entry.identifier());
                        }
                    }
                }
            }
        }

        log::debug!(
            "Loaded {} of {} sources",
            report.records.len(),
            report.sources_processed
        );
        Ok(report)
    }

    /// Load the record for `slug`.
    ///
    /// Returns `Ok(None)` when no identifier matches. A matching source that
    /// fails to load is an error regardless of the error handling strategy.
    pub async fn load_one(&self, slug: &str) -> Result<Option<ContentRecord<M>>> {
        match self.registry.find_by_slug(slug) {
            Some(entry) => load_entry(entry).await.map(Some),
            None => {
                log::debug!("No source matches slug '{slug}'");
                Ok(None)
            }
        }
    }

    /// Load every source and keep only metadata, logging any collected errors.
    pub(crate) async fn load_metas(&self) -> Result<Vec<M>> {
        let report = self.load_all().await?;
        for error in &report.errors {
            log::warn!("Failed to load {}: {}", error.identifier, error.message);
        }
        Ok(report.into_metas())
    }
}

async fn load_entry<M: FromFrontmatter>(entry: &SourceEntry) -> Result<ContentRecord<M>> {
    let raw = entry.accessor().resolve().await?;
    let slug = entry.slug();
    log::debug!("Building record '{slug}' from {}", entry.identifier());
    build_typed_record(&raw, slug)
}
