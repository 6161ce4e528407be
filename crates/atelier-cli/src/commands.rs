//! Command handlers.
//!
//! Each handler builds the collection it needs from the configured content
//! directory, runs one query, and returns the rendered output. Printing is
//! left to the caller.

use std::path::Path;
use std::sync::Arc;

use atelier_collection::{
    ContentRecord, NewsCollection, NewsMeta, SoftwareCollection, SoftwareMeta, SourceRegistry,
    TagCount,
};
use atelier_core::{Error, Result};
use chrono::SecondsFormat;
use serde::Serialize;

use crate::cli::{ConfigAction, NewsAction, OutputFormat, SoftwareAction};
use crate::config::AtelierConfig;

// ============================================================================
// Dispatch
// ============================================================================

/// Run a news subcommand.
pub async fn handle_news(
    config: &AtelierConfig,
    action: NewsAction,
    format: OutputFormat,
) -> Result<String> {
    let news = news_collection(config).await?;

    match action {
        NewsAction::List { drafts } => {
            let posts = news.list_all(!drafts).await?;
            render(format, &posts, || format_news_list(&posts))
        }
        NewsAction::Get { slug } => {
            let record = news
                .get_one(&slug)
                .await?
                .ok_or_else(|| Error::not_found(format!("news post '{slug}'")))?;
            render(format, &record, || format_news_record(&record))
        }
        NewsAction::Related { slug, limit } => {
            let limit = limit.unwrap_or(config.news.related_limit);
            let posts = news.get_related(&slug, limit).await?;
            render(format, &posts, || format_news_list(&posts))
        }
        NewsAction::Tags => {
            let tags = news.tag_counts().await?;
            render(format, &tags, || format_tags(&tags))
        }
    }
}

/// Run a software subcommand.
pub async fn handle_software(
    config: &AtelierConfig,
    action: SoftwareAction,
    format: OutputFormat,
) -> Result<String> {
    let software = software_collection(config).await?;

    match action {
        SoftwareAction::List => {
            let projects = software.list_all().await?;
            render(format, &projects, || format_software_list(&projects))
        }
        SoftwareAction::Get { slug } => {
            let record = software
                .get_one(&slug)
                .await?
                .ok_or_else(|| Error::not_found(format!("software project '{slug}'")))?;
            render(format, &record, || format_software_record(&record))
        }
    }
}

/// Run a config subcommand.
pub fn handle_config(
    config_path: Option<&str>,
    config: &AtelierConfig,
    action: ConfigAction,
) -> Result<String> {
    match action {
        ConfigAction::Path => match AtelierConfig::resolve_config_path(config_path) {
            Some(path) => {
                if !path.exists() {
                    log::info!("{} does not exist, using defaults", path.display());
                }
                Ok(format!("{}\n", path.display()))
            }
            None => Err(Error::config(
                "Could not determine config directory for this platform",
            )),
        },
        ConfigAction::Show => config.to_toml_string(),
    }
}

// ============================================================================
// Collections
// ============================================================================

async fn registry(dir: &Path, config: &AtelierConfig) -> Result<Arc<SourceRegistry>> {
    let registry = SourceRegistry::from_dir(dir, config.content.extensions.as_slice()).await?;
    Ok(Arc::new(registry))
}

async fn news_collection(config: &AtelierConfig) -> Result<NewsCollection> {
    let registry = registry(&config.news_path(), config).await?;
    Ok(NewsCollection::new(registry).with_error_handling(config.loader.error_handling))
}

async fn software_collection(config: &AtelierConfig) -> Result<SoftwareCollection> {
    let registry = registry(&config.software_path(), config).await?;
    Ok(SoftwareCollection::new(registry).with_error_handling(config.loader.error_handling))
}

// ============================================================================
// Output
// ============================================================================

fn render<T, F>(format: OutputFormat, value: &T, text: F) -> Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> String,
{
    match format {
        OutputFormat::Text => Ok(text()),
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| Error::serialization(e.to_string())),
    }
}

fn format_news_list(posts: &[NewsMeta]) -> String {
    if posts.is_empty() {
        return "No posts.\n".to_string();
    }
    posts
        .iter()
        .map(|p| {
            let draft = if p.draft { " [draft]" } else { "" };
            format!(
                "{}  {}  {}{draft}\n",
                p.date.format("%Y-%m-%d"),
                p.slug,
                p.title
            )
        })
        .collect()
}

fn format_news_record(record: &ContentRecord<NewsMeta>) -> String {
    let meta = &record.meta;
    let mut out = format!("{}\n", meta.title);
    out.push_str(&format!("slug: {}\n", meta.slug));
    out.push_str(&format!(
        "date: {}\n",
        meta.date.to_rfc3339_opts(SecondsFormat::Secs, true)
    ));
    if !meta.tags.is_empty() {
        out.push_str(&format!("tags: {}\n", meta.tags.join(", ")));
    }
    if meta.draft {
        out.push_str("draft: true\n");
    }
    if !meta.description.is_empty() {
        out.push_str(&format!("description: {}\n", meta.description));
    }
    out.push('\n');
    out.push_str(&record.content);
    out
}

fn format_tags(tags: &[TagCount]) -> String {
    if tags.is_empty() {
        return "No tags.\n".to_string();
    }
    tags.iter()
        .map(|t| format!("{:>4}  {}\n", t.count, t.tag))
        .collect()
}

fn format_software_list(projects: &[SoftwareMeta]) -> String {
    if projects.is_empty() {
        return "No projects.\n".to_string();
    }
    projects
        .iter()
        .map(|p| format!("{}  {}  {}\n", p.slug, p.title, p.repo))
        .collect()
}

fn format_software_record(record: &ContentRecord<SoftwareMeta>) -> String {
    let meta = &record.meta;
    let mut out = format!("{}\n", meta.title);
    out.push_str(&format!("slug: {}\n", meta.slug));
    out.push_str(&format!("repo: {}\n", meta.repo));
    if let Some(website) = &meta.website {
        out.push_str(&format!("website: {website}\n"));
    }
    if let Some(description) = &meta.description {
        out.push_str(&format!("description: {description}\n"));
    }
    out.push('\n');
    out.push_str(&record.content);
    out
}

// ============================================================================
// Tests
// ============================================================================
