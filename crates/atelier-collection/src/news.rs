//! News blog collection.
//!
//! Posts carry a title, description, publication date, tags, and an optional
//! draft flag. Listings hide drafts and show the newest posts first; related
//! posts are ranked by how many tags they share with the post being read.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use atelier_content::{ContentRecord, Frontmatter, FromFrontmatter, extract_first_paragraph};
use atelier_core::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::loader::{CollectionLoader, ErrorHandling};
use crate::source::SourceRegistry;

/// Number of related posts returned when the caller has no preference.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Maximum length of a description derived from the post body.
const EXCERPT_CHARS: usize = 160;

/// Metadata for a news post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsMeta {
    /// Slug derived from the file name.
    pub slug: String,
    /// Post title.
    pub title: String,
    /// Summary shown in listings.
    pub description: String,
    /// Publication time. A bare date means midnight UTC.
    pub date: DateTime<Utc>,
    /// Tags, in the order the author wrote them.
    pub tags: Vec<String>,
    /// Drafts are hidden from listings.
    pub draft: bool,
}

impl FromFrontmatter for NewsMeta {
    fn from_frontmatter(fm: &Frontmatter<'_>, slug: &str, body: &str) -> Result<Self> {
        let title = fm
            .get_scalar_string("title")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| Error::missing_field(slug, "title"))?;

        let raw_date = fm
            .get_scalar_string("date")
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| Error::missing_field(slug, "date"))?;
        let date = parse_date(&raw_date).ok_or_else(|| {
            Error::invalid_field(
                slug,
                "date",
                format!("'{raw_date}' is not a YYYY-MM-DD date or RFC 3339 timestamp"),
            )
        })?;

        let description = fm
            .get_scalar_string("description")
            .or_else(|| extract_first_paragraph(body, EXCERPT_CHARS))
            .unwrap_or_default();

        let draft = if fm.has("draft") {
            fm.get_bool("draft")
                .ok_or_else(|| Error::invalid_field(slug, "draft", "expected true or false"))?
        } else {
            false
        };

        Ok(Self {
            slug: slug.to_string(),
            title,
            description,
            date,
            tags: fm.get_string_list("tags"),
            draft,
        })
    }
}

/// Parse a frontmatter date into an instant.
///
/// Accepts `YYYY-MM-DD` (midnight), RFC 3339 timestamps (converted to UTC),
/// and `YYYY-MM-DD HH:MM:SS` without an offset (read as UTC).
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.with_timezone(&Utc))
        })
        .or_else(|| {
            ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.and_utc())
        })
}

/// Number of distinct reference tags that the candidate also carries.
///
/// Duplicate tags on either side do not raise the score.
///
/// ```
/// use atelier_collection::relevance;
///
/// let reference = ["A", "B", "C"].map(String::from);
/// let candidate = ["B", "C", "D"].map(String::from);
/// assert_eq!(relevance(&reference, &candidate), 2);
/// ```
pub fn relevance(reference_tags: &[String], candidate_tags: &[String]) -> usize {
    let reference: HashSet<&str> = reference_tags.iter().map(String::as_str).collect();
    reference
        .into_iter()
        .filter(|tag| candidate_tags.iter().any(|c| c.as_str() == *tag))
        .count()
}

/// Stable sort, newest first. Posts with the same timestamp keep their
/// relative order.
pub fn sort_by_date_desc(posts: &mut [NewsMeta]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Rank `posts` by relevance to the post with `slug`.
///
/// `posts` is expected in listing order; ties keep that order. The reference
/// post is excluded. Returns an empty vec if `slug` is not among `posts`.
pub fn rank_related(posts: &[NewsMeta], slug: &str, limit: usize) -> Vec<NewsMeta> {
    let Some(reference) = posts.iter().find(|p| p.slug == slug) else {
        return Vec::new();
    };

    let mut scored: Vec<(usize, &NewsMeta)> = posts
        .iter()
        .filter(|p| p.slug != reference.slug)
        .map(|p| (relevance(&reference.tags, &p.tags), p))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .take(limit)
        .map(|(_, post)| post.clone())
        .collect()
}

/// A tag and the number of published posts that carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    /// Tag name.
    pub tag: String,
    /// Number of posts.
    pub count: usize,
}

/// Queries over the news collection.
#[derive(Debug, Clone)]
pub struct NewsCollection {
    loader: CollectionLoader<NewsMeta>,
}

impl NewsCollection {
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
    pub fn loader(&self) -> &CollectionLoader<NewsMeta> {
        &self.loader
    }

    /// All posts, newest first, without rendered content.
    ///
    /// With `exclude_drafts` set, posts marked `draft: true` are omitted.
    pub async fn list_all(&self, exclude_drafts: bool) -> Result<Vec<NewsMeta>> {
        let mut posts = self.loader.load_metas().await?;
        if exclude_drafts {
            posts.retain(|p| !p.draft);
        }
        sort_by_date_desc(&mut posts);
        Ok(posts)
    }

    /// Published posts, newest first.
    pub async fn list_published(&self) -> Result<Vec<NewsMeta>> {
        self.list_all(true).await
    }

    /// A single post with rendered content, or `None` if no source matches.
    pub async fn get_one(&self, slug: &str) -> Result<Option<ContentRecord<NewsMeta>>> {
        self.loader.load_one(slug).await
    }

    /// Up to `limit` published posts most related to `slug`.
    ///
    /// Returns an empty vec when `slug` is not a published post.
    pub async fn get_related(&self, slug: &str, limit: usize) -> Result<Vec<NewsMeta>> {
        let posts = self.list_published().await?;
        Ok(rank_related(&posts, slug, limit))
    }

    /// Published posts carrying `tag`, newest first.
    pub async fn list_by_tag(&self, tag: &str) -> Result<Vec<NewsMeta>> {
        let mut posts = self.list_published().await?;
        posts.retain(|p| p.tags.iter().any(|t| t == tag));
        Ok(posts)
    }

    /// Every tag used by a published post, most used first, then by name.
    pub async fn tag_counts(&self) -> Result<Vec<TagCount>> {
        let posts = self.list_published().await?;

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for post in &posts {
            let distinct: HashSet<&str> = post.tags.iter().map(String::as_str).collect();
            for tag in distinct {
                *counts.entry(tag).or_default() += 1;
            }
        }

        let mut tags: Vec<TagCount> = counts
            .into_iter()
            .map(|(tag, count)| TagCount {
                tag: tag.to_string(),
                count,
            })
            .collect();
        tags.sort_by(|a, b| b.count.cmp(&a.count));
        Ok(tags)
    }
}
