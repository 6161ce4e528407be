//! News queries end to end.

use std::sync::Arc;

use atelier_collection::{DEFAULT_RELATED_LIMIT, ErrorHandling, NewsCollection, SourceRegistry};
use atelier_core::slug_from_identifier;

use crate::common::{news_post, news_registry};

fn slugs<'a>(posts: impl IntoIterator<Item = &'a atelier_collection::NewsMeta>) -> Vec<&'a str> {
    posts.into_iter().map(|p| p.slug.as_str()).collect()
}

#[tokio::test]
async fn test_get_one_renders_markdown() {
    let registry = SourceRegistry::builder()
        .resolved(
            "a.mdx",
            "---\ntitle: X\ndate: 2024-01-01\ntags: [x,y]\n---\nBody **bold**",
        )
        .build();
    let news = NewsCollection::new(Arc::new(registry));

    let record = news.get_one("a").await.unwrap().unwrap();

    assert_eq!(record.meta.title, "X");
    assert_eq!(record.meta.tags, vec!["x", "y"]);
    assert!(record.content.contains("<strong>bold</strong>"));
}

#[tokio::test]
async fn test_get_one_missing_is_none() {
    let news = NewsCollection::new(news_registry());
    assert!(news.get_one("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_one_returns_drafts() {
    let news = NewsCollection::new(news_registry());
    let record = news.get_one("secret").await.unwrap().unwrap();

    assert!(record.meta.draft);
}

#[tokio::test]
async fn test_list_all_newest_first() {
    let registry = SourceRegistry::builder()
        .resolved("jan.mdx", news_post("January", "2024-01-01", &[], ""))
        .resolved("feb.mdx", news_post("February", "2024-02-01", &[], ""))
        .build();
    let news = NewsCollection::new(Arc::new(registry));

    let posts = news.list_all(true).await.unwrap();

    assert_eq!(slugs(&posts), vec!["feb", "jan"]);
}

#[tokio::test]
async fn test_list_all_orders_same_day_by_time() {
    let registry = SourceRegistry::builder()
        .resolved(
            "morning.mdx",
            news_post("Morning", "2024-01-01T08:00:00Z", &[], ""),
        )
        .resolved(
            "evening.mdx",
            news_post("Evening", "2024-01-01T20:00:00Z", &[], ""),
        )
        .build();
    let news = NewsCollection::new(Arc::new(registry));

    let posts = news.list_all(true).await.unwrap();

    assert_eq!(slugs(&posts), vec!["evening", "morning"]);
}

#[tokio::test]
async fn test_list_all_compares_offsets_as_instants() {
    // 01:00 at +05:00 on the 2nd is 20:00 UTC on the 1st.
    let registry = SourceRegistry::builder()
        .resolved(
            "east.mdx",
            news_post("East", "2024-01-02T01:00:00+05:00", &[], ""),
        )
        .resolved("west.mdx", news_post("West", "2024-01-01T22:00:00Z", &[], ""))
        .build();
    let news = NewsCollection::new(Arc::new(registry));

    let posts = news.list_all(true).await.unwrap();

    assert_eq!(slugs(&posts), vec!["west", "east"]);
}

#[tokio::test]
async fn test_list_all_draft_filtering() {
    let news = NewsCollection::new(news_registry());

    let published = news.list_published().await.unwrap();
    assert_eq!(slugs(&published), vec!["roadmap", "launch", "hiring", "retro"]);

    let everything = news.list_all(false).await.unwrap();
    assert_eq!(everything.len(), 5);
    assert_eq!(everything[0].slug, "secret");
}

#[tokio::test]
async fn test_list_all_same_date_keeps_registry_order() {
    let registry = SourceRegistry::builder()
        .resolved("b.mdx", news_post("B", "2024-06-01", &[], ""))
        .resolved("a.mdx", news_post("A", "2024-06-01", &[], ""))
        .resolved("c.mdx", news_post("C", "2024-06-01", &[], ""))
        .build();
    let news = NewsCollection::new(Arc::new(registry));

    let posts = news.list_all(true).await.unwrap();

    assert_eq!(slugs(&posts), vec!["b", "a", "c"]);
}

#[tokio::test]
async fn test_get_related_ranks_by_tag_overlap() {
    let news = NewsCollection::new(news_registry());

    let related = news
        .get_related("launch", DEFAULT_RELATED_LIMIT)
        .await
        .unwrap();

    // roadmap and retro share two tags; hiring shares none but still fills
    // the last slot. The draft never appears.
    assert_eq!(slugs(&related), vec!["roadmap", "retro", "hiring"]);
}

#[tokio::test]
async fn test_get_related_respects_limit() {
    let news = NewsCollection::new(news_registry());

    let related = news.get_related("launch", 1).await.unwrap();
    assert_eq!(slugs(&related), vec!["roadmap"]);

    assert!(news.get_related("launch", 0).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_related_unknown_or_draft_reference() {
    let news = NewsCollection::new(news_registry());

    assert!(news.get_related("missing", 3).await.unwrap().is_empty());
    assert!(news.get_related("secret", 3).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_by_tag() {
    let news = NewsCollection::new(news_registry());

    let posts = news.list_by_tag("web").await.unwrap();

    assert_eq!(slugs(&posts), vec!["launch", "retro"]);
}

#[tokio::test]
async fn test_tag_counts() {
    let news = NewsCollection::new(news_registry());

    let counts: Vec<(String, usize)> = news
        .tag_counts()
        .await
        .unwrap()
        .into_iter()
        .map(|t| (t.tag, t.count))
        .collect();

    assert_eq!(
        counts,
        vec![
            ("rust".to_string(), 3),
            ("product".to_string(), 2),
            ("web".to_string(), 2),
            ("company".to_string(), 1),
        ]
    );
}

#[tokio::test]
async fn test_record_slug_matches_identifier_slug() {
    let registry = news_registry();
    let news = NewsCollection::new(Arc::clone(&registry));

    for identifier in registry.identifiers() {
        let slug = slug_from_identifier(identifier);
        let record = news.get_one(&slug).await.unwrap().unwrap();
        assert_eq!(record.slug, slug);
        assert_eq!(record.meta.slug, slug);
    }
}

#[tokio::test]
async fn test_invalid_post_collected_or_fatal() {
    let registry = Arc::new(
        SourceRegistry::builder()
            .resolved("ok.mdx", news_post("Ok", "2024-01-01", &[], ""))
            .resolved("undated.mdx", "---\ntitle: Undated\n---\n")
            .build(),
    );

    let collected = NewsCollection::new(Arc::clone(&registry));
    assert_eq!(slugs(&collected.list_all(true).await.unwrap()), vec!["ok"]);

    let report = collected.loader().load_all().await.unwrap();
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].identifier, "undated.mdx");

    let strict = NewsCollection::new(registry).with_error_handling(ErrorHandling::FailFast);
    let err = strict.list_all(true).await.unwrap_err();
    assert!(err.is_content());
}
