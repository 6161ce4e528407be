//! Loading collections from content directories on disk.

use std::sync::Arc;

use atelier_collection::{
    ErrorHandling, NewsCollection, NewsMeta, SoftwareCollection, SourceRegistry,
};
use atelier_core::CONTENT_EXTENSIONS;

use crate::common::{content_dir, news_post, software_page};

#[tokio::test]
async fn test_news_from_dir() {
    let dir = content_dir(&[
        ("2024/launch.mdx", news_post("Launch", "2024-03-01", &["rust"], "Hi").as_str()),
        ("2023/retro.md", news_post("Retro", "2023-12-20", &["rust"], "Bye").as_str()),
        ("README.txt", "not content"),
    ]);

    let registry = SourceRegistry::from_dir(dir.path(), CONTENT_EXTENSIONS)
        .await
        .unwrap();
    assert_eq!(registry.len(), 2);

    let news = NewsCollection::new(Arc::new(registry));
    let slugs: Vec<String> = news
        .list_published()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.slug)
        .collect();
    assert_eq!(slugs, vec!["launch", "retro"]);

    let related = news.get_related("retro", 3).await.unwrap();
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].slug, "launch");
}

#[tokio::test]
async fn test_software_from_dir() {
    let dir = content_dir(&[(
        "forge.mdx",
        software_page("Forge", "https://git.example.com/forge", "Builds.").as_str(),
    )]);

    let registry = SourceRegistry::from_dir(dir.path(), &["mdx"]).await.unwrap();
    let software = SoftwareCollection::new(Arc::new(registry));

    let record = software.get_one("forge").await.unwrap().unwrap();
    assert_eq!(record.content, "<p>Builds.</p>\n");
}

#[tokio::test]
async fn test_from_dir_missing_directory() {
    let dir = content_dir(&[]);
    let missing = dir.path().join("nope");

    let result = SourceRegistry::from_dir(&missing, &["mdx"]).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_file_removed_after_registration() {
    let dir = content_dir(&[
        ("a.mdx", news_post("A", "2024-01-01", &[], "").as_str()),
        ("b.mdx", news_post("B", "2024-01-02", &[], "").as_str()),
    ]);
    let registry = Arc::new(SourceRegistry::from_dir(dir.path(), &["mdx"]).await.unwrap());
    std::fs::remove_file(dir.path().join("a.mdx")).unwrap();

    let news = NewsCollection::new(Arc::clone(&registry));
    let report = news.loader().load_all().await.unwrap();
    assert_eq!(report.sources_processed, 2);
    assert_eq!(report.errors.len(), 1);
    let posts: Vec<NewsMeta> = report.into_metas();
    assert_eq!(posts[0].slug, "b");

    assert!(news.get_one("a").await.unwrap_err().is_retrieval());

    let skipping = NewsCollection::new(registry).with_error_handling(ErrorHandling::Skip);
    assert_eq!(skipping.list_published().await.unwrap().len(), 1);
}
