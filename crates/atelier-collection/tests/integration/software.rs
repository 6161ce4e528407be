//! Software queries end to end.

use std::sync::Arc;

use atelier_collection::{SoftwareCollection, SourceRegistry};

use crate::common::software_page;

fn registry() -> Arc<SourceRegistry> {
    Arc::new(
        SourceRegistry::builder()
            .resolved(
                "software/zephyr.mdx",
                software_page("Zephyr", "https://git.example.com/zephyr", "Queue."),
            )
            .resolved(
                "software/beacon.mdx",
                software_page("beacon", "https://git.example.com/beacon", "## Usage\n\nRun it."),
            )
            .resolved(
                "software/atlas.mdx",
                software_page("Atlas", "https://git.example.com/atlas", ""),
            )
            .build(),
    )
}

#[tokio::test]
async fn test_list_all_alphabetical() {
    let software = SoftwareCollection::new(registry());

    let titles: Vec<String> = software
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();

    assert_eq!(titles, vec!["Atlas", "beacon", "Zephyr"]);
}

#[tokio::test]
async fn test_get_one_renders_content() {
    let software = SoftwareCollection::new(registry());

    let record = software.get_one("beacon").await.unwrap().unwrap();

    assert_eq!(record.meta.repo, "https://git.example.com/beacon");
    assert!(record.content.contains("<h2>Usage</h2>"));
}

#[tokio::test]
async fn test_get_one_missing() {
    let software = SoftwareCollection::new(registry());
    assert!(software.get_one("missing").await.unwrap().is_none());
}
