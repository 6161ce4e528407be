//! Common fixtures for Atelier collection integration tests.

use std::path::Path;
use std::sync::Arc;

use atelier_collection::SourceRegistry;
use tempfile::TempDir;

/// Frontmatter + body for a news post.
pub fn news_post(title: &str, date: &str, tags: &[&str], body: &str) -> String {
    format!(
        "---\ntitle: {title}\ndate: {date}\ntags: [{}]\n---\n{body}",
        tags.join(", ")
    )
}

/// Frontmatter + body for a draft news post.
pub fn draft_post(title: &str, date: &str, tags: &[&str]) -> String {
    format!(
        "---\ntitle: {title}\ndate: {date}\ntags: [{}]\ndraft: true\n---\nUnder review.",
        tags.join(", ")
    )
}

/// Frontmatter + body for a software project page.
pub fn software_page(title: &str, repo: &str, body: &str) -> String {
    format!("---\ntitle: {title}\nrepo: {repo}\n---\n{body}")
}

/// A small news registry with a draft and overlapping tags.
///
/// Published posts, newest first: `roadmap`, `launch`, `hiring`, `retro`.
pub fn news_registry() -> Arc<SourceRegistry> {
    Arc::new(
        SourceRegistry::builder()
            .resolved(
                "news/launch.mdx",
                news_post("Launch", "2024-03-01", &["product", "rust", "web"], "We **shipped**."),
            )
            .resolved(
                "news/hiring.mdx",
                news_post("Hiring", "2024-02-10", &["company"], "Join us."),
            )
            .resolved(
                "news/roadmap.mdx",
                news_post("Roadmap", "2024-04-15", &["product", "rust"], "Next up."),
            )
            .resolved(
                "news/retro.mdx",
                news_post("Retro", "2024-01-05", &["rust", "web"], "Looking back."),
            )
            .resolved(
                "news/secret.mdx",
                draft_post("Secret", "2024-05-01", &["product", "rust", "web"]),
            )
            .build(),
    )
}

/// Write `files` (relative path, contents) under a fresh temp directory.
pub fn content_dir(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().expect("create temp dir");
    for (relative, contents) in files {
        write(temp.path(), relative, contents);
    }
    temp
}

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dir");
    }
    std::fs::write(path, contents).expect("write fixture");
}
