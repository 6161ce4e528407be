//! Slug derivation from source identifiers.
//!
//! A source identifier is a path-like string such as `content/news/launch.mdx`.
//! Its slug is the last path segment with the content extension removed
//! (`launch`). Slugs are not otherwise normalized: `Q3-Update.mdx` has the slug
//! `Q3-Update`.

/// File extensions recognized as content sources, without the dot.
pub const CONTENT_EXTENSIONS: &[&str] = &["mdx", "md"];

/// Strip a trailing content extension from a path-like string.
///
/// Only extensions listed in [`CONTENT_EXTENSIONS`] are removed; anything else
/// is returned unchanged.
///
/// # Examples
///
/// ```
/// use atelier_core::util::ids::strip_content_extension;
///
/// assert_eq!(strip_content_extension("news/launch.mdx"), "news/launch");
/// assert_eq!(strip_content_extension("notes.md"), "notes");
/// assert_eq!(strip_content_extension("logo.svg"), "logo.svg");
/// ```
pub fn strip_content_extension(path: &str) -> &str {
    strip_extension(path, CONTENT_EXTENSIONS)
}

/// Strip the first matching extension in `extensions` (without the dot).
///
/// ```
/// use atelier_core::util::ids::strip_extension;
///
/// assert_eq!(strip_extension("post.markdown", &["markdown"]), "post");
/// assert_eq!(strip_extension("post.mdx", &["markdown"]), "post.mdx");
/// ```
pub fn strip_extension<'a, S: AsRef<str>>(path: &'a str, extensions: &[S]) -> &'a str {
    extensions
        .iter()
        .map(|ext| ext.as_ref().trim_start_matches('.'))
        .filter(|ext| !ext.is_empty())
        .find_map(|ext| path.strip_suffix(ext).and_then(|s| s.strip_suffix('.')))
        .unwrap_or(path)
}

/// Derive the slug for a source identifier.
///
/// # Examples
///
/// ```
/// use atelier_core::util::ids::slug_from_identifier;
///
/// assert_eq!(slug_from_identifier("/src/content/news/launch.mdx"), "launch");
/// assert_eq!(slug_from_identifier("hello-world.mdx"), "hello-world");
/// assert_eq!(slug_from_identifier("software\\forge.md"), "forge");
/// ```
pub fn slug_from_identifier(identifier: &str) -> String {
    slug_from_identifier_with(identifier, CONTENT_EXTENSIONS)
}

/// Derive the slug for a source identifier, stripping any of `extensions`.
pub fn slug_from_identifier_with<S: AsRef<str>>(identifier: &str, extensions: &[S]) -> String {
    let segment = identifier.rsplit(['/', '\\']).next().unwrap_or(identifier);
    strip_extension(segment, extensions).to_string()
}

/// Check whether an identifier resolves to the requested slug.
///
/// The identifier, with its extension stripped, must end with the slug on a
/// path-segment boundary. `news/launch.mdx` matches `launch` and
/// `news/launch`, but `news/relaunch.mdx` does not match `launch`.
///
/// # Examples
///
/// ```
/// use atelier_core::util::ids::identifier_matches_slug;
///
/// assert!(identifier_matches_slug("content/news/launch.mdx", "launch"));
/// assert!(identifier_matches_slug("content/news/launch.mdx", "news/launch"));
/// assert!(!identifier_matches_slug("content/news/relaunch.mdx", "launch"));
/// ```
pub fn identifier_matches_slug(identifier: &str, slug: &str) -> bool {
    identifier_matches_slug_with(identifier, slug, CONTENT_EXTENSIONS)
}

/// [`identifier_matches_slug`] with an explicit extension list.
pub fn identifier_matches_slug_with<S: AsRef<str>>(
    identifier: &str,
    slug: &str,
    extensions: &[S],
) -> bool {
    let slug = slug.trim_matches('/');
    if slug.is_empty() {
        return false;
    }

    let stem = strip_extension(identifier, extensions);
    match stem.strip_suffix(slug) {
        Some("") => true,
        Some(prefix) => prefix.ends_with(['/', '\\']),
        None => false,
    }
}
