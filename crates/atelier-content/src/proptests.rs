//! Property-based tests for rendering and frontmatter extraction.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::markdown::{extract_first_paragraph, extract_frontmatter, render_html};
    use proptest::prelude::*;

    /// Markdown-flavoured text: markup characters mixed with words and newlines.
    fn markdownish() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop::sample::select(vec![
                "word", " ", "\n", "\n\n", "*", "**", "_", "`", "```", "#", "> ", "- ", "1. ",
                "[", "](", ")", "|", "---", "<div>", "</div>", "~~", "\\", "é",
            ]),
            0..64,
        )
        .prop_map(|parts| parts.concat())
    }

    proptest! {
        #[test]
        fn test_render_html_accepts_any_string(input in any::<String>()) {
            let _ = render_html(&input);
        }

        #[test]
        fn test_render_html_accepts_markup_soup(input in markdownish()) {
            let html = render_html(&input);
            prop_assert!(input.trim().is_empty() || !html.is_empty());
        }

        #[test]
        fn test_extract_frontmatter_body_is_suffix(input in any::<String>()) {
            if let Ok(fm) = extract_frontmatter(&input) {
                prop_assert!(input.ends_with(fm.body()));
            }
        }

        #[test]
        fn test_headerless_input_is_kept_whole(input in "[^-\u{feff}][^\n]*(\n[^\n]*)*") {
            let fm = extract_frontmatter(&input).unwrap();
            prop_assert!(!fm.has_header());
            prop_assert_eq!(fm.body(), input.as_str());
        }

        #[test]
        fn test_first_paragraph_respects_limit(input in markdownish(), max in 1usize..40) {
            if let Some(excerpt) = extract_first_paragraph(&input, max) {
                // Truncation may append an ellipsis.
                prop_assert!(excerpt.chars().count() <= max + 3);
            }
        }
    }
}
