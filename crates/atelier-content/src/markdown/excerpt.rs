//! Plain-text excerpts from Markdown.
//!
//! Used to derive a summary for content whose frontmatter omits a
//! description.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

/// Extract the first paragraph from Markdown content.
///
/// Headings are skipped and inline formatting is stripped. The result is
/// truncated at a word boundary to `max_chars` characters, with `...`
/// appended when truncated.
///
/// # Example
///
/// ```rust
/// use atelier_content::markdown::extract_first_paragraph;
///
/// let content = "# Title\n\nThis is a **bold** introduction.\n\nMore content.";
/// let paragraph = extract_first_paragraph(content, 50).unwrap();
/// assert_eq!(paragraph, "This is a bold introduction.");
/// ```
pub fn extract_first_paragraph(content: &str, max_chars: usize) -> Option<String> {
    let mut in_heading = false;
    let mut in_paragraph = false;
    let mut paragraph_text = String::new();

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Heading { .. }) => in_heading = true,
            Event::End(TagEnd::Heading(_)) => in_heading = false,

            Event::Start(Tag::Paragraph) if !in_heading => {
                in_paragraph = true;
                paragraph_text.clear();
            }
            Event::End(TagEnd::Paragraph) if in_paragraph => {
                let normalized = normalize_whitespace(&paragraph_text);
                if !normalized.is_empty() {
                    return Some(truncate_text(&normalized, max_chars));
                }
                in_paragraph = false;
            }

            Event::Text(text) | Event::Code(text) if in_paragraph => {
                paragraph_text.push_str(&text);
            }
            Event::SoftBreak | Event::HardBreak if in_paragraph => {
                paragraph_text.push(' ');
            }

            _ => {}
        }
    }

    None
}

/// Truncate text to at most `max_chars` characters, preferring a word boundary.
fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut = text
        .char_indices()
        .nth(max_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    let head = &text[..cut];
    let truncate_at = head.rfind(char::is_whitespace).unwrap_or(cut);

    format!("{}...", head[..truncate_at].trim_end())
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
