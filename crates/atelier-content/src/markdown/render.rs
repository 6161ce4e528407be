//! Markdown to HTML rendering.
//!
//! Rendering uses `pulldown-cmark` with the GitHub-flavoured extensions the
//! site relies on (tables, strikethrough, task lists, footnotes). Line breaks
//! are significant: a single newline inside a paragraph becomes `<br />`
//! instead of being folded into a space.
//!
//! Rendering is infallible. Input the parser does not recognise is emitted as
//! literal text.

use pulldown_cmark::{Event, Options, Parser, html};

/// Parser options used for content bodies.
pub fn render_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
}

/// Render a Markdown body to HTML.
///
/// # Example
///
/// ```rust
/// use atelier_content::markdown::render_html;
///
/// let html = render_html("Body **bold**\nnext line");
/// assert!(html.contains("<strong>bold</strong>"));
/// assert!(html.contains("<br />"));
/// ```
pub fn render_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, render_options()).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut output = String::with_capacity(markdown.len() + markdown.len() / 2);
    html::push_html(&mut output, parser);
    output
}
