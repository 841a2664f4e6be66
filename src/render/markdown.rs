//! Markdown rendering
//!
//! Converts markdown document content to HTML with pulldown-cmark.

use pulldown_cmark::{Options, Parser, html};

/// Renders a markdown string to an HTML fragment. Inline HTML in the
/// source passes through unchanged.
pub fn markdown_to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(source, options);
    let mut output = String::with_capacity(source.len() * 2);
    html::push_html(&mut output, parser);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_heading() {
        let rendered = markdown_to_html("# Title");
        assert!(rendered.contains("<h1>Title</h1>"));
    }

    #[test]
    fn test_renders_emphasis_and_list() {
        let rendered = markdown_to_html("- *one*\n- two");
        assert!(rendered.contains("<ul>"));
        assert!(rendered.contains("<em>one</em>"));
    }

    #[test]
    fn test_passes_inline_html_through() {
        let rendered = markdown_to_html("<h1>Ruby is a ...</h1>");
        assert!(rendered.contains("<h1>Ruby is a ...</h1>"));
    }
}
