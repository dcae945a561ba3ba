/// A small Markdown to HTML converter for static sites
pub mod ast;
pub mod block;
pub mod error;
pub mod inline;
pub mod page;
pub mod parser;
pub mod renderer;

pub use ast::{HtmlNode, SpanKind, TextSpan};
pub use block::BlockType;
pub use error::{Error, MalformedBlock};

use parser::Parser;
use renderer::HtmlRenderer;

/// Parse markdown text into a `div` node tree
pub fn markdown_to_html_node(markdown: &str) -> HtmlNode {
    let mut parser = Parser::new();
    parser.parse(markdown)
}

/// Parse markdown text and render to HTML
pub fn markdown_to_html(markdown: &str) -> String {
    let root = markdown_to_html_node(markdown);
    let renderer = HtmlRenderer::new();
    renderer.render(&root)
}

/// Text of the first `# ` heading anywhere in the document, trimmed.
pub fn extract_title(markdown: &str) -> Result<String, Error> {
    markdown
        .lines()
        .find_map(|line| {
            let rest = line.strip_prefix('#')?;
            if !rest.starts_with(char::is_whitespace) {
                return None;
            }
            let title = rest.trim();
            (!title.is_empty()).then(|| title.to_string())
        })
        .ok_or(Error::MissingTitle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input() {
        assert_eq!(markdown_to_html(""), "<div></div>");
    }

    #[test]
    fn test_title_and_paragraph() {
        let root = markdown_to_html_node("# Title\n\nSome _text_.");
        assert_eq!(
            root,
            HtmlNode::parent(
                "div",
                vec![
                    HtmlNode::leaf("h1", "Title"),
                    HtmlNode::leaf("p", "Some <i>text</i>."),
                ]
            )
        );
    }

    #[test]
    fn test_paragraphs() {
        let md = "
    This is **bolded** paragraph
    text in a p
    tag here

    This is another paragraph with _italic_ text and `code` here

    ";
        assert_eq!(
            markdown_to_html(md),
            "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
        );
    }

    #[test]
    fn test_headings() {
        assert_eq!(
            markdown_to_html("# Heading 1\n\n## Heading 2\n\n### Heading 3"),
            "<div><h1>Heading 1</h1><h2>Heading 2</h2><h3>Heading 3</h3></div>"
        );
    }

    #[test]
    fn test_lists() {
        assert_eq!(
            markdown_to_html("- Item 1\n- Item 2\n\n1. First\n2. Second"),
            "<div><ul><li>Item 1</li><li>Item 2</li></ul><ol><li>First</li><li>Second</li></ol></div>"
        );
    }

    #[test]
    fn test_nested_ordered_list_counts_across_levels() {
        assert_eq!(
            markdown_to_html("1. a\n  2. b\n3. c"),
            "<div><ol><li>a<ol><li>b</li></ol></li><li>c</li></ol></div>"
        );
    }

    #[test]
    fn test_extract_title() {
        assert_eq!(extract_title("# This is a title").unwrap(), "This is a title");
        assert_eq!(
            extract_title("#    Spaced out title   ").unwrap(),
            "Spaced out title"
        );
        assert_eq!(
            extract_title("# Title with *formatting* and [links](https://example.com)").unwrap(),
            "Title with *formatting* and [links](https://example.com)"
        );
        assert_eq!(
            extract_title("Some text here\n\n# Title in the middle\n\nMore text").unwrap(),
            "Title in the middle"
        );
        assert_eq!(
            extract_title("# First title\n\nSome text\n\n# Second title").unwrap(),
            "First title"
        );
    }

    #[test]
    fn test_missing_title() {
        for md in ["no heading here", "## This is an h2 header", "#NoSpace", ""] {
            assert!(
                matches!(extract_title(md), Err(Error::MissingTitle)),
                "expected MissingTitle for {md:?}"
            );
        }
    }
}
