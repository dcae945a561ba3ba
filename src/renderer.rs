/// HTML renderer for the output node tree
use crate::ast::HtmlNode;

pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        HtmlRenderer
    }

    pub fn render(&self, node: &HtmlNode) -> String {
        render_node(node)
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn render_node(node: &HtmlNode) -> String {
    match node {
        HtmlNode::Leaf {
            tag: None, content, ..
        } => content.clone(),
        HtmlNode::Leaf {
            tag: Some(tag),
            content,
            attributes,
        } => format!(
            "<{}{}>{}</{}>",
            tag,
            render_attributes(attributes),
            content,
            tag
        ),
        HtmlNode::Parent {
            tag,
            children,
            attributes,
        } => {
            let content: String = children.iter().map(render_node).collect();
            format!(
                "<{}{}>{}</{}>",
                tag,
                render_attributes(attributes),
                content,
                tag
            )
        }
    }
}

/// Attributes as ` key="value"` pairs in insertion order
fn render_attributes(attributes: &[(String, String)]) -> String {
    attributes
        .iter()
        .map(|(name, value)| format!(" {}=\"{}\"", name, escape_html(value)))
        .collect()
}

pub(crate) fn escape_html(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '&' => "&amp;".to_string(),
            '"' => "&quot;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}
