/// Node types for the HTML output tree and the inline span model
use serde::Serialize;

use crate::renderer::{escape_html, render_node};

/// Ordered attribute list; insertion order is render order.
pub type Attributes = Vec<(String, String)>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum HtmlNode {
    /// Renders as `<tag attrs>content</tag>`, or bare `content` without a tag
    Leaf {
        tag: Option<String>,
        content: String,
        attributes: Attributes,
    },
    /// Renders as `<tag attrs>` followed by the children and `</tag>`
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// Untagged leaf, emitted verbatim.
    pub fn text(content: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            content: content.into(),
            attributes: Vec::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, content: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            content: content.into(),
            attributes: Vec::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.into(),
            children,
            attributes: Vec::new(),
        }
    }

    /// Append an attribute, keeping earlier ones in front.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => {
                attributes.push((name.into(), value.into()));
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } => tag.as_deref(),
            HtmlNode::Parent { tag, .. } => Some(tag),
        }
    }

    /// Leaf content; `None` for parents.
    pub fn content(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { content, .. } => Some(content),
            HtmlNode::Parent { .. } => None,
        }
    }

    /// Children of a parent; leaves have none.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Parent { children, .. } => children,
        }
    }

    pub fn attributes(&self) -> &[(String, String)] {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes()
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Serialize this subtree to HTML
    pub fn to_html(&self) -> String {
        render_node(self)
    }
}

/// Formatting carried by a single inline span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A run of inline text with exactly one formatting kind.
///
/// `target` holds the URL of links and images and is `None` for every other
/// kind. Spans are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TextSpan {
    text: String,
    kind: SpanKind,
    target: Option<String>,
}

impl TextSpan {
    /// Span of a kind that carries no URL.
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        TextSpan {
            text: text.into(),
            kind,
            target: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Plain, text)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        TextSpan {
            text: text.into(),
            kind: SpanKind::Link,
            target: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        TextSpan {
            text: alt.into(),
            kind: SpanKind::Image,
            target: Some(url.into()),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Wrap this span as an output leaf
    pub fn to_node(&self) -> HtmlNode {
        let target = self.target.clone().unwrap_or_default();
        match self.kind {
            SpanKind::Plain => HtmlNode::text(self.text.as_str()),
            SpanKind::Bold => HtmlNode::leaf("b", self.text.as_str()),
            SpanKind::Italic => HtmlNode::leaf("i", self.text.as_str()),
            SpanKind::Code => HtmlNode::leaf("code", escape_html(&self.text)),
            SpanKind::Link => HtmlNode::leaf("a", self.text.as_str()).with_attribute("href", target),
            SpanKind::Image => HtmlNode::leaf("img", "")
                .with_attribute("src", target)
                .with_attribute("alt", self.text.as_str()),
        }
    }
}

impl From<&TextSpan> for HtmlNode {
    fn from(span: &TextSpan) -> Self {
        span.to_node()
    }
}
