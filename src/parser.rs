/// Document assembly: block dispatch plus the nested list and quote builders
use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::ast::HtmlNode;
use crate::block::{
    BlockType, block_to_block_type, heading_prefix, leading_whitespace, markdown_to_blocks,
};
use crate::error::MalformedBlock;
use crate::inline::{render_inline, text_to_children};
use crate::renderer::escape_html;

/// A block that was degraded or dropped while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: MalformedBlock,
    pub block: String,
}

pub struct Parser {
    /// Malformed blocks seen by the last `parse` call
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    pub fn new() -> Self {
        Parser {
            diagnostics: Vec::new(),
        }
    }

    /// Parse a document into a `div` holding one node per block.
    ///
    /// Diagnostics from an earlier call are discarded.
    pub fn parse(&mut self, input: &str) -> HtmlNode {
        self.diagnostics.clear();

        let mut children = Vec::new();
        for block in markdown_to_blocks(input) {
            children.extend(self.block_to_nodes(&block));
        }

        HtmlNode::parent("div", children)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Classify one block and build its nodes.
    ///
    /// Usually yields one node; a dropped code block yields none and a
    /// heading with trailing lines yields the heading plus a paragraph.
    pub fn block_to_nodes(&mut self, block: &str) -> Vec<HtmlNode> {
        let block_type = block_to_block_type(block);
        debug!(?block_type, "classified block");

        match block_type {
            BlockType::Heading => self.parse_heading(block),
            BlockType::Code => self.parse_code_block(block).into_iter().collect(),
            BlockType::Quote => {
                let mut lines: VecDeque<&str> = block_lines(block).into_iter().collect();
                // A shallower line after a deeper start begins another quote
                let mut quotes = Vec::new();
                while !lines.is_empty() {
                    quotes.push(build_blockquote(&mut lines));
                }
                quotes
            }
            BlockType::UnorderedList => vec![build_nested_list(&block_lines(block), ListKind::Unordered)],
            BlockType::OrderedList => vec![build_nested_list(&block_lines(block), ListKind::Ordered)],
            BlockType::Paragraph => vec![paragraph(block.lines())],
        }
    }

    fn parse_heading(&mut self, block: &str) -> Vec<HtmlNode> {
        let mut lines = block.lines();
        let first = lines.next().unwrap_or_default();

        let Some((level, text)) = heading_prefix(first).filter(|(_, text)| !text.trim().is_empty())
        else {
            self.report(MalformedBlock::HeadingWithoutText, block);
            return vec![paragraph(block.lines())];
        };

        let mut nodes = vec![HtmlNode::leaf(
            format!("h{level}"),
            render_inline(text.trim()),
        )];

        // Lines after the heading line form their own paragraph
        let rest: Vec<&str> = lines.filter(|line| !line.trim().is_empty()).collect();
        if !rest.is_empty() {
            nodes.push(paragraph(rest.into_iter()));
        }
        nodes
    }

    /// Build `pre > code` from a fenced block, or drop it
    fn parse_code_block(&mut self, block: &str) -> Option<HtmlNode> {
        let lines: Vec<&str> = block.lines().collect();

        if lines.last().is_none_or(|last| last.trim() != "```") {
            self.report(MalformedBlock::UnterminatedCodeBlock, block);
            return None;
        }
        let mut interior: &[&str] = match lines.as_slice() {
            [_, interior @ .., _] => interior,
            _ => &[],
        };
        // Blank lines at either edge of the content are dropped
        while let [first, rest @ ..] = interior
            && first.trim().is_empty()
        {
            interior = rest;
        }
        while let [rest @ .., last] = interior
            && last.trim().is_empty()
        {
            interior = rest;
        }
        if interior.is_empty() {
            self.report(MalformedBlock::EmptyCodeBlock, block);
            return None;
        }

        let mut code = HtmlNode::leaf("code", escape_html(&interior.join("\n")));

        // Info string after the opening fence, e.g. ```rust
        let info = lines[0].trim_start_matches('`').trim();
        if !info.is_empty() {
            code = code.with_attribute("class", format!("language-{info}"));
        }

        Some(HtmlNode::parent("pre", vec![code]))
    }

    fn report(&mut self, kind: MalformedBlock, block: &str) {
        warn!(%kind, block, "malformed block");
        self.diagnostics.push(Diagnostic {
            kind,
            block: block.to_string(),
        });
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

fn block_lines(block: &str) -> Vec<&str> {
    block.lines().filter(|line| !line.trim().is_empty()).collect()
}

/// Join trimmed lines with spaces and render them inline inside `<p>`
fn paragraph<'a>(lines: impl Iterator<Item = &'a str>) -> HtmlNode {
    let text = lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    HtmlNode::leaf("p", render_inline(&text))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// A list still receiving items, keyed by its indentation
struct OpenList {
    indent: usize,
    items: Vec<HtmlNode>,
}

/// Build a list tree from list lines, nesting by indentation.
///
/// Indentation is measured relative to the first line. Any deeper line opens
/// exactly one new level under the last item of the current list; a shallower
/// line closes levels until it reaches one no deeper than itself. Nested lists
/// share the root's tag.
pub fn build_nested_list(lines: &[&str], kind: ListKind) -> HtmlNode {
    let tag = kind.tag();
    let base = lines.first().map_or(0, |line| leading_whitespace(line));
    let mut stack = vec![OpenList {
        indent: 0,
        items: Vec::new(),
    }];

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let indent = leading_whitespace(line).saturating_sub(base);
        let item = HtmlNode::parent("li", text_to_children(strip_list_marker(line)));

        // Ascend
        while stack.len() > 1 && stack.last().is_some_and(|top| top.indent > indent) {
            close_list(&mut stack, tag);
        }

        // Descend
        if stack.last().is_some_and(|top| top.indent < indent) {
            stack.push(OpenList {
                indent,
                items: Vec::new(),
            });
        }

        if let Some(top) = stack.last_mut() {
            top.items.push(item);
        }
    }

    while stack.len() > 1 {
        close_list(&mut stack, tag);
    }
    let items = stack.pop().map(|root| root.items).unwrap_or_default();
    HtmlNode::parent(tag, items)
}

/// Pop the innermost list and attach it to the last item of its parent list
fn close_list(stack: &mut Vec<OpenList>, tag: &str) {
    let Some(closed) = stack.pop() else {
        return;
    };
    let list = HtmlNode::parent(tag, closed.items);

    let Some(parent) = stack.last_mut() else {
        return;
    };
    match parent.items.last_mut() {
        Some(HtmlNode::Parent { children, .. }) => children.push(list),
        _ => parent.items.push(list),
    }
}

/// Item text without its `- `, `* ` or `<n>. ` marker
fn strip_list_marker(line: &str) -> &str {
    let trimmed = line.trim();
    if let Some(rest) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        return rest.trim_start();
    }

    let digits = trimmed.len() - trimmed.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0
        && let Some(rest) = trimmed[digits..].strip_prefix(". ")
    {
        return rest.trim_start();
    }

    trimmed
}

enum QuoteChild {
    Text(String),
    Nested(HtmlNode),
}

/// Build a nested blockquote from the front of `lines`.
///
/// Consumes every line at least as deep as the first one. Deeper runs recurse
/// into a nested blockquote; consecutive same-depth lines are space-joined
/// into one paragraph, but a nested blockquote between them starts a new one.
pub fn build_blockquote(lines: &mut VecDeque<&str>) -> HtmlNode {
    let entry_depth = lines.front().map_or(0, |line| quote_depth(line));
    let mut children: Vec<QuoteChild> = Vec::new();

    while let Some(&line) = lines.front() {
        let depth = quote_depth(line);

        if depth > entry_depth {
            children.push(QuoteChild::Nested(build_blockquote(lines)));
        } else if depth == entry_depth {
            lines.pop_front();
            let text = strip_quote_markers(line);
            if text.is_empty() {
                continue;
            }
            match children.last_mut() {
                Some(QuoteChild::Text(previous)) => {
                    previous.push(' ');
                    previous.push_str(text);
                }
                _ => children.push(QuoteChild::Text(text.to_string())),
            }
        } else {
            break;
        }
    }

    let children = children
        .into_iter()
        .map(|child| match child {
            QuoteChild::Text(text) => HtmlNode::leaf("p", render_inline(&text)),
            QuoteChild::Nested(node) => node,
        })
        .collect();
    HtmlNode::parent("blockquote", children)
}

/// Count of leading `>` markers; spaces between markers are allowed
fn quote_depth(line: &str) -> usize {
    line.chars()
        .take_while(|&c| c == '>' || c.is_whitespace())
        .filter(|&c| c == '>')
        .count()
}

fn strip_quote_markers(line: &str) -> &str {
    line.trim_start_matches(|c: char| c == '>' || c.is_whitespace())
        .trim_end()
}
