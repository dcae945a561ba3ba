/// Block segmentation and classification
use serde::Serialize;

const FENCE: &str = "```";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BlockType {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Split a document into blocks on blank lines.
///
/// List-like blocks keep their lines and relative indentation; every other
/// block has each line trimmed.
pub fn markdown_to_blocks(markdown: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in markdown.trim().lines() {
        if line.trim().is_empty() {
            flush_block(&mut current, &mut blocks);
        } else {
            current.push(line);
        }
    }
    flush_block(&mut current, &mut blocks);

    blocks
}

fn flush_block(current: &mut Vec<&str>, blocks: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }

    let block = if is_list_like(current[0]) {
        dedent(current)
    } else {
        current
            .iter()
            .map(|line| line.trim())
            .collect::<Vec<_>>()
            .join("\n")
    };
    current.clear();

    if !block.trim().is_empty() {
        blocks.push(block);
    }
}

fn is_list_like(first_line: &str) -> bool {
    let trimmed = first_line.trim_start();
    trimmed.starts_with("- ")
        || trimmed.starts_with("* ")
        || trimmed.starts_with(|c: char| c.is_ascii_digit())
}

/// Remove the indentation shared by every non-blank line and trailing whitespace
fn dedent(lines: &[&str]) -> String {
    let indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| leading_whitespace(line))
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| skip_chars(line.trim_end(), indent))
        .collect::<Vec<_>>()
        .join("\n")
}

fn skip_chars(line: &str, count: usize) -> &str {
    match line.char_indices().nth(count) {
        Some((byte, _)) => &line[byte..],
        None => "",
    }
}

/// Number of leading whitespace characters
pub(crate) fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Split `#`..`######` plus a space off a heading line.
///
/// Returns the level and the remaining text.
pub(crate) fn heading_prefix(line: &str) -> Option<(u8, &str)> {
    let hashes = line.len() - line.trim_start_matches('#').len();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let text = line[hashes..].strip_prefix(' ')?;
    Some((hashes as u8, text))
}

/// Classify a block; checks run in priority order and the first match wins.
pub fn block_to_block_type(block: &str) -> BlockType {
    let lines: Vec<&str> = block.lines().collect();
    let Some(first) = lines.first() else {
        return BlockType::Paragraph;
    };

    if heading_prefix(first).is_some() {
        BlockType::Heading
    } else if is_code_block(&lines) {
        BlockType::Code
    } else if lines.iter().all(|line| line.starts_with('>')) {
        BlockType::Quote
    } else if lines.iter().all(|line| line.trim_start().starts_with("- ")) {
        BlockType::UnorderedList
    } else if is_ordered_list(&lines) {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    }
}

fn is_code_block(lines: &[&str]) -> bool {
    match (lines.first(), lines.last()) {
        (Some(first), Some(last)) if lines.len() >= 2 => {
            first.starts_with(FENCE) && last.starts_with(FENCE)
        }
        _ => false,
    }
}

/// Line `i` starts with `i. ` once its indentation is removed.
///
/// Numbering runs across the whole block, nested lines included.
fn is_ordered_list(lines: &[&str]) -> bool {
    lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.trim_start().starts_with(&format!("{}. ", i + 1)))
}
