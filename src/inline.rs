/// Inline span splitting: images, links, bold, italic and code
use crate::ast::{HtmlNode, SpanKind, TextSpan};

/// Split a run of text into typed spans.
pub fn text_to_spans(text: &str) -> Vec<TextSpan> {
    split_spans(vec![TextSpan::plain(text)])
}

/// Apply every inline pass, in order: images, links, bold, italic, code.
///
/// Each pass only looks at plain spans, so text already claimed by an earlier
/// pass (a link label, a code span) is never split again.
pub fn split_spans(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    let spans = split_images(spans);
    let spans = split_links(spans);
    let spans = split_delimiter(spans, "**", SpanKind::Bold);
    let spans = split_delimiter(spans, "_", SpanKind::Italic);
    split_delimiter(spans, "`", SpanKind::Code)
}

/// Text converted to output leaves, one per span
pub fn text_to_children(text: &str) -> Vec<HtmlNode> {
    text_to_spans(text).iter().map(TextSpan::to_node).collect()
}

/// Text converted to an HTML fragment
pub fn render_inline(text: &str) -> String {
    text_to_children(text).iter().map(HtmlNode::to_html).collect()
}

/// Replace `![alt](url)` in plain spans with image spans.
///
/// Images are always accepted, even with an empty alt or url.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_plain(spans, |text, out| {
        let mut plain_start = 0;
        let mut cursor = 0;

        while let Some(offset) = text[cursor..].find("![") {
            let bang = cursor + offset;
            cursor = bang + 1;

            let Some((alt, url, end)) = match_bracketed(text, bang + 1) else {
                continue;
            };

            push_plain(out, &text[plain_start..bang]);
            out.push(TextSpan::image(alt, url));
            plain_start = end;
            cursor = end;
        }

        push_plain(out, &text[plain_start..]);
    })
}

/// Replace `[text](url)` in plain spans with link spans.
///
/// A `[` directly after `!` never opens a link. Candidates with an empty
/// label or url stay literal.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_plain(spans, |text, out| {
        let mut plain_start = 0;
        let mut cursor = 0;

        while let Some(offset) = text[cursor..].find('[') {
            let open = cursor + offset;
            cursor = open + 1;

            if text[..open].ends_with('!') {
                continue;
            }
            let Some((label, url, end)) = match_bracketed(text, open) else {
                continue;
            };
            if label.is_empty() || url.is_empty() {
                continue;
            }

            push_plain(out, &text[plain_start..open]);
            out.push(TextSpan::link(label, url));
            plain_start = end;
            cursor = end;
        }

        push_plain(out, &text[plain_start..]);
    })
}

/// Split plain spans on a delimiter pair.
///
/// The first opener pairs with the first closer after it; there is no nesting
/// and no escaping. An opener without a closer leaves the rest of the span
/// literal.
pub fn split_delimiter(spans: Vec<TextSpan>, delimiter: &str, kind: SpanKind) -> Vec<TextSpan> {
    split_plain(spans, |text, out| {
        let mut rest = text;

        while let Some(start) = rest.find(delimiter) {
            let inner = &rest[start + delimiter.len()..];
            let Some(end) = inner.find(delimiter) else {
                break;
            };

            push_plain(out, &rest[..start]);
            out.push(TextSpan::new(kind, &inner[..end]));
            rest = &inner[end + delimiter.len()..];
        }

        push_plain(out, rest);
    })
}

/// Run `split` over the text of every plain span, passing others through.
fn split_plain<F>(spans: Vec<TextSpan>, mut split: F) -> Vec<TextSpan>
where
    F: FnMut(&str, &mut Vec<TextSpan>),
{
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if span.kind() == SpanKind::Plain {
            split(span.text(), &mut out);
        } else {
            out.push(span);
        }
    }
    out
}

/// Push plain text, merging into a preceding plain span and skipping empties
fn push_plain(out: &mut Vec<TextSpan>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(last) = out.last_mut()
        && last.kind() == SpanKind::Plain
    {
        *last = TextSpan::plain(format!("{}{}", last.text(), text));
        return;
    }
    out.push(TextSpan::plain(text));
}

fn is_bracket(c: char) -> bool {
    matches!(c, '[' | ']' | '(' | ')')
}

/// Match `[label](target)` with `open` indexing the `[`.
///
/// Neither part may contain a bracket or parenthesis. Returns the label, the
/// target and the byte offset just past the closing `)`.
fn match_bracketed(text: &str, open: usize) -> Option<(&str, &str, usize)> {
    let label_start = open + 1;
    let label_len = text[label_start..].find(is_bracket)?;
    let close = label_start + label_len;
    if !text[close..].starts_with("](") {
        return None;
    }

    let target_start = close + 2;
    let target_len = text[target_start..].find(is_bracket)?;
    let target_end = target_start + target_len;
    if !text[target_end..].starts_with(')') {
        return None;
    }

    Some((
        &text[label_start..close],
        &text[target_start..target_end],
        target_end + 1,
    ))
}
