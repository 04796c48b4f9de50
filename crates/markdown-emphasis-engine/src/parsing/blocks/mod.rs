//! # Block Splitting
//!
//! Emphasis never crosses a paragraph boundary, so the document is cut into
//! paragraphs before any inline parsing: maximal runs of non-blank lines.
//! A line is blank when it holds nothing but spaces, tabs and the line ending.
//!
//! Paragraph spans cover the text of their lines, including the newlines
//! between them, but not the line ending of the final line.

use super::span::Span;

/// Returns an iterator over line spans, each including its newline if present.
pub fn lines_with_spans(text: &str) -> impl Iterator<Item = Span> + '_ {
    let mut offset = 0usize;
    text.split_inclusive('\n').map(move |line| {
        let start = offset;
        offset += line.len();
        Span::new(start, offset)
    })
}

fn is_blank(line: &str) -> bool {
    line.bytes().all(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
}

/// Span of `line` without its trailing `\n` or `\r\n`.
fn without_line_ending(text: &str, line: Span) -> Span {
    let s = line.slice(text);
    let trimmed = s
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(s);
    Span::new(line.start, line.start + trimmed.len())
}

/// Splits `text` into paragraph spans.
pub fn paragraph_spans(text: &str) -> Vec<Span> {
    let mut out = Vec::new();
    let mut open: Option<Span> = None;

    for line in lines_with_spans(text) {
        if is_blank(line.slice(text)) {
            if let Some(p) = open.take() {
                out.push(p);
            }
            continue;
        }

        let content = without_line_ending(text, line);
        open = Some(match open {
            Some(p) => Span::new(p.start, content.end),
            None => content,
        });
    }

    out.extend(open);
    out
}
