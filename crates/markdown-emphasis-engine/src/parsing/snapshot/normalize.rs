use serde::Serialize;

use crate::parsing::{
    ParsedDoc,
    inline::{InlineToken, ResolverStats},
    span::Span,
};

/// Snapshot of a parsed document for testing with `insta`.
#[derive(Debug, Serialize)]
pub struct Snap {
    /// All paragraphs in the document.
    pub blocks: Vec<BlockSnap>,
}

/// Snapshot of a single paragraph.
#[derive(Debug, Serialize)]
pub struct BlockSnap {
    /// Byte span as (start, end) tuple.
    pub span: (usize, usize),
    /// Preview of paragraph text (truncated for readability).
    pub text: String,
    /// Token stream in [`render`] form.
    pub inline: String,
    pub stats: ResolverStats,
}

/// Extracts text for a span, truncating to at most `max` bytes with "..."
/// suffix if needed.
pub fn preview(src: &str, sp: Span, max: usize) -> String {
    let s = sp.slice(src);
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &s[..cut])
}

/// Renders a token stream as a compact S-expression.
///
/// Text is quoted, emphasis spans become `(em* ...)` / `(strong__ ...)` with
/// the literal markup after the kind, and raw zones are shown by kind:
/// `esc(*)`, `code("x")`, `wiki("target")` or `wiki("target"|"alias")`.
/// Spans are resolved against `src`, the text the token offsets refer to.
pub fn render(src: &str, tokens: &[InlineToken]) -> String {
    let mut out = String::new();
    let mut need_space = false;

    for token in tokens {
        if need_space && !matches!(token, InlineToken::Close { .. }) {
            out.push(' ');
        }
        need_space = true;

        match token {
            InlineToken::Text(sp) => out.push_str(&format!("{:?}", sp.slice(src))),
            InlineToken::Escape { escaped, .. } => {
                out.push_str(&format!("esc({})", escaped.slice(src)));
            }
            InlineToken::CodeSpan { inner, .. } => {
                out.push_str(&format!("code({:?})", inner.slice(src)));
            }
            InlineToken::WikiLink { target, alias, .. } => match alias {
                Some(a) => out.push_str(&format!(
                    "wiki({:?}|{:?})",
                    target.slice(src),
                    a.slice(src)
                )),
                None => out.push_str(&format!("wiki({:?})", target.slice(src))),
            },
            InlineToken::Open { kind, markup, .. } => {
                out.push('(');
                out.push_str(kind.name());
                out.push_str(markup.slice(src));
            }
            InlineToken::Close { .. } => out.push(')'),
        }
    }

    out
}

/// Converts a parsed document into a serializable snapshot for testing.
pub fn normalize(src: &str, doc: &ParsedDoc) -> Snap {
    let blocks = doc
        .blocks
        .iter()
        .map(|b| BlockSnap {
            span: (b.span.start, b.span.end),
            text: preview(src, b.span, 80),
            inline: render(src, &b.tokens),
            stats: b.stats,
        })
        .collect();

    Snap { blocks }
}
