pub mod blocks;
pub mod inline;
pub mod snapshot;
pub mod span;

#[cfg(test)]
mod tests;

use inline::{InlineParser, InlineToken, ResolverStats};
use span::Span;

/// One paragraph with its inline tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBlock {
    /// Paragraph span in the document.
    pub span: Span,
    pub tokens: Vec<InlineToken>,
    pub stats: ResolverStats,
}

#[derive(Debug, Default)]
pub struct ParsedDoc {
    pub blocks: Vec<ParsedBlock>,
}

/// Splits `text` into paragraphs and runs a separate inline pass over each.
///
/// Token spans are absolute offsets into `text`.
pub fn parse_document(text: &str, parser: &InlineParser) -> ParsedDoc {
    let blocks = blocks::paragraph_spans(text)
        .into_iter()
        .map(|span| {
            let parsed = parser.parse(span.start, span.slice(text));
            log::debug!(
                "paragraph {}..{}: {} tokens, {} emphasis queries",
                span.start,
                span.end,
                parsed.tokens.len(),
                parsed.stats.queries
            );
            ParsedBlock {
                span,
                tokens: parsed.tokens,
                stats: parsed.stats,
            }
        })
        .collect();

    ParsedDoc { blocks }
}
