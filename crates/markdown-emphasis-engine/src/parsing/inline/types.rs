use serde::Serialize;

use crate::parsing::span::Span;

use super::kinds::Marker;

/// Which kind of span an emphasis pair produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EmphasisKind {
    /// One marker character on each side.
    Emphasis,
    /// Two marker characters on each side.
    Strong,
}

impl EmphasisKind {
    /// Number of marker characters consumed on each side.
    pub fn width(self) -> usize {
        match self {
            EmphasisKind::Emphasis => 1,
            EmphasisKind::Strong => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EmphasisKind::Emphasis => "em",
            EmphasisKind::Strong => "strong",
        }
    }
}

/// A token of the inline stream with byte spans into the source.
///
/// All variants store spans rather than text, enabling lossless round-trip.
/// Open and close tokens always come in balanced pairs of the same kind and
/// marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineToken {
    /// Plain text that isn't part of any special construct, including
    /// markers that found no partner.
    Text(Span),
    /// A backslash escape such as `\*`.
    Escape {
        /// Full span including the backslash.
        full: Span,
        /// The escaped character.
        escaped: Span,
    },
    /// A code span (backtick-delimited). This is a "raw zone" - no parsing inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Inner span (content between backticks).
        inner: Span,
    },
    /// A wiki-style link `[[target]]` or `[[target|alias]]`.
    WikiLink {
        /// Full span including `[[` and `]]`.
        full: Span,
        /// Span of the target (page name).
        target: Span,
        /// Span of the alias if present (after `|`).
        alias: Option<Span>,
    },
    /// Start of an emphasis or strong span. `markup` covers the literal
    /// opening markers (`*`, `**`, `_` or `__`).
    Open {
        kind: EmphasisKind,
        marker: Marker,
        markup: Span,
    },
    /// End of the span opened by the matching [`InlineToken::Open`].
    Close {
        kind: EmphasisKind,
        marker: Marker,
        markup: Span,
    },
}

impl InlineToken {
    /// The bytes this token covers in the source. Concatenated in stream
    /// order these spans tile the parsed input.
    pub fn span(&self) -> Span {
        match self {
            InlineToken::Text(sp) => *sp,
            InlineToken::Escape { full, .. }
            | InlineToken::CodeSpan { full, .. }
            | InlineToken::WikiLink { full, .. } => *full,
            InlineToken::Open { markup, .. } | InlineToken::Close { markup, .. } => *markup,
        }
    }

    /// `1` for open tokens, `-1` for close tokens, `0` otherwise.
    pub fn nesting(&self) -> i8 {
        match self {
            InlineToken::Open { .. } => 1,
            InlineToken::Close { .. } => -1,
            _ => 0,
        }
    }
}
