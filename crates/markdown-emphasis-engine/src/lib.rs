pub mod parsing;

// Re-export key types for easier usage
pub use parsing::{
    ParsedBlock, ParsedDoc,
    inline::{
        EmphasisKind, InlineOptions, InlineParser, InlineToken, Marker, ParsedInline,
        ResolverStats, parse_inline,
    },
    parse_document,
    span::Span,
};
