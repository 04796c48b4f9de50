//! # Inline Parsing
//!
//! Cursor-based inline tokenizer with CommonMark emphasis resolution.
//!
//! ## Architecture
//!
//! A pass over one block of text runs a small ordered set of rules at each
//! position. Raw zones come first (escapes, code spans, wikilinks) and
//! emphasis last. Whatever no rule claims becomes text.
//!
//! Emphasis is resolved lazily. When the rule sees `*` or `_` it asks the
//! pair resolver for the closer of that marker; the resolver scans delimiter
//! runs ahead of the cursor on demand and caches every pairing it computes,
//! so later queries in the same pass are answered without rescanning.
//!
//! ## Modules
//!
//! - **`chars`**: whitespace / punctuation classification
//! - **`cursor`**: `Cursor` over one region of the block
//! - **`delimiter`**: delimiter run scanning and flanking rules
//! - **`pairs`**: lazy pair resolver with its cache stack
//! - **`emphasis`**: the emphasis rule
//! - **`parser`**: `InlineParser`, `parse_inline()` and the remaining rules
//! - **`types`**: `InlineToken` stream
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` *a `*` b* `` is one emphasis span around a
//! code span; the starred backtick content never pairs with anything.

pub mod chars;
pub mod cursor;
pub mod delimiter;
mod emphasis;
pub mod kinds;
mod pairs;
pub mod parser;
mod state;
pub mod types;

pub use kinds::Marker;
pub use pairs::ResolverStats;
pub use parser::{InlineOptions, InlineParser, ParsedInline, parse_inline};
pub use types::{EmphasisKind, InlineToken};
