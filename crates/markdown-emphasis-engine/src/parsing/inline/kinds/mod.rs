//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Marker`**: `*` and `_` emphasis markers
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing
//! - **`WikiLink`**: `OPEN = b"[["`, `CLOSE = b"]]"`, `ALIAS = b'|'`
//! - **`Escape`**: `BACKSLASH = b'\\'`
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The parser calls these constants; it never hardcodes `[[` or `` ` ``.

pub mod code_span;
pub mod escape;
pub mod marker;
pub mod wikilink;

pub use code_span::CodeSpan;
pub use escape::Escape;
pub use marker::Marker;
pub use wikilink::WikiLink;
