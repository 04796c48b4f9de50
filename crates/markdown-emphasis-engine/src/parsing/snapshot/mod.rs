//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders token streams as compact S-expressions, and converts
//!   parsed documents to a stable, serializable `Snap` format
//! - **`invariants`**: Runtime checks for parser correctness (spans in bounds,
//!   tokens tile the input, open and close tokens balanced and ordered)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize, render};
