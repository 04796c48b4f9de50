//! Delimiter run scanning.
//!
//! A delimiter run is a maximal sequence of one marker character. Whether the
//! run may open and/or close emphasis depends only on the characters directly
//! before and after it, classified as whitespace, punctuation or other.

use super::{
    chars::CharClass,
    cursor::Cursor,
    kinds::Marker,
};

/// Result of scanning one delimiter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterRun {
    pub marker: Marker,
    /// Number of marker characters in the run.
    pub length: usize,
    pub can_open: bool,
    pub can_close: bool,
}

/// Scans the run of `marker` starting at local index `start`.
///
/// The run is bounded by the cursor's region end, and the character after the
/// region counts as whitespace. The character before the run is read from the
/// source even if it lies before the current region. `start` must hold
/// `marker`.
pub fn scan_delimiter_run(cur: &Cursor<'_>, start: usize, marker: Marker) -> DelimiterRun {
    debug_assert_eq!(
        cur.byte_at(start),
        Some(marker.byte()),
        "delimiter scan at {start} does not start with {marker:?}"
    );

    let length = cur.run_len(start, marker.byte());
    let before = CharClass::of_neighbour(cur.char_before(start));
    let after = CharClass::of_neighbour(cur.char_at(start + length));

    let left_flanking = match after {
        CharClass::Whitespace => false,
        CharClass::Punctuation => before.is_whitespace_or_punctuation(),
        CharClass::Other => true,
    };
    let right_flanking = match before {
        CharClass::Whitespace => false,
        CharClass::Punctuation => after.is_whitespace_or_punctuation(),
        CharClass::Other => true,
    };

    let (can_open, can_close) = match marker {
        // "_" inside a word can neither open nor close emphasis.
        Marker::Underscore => (
            left_flanking && (!right_flanking || before == CharClass::Punctuation),
            right_flanking && (!left_flanking || after == CharClass::Punctuation),
        ),
        Marker::Star => (left_flanking, right_flanking),
    };

    DelimiterRun {
        marker,
        length,
        can_open,
        can_close,
    }
}
