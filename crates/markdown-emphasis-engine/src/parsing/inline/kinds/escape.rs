/// Backslash escapes (`\*`, `\_`, ...).
///
/// An escaped ASCII punctuation character is literal and takes no part in
/// delimiter runs.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: u8 = b'\\';

    /// Returns true if `b` may follow a backslash to form an escape.
    pub fn is_escapable(b: u8) -> bool {
        b.is_ascii_punctuation()
    }
}
