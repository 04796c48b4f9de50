/// Code span inline type with owned delimiter constant.
///
/// A code span opens with a run of backticks and closes with the next run of
/// exactly the same length. Everything in between is a raw zone: emphasis
/// markers inside it never open or close a span.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}
