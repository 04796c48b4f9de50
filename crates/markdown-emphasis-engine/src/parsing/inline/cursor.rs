/// A bounded cursor for inline parsing with position tracking.
///
/// Operates over a string slice while tracking the absolute byte position
/// in the original document (via `base` offset). Positions are local byte
/// indices into `s`; `max` is the exclusive upper bound of the region
/// currently being parsed and is narrowed while nested emphasis content is
/// tokenized.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Base offset in the document (added to local index for absolute positions).
    pub base: usize,
    /// Current local index into `s`.
    pub pos: usize,
    /// Exclusive upper bound of the active region.
    pub max: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s` with the given base offset.
    pub fn new(s: &'a str, base: usize) -> Self {
        Self {
            s,
            base,
            pos: 0,
            max: s.len(),
        }
    }

    /// Returns the absolute byte position of a local index.
    pub fn abs(&self, local: usize) -> usize {
        self.base + local
    }

    /// Returns true if at or past the end of the active region.
    pub fn eof(&self) -> bool {
        self.pos >= self.max
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// Peeks `n` bytes ahead, within the active region.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        let i = self.pos + n;
        if i < self.max {
            self.s.as_bytes().get(i).copied()
        } else {
            None
        }
    }

    /// Reads a byte of the source regardless of the active region.
    pub fn byte_at(&self, i: usize) -> Option<u8> {
        self.s.as_bytes().get(i).copied()
    }

    /// Checks if the remaining region starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.pos..self.max)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one character, returning it.
    pub fn bump_char(&mut self) -> Option<char> {
        if self.eof() {
            return None;
        }
        let c = self.s.get(self.pos..)?.chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Counts consecutive `b` bytes starting at `i`, stopping at `max`.
    pub fn run_len(&self, i: usize, b: u8) -> usize {
        self.s
            .as_bytes()
            .get(i..self.max)
            .map_or(0, |rest| rest.iter().take_while(|&&x| x == b).count())
    }

    /// The character immediately before local index `i`, ignoring the region
    /// start.
    pub fn char_before(&self, i: usize) -> Option<char> {
        self.s.get(..i)?.chars().next_back()
    }

    /// The character starting at local index `i`, or `None` at the region end.
    pub fn char_at(&self, i: usize) -> Option<char> {
        self.s.get(i..self.max)?.chars().next()
    }
}
