use crate::parsing::span::Span;

use super::{
    cursor::Cursor,
    pairs::PairResolver,
    parser::{InlineOptions, ParsedInline},
    types::InlineToken,
};

/// Mutable state of one inline pass over a single block of text.
///
/// Everything that must not outlive the pass lives here: the token stream,
/// pending text, the skip memo and the emphasis match caches.
pub(crate) struct InlineState<'a> {
    pub cur: Cursor<'a>,
    pub options: InlineOptions,
    pub tokens: Vec<InlineToken>,
    /// Current nesting depth of open tokens.
    pub level: usize,
    pub pairs: PairResolver,
    /// Local range of text accumulated but not yet pushed.
    pending: Option<(usize, usize)>,
    /// `skip_memo[pos]` is where a previous `skip_token` from `pos` landed.
    skip_memo: Vec<Option<usize>>,
}

impl<'a> InlineState<'a> {
    pub fn new(s: &'a str, base: usize, options: InlineOptions) -> Self {
        Self {
            cur: Cursor::new(s, base),
            options,
            tokens: Vec::new(),
            level: 0,
            pairs: PairResolver::default(),
            pending: None,
            skip_memo: vec![None; s.len() + 1],
        }
    }

    /// Absolute span for a local range.
    pub fn span(&self, start: usize, end: usize) -> Span {
        Span::new(self.cur.abs(start), self.cur.abs(end))
    }

    /// True when rules may still run at the current depth.
    pub fn can_nest(&self) -> bool {
        self.level < self.options.max_nesting
    }

    /// Appends the local range `[start, end)` to the pending text.
    pub fn add_pending(&mut self, start: usize, end: usize) {
        match self.pending {
            Some((s, e)) if e == start => self.pending = Some((s, end)),
            Some(_) => {
                self.push_pending();
                self.pending = Some((start, end));
            }
            None => self.pending = Some((start, end)),
        }
    }

    /// Flushes pending text into a `Text` token.
    pub fn push_pending(&mut self) {
        if let Some((start, end)) = self.pending.take()
            && end > start
        {
            let span = self.span(start, end);
            self.tokens.push(InlineToken::Text(span));
        }
    }

    /// Pushes a token after flushing pending text, tracking nesting depth.
    pub fn push(&mut self, token: InlineToken) {
        self.push_pending();
        match token.nesting() {
            1 => self.level += 1,
            -1 => self.level = self.level.saturating_sub(1),
            _ => {}
        }
        self.tokens.push(token);
    }

    /// Runs `f` with the cursor moved to `pos` and the region end narrowed to
    /// `max`. The previous region end is restored afterwards; the position is
    /// left wherever `f` put it.
    pub fn within(&mut self, pos: usize, max: usize, f: impl FnOnce(&mut Self)) {
        let saved_max = self.cur.max;
        self.cur.pos = pos;
        self.cur.max = max;
        f(self);
        self.cur.max = saved_max;
    }

    pub fn memoized_skip(&self, pos: usize) -> Option<usize> {
        self.skip_memo.get(pos).copied().flatten()
    }

    pub fn memoize_skip(&mut self, from: usize, to: usize) {
        if let Some(slot) = self.skip_memo.get_mut(from) {
            *slot = Some(to);
        }
    }

    pub fn finish(mut self) -> ParsedInline {
        self.push_pending();
        ParsedInline {
            tokens: self.tokens,
            stats: self.pairs.stats,
        }
    }
}
