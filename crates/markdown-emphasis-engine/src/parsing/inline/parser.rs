use crate::parsing::span::Span;

use super::{
    emphasis,
    kinds::{CodeSpan, Escape, Marker, WikiLink},
    pairs::ResolverStats,
    state::InlineState,
    types::InlineToken,
};

/// Options for one [`InlineParser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineOptions {
    /// Rules stop running once this many spans are open; deeper content is
    /// kept as literal text.
    pub max_nesting: usize,
    /// Recognise `[[target]]` and `[[target|alias]]`.
    pub wikilinks: bool,
}

impl Default for InlineOptions {
    fn default() -> Self {
        Self {
            max_nesting: 100,
            wikilinks: true,
        }
    }
}

/// Output of one inline pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInline {
    pub tokens: Vec<InlineToken>,
    pub stats: ResolverStats,
}

/// Tokenizes inline content. Holds only configuration, so a single parser can
/// be shared across threads; every call to [`InlineParser::parse`] builds its
/// own pass state.
#[derive(Debug, Clone, Default)]
pub struct InlineParser {
    options: InlineOptions,
}

impl InlineParser {
    pub fn new(options: InlineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &InlineOptions {
        &self.options
    }

    /// Parses `s` into a token stream.
    ///
    /// # Arguments
    /// - `base`: Byte offset in the document where `s` begins (for absolute span positions)
    /// - `s`: The string content to parse (typically a paragraph's content span)
    pub fn parse(&self, base: usize, s: &str) -> ParsedInline {
        let mut state = InlineState::new(s, base, self.options);
        tokenize(&mut state);
        state.finish()
    }
}

/// Parses inline content into a sequence of [`InlineToken`]s with default
/// options.
///
/// # Returns
/// A vector of tokens covering the entire input. Text between special
/// constructs, and every marker that found no partner, is emitted as
/// `InlineToken::Text`.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineToken> {
    InlineParser::default().parse(base, s).tokens
}

/// Tokenizes the active region `[pos, max)`, emitting tokens into `state`.
///
/// Rules are tried in precedence order (raw zones before emphasis). When none
/// applies the current character becomes pending text.
pub(crate) fn tokenize(state: &mut InlineState<'_>) {
    let end = state.cur.max;

    while state.cur.pos < end {
        let ok = state.can_nest() && run_rules(state, false);
        if ok {
            if state.cur.pos >= end {
                break;
            }
            continue;
        }

        let start = state.cur.pos;
        state.cur.bump_char();
        state.add_pending(start, state.cur.pos);
    }

    state.push_pending();
}

/// Advances past one inline construct without emitting anything.
///
/// Used by the pair resolver to jump over content that cannot hold emphasis
/// markers of its own (code spans, escapes, wikilinks, plain text). Results
/// are memoized per start position for the rest of the pass.
pub(crate) fn skip_token(state: &mut InlineState<'_>) {
    let pos = state.cur.pos;

    if let Some(to) = state.memoized_skip(pos) {
        state.cur.pos = to;
        return;
    }

    if state.can_nest() && run_rules(state, true) {
        let to = state.cur.pos;
        state.memoize_skip(pos, to);
        return;
    }

    state.cur.bump_char();
    let to = state.cur.pos;
    state.memoize_skip(pos, to);
}

/// Runs each rule in precedence order until one applies.
///
/// In `silent` mode rules only validate and advance the cursor; they never
/// push tokens or pending text.
fn run_rules(state: &mut InlineState<'_>, silent: bool) -> bool {
    text(state, silent)
        || escape(state, silent)
        || code_span(state, silent)
        || (state.options.wikilinks && wikilink(state, silent))
        || emphasis::emphasis(state, silent)
}

/// Bytes that may start a construct; plain text runs stop at them.
fn is_terminator(b: u8) -> bool {
    matches!(
        b,
        Marker::STAR | Marker::UNDERSCORE | CodeSpan::TICK | Escape::BACKSLASH | b'['
    )
}

/// Consumes a run of bytes that cannot start any construct.
fn text(state: &mut InlineState<'_>, silent: bool) -> bool {
    let start = state.cur.pos;
    let src = state.cur.s;
    let bytes = src.as_bytes();
    let mut pos = start;

    while pos < state.cur.max && !is_terminator(bytes[pos]) {
        pos += 1;
    }
    if pos == start {
        return false;
    }

    if !silent {
        state.add_pending(start, pos);
    }
    state.cur.pos = pos;
    true
}

/// Parses `\` followed by ASCII punctuation.
fn escape(state: &mut InlineState<'_>, silent: bool) -> bool {
    if state.cur.peek() != Some(Escape::BACKSLASH) {
        return false;
    }
    if !state.cur.peek_at(1).is_some_and(Escape::is_escapable) {
        return false;
    }

    let start = state.cur.pos;
    if !silent {
        let full = state.span(start, start + 2);
        let escaped = state.span(start + 1, start + 2);
        state.push(InlineToken::Escape { full, escaped });
    }
    state.cur.bump_n(2);
    true
}

/// Parses a code span opened by a run of backticks and closed by the next run
/// of the same length.
///
/// An unclosed opening run is consumed as text, so that a later backtick in
/// the same run is never retried as an opener.
fn code_span(state: &mut InlineState<'_>, silent: bool) -> bool {
    if state.cur.peek() != Some(CodeSpan::TICK) {
        return false;
    }

    let start = state.cur.pos;
    let open = state.cur.run_len(start, CodeSpan::TICK);
    let inner_start = start + open;
    let src = state.cur.s;
    let bytes = src.as_bytes();
    let mut pos = inner_start;

    while pos < state.cur.max {
        if bytes[pos] != CodeSpan::TICK {
            pos += 1;
            continue;
        }
        let close = state.cur.run_len(pos, CodeSpan::TICK);
        if close == open {
            if !silent {
                let full = state.span(start, pos + close);
                let inner = state.span(inner_start, pos);
                state.push(InlineToken::CodeSpan { full, inner });
            }
            state.cur.pos = pos + close;
            return true;
        }
        pos += close;
    }

    if !silent {
        state.add_pending(start, inner_start);
    }
    state.cur.pos = inner_start;
    true
}

/// Parses a wikilink starting at the current position.
///
/// Handles both `[[target]]` and `[[target|alias]]` forms.
/// Returns false if not at `[[` or if the wikilink isn't closed.
/// On failure, cursor position is restored.
fn wikilink(state: &mut InlineState<'_>, silent: bool) -> bool {
    if !state.cur.starts_with(WikiLink::OPEN) {
        return false;
    }

    let saved = state.cur.pos;
    let start = state.cur.pos;
    state.cur.bump_n(WikiLink::OPEN.len());
    let target_start = state.cur.pos;

    while !state.cur.eof() {
        if state.cur.peek() == Some(WikiLink::ALIAS) || state.cur.starts_with(WikiLink::CLOSE) {
            break;
        }
        state.cur.bump_char();
    }
    let target_end = state.cur.pos;

    let mut alias = None;
    if state.cur.peek() == Some(WikiLink::ALIAS) {
        state.cur.bump_n(1);
        let alias_start = state.cur.pos;
        while !state.cur.eof() && !state.cur.starts_with(WikiLink::CLOSE) {
            state.cur.bump_char();
        }
        alias = Some((alias_start, state.cur.pos));
    }

    if !state.cur.starts_with(WikiLink::CLOSE) {
        // Not closed, restore cursor
        state.cur.pos = saved;
        return false;
    }
    state.cur.bump_n(WikiLink::CLOSE.len());

    if !silent {
        let full = state.span(start, state.cur.pos);
        let target = state.span(target_start, target_end);
        let alias: Option<Span> = alias.map(|(s, e)| state.span(s, e));
        state.push(InlineToken::WikiLink {
            full,
            target,
            alias,
        });
    }
    true
}
