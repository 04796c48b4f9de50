//! The emphasis rule: turns a resolved marker pair into an open token, the
//! tokenized content between the markers, and a close token.

use super::{
    kinds::Marker,
    pairs::find_match,
    parser::tokenize,
    state::InlineState,
    types::{EmphasisKind, InlineToken},
};

/// Tries to parse emphasis or strong emphasis at the current position.
///
/// Declines in silent mode: pairing depends on what comes later in the
/// region, so skipping over emphasis never consumes more than one character.
pub(crate) fn emphasis(state: &mut InlineState<'_>, silent: bool) -> bool {
    let start = state.cur.pos;
    let Some(marker) = state.cur.peek().and_then(Marker::from_byte) else {
        return false;
    };
    if silent {
        return false;
    }

    let Some(pair) = find_match(state, start) else {
        return false;
    };

    // Strong only when the second marker pairs with the character right
    // before our closer.
    let strong = state.cur.byte_at(start + 1) == Some(marker.byte())
        && pair > 0
        && find_match(state, start + 1) == Some(pair - 1);
    let kind = if strong {
        EmphasisKind::Strong
    } else {
        EmphasisKind::Emphasis
    };
    let width = kind.width();

    let open = state.span(start, start + width);
    let close = state.span(pair + 1 - width, pair + 1);
    log::trace!(
        "{} {:?} at {}..{}",
        kind.name(),
        marker,
        open.start,
        close.end
    );

    state.push(InlineToken::Open {
        kind,
        marker,
        markup: open,
    });
    state.within(start + width, pair + 1 - width, tokenize);
    state.push(InlineToken::Close {
        kind,
        marker,
        markup: close,
    });

    state.cur.pos = pair + 1;
    true
}
