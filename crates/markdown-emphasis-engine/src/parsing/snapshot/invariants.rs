use crate::parsing::{
    inline::{EmphasisKind, InlineToken, Marker},
    span::Span,
};

/// Asserts the structural invariants of an inline token stream parsed from
/// `src[region]`:
///
/// - token spans are in bounds and tile `region` exactly, in order
/// - text tokens are never empty
/// - open and close tokens are balanced, and each close matches the kind and
///   marker of the open it ends
/// - emphasis markup is `width` copies of its marker
/// - sub-spans of raw zones lie inside their full span
pub fn check(src: &str, region: Span, tokens: &[InlineToken]) {
    assert!(
        region.start <= region.end && region.end <= src.len(),
        "region out of bounds: {region:?} (src len: {})",
        src.len()
    );

    let mut pos = region.start;
    let mut stack: Vec<(EmphasisKind, Marker)> = Vec::new();

    for token in tokens {
        let sp = token.span();
        assert_eq!(
            sp.start, pos,
            "token {token:?} does not start where the previous one ended"
        );
        assert!(
            sp.end <= region.end,
            "token {token:?} runs past region {region:?}"
        );
        pos = sp.end;

        match token {
            InlineToken::Text(sp) => assert!(!sp.is_empty(), "empty text token at {sp:?}"),
            InlineToken::Escape { full, escaped } => {
                assert_eq!(full.len(), 2, "escape {full:?} is not two bytes");
                assert_eq!(escaped.end, full.end);
            }
            InlineToken::CodeSpan { full, inner } => {
                assert!(contains(*full, *inner), "code inner {inner:?} outside {full:?}");
            }
            InlineToken::WikiLink {
                full,
                target,
                alias,
            } => {
                assert!(contains(*full, *target), "target {target:?} outside {full:?}");
                if let Some(a) = alias {
                    assert!(contains(*full, *a), "alias {a:?} outside {full:?}");
                }
            }
            InlineToken::Open {
                kind,
                marker,
                markup,
            } => {
                check_markup(src, *kind, *marker, *markup);
                stack.push((*kind, *marker));
            }
            InlineToken::Close {
                kind,
                marker,
                markup,
            } => {
                check_markup(src, *kind, *marker, *markup);
                let open = stack.pop();
                assert_eq!(
                    open,
                    Some((*kind, *marker)),
                    "close {token:?} does not match its open"
                );
            }
        }
    }

    assert_eq!(pos, region.end, "tokens do not cover {region:?}");
    assert!(stack.is_empty(), "unclosed spans: {stack:?}");
}

fn contains(outer: Span, inner: Span) -> bool {
    outer.start <= inner.start && inner.end <= outer.end && inner.start <= inner.end
}

fn check_markup(src: &str, kind: EmphasisKind, marker: Marker, markup: Span) {
    let text = markup.slice(src);
    assert_eq!(markup.len(), kind.width(), "markup {markup:?} has wrong width");
    assert!(
        text.bytes().all(|b| b == marker.byte()),
        "markup {text:?} at {markup:?} is not made of {marker:?}"
    );
}
