//! Integration tests for the parsing module.
//!
//! Token streams are compared in their rendered S-expression form, and every
//! parse is also run through the structural invariant checks.

use rstest::rstest;

use crate::parsing::{
    inline::{InlineOptions, InlineParser, InlineToken, ParsedInline},
    parse_document,
    snapshot::{invariants, normalize, render},
    span::Span,
};

fn parse_with(options: InlineOptions, src: &str) -> ParsedInline {
    let parsed = InlineParser::new(options).parse(0, src);
    invariants(src, Span::new(0, src.len()), &parsed.tokens);
    parsed
}

fn rendered(src: &str) -> String {
    render(src, &parse_with(InlineOptions::default(), src).tokens)
}

// Emphasis resolution

#[rstest]
#[case::plain_text("hello", r#""hello""#)]
#[case::emphasis("*a*", r#"(em* "a")"#)]
#[case::underscore_emphasis("_a_", r#"(em_ "a")"#)]
#[case::strong("**a**", r#"(strong** "a")"#)]
#[case::underscore_strong("__a__", r#"(strong__ "a")"#)]
#[case::strong_around_emphasis("***a***", r#"(strong** (em* "a"))"#)]
#[case::intraword_underscore("a_b_c", r#""a_b_c""#)]
#[case::intraword_star("foo*bar*", r#""foo" (em* "bar")"#)]
#[case::underscore_cannot_open_in_word("foo_bar_", r#""foo_bar_""#)]
#[case::underscore_inside_span("_foo_bar_", r#"(em_ "foo_bar")"#)]
#[case::unmatched_opener_stays_text("*foo *bar*", r#""*foo " (em* "bar")"#)]
#[case::leftover_opener_marker("**foo*", r#""*" (em* "foo")"#)]
#[case::leftover_closer_marker("*foo**", r#"(em* "foo") "*""#)]
#[case::nested_emphasis("*foo *bar* baz*", r#"(em* "foo " (em* "bar") " baz")"#)]
#[case::adjacent_spans("*foo**bar*", r#"(em* "foo") (em* "bar")"#)]
#[case::siblings("*a* _b_", r#"(em* "a") " " (em_ "b")"#)]
#[case::strong_with_inner_emphasis("**a *b* c**", r#"(strong** "a " (em* "b") " c")"#)]
#[case::surrounded_by_spaces("a * b * c", r#""a * b * c""#)]
#[case::mixed_markers_never_pair("*a_", r#""*a_""#)]
#[case::unicode_punctuation_neighbours("a*«b»*c", r#""a*«b»*c""#)]
fn emphasis_cases(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(rendered(src), expected);
}

// Raw zones

#[rstest]
#[case::escaped_opener(r"\*a*", r#"esc(*) "a*""#)]
#[case::code_span_hides_markers("*a `*` b*", r#"(em* "a " code("*") " b")"#)]
#[case::code_span_inside_strong("**`x`**", r#"(strong** code("x"))"#)]
#[case::wikilink_hides_markers("*[[a*b]]*", r#"(em* wiki("a*b"))"#)]
#[case::wikilink_alias("_[[t|a]]_", r#"(em_ wiki("t"|"a"))"#)]
fn raw_zone_cases(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(rendered(src), expected);
}

#[test]
fn nested_emphasis_snapshot() {
    insta::assert_snapshot!(
        rendered("x *a **b** c*"),
        @r#""x " (em* "a " (strong** "b") " c")"#
    );
}

#[test]
fn max_nesting_keeps_deep_content_as_text() {
    let src = "**a *b* c**";
    let shallow = InlineOptions {
        max_nesting: 1,
        ..InlineOptions::default()
    };
    assert_eq!(
        render(src, &parse_with(shallow, src).tokens),
        r#"(strong** "a *b* c")"#
    );

    let none = InlineOptions {
        max_nesting: 0,
        ..InlineOptions::default()
    };
    assert_eq!(render(src, &parse_with(none, src).tokens), r#""**a *b* c**""#);
}

// Invariant tests

#[rstest]
#[case("")]
#[case("*")]
#[case("***")]
#[case("*_*_")]
#[case("_*_*")]
#[case("a**b**c")]
#[case("__*a*__")]
#[case("*a `b* c`*")]
#[case("_[[x*y]]_")]
#[case(r"\**a**")]
#[case("* * *")]
#[case("**a***b*")]
#[case("*a **b* c**")]
#[case("_a __b_ c__")]
#[case("é*«ü»*")]
#[case("****a****b****")]
#[case("*a _b* c_")]
#[case("_x *a _b* c_ y_")]
#[case("``*`*``*")]
#[case("[[*]] *[[|*]]")]
fn invariants_hold(#[case] src: &str) {
    let parsed = parse_with(InlineOptions::default(), src);

    // Spans reproduce the input exactly.
    let joined: String = parsed.tokens.iter().map(|t| t.span().slice(src)).collect();
    assert_eq!(joined, src);
}

#[test]
fn invariants_hold_when_nesting_is_capped() {
    for max_nesting in 0..4 {
        let options = InlineOptions {
            max_nesting,
            ..InlineOptions::default()
        };
        parse_with(options, "***a **b *c* d** e***");
    }
}

#[test]
fn reparsing_gives_the_same_tokens() {
    let parser = InlineParser::default();
    let src = "*a **b** _c_ `d*` [[e]]*";
    assert_eq!(parser.parse(0, src), parser.parse(0, src));
}

// Work scaling

/// Records appended plus backward search steps for one pass over `src`.
fn work(src: &str) -> usize {
    let stats = parse_with(InlineOptions::default(), src).stats;
    stats.records + stats.search_steps
}

#[rstest]
#[case::lone_markers("* ")]
#[case::closers_only("a* b_ ")]
#[case::crossed_markers("_a* ")]
#[case::openers_only("*a _b ")]
#[case::balanced_pairs("*a* ")]
fn work_grows_linearly(#[case] unit: &str) {
    let small = work(&unit.repeat(500));
    let large = work(&unit.repeat(2000));
    assert!(
        large <= 5 * small,
        "work for {unit:?} grew from {small} to {large}"
    );
}

#[test]
fn deep_nesting_does_not_recurse_past_cap() {
    let src = format!("{}a{}", "*".repeat(500), "*".repeat(500));
    let parsed = parse_with(InlineOptions::default(), &src);
    let depth = parsed
        .tokens
        .iter()
        .scan(0i32, |level, t| {
            *level += i32::from(t.nesting());
            Some(*level)
        })
        .max()
        .unwrap_or(0);
    assert!(depth <= 100);
}

// Documents

#[test]
fn paragraphs_are_parsed_independently() {
    let text = "*a\n\nb*\n\n_b c_\nd";
    let doc = parse_document(text, &InlineParser::default());
    assert_eq!(doc.blocks.len(), 3);

    for block in &doc.blocks {
        invariants(text, block.span, &block.tokens);
    }

    let inline: Vec<String> = doc
        .blocks
        .iter()
        .map(|b| render(text, &b.tokens))
        .collect();
    assert_eq!(inline, vec![r#""*a""#, r#""b*""#, r#"(em_ "b c") "\nd""#]);
}

#[test]
fn document_snapshot_uses_absolute_spans() {
    let text = "x\n\n**y**";
    let doc = parse_document(text, &InlineParser::default());
    let snap = normalize(text, &doc);

    assert_eq!(snap.blocks.len(), 2);
    assert_eq!(snap.blocks[1].span, (3, 8));
    assert_eq!(snap.blocks[1].inline, r#"(strong** "y")"#);
    assert!(matches!(
        doc.blocks[1].tokens.first(),
        Some(InlineToken::Open { markup, .. }) if *markup == Span::new(3, 5)
    ));
}

#[test]
fn empty_document() {
    let doc = parse_document("", &InlineParser::default());
    assert!(doc.blocks.is_empty());
}
