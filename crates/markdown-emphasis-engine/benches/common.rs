// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "Paragraph with *some* content and **strong** words.\n\
                A second line mixing _under_ and __double__ with `code *spans*`.\n\n\
                Intraword snake_case_names stay text, as do lone * stars *.\n\n";
    base.repeat(size)
}

/// One paragraph of `size` markers that never pair with anything.
#[allow(dead_code)]
pub fn generate_unmatched_markers(size: usize) -> String {
    "_a* ".repeat(size)
}

/// One paragraph nesting `depth` emphasis spans.
#[allow(dead_code)]
pub fn generate_nested_emphasis(depth: usize) -> String {
    let mut content = String::new();
    for level in 0..depth {
        let marker = if level % 2 == 0 { "*" } else { "_" };
        content.push_str(marker);
        content.push_str("x ");
    }
    for level in (0..depth).rev() {
        let marker = if level % 2 == 0 { "*" } else { "_" };
        content.push_str(" y");
        content.push_str(marker);
    }
    content
}
