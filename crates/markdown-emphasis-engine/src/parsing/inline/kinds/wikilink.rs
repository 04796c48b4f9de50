/// Wiki-style link `[[target]]` or `[[target|alias]]`.
///
/// Like code spans, wikilinks are raw zones for emphasis resolution.
pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static [u8; 2] = b"[[";
    pub const CLOSE: &'static [u8; 2] = b"]]";
    pub const ALIAS: u8 = b'|';
}
