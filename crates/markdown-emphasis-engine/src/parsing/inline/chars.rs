use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Character classes used by the flanking rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Whitespace,
    Punctuation,
    Other,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        if is_whitespace(c) {
            CharClass::Whitespace
        } else if is_punctuation(c) {
            CharClass::Punctuation
        } else {
            CharClass::Other
        }
    }

    /// Classifies an optional neighbour; the start and end of the text count
    /// as whitespace.
    pub fn of_neighbour(c: Option<char>) -> Self {
        c.map_or(CharClass::Whitespace, Self::of)
    }

    pub fn is_whitespace_or_punctuation(self) -> bool {
        matches!(self, CharClass::Whitespace | CharClass::Punctuation)
    }
}

/// Unicode whitespace as far as delimiter runs are concerned: ASCII
/// whitespace and the `Zs` space separators.
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{09}'..='\u{0D}'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// ASCII punctuation, or any character in the Unicode `P*` categories.
pub fn is_punctuation(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_punctuation()
    } else {
        matches!(c.general_category_group(), GeneralCategoryGroup::Punctuation)
    }
}
