use serde::Serialize;

/// An emphasis marker character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Marker {
    /// `*` - may open and close anywhere the flanking rule allows.
    Star,
    /// `_` - additionally refuses to open or close inside a word.
    Underscore,
}

impl Marker {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';

    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            Self::STAR => Some(Marker::Star),
            Self::UNDERSCORE => Some(Marker::Underscore),
            _ => None,
        }
    }

    pub fn byte(self) -> u8 {
        match self {
            Marker::Star => Self::STAR,
            Marker::Underscore => Self::UNDERSCORE,
        }
    }

    /// Dense index for per-marker tables.
    pub(crate) fn index(self) -> usize {
        match self {
            Marker::Star => 0,
            Marker::Underscore => 1,
        }
    }
}
