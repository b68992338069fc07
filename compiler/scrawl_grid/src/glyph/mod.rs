//! Cell contents: an input character or a sentinel.

use std::fmt;

/// What sits in one grid cell.
///
/// Sentinels are neither alphanumeric nor whitespace, and never compare
/// equal to any character, so literal pattern sets can never match them.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum Glyph {
    /// An input character.
    Char(char),
    /// No more characters on this row.
    EndOfLine,
    /// No more rows.
    EndOfInput,
}

impl Glyph {
    /// The character, if this is not a sentinel.
    #[inline]
    pub const fn char(self) -> Option<char> {
        match self {
            Glyph::Char(c) => Some(c),
            Glyph::EndOfLine | Glyph::EndOfInput => None,
        }
    }

    /// Check for one specific character.
    #[inline]
    pub fn is(self, c: char) -> bool {
        self == Glyph::Char(c)
    }

    /// Check membership in a set of characters.
    #[inline]
    pub fn is_in(self, set: &str) -> bool {
        self.char().is_some_and(|c| set.contains(c))
    }

    #[inline]
    pub fn is_alphabetic(self) -> bool {
        self.char().is_some_and(char::is_alphabetic)
    }

    #[inline]
    pub fn is_whitespace(self) -> bool {
        self.char().is_some_and(char::is_whitespace)
    }

    #[inline]
    pub const fn is_sentinel(self) -> bool {
        !matches!(self, Glyph::Char(_))
    }

    #[inline]
    pub const fn is_end_of_line(self) -> bool {
        matches!(self, Glyph::EndOfLine)
    }

    #[inline]
    pub const fn is_end_of_input(self) -> bool {
        matches!(self, Glyph::EndOfInput)
    }
}

impl fmt::Debug for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Glyph::Char(c) => write!(f, "{c:?}"),
            Glyph::EndOfLine => f.write_str("<EOL>"),
            Glyph::EndOfInput => f.write_str("<EOI>"),
        }
    }
}
