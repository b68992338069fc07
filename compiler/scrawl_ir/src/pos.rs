//! Grid positions and drawing points.

use std::fmt;

/// A cell position on the character grid.
///
/// Ordering is row-major (`row` first, then `col`), which is exactly the
/// order in which the recognizer visits cells. "Already passed" is therefore
/// a plain `<` comparison against the scan cursor.
///
/// Coordinates are signed: grammars compute lookahead targets such as
/// "one column to the left", which may fall off the grid. Such positions
/// are never visited and surface as unreachable.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Create a position from a row and column.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Pos { row, col }
    }

    /// The position `dx` columns across and `dy` rows down from this one.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Pos {
            row: self.row + dy,
            col: self.col + dx,
        }
    }

    /// The centre of this cell in drawing coordinates.
    #[inline]
    pub fn centre(self) -> Point {
        Point::new(f64::from(self.col) + 0.5, f64::from(self.row) + 0.5)
    }

    /// The top-left corner of this cell in drawing coordinates.
    #[inline]
    pub fn corner(self) -> Point {
        Point::new(f64::from(self.col), f64::from(self.row))
    }
}

impl fmt::Debug for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, col {}", self.row, self.col)
    }
}

/// A point in drawing coordinates (cells across, rows down).
#[derive(Copy, Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Translate by `(dx, dy)`.
    #[inline]
    #[must_use]
    pub fn shift(self, dx: f64, dy: f64) -> Self {
        Point::new(self.x + dx, self.y + dy)
    }
}
