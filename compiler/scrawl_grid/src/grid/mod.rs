//! The character grid and its row-major scan.

use scrawl_ir::Pos;

use crate::Glyph;

/// One visited cell: where it is and what it holds.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Cell {
    pub pos: Pos,
    pub glyph: Glyph,
}

/// Immutable sentinel-terminated view of the input text.
///
/// # Layout
///
/// Each real row holds its characters followed by [`Glyph::EndOfLine`].
/// After the last real row sits the terminal row `[EndOfInput, EndOfLine]`.
/// The terminal row is always present, even for empty input.
#[derive(Clone, Debug)]
pub struct Grid {
    /// Real rows plus the terminal row, each ending in `EndOfLine`.
    rows: Vec<Vec<Glyph>>,
}

impl Grid {
    /// Split `text` into rows and append sentinels.
    ///
    /// Rows break on `\n`; a trailing `\r` is dropped and a final newline
    /// does not start another row.
    pub fn new(text: &str) -> Self {
        let mut rows: Vec<Vec<Glyph>> = text
            .lines()
            .map(|line| {
                line.chars()
                    .map(Glyph::Char)
                    .chain(std::iter::once(Glyph::EndOfLine))
                    .collect()
            })
            .collect();
        rows.push(vec![Glyph::EndOfInput, Glyph::EndOfLine]);
        Grid { rows }
    }

    /// Number of real rows (the terminal row excluded).
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len() - 1
    }

    /// Index of the terminal sentinel row.
    #[inline]
    pub fn terminal_row(&self) -> i32 {
        to_coord(self.row_count())
    }

    /// Glyphs of row `row`, end-of-line sentinel included.
    ///
    /// The terminal row is reachable at index `row_count()`; anything past
    /// it is `None`.
    pub fn row(&self, row: usize) -> Option<&[Glyph]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Glyph at `pos`, or `EndOfInput` when `pos` is off the grid.
    pub fn glyph(&self, pos: Pos) -> Glyph {
        let (Ok(row), Ok(col)) = (usize::try_from(pos.row), usize::try_from(pos.col)) else {
            return Glyph::EndOfInput;
        };
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(Glyph::EndOfInput)
    }

    /// Every cell in row-major order, sentinels and terminal row included.
    pub fn cells(&self) -> Cells<'_> {
        Cells {
            grid: self,
            row: 0,
            col: 0,
        }
    }

    /// Total number of cells a scan visits.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

/// Row-major scan over a [`Grid`].
#[derive(Clone, Debug)]
pub struct Cells<'a> {
    grid: &'a Grid,
    row: usize,
    col: usize,
}

impl Iterator for Cells<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        loop {
            let row = self.grid.rows.get(self.row)?;
            if let Some(&glyph) = row.get(self.col) {
                let pos = Pos::new(to_coord(self.row), to_coord(self.col));
                self.col += 1;
                return Some(Cell { pos, glyph });
            }
            self.row += 1;
            self.col = 0;
        }
    }
}

/// Grid indices as signed coordinates, saturating on absurdly large input.
#[inline]
fn to_coord(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}
