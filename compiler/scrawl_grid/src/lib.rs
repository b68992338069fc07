//! Scrawl Grid - sentinel-terminated character grid.
//!
//! The recognizer walks text one cell at a time in row-major order. This
//! crate turns the input into a grid where every row ends with an
//! end-of-line sentinel and the whole input ends with a terminal row
//! holding the end-of-input sentinel. Lookups never index out of bounds:
//! any position off the grid reads as end-of-input.
//!
//! # Layout
//!
//! ```text
//! "ab\nc"  =>  row 0: [a, b, EOL]
//!              row 1: [c, EOL]
//!              row 2: [EOI, EOL]   (terminal row)
//! ```

mod glyph;
mod grid;

pub use glyph::Glyph;
pub use grid::{Cell, Cells, Grid};
