//! Scrawl IR - shared vocabulary for the diagram recognizer.
//!
//! This crate provides:
//! - Grid coordinates (`Pos`) and fractional drawing coordinates (`Point`)
//! - The per-cell metadata bitmask (`Meta`) that grammars communicate through
//! - Shape primitives (`Primitive`) handed to an external renderer
//!
//! # Coordinates
//!
//! One unit of `Point::x` is one character cell. One unit of `Point::y` is
//! one row; a renderer scales rows by [`CHAR_H_RATIO`] relative to columns.
//! Grammars that want visually round shapes divide vertical offsets by the
//! ratio themselves.

mod meta;
mod pos;
mod primitive;

pub use meta::Meta;
pub use pos::{Point, Pos};
pub use primitive::{
    Arc, Colour, Ellipse, Line, Primitive, QuadCurve, Rectangle, StrokeType, Text,
};

/// Height of a character cell relative to its width.
pub const CHAR_H_RATIO: f64 = 2.0;
