//! Vector shape primitives produced by completed matches.
//!
//! Primitives are fully self-describing: geometry in drawing coordinates
//! (see the crate docs), a z-order, and style. A renderer draws them in
//! ascending z-order and treats an absent colour as "no paint".

use std::fmt;

use crate::Point;

/// Named paint colour.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Colour {
    Red,
    Orange,
    Purple,
    Blue,
    Pink,
    DarkRed,
    Gray,
    Cyan,
    Magenta,
    Green,
    Brown,
}

impl Colour {
    /// The CSS/SVG colour keyword.
    pub const fn name(self) -> &'static str {
        match self {
            Colour::Red => "red",
            Colour::Orange => "orange",
            Colour::Purple => "purple",
            Colour::Blue => "blue",
            Colour::Pink => "pink",
            Colour::DarkRed => "darkred",
            Colour::Gray => "gray",
            Colour::Cyan => "cyan",
            Colour::Magenta => "magenta",
            Colour::Green => "green",
            Colour::Brown => "brown",
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Solid or dashed stroke.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StrokeType {
    #[default]
    Solid,
    Dashed,
}

impl StrokeType {
    /// `Dashed` when `dashed` is set, otherwise `Solid`.
    #[inline]
    pub const fn dashed_if(dashed: bool) -> Self {
        if dashed {
            StrokeType::Dashed
        } else {
            StrokeType::Solid
        }
    }
}

/// z-order for shapes.
pub const SHAPE_Z: i32 = 1;
/// z-order for literal text, drawn underneath shapes.
pub const TEXT_Z: i32 = 0;

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Line {
    pub a: Point,
    pub b: Point,
    pub z: i32,
    pub stroke: Option<Colour>,
    pub width: f64,
    pub stroke_type: StrokeType,
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rectangle {
    pub a: Point,
    pub b: Point,
    pub z: i32,
    pub stroke: Option<Colour>,
    pub width: f64,
    pub stroke_type: StrokeType,
    pub fill: Option<Colour>,
}

/// Ellipse inscribed in the box from `a` (top-left) to `b` (bottom-right).
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ellipse {
    pub a: Point,
    pub b: Point,
    pub z: i32,
    pub stroke: Option<Colour>,
    pub width: f64,
    pub stroke_type: StrokeType,
    pub fill: Option<Colour>,
}

/// Elliptical arc inscribed in the box `a`..`b`, swept clockwise (in
/// screen space) from angle `start` to `end`, both in radians.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Arc {
    pub a: Point,
    pub b: Point,
    pub z: i32,
    pub start: f64,
    pub end: f64,
    pub stroke: Option<Colour>,
    pub width: f64,
    pub stroke_type: StrokeType,
    pub fill: Option<Colour>,
}

/// Quadratic Bezier from `a` to `b` with control point `control`.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QuadCurve {
    pub a: Point,
    pub b: Point,
    pub control: Point,
    pub z: i32,
    pub stroke: Option<Colour>,
    pub width: f64,
    pub stroke_type: StrokeType,
}

/// Literal text anchored at the top-left of its cell.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Text {
    pub pos: Point,
    pub z: i32,
    pub text: String,
    pub colour: Option<Colour>,
    pub size: f64,
}

/// One drawable item.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Primitive {
    Line(Line),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Arc(Arc),
    QuadCurve(QuadCurve),
    Text(Text),
}

impl Primitive {
    /// Unit-width line at shape z-order.
    pub fn line(a: Point, b: Point, colour: Colour, stroke_type: StrokeType) -> Self {
        Primitive::Line(Line {
            a,
            b,
            z: SHAPE_Z,
            stroke: Some(colour),
            width: 1.0,
            stroke_type,
        })
    }

    /// Unfilled, solid, unit-width rectangle at shape z-order.
    pub fn rectangle(a: Point, b: Point, colour: Colour) -> Self {
        Primitive::Rectangle(Rectangle {
            a,
            b,
            z: SHAPE_Z,
            stroke: Some(colour),
            width: 1.0,
            stroke_type: StrokeType::Solid,
            fill: None,
        })
    }

    /// Unfilled, solid, unit-width ellipse at shape z-order.
    pub fn ellipse(a: Point, b: Point, colour: Colour) -> Self {
        Primitive::Ellipse(Ellipse {
            a,
            b,
            z: SHAPE_Z,
            stroke: Some(colour),
            width: 1.0,
            stroke_type: StrokeType::Solid,
            fill: None,
        })
    }

    /// Unfilled, unit-width arc at shape z-order.
    pub fn arc(
        a: Point,
        b: Point,
        (start, end): (f64, f64),
        colour: Colour,
        stroke_type: StrokeType,
    ) -> Self {
        Primitive::Arc(Arc {
            a,
            b,
            z: SHAPE_Z,
            start,
            end,
            stroke: Some(colour),
            width: 1.0,
            stroke_type,
            fill: None,
        })
    }

    /// Unit-width quadratic curve at shape z-order.
    pub fn quad_curve(
        a: Point,
        b: Point,
        control: Point,
        colour: Colour,
        stroke_type: StrokeType,
    ) -> Self {
        Primitive::QuadCurve(QuadCurve {
            a,
            b,
            control,
            z: SHAPE_Z,
            stroke: Some(colour),
            width: 1.0,
            stroke_type,
        })
    }

    /// Unit-size text at text z-order.
    pub fn text(pos: Point, text: impl Into<String>, colour: Colour) -> Self {
        Primitive::Text(Text {
            pos,
            z: TEXT_Z,
            text: text.into(),
            colour: Some(colour),
            size: 1.0,
        })
    }

    /// Drawing order; lower draws first.
    pub fn z(&self) -> i32 {
        match self {
            Primitive::Line(p) => p.z,
            Primitive::Rectangle(p) => p.z,
            Primitive::Ellipse(p) => p.z,
            Primitive::Arc(p) => p.z,
            Primitive::QuadCurve(p) => p.z,
            Primitive::Text(p) => p.z,
        }
    }

    /// Stroke style, for primitives that have an outline.
    pub fn stroke_type(&self) -> Option<StrokeType> {
        match self {
            Primitive::Line(p) => Some(p.stroke_type),
            Primitive::Rectangle(p) => Some(p.stroke_type),
            Primitive::Ellipse(p) => Some(p.stroke_type),
            Primitive::Arc(p) => Some(p.stroke_type),
            Primitive::QuadCurve(p) => Some(p.stroke_type),
            Primitive::Text(_) => None,
        }
    }

    /// Short lowercase name of the primitive kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Primitive::Line(_) => "line",
            Primitive::Rectangle(_) => "rectangle",
            Primitive::Ellipse(_) => "ellipse",
            Primitive::Arc(_) => "arc",
            Primitive::QuadCurve(_) => "quad_curve",
            Primitive::Text(_) => "text",
        }
    }
}

#[cfg(test)]
mod tests;
