//! Arrowheads on line ends: `<`, `>`, `v`/`V` and `^`.
//!
//! A head sits on the cell just past a line's end. Heads pointing along
//! their line's scan direction (`>` and `v`) find the line through the
//! "after" flag on their own cell and then look one cell further on for
//! a box border. Flipped heads (`<` and `^`) come before their line in
//! scan order: they check their own cell for a box "after" flag and
//! require the line to start on the next cell.
//!
//! A head pointing into a box is drawn longer so that its tip touches
//! the border.

use scrawl_ir::{Colour, Meta, Point, Pos, Primitive, StrokeType, CHAR_H_RATIO};

use crate::{Await, Grammar, GrammarKind, Machine, Step, Visit};

/// Parameters of one arrowhead orientation.
#[derive(Copy, Clone, Debug)]
pub struct ArrowheadConfig {
    pub glyphs: &'static str,
    /// Marks the attached line.
    pub line_meta: Meta,
    /// Marks a box border in the pointing direction.
    pub box_meta: Meta,
    /// Marks the attached line as dashed. The stem follows it, so a head
    /// on a dashed line gets a dashed stem.
    pub dash_meta: Meta,
    /// Scan direction of the attached line.
    pub dir: (i32, i32),
    /// Whether the head points against `dir`.
    pub flipped: bool,
}

pub struct ArrowheadGrammar {
    kind: GrammarKind,
    config: ArrowheadConfig,
}

impl ArrowheadGrammar {
    pub const fn new(kind: GrammarKind, config: ArrowheadConfig) -> Self {
        ArrowheadGrammar { kind, config }
    }
}

pub static LEFT: ArrowheadGrammar = ArrowheadGrammar::new(
    GrammarKind::LeftArrowhead,
    ArrowheadConfig {
        glyphs: "<",
        line_meta: Meta::LINE_START_E,
        box_meta: Meta::BOX_AFTER_E,
        dash_meta: Meta::DASH_START_E,
        dir: (1, 0),
        flipped: true,
    },
);

pub static RIGHT: ArrowheadGrammar = ArrowheadGrammar::new(
    GrammarKind::RightArrowhead,
    ArrowheadConfig {
        glyphs: ">",
        line_meta: Meta::LINE_AFTER_E,
        box_meta: Meta::BOX_START_E,
        dash_meta: Meta::DASH_AFTER_E,
        dir: (1, 0),
        flipped: false,
    },
);

pub static DOWN: ArrowheadGrammar = ArrowheadGrammar::new(
    GrammarKind::DownArrowhead,
    ArrowheadConfig {
        glyphs: "Vv",
        line_meta: Meta::LINE_AFTER_S,
        box_meta: Meta::BOX_START_S,
        dash_meta: Meta::DASH_AFTER_S,
        dir: (0, 1),
        flipped: false,
    },
);

pub static UP: ArrowheadGrammar = ArrowheadGrammar::new(
    GrammarKind::UpArrowhead,
    ArrowheadConfig {
        glyphs: "^",
        line_meta: Meta::LINE_START_S,
        box_meta: Meta::BOX_AFTER_S,
        dash_meta: Meta::DASH_START_S,
        dir: (0, 1),
        flipped: true,
    },
);

impl Grammar for ArrowheadGrammar {
    fn kind(&self) -> GrammarKind {
        self.kind
    }

    fn bind(&self, anchor: Pos) -> Box<dyn Machine> {
        Box::new(ArrowheadMachine {
            config: self.config,
            pos: anchor,
            to_box: false,
            dashed: false,
            probing: false,
        })
    }
}

struct ArrowheadMachine {
    config: ArrowheadConfig,
    pos: Pos,
    to_box: bool,
    dashed: bool,
    /// Anchor accepted; waiting on the next cell along `dir`.
    probing: bool,
}

impl Machine for ArrowheadMachine {
    fn advance(&mut self, visit: &Visit) -> Step {
        let config = self.config;
        if self.probing {
            if config.flipped {
                if !visit.meta.has(config.line_meta) {
                    return Step::Rejected;
                }
                self.dashed = visit.meta.has(config.dash_meta);
            } else {
                self.to_box = visit.meta.has(config.box_meta);
            }
            return Step::Matched;
        }

        if !visit.accepts(config.glyphs) {
            return Step::Rejected;
        }
        if config.flipped {
            self.to_box = visit.meta.has(config.box_meta);
        } else {
            if !visit.meta.has(config.line_meta) {
                return Step::Rejected;
            }
            self.dashed = visit.meta.has(config.dash_meta);
        }
        self.probing = true;
        let (dx, dy) = config.dir;
        Step::write(Meta::OCCUPIED, Await::At(self.pos.offset(dx, dy)))
    }

    /// An unflipped head already has its line; the box probe is optional.
    fn unreachable(&mut self, _visit: &Visit) -> Step {
        if self.probing && !self.config.flipped {
            Step::Matched
        } else {
            Step::Rejected
        }
    }

    fn render(&self) -> Vec<Primitive> {
        let (dx, dy) = self.config.dir;
        let flip = if self.config.flipped { -1.0 } else { 1.0 };
        let (x, y) = (f64::from(dx) * flip, f64::from(dy) * flip);
        let reach = if self.to_box { 1.0 } else { 0.5 };

        let centre = self.pos.centre();
        let stem = centre.shift(-0.5 * x, -0.5 * y);
        let tip = centre.shift(reach * x, reach * y);
        let barb = |side: f64| {
            Point::new(
                tip.x - 0.8 * x + side * 0.5 * y,
                tip.y - 0.8 * y / CHAR_H_RATIO + side * 0.5 * x / CHAR_H_RATIO,
            )
        };

        vec![
            Primitive::line(barb(-1.0), tip, Colour::DarkRed, StrokeType::Solid),
            Primitive::line(barb(1.0), tip, Colour::DarkRed, StrokeType::Solid),
            Primitive::line(
                stem,
                tip,
                Colour::DarkRed,
                StrokeType::dashed_if(self.dashed),
            ),
        ]
    }
}
