//! Crow's-foot line ends: a line meeting a box through `<`, `>`, `v`/`V`
//! or `^`, with the prongs spreading against the box border.

use scrawl_ir::{Colour, Meta, Point, Pos, Primitive, StrokeType, CHAR_H_RATIO};

use crate::{Await, Grammar, GrammarKind, Machine, Step, Visit};

/// Parameters of one crow's-foot orientation.
#[derive(Copy, Clone, Debug)]
pub struct CrowsFootConfig {
    pub glyphs: &'static str,
    /// Required on the anchor.
    pub start_meta: Meta,
    /// Required on the next cell along `dir`.
    pub end_meta: Meta,
    /// Marks the attached line as dashed, on whichever cell it touches.
    pub dash_meta: Meta,
    pub dir: (i32, i32),
    /// Whether the box comes first in scan order.
    pub flipped: bool,
}

pub struct CrowsFootGrammar {
    kind: GrammarKind,
    config: CrowsFootConfig,
}

impl CrowsFootGrammar {
    pub const fn new(kind: GrammarKind, config: CrowsFootConfig) -> Self {
        CrowsFootGrammar { kind, config }
    }
}

pub static LEFT: CrowsFootGrammar = CrowsFootGrammar::new(
    GrammarKind::LeftCrowsFoot,
    CrowsFootConfig {
        glyphs: ">",
        start_meta: Meta::BOX_AFTER_E,
        end_meta: Meta::LINE_START_E,
        dash_meta: Meta::DASH_START_E,
        dir: (1, 0),
        flipped: true,
    },
);

pub static RIGHT: CrowsFootGrammar = CrowsFootGrammar::new(
    GrammarKind::RightCrowsFoot,
    CrowsFootConfig {
        glyphs: "<",
        start_meta: Meta::LINE_AFTER_E,
        end_meta: Meta::BOX_START_E,
        dash_meta: Meta::DASH_AFTER_E,
        dir: (1, 0),
        flipped: false,
    },
);

pub static UP: CrowsFootGrammar = CrowsFootGrammar::new(
    GrammarKind::UpCrowsFoot,
    CrowsFootConfig {
        glyphs: "Vv",
        start_meta: Meta::BOX_AFTER_S,
        end_meta: Meta::LINE_START_S,
        dash_meta: Meta::DASH_START_S,
        dir: (0, 1),
        flipped: true,
    },
);

pub static DOWN: CrowsFootGrammar = CrowsFootGrammar::new(
    GrammarKind::DownCrowsFoot,
    CrowsFootConfig {
        glyphs: "^",
        start_meta: Meta::LINE_AFTER_S,
        end_meta: Meta::BOX_START_S,
        dash_meta: Meta::DASH_AFTER_S,
        dir: (0, 1),
        flipped: false,
    },
);

impl Grammar for CrowsFootGrammar {
    fn kind(&self) -> GrammarKind {
        self.kind
    }

    fn bind(&self, anchor: Pos) -> Box<dyn Machine> {
        Box::new(CrowsFootMachine {
            config: self.config,
            pos: anchor,
            dashed: false,
            probing: false,
        })
    }
}

struct CrowsFootMachine {
    config: CrowsFootConfig,
    pos: Pos,
    dashed: bool,
    probing: bool,
}

impl Machine for CrowsFootMachine {
    fn advance(&mut self, visit: &Visit) -> Step {
        let config = self.config;
        if self.probing {
            if !visit.meta.has(config.end_meta) {
                return Step::Rejected;
            }
            if config.flipped {
                self.dashed = visit.meta.has(config.dash_meta);
            }
            return Step::Matched;
        }

        if !visit.accepts(config.glyphs) || !visit.meta.has(config.start_meta) {
            return Step::Rejected;
        }
        if !config.flipped {
            self.dashed = visit.meta.has(config.dash_meta);
        }
        self.probing = true;
        let (dx, dy) = config.dir;
        Step::write(Meta::OCCUPIED, Await::At(self.pos.offset(dx, dy)))
    }

    fn render(&self) -> Vec<Primitive> {
        let (dx, dy) = self.config.dir;
        let flip = if self.config.flipped { -1.0 } else { 1.0 };
        let (x, y) = (f64::from(dx) * flip, f64::from(dy) * flip);
        // Prongs spread across the direction of travel.
        let (sx, sy) = (
            if dx == 0 { 0.6 } else { 0.0 },
            if dy == 0 { 0.6 / CHAR_H_RATIO } else { 0.0 },
        );

        let centre = self.pos.centre();
        let stem = centre.shift(-0.5 * x, -0.5 * y);
        let middle = centre.shift(x, y);
        let outer = middle.shift(-sx, -sy);
        let inner = middle.shift(sx, sy);
        let root = Point::new(middle.x - x, middle.y - y / CHAR_H_RATIO);

        vec![
            Primitive::line(root, outer, Colour::Gray, StrokeType::Solid),
            Primitive::line(root, middle, Colour::Gray, StrokeType::Solid),
            Primitive::line(root, inner, Colour::Gray, StrokeType::Solid),
            Primitive::line(
                stem,
                root,
                Colour::Gray,
                StrokeType::dashed_if(self.dashed),
            ),
        ]
    }
}

#[cfg(test)]
mod tests;
