//! Line crossings drawn as a hop: one line runs straight through, the
//! other bridges over it with a half arc.
//!
//! ```text
//!   |       |       |
//! --(--   --)--   --^--
//!   |       |       |
//! ```
//!
//! `(` and `)` hop the vertical line over the horizontal one; `^` hops
//! the horizontal line over the vertical one.

use std::f64::consts::PI;

use scrawl_ir::{Colour, Meta, Point, Pos, Primitive, StrokeType};

use crate::{Await, Grammar, GrammarKind, Machine, Step, Visit};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Hop {
    Left,
    Right,
    Up,
}

pub struct JumpGrammar {
    kind: GrammarKind,
    glyph: char,
    hop: Hop,
}

pub static LEFT: JumpGrammar = JumpGrammar {
    kind: GrammarKind::LeftJump,
    glyph: '(',
    hop: Hop::Left,
};

pub static RIGHT: JumpGrammar = JumpGrammar {
    kind: GrammarKind::RightJump,
    glyph: ')',
    hop: Hop::Right,
};

pub static UP: JumpGrammar = JumpGrammar {
    kind: GrammarKind::UpJump,
    glyph: '^',
    hop: Hop::Up,
};

impl Grammar for JumpGrammar {
    fn kind(&self) -> GrammarKind {
        self.kind
    }

    fn bind(&self, anchor: Pos) -> Box<dyn Machine> {
        Box::new(JumpMachine {
            glyph: self.glyph,
            hop: self.hop,
            pos: anchor,
            west_dashed: false,
            north_dashed: false,
            h_dashed: false,
            v_dashed: false,
            state: State::Anchor,
        })
    }
}

#[derive(Copy, Clone, Debug)]
enum State {
    Anchor,
    East,
    South,
}

struct JumpMachine {
    glyph: char,
    hop: Hop,
    pos: Pos,
    west_dashed: bool,
    north_dashed: bool,
    /// Both horizontal halves dashed.
    h_dashed: bool,
    /// Both vertical halves dashed.
    v_dashed: bool,
    state: State,
}

impl Machine for JumpMachine {
    fn advance(&mut self, visit: &Visit) -> Step {
        let meta = visit.meta;
        match self.state {
            State::Anchor => {
                if !visit.glyph.is(self.glyph)
                    || visit.is_occupied()
                    || !meta.has(Meta::LINE_AFTER_E)
                    || !meta.has(Meta::LINE_AFTER_S)
                {
                    return Step::Rejected;
                }
                self.west_dashed = meta.has(Meta::DASH_AFTER_E);
                self.north_dashed = meta.has(Meta::DASH_AFTER_S);
                self.state = State::East;
                Step::write(Meta::OCCUPIED, Await::At(self.pos.offset(1, 0)))
            }
            State::East => {
                if !meta.has(Meta::LINE_START_E) {
                    return Step::Rejected;
                }
                self.h_dashed = self.west_dashed && meta.has(Meta::DASH_START_E);
                self.state = State::South;
                Step::wait(Await::At(self.pos.offset(0, 1)))
            }
            State::South => {
                if !meta.has(Meta::LINE_START_S) {
                    return Step::Rejected;
                }
                self.v_dashed = self.north_dashed && meta.has(Meta::DASH_START_S);
                Step::Matched
            }
        }
    }

    fn render(&self) -> Vec<Primitive> {
        let corner = self.pos.corner();
        let h = StrokeType::dashed_if(self.h_dashed);
        let v = StrokeType::dashed_if(self.v_dashed);
        match self.hop {
            Hop::Left | Hop::Right => {
                let span = if self.hop == Hop::Left {
                    (PI * 0.5, PI * 1.5)
                } else {
                    (-PI * 0.5, PI * 0.5)
                };
                vec![
                    Primitive::line(
                        corner.shift(0.0, 0.5),
                        corner.shift(1.0, 0.5),
                        Colour::Cyan,
                        h,
                    ),
                    Primitive::arc(
                        corner.shift(0.5 - 0.6, 0.0),
                        corner.shift(0.5 + 0.6, 1.0),
                        span,
                        Colour::Cyan,
                        v,
                    ),
                ]
            }
            Hop::Up => vec![
                Primitive::line(
                    corner.shift(0.5, 0.0),
                    corner.shift(0.5, 1.0),
                    Colour::Cyan,
                    v,
                ),
                Primitive::arc(
                    Point::new(corner.x, corner.y + 0.5 - 0.4),
                    Point::new(corner.x + 1.0, corner.y + 0.5 + 0.4),
                    (PI, PI * 2.0),
                    Colour::Cyan,
                    h,
                ),
            ],
        }
    }
}
