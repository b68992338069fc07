//! Database cylinders:
//!
//! ```text
//! .---.
//! '---'
//! |   |
//! '---'
//! ```
//!
//! A lid (top and rim rows of equal width), one or more side rows, and a
//! base row. Anchored on the lid's top-left `.`.

use std::f64::consts::PI;

use scrawl_ir::{Colour, Meta, Point, Pos, Primitive, StrokeType};

use crate::{expect, Await, Grammar, GrammarKind, Machine, Step, Visit};

pub struct DbCylinderGrammar;

impl Grammar for DbCylinderGrammar {
    fn kind(&self) -> GrammarKind {
        GrammarKind::DbCylinder
    }

    fn bind(&self, anchor: Pos) -> Box<dyn Machine> {
        Box::new(CylinderMachine {
            tl: anchor,
            br: anchor,
            width: 0,
            state: State::TopLeft,
        })
    }
}

#[derive(Copy, Clone, Debug)]
enum State {
    TopLeft,
    TopFirst,
    TopRun,
    /// Left end of the rim, or of the base when `rim` is false.
    EdgeStart { rim: bool },
    /// Dashes consumed so far along the rim or base.
    EdgeRun { rim: bool, dashes: i32 },
    SideLeft,
    SideRight,
    /// Left column of the row after a side row: another side or the base.
    AfterSide,
    Done,
}

struct CylinderMachine {
    tl: Pos,
    br: Pos,
    width: i32,
    state: State,
}

impl CylinderMachine {
    /// Left column of the row below `pos`.
    fn below_left(&self, pos: Pos) -> Await {
        Await::At(Pos::new(pos.row + 1, self.tl.col))
    }
}

impl Machine for CylinderMachine {
    fn advance(&mut self, visit: &Visit) -> Step {
        match self.state {
            State::TopLeft => {
                self.state = State::TopFirst;
                expect(visit, ".", Meta::OCCUPIED, Await::Next)
            }
            State::TopFirst => {
                self.state = State::TopRun;
                expect(visit, "-", Meta::OCCUPIED, Await::Next)
            }
            State::TopRun if visit.glyph.is('.') => {
                self.width = visit.pos.col - self.tl.col + 1;
                self.state = State::EdgeStart { rim: true };
                expect(visit, ".", Meta::OCCUPIED, self.below_left(visit.pos))
            }
            State::TopRun => expect(visit, "-", Meta::OCCUPIED, Await::Next),
            State::EdgeStart { rim } => {
                self.state = State::EdgeRun { rim, dashes: 0 };
                expect(visit, "'", Meta::OCCUPIED, Await::Next)
            }
            State::EdgeRun { rim, dashes } if dashes < self.width - 2 => {
                self.state = State::EdgeRun {
                    rim,
                    dashes: dashes + 1,
                };
                expect(visit, "-", Meta::OCCUPIED, Await::Next)
            }
            State::EdgeRun { rim: true, .. } => {
                self.state = State::SideLeft;
                expect(visit, "'", Meta::OCCUPIED, self.below_left(visit.pos))
            }
            State::EdgeRun { rim: false, .. } => {
                self.br = visit.pos;
                self.state = State::Done;
                expect(visit, "'", Meta::OCCUPIED, Await::Next)
            }
            State::AfterSide if visit.glyph.is('\'') => {
                self.state = State::EdgeStart { rim: false };
                self.advance(visit)
            }
            State::SideLeft | State::AfterSide => {
                self.state = State::SideRight;
                let right = visit.pos.offset(self.width - 1, 0);
                expect(visit, "|", Meta::OCCUPIED, Await::At(right))
            }
            State::SideRight => {
                self.state = State::AfterSide;
                expect(visit, "|", Meta::OCCUPIED, self.below_left(visit.pos))
            }
            State::Done => Step::Matched,
        }
    }

    fn render(&self) -> Vec<Primitive> {
        let (left, right) = (f64::from(self.tl.col) + 0.5, f64::from(self.br.col) + 0.5);
        let (top, bottom) = (f64::from(self.tl.row), f64::from(self.br.row));
        vec![
            Primitive::ellipse(
                Point::new(left, top + 0.5),
                Point::new(right, top + 1.5),
                Colour::Purple,
            ),
            Primitive::line(
                Point::new(left, top + 1.0),
                Point::new(left, bottom),
                Colour::Purple,
                StrokeType::Solid,
            ),
            Primitive::line(
                Point::new(right, top + 1.0),
                Point::new(right, bottom),
                Colour::Purple,
                StrokeType::Solid,
            ),
            Primitive::arc(
                Point::new(left, bottom - 0.5),
                Point::new(right, bottom + 0.5),
                (0.0, PI),
                Colour::Purple,
                StrokeType::Solid,
            ),
        ]
    }
}
