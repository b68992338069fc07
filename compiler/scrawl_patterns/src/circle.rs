//! Circles: `( )` with up to two cells inside, and a lone `O` between
//! non-letters.

use scrawl_ir::{Colour, Meta, Point, Pos, Primitive, CHAR_H_RATIO};

use crate::{expect, Await, Grammar, GrammarKind, Machine, Step, Visit};

/// Cells visited after `(` before giving up on a `)`.
const MAX_SPAN: u8 = 3;

/// Radius of a tiny circle, in cells across.
const TINY_RADIUS: f64 = 0.4;

// === Small circle ===

pub struct SmallCircleGrammar;

impl Grammar for SmallCircleGrammar {
    fn kind(&self) -> GrammarKind {
        GrammarKind::SmallCircle
    }

    fn bind(&self, anchor: Pos) -> Box<dyn Machine> {
        Box::new(SmallCircleMachine {
            left: anchor,
            right: anchor.col,
            state: SmallState::Open,
        })
    }
}

#[derive(Copy, Clone, Debug)]
enum SmallState {
    Open,
    /// Cells seen since the `(`.
    Inside(u8),
    Closed,
}

struct SmallCircleMachine {
    left: Pos,
    right: i32,
    state: SmallState,
}

impl Machine for SmallCircleMachine {
    fn advance(&mut self, visit: &Visit) -> Step {
        match self.state {
            SmallState::Open => {
                self.state = SmallState::Inside(0);
                expect(visit, "(", Meta::OCCUPIED, Await::Next)
            }
            SmallState::Inside(n) if n >= MAX_SPAN => Step::Rejected,
            SmallState::Inside(_) if visit.glyph.is(')') => {
                self.right = visit.pos.col;
                self.state = SmallState::Closed;
                expect(visit, ")", Meta::OCCUPIED, Await::Next)
            }
            SmallState::Inside(n) => {
                self.state = SmallState::Inside(n + 1);
                Step::wait(Await::Next)
            }
            SmallState::Closed => Step::Matched,
        }
    }

    fn render(&self) -> Vec<Primitive> {
        let d = f64::from(self.right - self.left.col);
        let (x, y) = (f64::from(self.left.col), f64::from(self.left.row));
        vec![Primitive::ellipse(
            Point::new(x + 0.5, y + 0.5 - d / 2.0 / CHAR_H_RATIO),
            Point::new(x + d + 0.5, y + 0.5 + d / 2.0 / CHAR_H_RATIO),
            Colour::Green,
        )]
    }
}

// === Tiny circle ===

/// Anchored on the cell before the `O`, so it can check both neighbours.
pub struct TinyCircleGrammar;

impl Grammar for TinyCircleGrammar {
    fn kind(&self) -> GrammarKind {
        GrammarKind::TinyCircle
    }

    fn bind(&self, _anchor: Pos) -> Box<dyn Machine> {
        Box::new(TinyCircleMachine {
            pos: None,
            state: TinyState::Before,
        })
    }
}

#[derive(Copy, Clone, Debug)]
enum TinyState {
    Before,
    Letter,
    After,
}

struct TinyCircleMachine {
    pos: Option<Pos>,
    state: TinyState,
}

impl Machine for TinyCircleMachine {
    fn advance(&mut self, visit: &Visit) -> Step {
        match self.state {
            TinyState::Before => {
                if visit.glyph.is_alphabetic() {
                    return Step::Rejected;
                }
                self.state = TinyState::Letter;
                Step::wait(Await::Next)
            }
            TinyState::Letter => {
                self.pos = Some(visit.pos);
                self.state = TinyState::After;
                expect(visit, "O", Meta::OCCUPIED, Await::Next)
            }
            TinyState::After if visit.glyph.is_alphabetic() => Step::Rejected,
            TinyState::After => Step::Matched,
        }
    }

    fn render(&self) -> Vec<Primitive> {
        self.pos
            .map(|pos| {
                let centre = pos.centre();
                Primitive::ellipse(
                    centre.shift(-TINY_RADIUS, -TINY_RADIUS / CHAR_H_RATIO),
                    centre.shift(TINY_RADIUS, TINY_RADIUS / CHAR_H_RATIO),
                    Colour::Magenta,
                )
            })
            .into_iter()
            .collect()
    }
}
