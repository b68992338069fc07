//! Diamonds drawn with slashes:
//!
//! ```text
//!    /\
//!   /  \
//!   \  /
//!    \/
//! ```
//!
//! Anchored on the apex `/`. The upper half widens by one cell on each
//! side per row for as long as a `/` continues the left edge; the lower
//! half then narrows back by the same number of rows.

use scrawl_ir::{Colour, Meta, Point, Pos, Primitive, StrokeType};

use crate::{expect, redirect, Await, Grammar, GrammarKind, Machine, Step, Visit};

pub struct DiamondGrammar;

impl Grammar for DiamondGrammar {
    fn kind(&self) -> GrammarKind {
        GrammarKind::Diamond
    }

    fn bind(&self, anchor: Pos) -> Box<dyn Machine> {
        Box::new(DiamondMachine {
            apex: anchor,
            rows: 0,
            half: 0,
            state: State::Apex,
        })
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum State {
    Apex,
    ApexRight,
    /// Waiting where the next upper row's `/` would be.
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
    Done,
}

struct DiamondMachine {
    /// The top `/`.
    apex: Pos,
    /// Rows below the apex row in the current half.
    rows: i32,
    /// `rows` at the widest point.
    half: i32,
    state: State,
}

impl DiamondMachine {
    /// Left edge of upper row `rows + 1`.
    fn next_upper_left(&self) -> Pos {
        self.apex.offset(-self.rows - 1, self.rows + 1)
    }

    /// Left edge of the first lower row.
    fn first_lower_left(&self) -> Pos {
        self.apex.offset(-self.rows, self.rows + 1)
    }

    /// Stop widening and wait for the lower half.
    fn turn(&mut self, visit: &Visit) -> Step {
        self.half = self.rows;
        self.state = State::LowerLeft;
        let target = self.first_lower_left();
        redirect(self, target, visit)
    }

    fn top_left(&self) -> Pos {
        self.apex.offset(-self.half, 0)
    }

    fn bottom_right(&self) -> Pos {
        self.apex.offset(self.half + 1, 2 * self.half + 1)
    }
}

impl Machine for DiamondMachine {
    fn advance(&mut self, visit: &Visit) -> Step {
        match self.state {
            State::Apex => {
                self.state = State::ApexRight;
                expect(visit, "/", Meta::OCCUPIED, Await::Next)
            }
            State::ApexRight => {
                self.state = State::UpperLeft;
                expect(visit, "\\", Meta::OCCUPIED, Await::At(self.next_upper_left()))
            }
            State::UpperLeft if !visit.glyph.is('/') => self.turn(visit),
            State::UpperLeft => {
                self.rows += 1;
                self.state = State::UpperRight;
                let right = visit.pos.offset(2 * self.rows + 1, 0);
                expect(visit, "/", Meta::OCCUPIED, Await::At(right))
            }
            State::UpperRight => {
                self.state = State::UpperLeft;
                expect(visit, "\\", Meta::OCCUPIED, Await::At(self.next_upper_left()))
            }
            State::LowerLeft => {
                self.state = State::LowerRight;
                let right = visit.pos.offset(2 * self.rows + 1, 0);
                expect(visit, "\\", Meta::OCCUPIED, Await::At(right))
            }
            State::LowerRight => {
                let wait = if self.rows <= 0 {
                    self.state = State::Done;
                    Await::Next
                } else {
                    let below = visit.pos.offset(-2 * self.rows, 1);
                    self.rows -= 1;
                    self.state = State::LowerLeft;
                    Await::At(below)
                };
                expect(visit, "/", Meta::OCCUPIED, wait)
            }
            State::Done => Step::Matched,
        }
    }

    fn unreachable(&mut self, visit: &Visit) -> Step {
        // Running off the grid while widening just means the upper half
        // is complete.
        if self.state == State::UpperLeft {
            self.turn(visit)
        } else {
            Step::Rejected
        }
    }

    fn render(&self) -> Vec<Primitive> {
        let tl = self.top_left().corner();
        let br = self.bottom_right().corner();
        let w = br.x - tl.x + 1.0;
        let h = br.y - tl.y + 1.0;

        let top = Point::new(tl.x + w / 2.0, tl.y);
        let bottom = Point::new(tl.x + w / 2.0, br.y + 1.0);
        let right = Point::new(br.x + 1.0, tl.y + h / 2.0);
        let left = Point::new(tl.x, tl.y + h / 2.0);

        [(top, right), (top, left), (bottom, right), (bottom, left)]
            .into_iter()
            .map(|(a, b)| Primitive::line(a, b, Colour::Orange, StrokeType::Solid))
            .collect()
    }
}
