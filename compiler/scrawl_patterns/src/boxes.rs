//! Rectangular boxes.
//!
//! ```text
//! +----+
//! |    |
//! +----+
//! ```
//!
//! The border is claimed glyph by glyph as it is read. Boxes also leave
//! attachment flags around themselves: `BOX_START_S` along the top,
//! `BOX_START_E` down the left side, `BOX_AFTER_E` in the column right of
//! the right side and `BOX_AFTER_S` along the row underneath.

use scrawl_ir::{Colour, Meta, Pos, Primitive};

use crate::{expect, Await, Grammar, GrammarKind, Machine, Step, Visit};

const TOP_LEFT: Meta = Meta::OCCUPIED
    .union(Meta::BOX_START_S)
    .union(Meta::BOX_START_E);
const TOP: Meta = Meta::OCCUPIED.union(Meta::BOX_START_S);
const LEFT: Meta = Meta::OCCUPIED.union(Meta::BOX_START_E);

pub struct BoxGrammar {
    /// Claim every interior cell on completion, not just the border.
    claim_interior: bool,
}

impl BoxGrammar {
    pub const fn new(claim_interior: bool) -> Self {
        BoxGrammar { claim_interior }
    }
}

impl Grammar for BoxGrammar {
    fn kind(&self) -> GrammarKind {
        GrammarKind::Box
    }

    fn bind(&self, anchor: Pos) -> Box<dyn Machine> {
        Box::new(BoxMachine {
            claim_interior: self.claim_interior,
            tl: anchor,
            br: anchor,
            width: 0,
            row_start: anchor,
            state: State::TopLeft,
        })
    }
}

#[derive(Copy, Clone, Debug)]
enum State {
    TopLeft,
    /// First `-` of the top border; a box is at least three wide.
    TopFirst,
    TopRun,
    TopAfter,
    /// Start of a row below the top border.
    RowStart { first: bool },
    SideRight,
    SideAfter,
    BottomRun { left: i32 },
    BottomRight,
    BottomAfter,
    /// Flagging the row underneath; `left` cells still to go.
    Under { left: i32 },
}

struct BoxMachine {
    claim_interior: bool,
    tl: Pos,
    br: Pos,
    width: i32,
    row_start: Pos,
    state: State,
}

impl BoxMachine {
    fn next_row(&self) -> Await {
        Await::At(self.row_start.offset(0, 1))
    }
}

impl Machine for BoxMachine {
    fn advance(&mut self, visit: &Visit) -> Step {
        match self.state {
            State::TopLeft => {
                self.state = State::TopFirst;
                expect(visit, "+", TOP_LEFT, Await::Next)
            }
            State::TopFirst => {
                self.state = State::TopRun;
                expect(visit, "-", TOP, Await::Next)
            }
            State::TopRun => {
                if visit.glyph.is('+') {
                    self.width = visit.pos.col - self.tl.col + 1;
                    self.state = State::TopAfter;
                    expect(visit, "+", TOP, Await::Next)
                } else {
                    expect(visit, "-", TOP, Await::Next)
                }
            }
            State::TopAfter => {
                self.state = State::RowStart { first: true };
                Step::write(Meta::BOX_AFTER_E, self.next_row())
            }
            State::RowStart { first } => {
                self.row_start = visit.pos;
                if !first && visit.glyph.is('+') {
                    self.state = State::BottomRun {
                        left: self.width - 2,
                    };
                    return expect(visit, "+", LEFT, Await::Next);
                }
                self.state = State::SideRight;
                expect(
                    visit,
                    "|",
                    LEFT,
                    Await::At(visit.pos.offset(self.width - 1, 0)),
                )
            }
            State::SideRight => {
                self.state = State::SideAfter;
                expect(visit, "|", Meta::OCCUPIED, Await::Next)
            }
            State::SideAfter => {
                self.state = State::RowStart { first: false };
                Step::write(Meta::BOX_AFTER_E, self.next_row())
            }
            State::BottomRun { left } => {
                self.state = if left > 1 {
                    State::BottomRun { left: left - 1 }
                } else {
                    State::BottomRight
                };
                expect(visit, "-", Meta::OCCUPIED, Await::Next)
            }
            State::BottomRight => {
                self.br = visit.pos;
                self.state = State::BottomAfter;
                expect(visit, "+", Meta::OCCUPIED, Await::Next)
            }
            State::BottomAfter => {
                self.state = State::Under { left: self.width };
                Step::write(Meta::BOX_AFTER_E, self.next_row())
            }
            State::Under { left } => {
                if left == 0 || visit.glyph.is_end_of_line() {
                    return Step::Matched;
                }
                self.state = State::Under { left: left - 1 };
                Step::write(Meta::BOX_AFTER_S, Await::Next)
            }
        }
    }

    /// A box on the last rows has nothing underneath to flag.
    fn unreachable(&mut self, _visit: &Visit) -> Step {
        match self.state {
            State::Under { .. } => Step::Matched,
            _ => Step::Rejected,
        }
    }

    fn claims(&self) -> Vec<Pos> {
        if !self.claim_interior {
            return Vec::new();
        }
        ((self.tl.row + 1)..self.br.row)
            .flat_map(|row| ((self.tl.col + 1)..self.br.col).map(move |col| Pos::new(row, col)))
            .collect()
    }

    fn render(&self) -> Vec<Primitive> {
        vec![Primitive::rectangle(
            self.tl.centre(),
            self.br.centre(),
            Colour::Red,
        )]
    }
}

#[cfg(test)]
mod tests;
