//! Corner joins where two or more lines meet.
//!
//! A corner learns about its lines purely from metadata: lines that end
//! at the corner leave "after" flags on it, and lines that start next to
//! it carry "start" flags on their first cell. Lines run before corners,
//! so both kinds of flag are visible by the time the corner is scanned.
//!
//! Square corners (`+`) join their lines with straight half-cell stubs;
//! round corners (`.`, `'`, `:`) join every pair with a curve.

use smallvec::SmallVec;

use scrawl_ir::{Colour, Meta, Pos, Primitive, StrokeType};

use crate::{expect, redirect, Await, Grammar, GrammarKind, Machine, Step, Visit};

/// A flag pair and the direction, from the corner, of the line it marks.
type Connector = (Meta, Meta, i32, i32);

/// Lines ending on the corner: from the west, north, north-west and
/// north-east.
const SQUARE_INCOMING: [Connector; 4] = [
    (Meta::LINE_AFTER_E, Meta::DASH_AFTER_E, -1, 0),
    (Meta::LINE_AFTER_S, Meta::DASH_AFTER_S, 0, -1),
    (Meta::LINE_AFTER_SE, Meta::DASH_AFTER_SE, -1, -1),
    (Meta::LINE_AFTER_SW, Meta::DASH_AFTER_SW, 1, -1),
];

const ROUND_INCOMING: [Connector; 4] = [
    (Meta::LINE_AFTER_E, Meta::DASH_AFTER_E, -1, 0),
    (Meta::LINE_AFTER_SW, Meta::DASH_AFTER_SW, 1, -1),
    (Meta::LINE_AFTER_S, Meta::DASH_AFTER_S, 0, -1),
    (Meta::LINE_AFTER_SE, Meta::DASH_AFTER_SE, -1, -1),
];

/// Lines starting beside the corner, in scan order.
const OUTGOING: [Connector; 4] = [
    (Meta::LINE_START_E, Meta::DASH_START_E, 1, 0),
    (Meta::LINE_START_SW, Meta::DASH_START_SW, -1, 1),
    (Meta::LINE_START_S, Meta::DASH_START_S, 0, 1),
    (Meta::LINE_START_SE, Meta::DASH_START_SE, 1, 1),
];

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Style {
    Square,
    Round,
}

pub struct SquareCornerGrammar;

pub struct RoundCornerGrammar;

impl Grammar for SquareCornerGrammar {
    fn kind(&self) -> GrammarKind {
        GrammarKind::SquareCorner
    }

    fn bind(&self, anchor: Pos) -> Box<dyn Machine> {
        Box::new(CornerMachine::new(Style::Square, anchor))
    }
}

impl Grammar for RoundCornerGrammar {
    fn kind(&self) -> GrammarKind {
        GrammarKind::RoundCorner
    }

    fn bind(&self, anchor: Pos) -> Box<dyn Machine> {
        Box::new(CornerMachine::new(Style::Round, anchor))
    }
}

/// One connected line, as a unit direction from the corner.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
struct End {
    dx: i32,
    dy: i32,
    dashed: bool,
}

#[derive(Copy, Clone, Debug)]
enum State {
    Anchor,
    /// Waiting on `OUTGOING[n]`.
    Probe(usize),
    /// All probes done.
    Done,
}

struct CornerMachine {
    style: Style,
    anchor: Pos,
    /// Whether lines above the corner may connect.
    up: bool,
    /// Whether lines below the corner may connect.
    down: bool,
    ends: SmallVec<[End; 8]>,
    state: State,
}

impl CornerMachine {
    fn new(style: Style, anchor: Pos) -> Self {
        CornerMachine {
            style,
            anchor,
            up: true,
            down: true,
            ends: SmallVec::new(),
            state: State::Anchor,
        }
    }

    /// Select the first eligible probe at or after `n` and return its
    /// position.
    fn seek(&mut self, n: usize) -> Option<Pos> {
        let found = OUTGOING
            .iter()
            .enumerate()
            .skip(n)
            .find(|(_, connector)| connector.3 <= 0 || self.down);
        match found {
            Some((i, &(_, _, dx, dy))) => {
                self.state = State::Probe(i);
                Some(self.anchor.offset(dx, dy))
            }
            None => {
                self.state = State::Done;
                None
            }
        }
    }

    /// Carry on with probe `n` while still handling `visit`.
    fn resume_from(&mut self, n: usize, visit: &Visit) -> Step {
        match self.seek(n) {
            Some(target) => redirect(self, target, visit),
            None => self.finish(),
        }
    }

    fn finish(&self) -> Step {
        if self.ends.len() >= 2 {
            Step::Matched
        } else {
            Step::Rejected
        }
    }

    fn collect(&mut self, meta: Meta, connectors: &[Connector]) {
        for &(line, dash, dx, dy) in connectors {
            if dy < 0 && !self.up {
                continue;
            }
            if dy > 0 && !self.down {
                continue;
            }
            if meta.has(line) {
                self.ends.push(End {
                    dx,
                    dy,
                    dashed: meta.has(dash),
                });
            }
        }
    }

    fn accept_anchor(&mut self, visit: &Visit) -> Step {
        if visit.is_occupied() {
            return Step::Rejected;
        }
        let (incoming, claim) = match self.style {
            Style::Square => (
                &SQUARE_INCOMING,
                expect(visit, "+", Meta::OCCUPIED, Await::Next),
            ),
            Style::Round => {
                (self.up, self.down) = match visit.glyph.char() {
                    Some('.') => (false, true),
                    Some('\'') => (true, false),
                    Some(':') => (true, true),
                    _ => return Step::Rejected,
                };
                (&ROUND_INCOMING, Step::write(Meta::OCCUPIED, Await::Next))
            }
        };
        if claim == Step::Rejected {
            return claim;
        }
        self.collect(visit.meta, incoming);
        match self.seek(0) {
            Some(target) => Step::write(Meta::OCCUPIED, Await::At(target)),
            None => claim,
        }
    }
}

impl Machine for CornerMachine {
    fn advance(&mut self, visit: &Visit) -> Step {
        match self.state {
            State::Anchor => self.accept_anchor(visit),
            State::Probe(n) => {
                self.collect(visit.meta, &OUTGOING[n..=n]);
                self.resume_from(n + 1, visit)
            }
            State::Done => self.finish(),
        }
    }

    /// Neighbours off the grid simply are not connected.
    fn unreachable(&mut self, visit: &Visit) -> Step {
        match self.state {
            State::Probe(n) => self.resume_from(n + 1, visit),
            State::Anchor | State::Done => Step::Rejected,
        }
    }

    fn render(&self) -> Vec<Primitive> {
        let centre = self.anchor.centre();
        let stub = |end: &End| centre.shift(f64::from(end.dx) * 0.5, f64::from(end.dy) * 0.5);
        match self.style {
            Style::Square => self
                .ends
                .iter()
                .map(|end| {
                    Primitive::line(
                        centre,
                        stub(end),
                        Colour::Pink,
                        StrokeType::dashed_if(end.dashed),
                    )
                })
                .collect(),
            Style::Round => {
                let mut curves = Vec::new();
                for (i, a) in self.ends.iter().enumerate() {
                    for b in &self.ends[i + 1..] {
                        curves.push(Primitive::quad_curve(
                            stub(a),
                            stub(b),
                            centre,
                            Colour::Pink,
                            StrokeType::dashed_if(a.dashed && b.dashed),
                        ));
                    }
                }
                curves
            }
        }
    }
}
