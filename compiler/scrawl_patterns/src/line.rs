//! Straight lines: horizontal, vertical and the two 45 degree diagonals,
//! each solid or dashed.
//!
//! All eight share one machine. A line reads its start glyphs from
//! consecutive cells of the anchor row, then steps one cell at a time in
//! its direction, cycling through the repeat glyphs. It ends when the
//! first repeat glyph of a cycle fails to match; a mismatch part-way
//! through a cycle rejects the whole line.

use scrawl_ir::{Colour, Meta, Pos, Primitive, StrokeType};

use crate::{expect, Await, Grammar, GrammarKind, Machine, Step, Visit};

/// Parameters of one line family.
#[derive(Copy, Clone, Debug)]
pub struct LineConfig {
    /// Step per repeat glyph, `(cols, rows)`.
    pub dir: (i32, i32),
    /// Glyphs read left to right from the anchor.
    pub start: &'static [&'static str],
    /// Glyphs cycled through along `dir`.
    pub repeat: &'static [&'static str],
    /// Written at the anchor.
    pub start_meta: Meta,
    /// Written one step past the last cell.
    pub after_meta: Meta,
    pub stroke: StrokeType,
}

pub struct LineGrammar {
    kind: GrammarKind,
    config: LineConfig,
}

impl LineGrammar {
    pub const fn new(kind: GrammarKind, config: LineConfig) -> Self {
        LineGrammar { kind, config }
    }
}

pub static HORIZ_DASHED: LineGrammar = LineGrammar::new(
    GrammarKind::HorizDashedLine,
    LineConfig {
        dir: (1, 0),
        start: &["-", " ", "-", " "],
        repeat: &["-", " "],
        start_meta: Meta::LINE_START_E.union(Meta::DASH_START_E),
        after_meta: Meta::LINE_AFTER_E.union(Meta::DASH_AFTER_E),
        stroke: StrokeType::Dashed,
    },
);

pub static HORIZ: LineGrammar = LineGrammar::new(
    GrammarKind::HorizLine,
    LineConfig {
        dir: (1, 0),
        start: &["-"],
        repeat: &["-"],
        start_meta: Meta::LINE_START_E,
        after_meta: Meta::LINE_AFTER_E,
        stroke: StrokeType::Solid,
    },
);

pub static VERT: LineGrammar = LineGrammar::new(
    GrammarKind::VertLine,
    LineConfig {
        dir: (0, 1),
        start: &["|"],
        repeat: &["|"],
        start_meta: Meta::LINE_START_S,
        after_meta: Meta::LINE_AFTER_S,
        stroke: StrokeType::Solid,
    },
);

pub static VERT_DASHED: LineGrammar = LineGrammar::new(
    GrammarKind::VertDashedLine,
    LineConfig {
        dir: (0, 1),
        start: &[";"],
        repeat: &[";"],
        start_meta: Meta::LINE_START_S.union(Meta::DASH_START_S),
        after_meta: Meta::LINE_AFTER_S.union(Meta::DASH_AFTER_S),
        stroke: StrokeType::Dashed,
    },
);

pub static UP_DIAG: LineGrammar = LineGrammar::new(
    GrammarKind::UpDiagLine,
    LineConfig {
        dir: (-1, 1),
        start: &["/"],
        repeat: &["/"],
        start_meta: Meta::LINE_START_SW,
        after_meta: Meta::LINE_AFTER_SW,
        stroke: StrokeType::Solid,
    },
);

pub static UP_DIAG_DASHED: LineGrammar = LineGrammar::new(
    GrammarKind::UpDiagDashedLine,
    LineConfig {
        dir: (-1, 1),
        start: &[","],
        repeat: &[","],
        start_meta: Meta::LINE_START_SW.union(Meta::DASH_START_SW),
        after_meta: Meta::LINE_AFTER_SW.union(Meta::DASH_AFTER_SW),
        stroke: StrokeType::Dashed,
    },
);

pub static DOWN_DIAG: LineGrammar = LineGrammar::new(
    GrammarKind::DownDiagLine,
    LineConfig {
        dir: (1, 1),
        start: &["\\"],
        repeat: &["\\"],
        start_meta: Meta::LINE_START_SE,
        after_meta: Meta::LINE_AFTER_SE,
        stroke: StrokeType::Solid,
    },
);

pub static DOWN_DIAG_DASHED: LineGrammar = LineGrammar::new(
    GrammarKind::DownDiagDashedLine,
    LineConfig {
        dir: (1, 1),
        start: &["`"],
        repeat: &["`"],
        start_meta: Meta::LINE_START_SE.union(Meta::DASH_START_SE),
        after_meta: Meta::LINE_AFTER_SE.union(Meta::DASH_AFTER_SE),
        stroke: StrokeType::Dashed,
    },
);

impl Grammar for LineGrammar {
    fn kind(&self) -> GrammarKind {
        self.kind
    }

    fn bind(&self, anchor: Pos) -> Box<dyn Machine> {
        Box::new(LineMachine {
            config: self.config,
            start: anchor,
            end: anchor,
            state: State::Start(0),
        })
    }
}

#[derive(Copy, Clone, Debug)]
enum State {
    /// Reading start glyph `n`.
    Start(usize),
    /// Waiting for repeat glyph `n` one step past `end`.
    Repeat(usize),
    /// After-meta written; complete on the next cell.
    Finished,
}

struct LineMachine {
    config: LineConfig,
    start: Pos,
    /// Last consumed cell.
    end: Pos,
    state: State,
}

impl LineMachine {
    fn step_from_end(&self) -> Await {
        let (dx, dy) = self.config.dir;
        Await::At(self.end.offset(dx, dy))
    }
}

impl Machine for LineMachine {
    fn advance(&mut self, visit: &Visit) -> Step {
        let config = self.config;
        match self.state {
            State::Start(n) => {
                let write = if n == 0 {
                    Meta::OCCUPIED | config.start_meta
                } else {
                    Meta::OCCUPIED
                };
                self.end = visit.pos;
                if n + 1 < config.start.len() {
                    self.state = State::Start(n + 1);
                    expect(visit, config.start[n], write, Await::Next)
                } else {
                    self.state = State::Repeat(0);
                    expect(visit, config.start[n], write, self.step_from_end())
                }
            }
            State::Repeat(n) => {
                if !visit.accepts(config.repeat[n]) {
                    if n > 0 {
                        return Step::Rejected;
                    }
                    self.state = State::Finished;
                    return Step::write(config.after_meta, Await::Next);
                }
                self.end = visit.pos;
                self.state = State::Repeat((n + 1) % config.repeat.len());
                Step::write(Meta::OCCUPIED, self.step_from_end())
            }
            State::Finished => Step::Matched,
        }
    }

    /// Running off the grid ends the line where it is.
    fn unreachable(&mut self, _visit: &Visit) -> Step {
        match self.state {
            State::Repeat(_) => Step::Matched,
            State::Start(_) | State::Finished => Step::Rejected,
        }
    }

    fn render(&self) -> Vec<Primitive> {
        let (dx, dy) = self.config.dir;
        let (hx, hy) = (f64::from(dx) * 0.5, f64::from(dy) * 0.5);
        vec![Primitive::line(
            self.start.centre().shift(-hx, -hy),
            self.end.centre().shift(hx, hy),
            Colour::Blue,
            self.config.stroke,
        )]
    }
}
