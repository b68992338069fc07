//! Test helpers for driving a single machine over a grid.
//!
//! These skip the occupancy bookkeeping: one machine, one anchor, a fixed
//! metadata seed. Good enough to pin down each grammar's acceptance rules
//! and geometry in isolation.

use rustc_hash::FxHashMap;
use scrawl_grid::Grid;
use scrawl_ir::{Meta, Pos, Primitive};

use crate::{Arrival, Await, Grammar, Machine, Step, Visit};

/// How a driven machine ended.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    /// Matched while visiting this cell.
    Matched(Pos),
    /// Rejected while visiting this cell.
    Rejected(Pos),
    /// Still waiting when the scan ran out.
    Pending,
}

pub struct Run {
    pub outcome: Outcome,
    /// Non-empty writes in the order they were made.
    pub writes: Vec<(Pos, Meta)>,
    pub machine: Box<dyn Machine>,
}

impl Run {
    pub fn is_match(&self) -> bool {
        matches!(self.outcome, Outcome::Matched(_))
    }

    /// OR of every write at `pos`.
    pub fn written(&self, pos: Pos) -> Meta {
        self.writes
            .iter()
            .filter(|(p, _)| *p == pos)
            .fold(Meta::NONE, |acc, (_, m)| acc | *m)
    }

    /// Positions written with `OCCUPIED`.
    pub fn occupied(&self) -> Vec<Pos> {
        self.writes
            .iter()
            .filter(|(_, m)| m.is_occupied())
            .map(|(p, _)| *p)
            .collect()
    }

    pub fn render(&self) -> Vec<Primitive> {
        assert!(self.is_match(), "render on {:?}", self.outcome);
        self.machine.render()
    }
}

/// Drive one machine anchored at `anchor` over `text`.
pub fn drive(grammar: &dyn Grammar, text: &str, anchor: Pos, seed: &[(Pos, Meta)]) -> Run {
    let grid = Grid::new(text);
    let mut metas: FxHashMap<Pos, Meta> = FxHashMap::default();
    for &(pos, meta) in seed {
        *metas.entry(pos).or_default() |= meta;
    }

    let mut machine = grammar.bind(anchor);
    let mut wait = Await::At(anchor);
    let mut writes = Vec::new();

    for cell in grid.cells().filter(|c| c.pos >= anchor) {
        let meta = metas.get(&cell.pos).copied().unwrap_or_default();
        let visit = Visit::new(cell, meta);
        let step = match wait.arrival(&visit) {
            Arrival::Here => machine.advance(&visit),
            Arrival::Unreachable => machine.unreachable(&visit),
            Arrival::Later => continue,
        };
        match step {
            Step::Continue { write, wait: next } => {
                if !write.is_empty() {
                    writes.push((visit.pos, write));
                }
                wait = next;
            }
            Step::Matched => {
                return Run {
                    outcome: Outcome::Matched(visit.pos),
                    writes,
                    machine,
                };
            }
            Step::Rejected => {
                return Run {
                    outcome: Outcome::Rejected(visit.pos),
                    writes,
                    machine,
                };
            }
        }
    }

    Run {
        outcome: Outcome::Pending,
        writes,
        machine,
    }
}

/// Drive from the first cell holding `anchor_char`.
pub fn drive_at_char(grammar: &dyn Grammar, text: &str, anchor_char: char, seed: &[(Pos, Meta)]) -> Run {
    let anchor = find(text, anchor_char);
    drive(grammar, text, anchor, seed)
}

/// Position of the first occurrence of `c` in `text`.
pub fn find(text: &str, c: char) -> Pos {
    for (row, line) in text.lines().enumerate() {
        if let Some(col) = line.chars().position(|ch| ch == c) {
            return Pos::new(
                i32::try_from(row).unwrap_or(i32::MAX),
                i32::try_from(col).unwrap_or(i32::MAX),
            );
        }
    }
    panic!("{c:?} not found in {text:?}");
}
