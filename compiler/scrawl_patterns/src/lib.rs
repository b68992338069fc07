//! Scrawl Patterns - shape grammars for the diagram recognizer.
//!
//! This crate provides:
//! - The machine protocol (`Visit`, `Await`, `Arrival`, `Step`)
//! - The `Grammar` and `Machine` traits every shape implements
//! - The grammar catalog (`Catalog`), in precedence order
//! - Every concrete grammar: boxes, lines, corners, arrowheads,
//!   crow's-feet, jumps, circles, diamonds, cylinders and literal text
//!
//! # Architecture
//!
//! A grammar is a stateless, statically allocated description. Binding it
//! to an anchor cell produces a `Machine`: an explicit state enum plus the
//! geometry gathered so far. The driver resumes the machine one cell at a
//! time; the machine never touches shared state, it only answers with a
//! `Step` saying what to write and what to wait for.
//!
//! Grammars that differ only in direction, glyphs or metadata flags
//! (lines, arrowheads, crow's-feet, jumps) share one machine driven by a
//! small configuration record.

mod arrowhead;
mod boxes;
mod circle;
mod corner;
mod crows_foot;
mod cylinder;
mod diamond;
mod jump;
mod kind;
mod line;
mod literal;
mod machine;
mod registry;

#[cfg(test)]
mod test_helpers;

use scrawl_ir::{Pos, Primitive};

pub use kind::GrammarKind;
pub use machine::{expect, redirect, Arrival, Await, Step, Visit};
pub use registry::Catalog;

/// One recognizable shape family.
///
/// Implementations are zero-sized or hold only `'static` configuration,
/// so the catalog can hand out `&'static dyn Grammar` references.
pub trait Grammar: Send + Sync {
    /// Which catalog entry this is.
    fn kind(&self) -> GrammarKind;

    /// Start a match anchored at `anchor`.
    ///
    /// The returned machine's first wait is the anchor itself, so the
    /// driver resumes it in the same scan step it was spawned.
    fn bind(&self, anchor: Pos) -> Box<dyn Machine>;
}

/// A running recognition attempt.
pub trait Machine {
    /// Consume the awaited cell.
    fn advance(&mut self, visit: &Visit) -> Step;

    /// The awaited position can no longer be reached; `visit` is the cell
    /// that proved it.
    ///
    /// Grammars that can finish with the geometry they already have
    /// override this. The default rejects.
    fn unreachable(&mut self, visit: &Visit) -> Step {
        let _ = visit;
        Step::Rejected
    }

    /// Extra cells this shape occupies, reported once it has matched.
    fn claims(&self) -> Vec<Pos> {
        Vec::new()
    }

    /// Shape primitives for a matched machine.
    ///
    /// Callers must only ask after `Step::Matched`; the driver enforces
    /// this through `Match::render`.
    fn render(&self) -> Vec<Primitive>;
}
