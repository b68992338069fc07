//! Resumption protocol between the driver and a running machine.
//!
//! A machine is a suspended recognizer. Each time the driver resumes it,
//! the machine consumes one [`Visit`] and answers with a [`Step`]: write
//! some metadata at the visited cell and wait for another cell, finish,
//! or give up.
//!
//! # Waiting
//!
//! A machine waits either for the very next visited cell ([`Await::Next`])
//! or for one absolute position ([`Await::At`]). Because the scan only
//! moves forward, a wait for a position the scan has already passed can
//! never be satisfied; the driver reports that through
//! [`Machine::unreachable`](crate::Machine::unreachable) instead of
//! resuming the machine normally.

use scrawl_grid::{Cell, Glyph};
use scrawl_ir::{Meta, Pos};

use crate::Machine;

/// One cell as seen by a resumed machine.
///
/// `meta` is the metadata visible when the driver reached this cell: the
/// OR of everything flushed by matches that completed before it.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Visit {
    pub pos: Pos,
    pub glyph: Glyph,
    pub meta: Meta,
}

impl Visit {
    #[inline]
    pub const fn new(cell: Cell, meta: Meta) -> Self {
        Visit {
            pos: cell.pos,
            glyph: cell.glyph,
            meta,
        }
    }

    #[inline]
    pub const fn is_occupied(&self) -> bool {
        self.meta.is_occupied()
    }

    /// Check the cell is free and holds one of `set`.
    #[inline]
    pub fn accepts(&self, set: &str) -> bool {
        !self.is_occupied() && self.glyph.is_in(set)
    }
}

/// Where a machine wants to be resumed next.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Await {
    /// The next visited cell, wherever it is.
    Next,
    /// One absolute position.
    At(Pos),
}

/// How a visited cell relates to an [`Await`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Arrival {
    /// This is the awaited cell.
    Here,
    /// The awaited cell is still ahead.
    Later,
    /// The awaited cell will never be visited.
    Unreachable,
}

impl Await {
    /// Classify `visit` against this wait.
    ///
    /// A target is unreachable once the scan has moved past it, or when
    /// the scan has hit end-of-input anywhere other than the target itself.
    pub fn arrival(self, visit: &Visit) -> Arrival {
        match self {
            Await::Next => Arrival::Here,
            Await::At(target) if target == visit.pos => Arrival::Here,
            Await::At(target) if target < visit.pos || visit.glyph.is_end_of_input() => {
                Arrival::Unreachable
            }
            Await::At(_) => Arrival::Later,
        }
    }
}

/// A machine's answer to one resumption.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Step {
    /// Record `write` at the visited cell and suspend until `wait`.
    Continue { write: Meta, wait: Await },
    /// The shape is complete.
    Matched,
    /// The shape is not here.
    Rejected,
}

impl Step {
    #[inline]
    pub const fn write(write: Meta, wait: Await) -> Self {
        Step::Continue { write, wait }
    }

    /// Suspend without writing anything.
    #[inline]
    pub const fn wait(wait: Await) -> Self {
        Step::Continue {
            write: Meta::NONE,
            wait,
        }
    }

    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Step::Continue { .. })
    }
}

/// Consume the visited cell if it is free and holds one of `set`.
///
/// Every grammar builds on this: it is the only way a glyph becomes part
/// of a shape.
#[inline]
pub fn expect(visit: &Visit, set: &str, write: Meta, wait: Await) -> Step {
    if visit.accepts(set) {
        Step::write(write, wait)
    } else {
        Step::Rejected
    }
}

/// Switch `machine` to waiting for `target` while it is handling `visit`.
///
/// Used when a machine picks a new target without consuming the current
/// cell. If the target is the current cell, the machine handles it
/// straight away; if it is already out of reach, the machine's
/// unreachable handler runs against the current cell. The machine's state
/// must already describe the new wait.
pub fn redirect<M: Machine + ?Sized>(machine: &mut M, target: Pos, visit: &Visit) -> Step {
    match Await::At(target).arrival(visit) {
        Arrival::Here => machine.advance(visit),
        Arrival::Unreachable => machine.unreachable(visit),
        Arrival::Later => Step::wait(Await::At(target)),
    }
}

#[cfg(test)]
mod tests;
