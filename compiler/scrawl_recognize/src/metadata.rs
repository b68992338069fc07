//! The run-wide metadata ledger.

use rustc_hash::FxHashMap;
use scrawl_ir::{Meta, Pos};

/// Metadata published by completed matches, keyed by position.
///
/// Only completions write here, so whatever a cell reads back is the OR
/// of every flag flushed by matches that finished before the read.
#[derive(Clone, Default, Debug)]
pub struct MetadataLedger {
    cells: FxHashMap<Pos, Meta>,
}

impl MetadataLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flags visible at `pos`; `Meta::NONE` for untouched cells.
    #[inline]
    pub fn get(&self, pos: Pos) -> Meta {
        self.cells.get(&pos).copied().unwrap_or_default()
    }

    /// OR `meta` into `pos`.
    pub fn merge(&mut self, pos: Pos, meta: Meta) {
        if meta.is_empty() {
            return;
        }
        *self.cells.entry(pos).or_default() |= meta;
    }

    /// Number of positions carrying any flag.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
