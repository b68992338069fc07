//! Per-pass bookkeeping of live match instances.
//!
//! Every grammar pass gets a fresh ledger. It owns the live machines,
//! the metadata each has written so far (not yet visible to anyone), and
//! a reverse index from position to the instances that wrote `OCCUPIED`
//! there. The reverse index is what lets the first instance to complete
//! push out everything it overlaps.

use std::collections::BTreeMap;
use std::fmt;

use rustc_hash::FxHashMap;
use scrawl_ir::{Meta, Pos};
use scrawl_patterns::{Await, Machine};
use smallvec::SmallVec;

/// Identifies one spawned instance. Ids increase in spawn order and are
/// never reused within a run.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct MatchId(u32);

impl MatchId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        MatchId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A spawned instance that has neither completed nor been discarded.
pub struct LiveMatch {
    pub machine: Box<dyn Machine>,
    pub anchor: Pos,
    pub wait: Await,
    writes: FxHashMap<Pos, Meta>,
}

/// What is left of an instance once it leaves the ledger.
pub struct Retired {
    pub machine: Box<dyn Machine>,
    pub anchor: Pos,
    /// OR-merged writes, in position order.
    pub writes: Vec<(Pos, Meta)>,
}

impl Retired {
    /// Positions this instance wrote `OCCUPIED` at.
    pub fn footprint(&self) -> Vec<Pos> {
        self.writes
            .iter()
            .filter(|(_, meta)| meta.is_occupied())
            .map(|(pos, _)| *pos)
            .collect()
    }
}

pub struct OccupancyLedger {
    next: u32,
    live: BTreeMap<MatchId, LiveMatch>,
    occupants: FxHashMap<Pos, SmallVec<[MatchId; 2]>>,
}

impl OccupancyLedger {
    /// Create an empty ledger whose first spawned instance gets `first`.
    pub fn starting_at(first: MatchId) -> Self {
        OccupancyLedger {
            next: first.0,
            live: BTreeMap::new(),
            occupants: FxHashMap::default(),
        }
    }

    /// The id the next spawn will receive.
    pub fn next_id(&self) -> MatchId {
        MatchId(self.next)
    }

    /// Register a freshly bound machine, waiting on its anchor.
    pub fn spawn(&mut self, machine: Box<dyn Machine>, anchor: Pos) -> MatchId {
        let id = MatchId(self.next);
        self.next = self.next.saturating_add(1);
        self.live.insert(
            id,
            LiveMatch {
                machine,
                anchor,
                wait: Await::At(anchor),
                writes: FxHashMap::default(),
            },
        );
        id
    }

    /// Snapshot of live ids in spawn order.
    pub fn live_ids(&self) -> Vec<MatchId> {
        self.live.keys().copied().collect()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn is_live(&self, id: MatchId) -> bool {
        self.live.contains_key(&id)
    }

    pub fn get_mut(&mut self, id: MatchId) -> Option<&mut LiveMatch> {
        self.live.get_mut(&id)
    }

    /// Record `meta` written by `id` at `pos`. Empty writes are dropped.
    pub fn record_write(&mut self, id: MatchId, pos: Pos, meta: Meta) {
        if meta.is_empty() {
            return;
        }
        let Some(live) = self.live.get_mut(&id) else {
            return;
        };
        *live.writes.entry(pos).or_default() |= meta;
        if meta.is_occupied() {
            let list = self.occupants.entry(pos).or_default();
            if !list.contains(&id) {
                list.push(id);
            }
        }
    }

    /// Remove `id` from the ledger.
    ///
    /// Returns `None` if it is not live (already retired or evicted).
    pub fn retire(&mut self, id: MatchId) -> Option<Retired> {
        let live = self.live.remove(&id)?;
        for (pos, meta) in &live.writes {
            if !meta.is_occupied() {
                continue;
            }
            if let Some(list) = self.occupants.get_mut(pos) {
                list.retain(|other| *other != id);
                if list.is_empty() {
                    self.occupants.remove(pos);
                }
            }
        }

        let mut writes: Vec<(Pos, Meta)> = live.writes.into_iter().collect();
        writes.sort_unstable_by_key(|(pos, _)| *pos);
        Some(Retired {
            machine: live.machine,
            anchor: live.anchor,
            writes,
        })
    }

    /// Retire every other live instance that occupies a position `id`
    /// occupies. Returns the evicted ids in spawn order.
    ///
    /// Called when `id` completes, before it is itself retired.
    pub fn evict_cooccupants(&mut self, id: MatchId) -> Vec<MatchId> {
        let Some(live) = self.live.get(&id) else {
            return Vec::new();
        };

        let mut rivals: Vec<MatchId> = live
            .writes
            .iter()
            .filter(|(_, meta)| meta.is_occupied())
            .filter_map(|(pos, _)| self.occupants.get(pos))
            .flat_map(|list| list.iter().copied())
            .filter(|other| *other != id)
            .collect();
        rivals.sort_unstable();
        rivals.dedup();

        rivals.retain(|rival| self.retire(*rival).is_some());
        rivals
    }
}
