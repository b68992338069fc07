//! The recognition driver.
//!
//! Grammars run one at a time, in catalog order. Each pass scans every
//! cell of the grid; at each cell it spawns a new instance of the grammar
//! anchored there, then resumes every live instance that is waiting for
//! that cell (oldest first). Instances never touch shared state: the
//! driver records their writes in the pass's occupancy ledger and only
//! publishes them to the metadata ledger once the instance completes.

use scrawl_grid::{Cell, Grid};
use scrawl_ir::{Meta, Pos};
use scrawl_patterns::{Arrival, Catalog, Grammar, GrammarKind, Step, Visit};
use tracing::{debug, trace};

use crate::{
    Diagram, Match, MatchId, MetadataLedger, OccupancyLedger, RecognizeError, RecognizeOptions,
};

/// Hooks into a recognition run, for instrumentation and tests.
pub trait ScanObserver {
    /// A pass reached `cell`; `visible` is what its instances will see.
    fn visit(&mut self, pass: GrammarKind, cell: Cell, visible: Meta) {
        let _ = (pass, cell, visible);
    }

    /// `matched` completed and `writes` were flushed to the metadata
    /// ledger.
    fn completed(&mut self, pass: GrammarKind, matched: &Match, writes: &[(Pos, Meta)]) {
        let _ = (pass, matched, writes);
    }
}

/// Observer that ignores everything.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}

/// Counters for one pass, logged at debug level.
#[derive(Copy, Clone, Default, Debug)]
struct PassStats {
    spawned: usize,
    completed: usize,
    evicted: usize,
}

/// Turns diagram text into shape primitives.
#[derive(Clone, Debug)]
pub struct Recognizer {
    options: RecognizeOptions,
    catalog: Catalog,
}

impl Recognizer {
    pub fn new(options: RecognizeOptions) -> Self {
        Recognizer {
            options,
            catalog: Catalog::new(options.claim_box_interior),
        }
    }

    pub fn options(&self) -> &RecognizeOptions {
        &self.options
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Recognize every shape in `text`.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = text.len()))]
    pub fn recognize(&self, text: &str) -> Result<Diagram, RecognizeError> {
        let grid = Grid::new(text);
        self.recognize_grid(&grid, &mut NoopObserver)
    }

    /// Recognize every shape in `grid`, reporting progress to `observer`.
    #[tracing::instrument(level = "debug", skip_all, fields(rows = grid.row_count()))]
    pub fn recognize_grid(
        &self,
        grid: &Grid,
        observer: &mut dyn ScanObserver,
    ) -> Result<Diagram, RecognizeError> {
        let mut metadata = MetadataLedger::new();
        let mut matches = Vec::new();
        let mut next_id = MatchId::new(0);

        for grammar in self.catalog.iter() {
            next_id = run_pass(
                grammar,
                grid,
                next_id,
                &mut metadata,
                &mut matches,
                observer,
            );
        }

        debug!(matches = matches.len(), "recognition complete");
        Diagram::assemble(matches)
    }
}

impl Default for Recognizer {
    fn default() -> Self {
        Self::new(RecognizeOptions::default())
    }
}

/// Run one grammar over the whole grid. Returns the next unused id.
#[tracing::instrument(level = "debug", skip_all, fields(grammar = %grammar.kind()))]
fn run_pass(
    grammar: &'static dyn Grammar,
    grid: &Grid,
    first_id: MatchId,
    metadata: &mut MetadataLedger,
    matches: &mut Vec<Match>,
    observer: &mut dyn ScanObserver,
) -> MatchId {
    let kind = grammar.kind();
    let mut ledger = OccupancyLedger::starting_at(first_id);
    let mut stats = PassStats::default();

    for cell in grid.cells() {
        let visible = metadata.get(cell.pos);
        observer.visit(kind, cell, visible);
        let visit = Visit::new(cell, visible);

        ledger.spawn(grammar.bind(cell.pos), cell.pos);
        stats.spawned += 1;

        for id in ledger.live_ids() {
            // Evicted earlier in this step.
            let Some(live) = ledger.get_mut(id) else {
                continue;
            };
            let step = match live.wait.arrival(&visit) {
                Arrival::Here => live.machine.advance(&visit),
                Arrival::Unreachable => live.machine.unreachable(&visit),
                Arrival::Later => continue,
            };

            match step {
                Step::Continue { write, wait } => {
                    live.wait = wait;
                    ledger.record_write(id, visit.pos, write);
                }
                Step::Rejected => {
                    ledger.retire(id);
                }
                Step::Matched => {
                    let evicted = complete(id, kind, &mut ledger, metadata, matches, observer);
                    stats.completed += 1;
                    stats.evicted += evicted;
                }
            }
        }
    }

    debug!(
        spawned = stats.spawned,
        completed = stats.completed,
        evicted = stats.evicted,
        abandoned = ledger.live_count(),
        "pass finished"
    );
    ledger.next_id()
}

/// Settle a completed instance: add its claimed cells, push out rivals,
/// publish its writes. Returns the number of rivals evicted.
fn complete(
    id: MatchId,
    kind: GrammarKind,
    ledger: &mut OccupancyLedger,
    metadata: &mut MetadataLedger,
    matches: &mut Vec<Match>,
    observer: &mut dyn ScanObserver,
) -> usize {
    let claims: Vec<Pos> = ledger
        .get_mut(id)
        .map(|live| live.machine.claims())
        .unwrap_or_default();
    for pos in claims {
        if !metadata.get(pos).is_occupied() {
            ledger.record_write(id, pos, Meta::OCCUPIED);
        }
    }

    let evicted = ledger.evict_cooccupants(id);
    if !evicted.is_empty() {
        trace!(?id, ?evicted, "evicted co-occupants");
    }

    let Some(done) = ledger.retire(id) else {
        return evicted.len();
    };
    for &(pos, meta) in &done.writes {
        metadata.merge(pos, meta);
    }

    let footprint = done.footprint();
    trace!(id = id.raw(), anchor = ?done.anchor, cells = footprint.len(), "completed");
    let matched = Match::completed(id, kind, done.anchor, done.machine, footprint);
    observer.completed(kind, &matched, &done.writes);
    matches.push(matched);
    evicted.len()
}

#[cfg(test)]
mod tests;
