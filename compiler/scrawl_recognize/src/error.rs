//! Errors surfaced by a recognition run.
//!
//! A grammar failing to match is not an error: machines reject, and the
//! driver discards them. What remains here are integration bugs that must
//! abort the run.

use scrawl_ir::Pos;
use scrawl_patterns::GrammarKind;
use thiserror::Error;

#[derive(Error, Copy, Clone, Eq, PartialEq, Debug)]
pub enum RecognizeError {
    /// Primitives were requested from a match that never completed.
    #[error("{grammar} match anchored at {anchor} asked to render before completing")]
    ContractViolation { grammar: GrammarKind, anchor: Pos },
}
