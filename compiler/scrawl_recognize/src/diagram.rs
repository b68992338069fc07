//! Recognition results.

use std::fmt;

use scrawl_ir::{Pos, Primitive};
use scrawl_patterns::{GrammarKind, Machine};

use crate::{MatchId, RecognizeError};

/// One grammar instance, as handed out by the driver.
pub struct Match {
    id: MatchId,
    grammar: GrammarKind,
    anchor: Pos,
    machine: Box<dyn Machine>,
    complete: bool,
    footprint: Vec<Pos>,
}

impl Match {
    pub(crate) fn completed(
        id: MatchId,
        grammar: GrammarKind,
        anchor: Pos,
        machine: Box<dyn Machine>,
        footprint: Vec<Pos>,
    ) -> Self {
        Match {
            id,
            grammar,
            anchor,
            machine,
            complete: true,
            footprint,
        }
    }

    /// A match whose machine has not finished.
    #[cfg(test)]
    pub(crate) fn pending(id: MatchId, grammar: GrammarKind, anchor: Pos, machine: Box<dyn Machine>) -> Self {
        Match {
            id,
            grammar,
            anchor,
            machine,
            complete: false,
            footprint: Vec::new(),
        }
    }

    pub fn id(&self) -> MatchId {
        self.id
    }

    pub fn grammar(&self) -> GrammarKind {
        self.grammar
    }

    pub fn anchor(&self) -> Pos {
        self.anchor
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Positions this match occupies, in scan order.
    pub fn footprint(&self) -> &[Pos] {
        &self.footprint
    }

    /// Shape primitives for this match.
    ///
    /// # Errors
    ///
    /// `ContractViolation` if the match never completed.
    pub fn render(&self) -> Result<Vec<Primitive>, RecognizeError> {
        if !self.complete {
            return Err(RecognizeError::ContractViolation {
                grammar: self.grammar,
                anchor: self.anchor,
            });
        }
        Ok(self.machine.render())
    }
}

impl fmt::Debug for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("id", &self.id)
            .field("grammar", &self.grammar)
            .field("anchor", &self.anchor)
            .field("complete", &self.complete)
            .field("footprint", &self.footprint)
            .finish_non_exhaustive()
    }
}

/// Everything recognized in one input.
#[derive(Debug)]
pub struct Diagram {
    matches: Vec<Match>,
    primitives: Vec<Primitive>,
}

impl Diagram {
    /// Render every match and order the result by z.
    ///
    /// The sort is stable: equal-z primitives stay in completion order.
    pub(crate) fn assemble(matches: Vec<Match>) -> Result<Self, RecognizeError> {
        let mut primitives = Vec::new();
        for m in &matches {
            primitives.extend(m.render()?);
        }
        primitives.sort_by_key(Primitive::z);
        Ok(Diagram {
            matches,
            primitives,
        })
    }

    /// Completed matches, in completion order.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Primitives in drawing order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn into_primitives(self) -> Vec<Primitive> {
        self.primitives
    }
}
