//! Literal text fallback: any leftover visible character.

use scrawl_ir::{Colour, Meta, Pos, Primitive};

use crate::{Await, Grammar, GrammarKind, Machine, Step, Visit};

pub struct LiteralGrammar;

impl Grammar for LiteralGrammar {
    fn kind(&self) -> GrammarKind {
        GrammarKind::Literal
    }

    fn bind(&self, anchor: Pos) -> Box<dyn Machine> {
        Box::new(LiteralMachine {
            pos: anchor,
            ch: None,
        })
    }
}

struct LiteralMachine {
    pos: Pos,
    /// Set once the anchor has been accepted.
    ch: Option<char>,
}

impl Machine for LiteralMachine {
    fn advance(&mut self, visit: &Visit) -> Step {
        if self.ch.is_some() {
            return Step::Matched;
        }
        match visit.glyph.char() {
            Some(c) if !visit.is_occupied() && !c.is_whitespace() => {
                self.ch = Some(c);
                Step::write(Meta::OCCUPIED, Await::Next)
            }
            _ => Step::Rejected,
        }
    }

    fn render(&self) -> Vec<Primitive> {
        self.ch
            .map(|c| Primitive::text(self.pos.corner(), c.to_string(), Colour::Brown))
            .into_iter()
            .collect()
    }
}
