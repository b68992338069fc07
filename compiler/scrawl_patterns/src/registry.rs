//! Grammar catalog: every grammar, in precedence order.

use crate::boxes::BoxGrammar;
use crate::circle::{SmallCircleGrammar, TinyCircleGrammar};
use crate::corner::{RoundCornerGrammar, SquareCornerGrammar};
use crate::cylinder::DbCylinderGrammar;
use crate::diamond::DiamondGrammar;
use crate::literal::LiteralGrammar;
use crate::{arrowhead, crows_foot, jump, line};
use crate::{Grammar, GrammarKind};

// Static grammar instances for 'static lifetime references
static DB_CYLINDER: DbCylinderGrammar = DbCylinderGrammar;
static DIAMOND: DiamondGrammar = DiamondGrammar;
static BOX_CLAIMING: BoxGrammar = BoxGrammar::new(true);
static BOX_BORDER: BoxGrammar = BoxGrammar::new(false);
static SQUARE_CORNER: SquareCornerGrammar = SquareCornerGrammar;
static ROUND_CORNER: RoundCornerGrammar = RoundCornerGrammar;
static SMALL_CIRCLE: SmallCircleGrammar = SmallCircleGrammar;
static TINY_CIRCLE: TinyCircleGrammar = TinyCircleGrammar;
static LITERAL: LiteralGrammar = LiteralGrammar;

/// The ordered list of grammars a recognition run applies.
///
/// Order is precedence: each grammar runs over the whole grid before the
/// next starts, so earlier grammars claim cells first and publish the
/// metadata later grammars depend on. Direct enum dispatch; every grammar
/// is a static, so lookups hand out `&'static` references.
#[derive(Copy, Clone, Debug)]
pub struct Catalog {
    claim_box_interior: bool,
}

impl Catalog {
    /// Create the catalog.
    ///
    /// With `claim_box_interior`, a completed box occupies its whole
    /// interior, so text inside it is not rendered as literals.
    pub const fn new(claim_box_interior: bool) -> Self {
        Catalog { claim_box_interior }
    }

    /// Get the grammar for a given kind.
    pub fn get(&self, kind: GrammarKind) -> &'static dyn Grammar {
        match kind {
            GrammarKind::DbCylinder => &DB_CYLINDER,
            GrammarKind::Diamond => &DIAMOND,
            GrammarKind::Box if self.claim_box_interior => &BOX_CLAIMING,
            GrammarKind::Box => &BOX_BORDER,
            GrammarKind::HorizDashedLine => &line::HORIZ_DASHED,
            GrammarKind::HorizLine => &line::HORIZ,
            GrammarKind::VertLine => &line::VERT,
            GrammarKind::VertDashedLine => &line::VERT_DASHED,
            GrammarKind::UpDiagLine => &line::UP_DIAG,
            GrammarKind::UpDiagDashedLine => &line::UP_DIAG_DASHED,
            GrammarKind::DownDiagLine => &line::DOWN_DIAG,
            GrammarKind::DownDiagDashedLine => &line::DOWN_DIAG_DASHED,
            GrammarKind::SquareCorner => &SQUARE_CORNER,
            GrammarKind::RoundCorner => &ROUND_CORNER,
            GrammarKind::LeftArrowhead => &arrowhead::LEFT,
            GrammarKind::RightArrowhead => &arrowhead::RIGHT,
            GrammarKind::DownArrowhead => &arrowhead::DOWN,
            GrammarKind::UpArrowhead => &arrowhead::UP,
            GrammarKind::LeftCrowsFoot => &crows_foot::LEFT,
            GrammarKind::RightCrowsFoot => &crows_foot::RIGHT,
            GrammarKind::UpCrowsFoot => &crows_foot::UP,
            GrammarKind::DownCrowsFoot => &crows_foot::DOWN,
            GrammarKind::LeftJump => &jump::LEFT,
            GrammarKind::RightJump => &jump::RIGHT,
            GrammarKind::UpJump => &jump::UP,
            GrammarKind::SmallCircle => &SMALL_CIRCLE,
            GrammarKind::TinyCircle => &TINY_CIRCLE,
            GrammarKind::Literal => &LITERAL,
        }
    }

    /// Every kind, in precedence order.
    pub fn kinds(&self) -> impl Iterator<Item = GrammarKind> {
        GrammarKind::ALL.into_iter()
    }

    /// Every grammar, in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = &'static dyn Grammar> + '_ {
        self.kinds().map(|kind| self.get(kind))
    }

    pub fn claims_box_interior(&self) -> bool {
        self.claim_box_interior
    }

    /// Get the number of grammars.
    pub fn len(&self) -> usize {
        GrammarKind::ALL.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(true)
    }
}
