//! Grammar identities.

use std::fmt;

/// Identifies one catalog entry.
///
/// Variant order is catalog (precedence) order.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum GrammarKind {
    // === Multi-row shapes ===
    DbCylinder,
    Diamond,
    Box,

    // === Straight lines ===
    HorizDashedLine,
    HorizLine,
    VertLine,
    VertDashedLine,
    UpDiagLine,
    UpDiagDashedLine,
    DownDiagLine,
    DownDiagDashedLine,

    // === Joins ===
    SquareCorner,
    RoundCorner,

    // === Line ends ===
    LeftArrowhead,
    RightArrowhead,
    DownArrowhead,
    UpArrowhead,
    LeftCrowsFoot,
    RightCrowsFoot,
    UpCrowsFoot,
    DownCrowsFoot,

    // === Crossings ===
    LeftJump,
    RightJump,
    UpJump,

    // === Circles ===
    SmallCircle,
    TinyCircle,

    // === Fallback ===
    Literal,
}

impl GrammarKind {
    /// Every kind, in catalog order.
    pub const ALL: [GrammarKind; 27] = [
        GrammarKind::DbCylinder,
        GrammarKind::Diamond,
        GrammarKind::Box,
        GrammarKind::HorizDashedLine,
        GrammarKind::HorizLine,
        GrammarKind::VertLine,
        GrammarKind::VertDashedLine,
        GrammarKind::UpDiagLine,
        GrammarKind::UpDiagDashedLine,
        GrammarKind::DownDiagLine,
        GrammarKind::DownDiagDashedLine,
        GrammarKind::SquareCorner,
        GrammarKind::RoundCorner,
        GrammarKind::LeftArrowhead,
        GrammarKind::RightArrowhead,
        GrammarKind::DownArrowhead,
        GrammarKind::UpArrowhead,
        GrammarKind::LeftCrowsFoot,
        GrammarKind::RightCrowsFoot,
        GrammarKind::UpCrowsFoot,
        GrammarKind::DownCrowsFoot,
        GrammarKind::LeftJump,
        GrammarKind::RightJump,
        GrammarKind::UpJump,
        GrammarKind::SmallCircle,
        GrammarKind::TinyCircle,
        GrammarKind::Literal,
    ];

    /// Snake-case name, as used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            GrammarKind::DbCylinder => "db_cylinder",
            GrammarKind::Diamond => "diamond",
            GrammarKind::Box => "box",
            GrammarKind::HorizDashedLine => "horiz_dashed_line",
            GrammarKind::HorizLine => "horiz_line",
            GrammarKind::VertLine => "vert_line",
            GrammarKind::VertDashedLine => "vert_dashed_line",
            GrammarKind::UpDiagLine => "up_diag_line",
            GrammarKind::UpDiagDashedLine => "up_diag_dashed_line",
            GrammarKind::DownDiagLine => "down_diag_line",
            GrammarKind::DownDiagDashedLine => "down_diag_dashed_line",
            GrammarKind::SquareCorner => "square_corner",
            GrammarKind::RoundCorner => "round_corner",
            GrammarKind::LeftArrowhead => "left_arrowhead",
            GrammarKind::RightArrowhead => "right_arrowhead",
            GrammarKind::DownArrowhead => "down_arrowhead",
            GrammarKind::UpArrowhead => "up_arrowhead",
            GrammarKind::LeftCrowsFoot => "left_crows_foot",
            GrammarKind::RightCrowsFoot => "right_crows_foot",
            GrammarKind::UpCrowsFoot => "up_crows_foot",
            GrammarKind::DownCrowsFoot => "down_crows_foot",
            GrammarKind::LeftJump => "left_jump",
            GrammarKind::RightJump => "right_jump",
            GrammarKind::UpJump => "up_jump",
            GrammarKind::SmallCircle => "small_circle",
            GrammarKind::TinyCircle => "tiny_circle",
            GrammarKind::Literal => "literal",
        }
    }
}

impl fmt::Display for GrammarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
