//! Per-cell metadata flags.
//!
//! `Meta` is the only channel through which grammars talk to each other.
//! A completed match flushes the flags it wrote into the run-wide ledger;
//! grammars run later (or later in the same pass) read them back to detect
//! attachment, e.g. an arrowhead checking that a line ends at its cell.
//!
//! Flags are only ever OR'ed in, never cleared.
//!
//! # Directions
//!
//! Lines run in one of four directions: `E` (left to right), `S` (top to
//! bottom), `SE` and `SW` (the two diagonals, both read top to bottom).
//! "Start" flags sit on a line's first cell; "after" flags sit on the cell
//! one step past its last cell.

use bitflags::bitflags;

bitflags! {
    /// Accumulated facts about one grid position.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct Meta: u32 {
        /// Exclusively claimed by a completed shape.
        const OCCUPIED = 1 << 0;

        // === Box attachment (bits 1-4) ===

        /// Top border of a box; something below may attach.
        const BOX_START_S = 1 << 1;
        /// Row directly under a box's bottom border.
        const BOX_AFTER_S = 1 << 2;
        /// Left border of a box.
        const BOX_START_E = 1 << 3;
        /// Column directly right of a box's right border.
        const BOX_AFTER_E = 1 << 4;

        // === Horizontal lines (bits 5-8) ===

        const LINE_START_E = 1 << 5;
        const DASH_START_E = 1 << 6;
        const LINE_AFTER_E = 1 << 7;
        const DASH_AFTER_E = 1 << 8;

        // === Vertical lines (bits 9-12) ===

        const LINE_START_S = 1 << 9;
        const DASH_START_S = 1 << 10;
        const LINE_AFTER_S = 1 << 11;
        const DASH_AFTER_S = 1 << 12;

        // === Down-right diagonals (bits 13-16) ===

        const LINE_START_SE = 1 << 13;
        const DASH_START_SE = 1 << 14;
        const LINE_AFTER_SE = 1 << 15;
        const DASH_AFTER_SE = 1 << 16;

        // === Down-left diagonals (bits 17-20) ===

        const LINE_START_SW = 1 << 17;
        const DASH_START_SW = 1 << 18;
        const LINE_AFTER_SW = 1 << 19;
        const DASH_AFTER_SW = 1 << 20;
    }
}

impl Meta {
    /// No facts.
    pub const NONE: Self = Self::empty();

    /// Every directional line/dash flag.
    pub const CONNECTORS: Self = Self::from_bits_truncate(
        Self::LINE_START_E.bits()
            | Self::DASH_START_E.bits()
            | Self::LINE_AFTER_E.bits()
            | Self::DASH_AFTER_E.bits()
            | Self::LINE_START_S.bits()
            | Self::DASH_START_S.bits()
            | Self::LINE_AFTER_S.bits()
            | Self::DASH_AFTER_S.bits()
            | Self::LINE_START_SE.bits()
            | Self::DASH_START_SE.bits()
            | Self::LINE_AFTER_SE.bits()
            | Self::DASH_AFTER_SE.bits()
            | Self::LINE_START_SW.bits()
            | Self::DASH_START_SW.bits()
            | Self::LINE_AFTER_SW.bits()
            | Self::DASH_AFTER_SW.bits(),
    );

    /// Check whether the cell is claimed by a completed shape.
    #[inline]
    pub const fn is_occupied(self) -> bool {
        self.contains(Self::OCCUPIED)
    }

    /// Check whether every flag in `flags` is set.
    ///
    /// Unlike `contains`, an empty `flags` never matches: grammars use this
    /// to test "is this specific connector present", and an empty mask
    /// would otherwise be vacuously true.
    #[inline]
    pub const fn has(self, flags: Self) -> bool {
        !flags.is_empty() && self.contains(flags)
    }
}

impl Default for Meta {
    fn default() -> Self {
        Self::NONE
    }
}
