//! Run configuration.

/// Environment switch for [`RecognizeOptions::from_env`].
pub const BOX_INTERIOR_ENV: &str = "SCRAWL_BOX_INTERIOR";

/// Options for a [`Recognizer`](crate::Recognizer).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct RecognizeOptions {
    /// Completed boxes occupy their whole interior, hiding any text or
    /// shapes drawn inside them. When off, only the border is occupied.
    pub claim_box_interior: bool,
}

impl RecognizeOptions {
    pub fn new() -> Self {
        RecognizeOptions {
            claim_box_interior: true,
        }
    }

    #[must_use]
    pub fn claim_box_interior(mut self, claim: bool) -> Self {
        self.claim_box_interior = claim;
        self
    }

    /// Defaults, overridden by `SCRAWL_BOX_INTERIOR` when set.
    pub fn from_env() -> Self {
        let options = Self::new();
        match std::env::var(BOX_INTERIOR_ENV) {
            Ok(value) => options.claim_box_interior(parse_switch(&value).unwrap_or(true)),
            Err(_) => options,
        }
    }
}

impl Default for RecognizeOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an on/off environment value. Unrecognized values are `None`.
fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
