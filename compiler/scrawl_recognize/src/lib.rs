//! Scrawl Recognize - turns ASCII diagrams into shape primitives.
//!
//! This crate provides:
//! - The `Recognizer` driver and its `RecognizeOptions`
//! - The metadata ledger (flags published by completed matches)
//! - The per-pass occupancy ledger (live instances and their claims)
//! - `Diagram` and `Match`, the results of a run
//! - `ScanObserver` hooks for instrumentation
//!
//! # Example
//!
//! ```
//! use scrawl_recognize::Recognizer;
//!
//! let diagram = Recognizer::default().recognize("+--+\n|  |\n+--+").unwrap();
//! assert_eq!(diagram.matches().len(), 1);
//! ```

mod diagram;
mod driver;
mod error;
mod metadata;
mod occupancy;
mod options;

use std::sync::Once;

pub use diagram::{Diagram, Match};
pub use driver::{NoopObserver, Recognizer, ScanObserver};
pub use error::RecognizeError;
pub use metadata::MetadataLedger;
pub use occupancy::{LiveMatch, MatchId, OccupancyLedger, Retired};
pub use options::{RecognizeOptions, BOX_INTERIOR_ENV};

/// Recognize `text` with default options.
pub fn recognize(text: &str) -> Result<Diagram, RecognizeError> {
    Recognizer::default().recognize(text)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call this once at the start of your program to enable tracing.
/// Set `RUST_LOG=scrawl_recognize=debug` for pass summaries, or
/// `RUST_LOG=scrawl_recognize=trace` to follow individual matches.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
