//! Spendly tracks day-to-day expenses against a single balance and reports
//! spending by period and category.
//!
//! The aggregation engine lives in `spendly-core`; this crate wires it to
//! configuration, JSON storage and the `spendly_cli` shell.

pub mod cli;
pub mod core;
pub mod errors;
pub mod utils;

pub use errors::SpendlyError;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Spendly tracing initialized.");
    });
}
