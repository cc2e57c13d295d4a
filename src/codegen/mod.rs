//! Test script generation & summaries
//!
//! Deterministic rendering of an assembled test specification into an
//! executable Playwright test, plus the human/machine-readable conversion
//! summary.

pub mod emitter;
pub mod summary;

pub use emitter::{EmitterOptions, ScriptEmitter};
pub use summary::ConversionSummary;
