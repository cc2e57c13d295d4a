//! # Replay Test Generator
//!
//! Converts recorded browser session replays into executable Playwright tests.
//!
//! ## Overview
//!
//! A recording is a chronologically-ordered JSON stream of rrweb-style events:
//! DOM snapshots, incremental interaction updates (clicks, input, scrolls) and
//! page metadata. This library reconstructs element identity from the snapshot,
//! correlates interaction events against it, and emits a deterministic,
//! replayable test script plus a conversion summary.
//!
//! ## Quick Start
//!
//! ```no_run
//! use replay_testgen::events::stream::load_events;
//! use replay_testgen::pipeline::converter::SessionConverter;
//!
//! let events = load_events("recording.json".as_ref()).expect("failed to load");
//! let converter = SessionConverter::new();
//! let conversion = converter.convert(&events, "checkout-flow");
//! println!("{}", conversion.script);
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────┐    ┌───────────┐    ┌─────────────┐    ┌───────────┐    ┌─────────┐
//! │  Events  │───▶│  Snapshot │───▶│ Interpreter │───▶│ Assembler │───▶│ Emitter │
//! │  (JSON)  │    │  Indexer  │    │ (one pass)  │    │           │    │  (.ts)  │
//! └──────────┘    └───────────┘    └─────────────┘    └───────────┘    └─────────┘
//! ```
//!
//! Data flows strictly forward; no stage mutates a prior stage's output, and
//! nothing is shared between conversions, so concurrent recordings can be
//! processed independently.

pub mod app;
pub mod codegen;
pub mod events;
pub mod interpret;
pub mod pipeline;
pub mod snapshot;

// Re-export commonly used types
pub use events::types::{EventKind, RecordedEvent};
pub use interpret::actions::{Action, ActionKind};
pub use interpret::assembler::TestSpecification;
pub use pipeline::converter::{Conversion, SessionConverter};
pub use snapshot::indexer::SelectorTable;

/// Result type alias for the replay test generator
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the replay test generator
///
/// Only boundary failures surface here; the transform core degrades with
/// fallback values instead of erroring (see the interpreter module docs).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Recording parse error: {0}")]
    Parse(String),

    #[error("Codegen error: {0}")]
    Codegen(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
