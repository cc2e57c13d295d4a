//! Recorded event stream model
//!
//! Typed representation of the rrweb-style event stream produced by the
//! external browser recorder, plus loading from disk.

pub mod stream;
pub mod types;

pub use stream::load_events;
pub use types::{EventKind, EventPayload, IncrementalPayload, RecordedEvent};
