//! High-level conversion pipeline
//!
//! Ties the stages together: index the snapshot, interpret the stream,
//! assemble the specification, emit the script and the summary.

pub mod converter;

pub use converter::{Conversion, ConverterOptions, SessionConverter};
