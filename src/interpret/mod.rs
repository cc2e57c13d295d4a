//! Event interpretation
//!
//! Converts the chronologically-ordered event stream into a normalized,
//! replayable action sequence and folds it into a test specification.

pub mod actions;
pub mod assembler;
pub mod interpreter;

pub use actions::{Action, ActionKind, ClickTarget, InputValue};
pub use assembler::{ActionAssembler, TestSpecification, Viewport};
pub use interpreter::EventInterpreter;
