//! Normalized replay actions
//!
//! The sole output unit of interpretation: generated once, read-only
//! afterwards, consumed by the assembler and the code emitter.

use serde::{Deserialize, Serialize};

/// Target of a click action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClickTarget {
    /// Element resolved through the selector table
    Selector {
        selector: String,
        /// False for bare-tag selectors; codegen annotates these
        reliable: bool,
    },
    /// Coordinate fallback: the node was absent from the table, so the raw
    /// pixel position is replayed instead. Never dropped, always flagged.
    Coordinates { x: f64, y: f64 },
}

/// Value written by an input action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputValue {
    /// Literal text typed into the element
    Text(String),
    /// Checkbox/radio set to checked
    Check,
    /// Checkbox/radio set to unchecked
    Uncheck,
}

/// Kind-specific action payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActionKind {
    /// Page navigation
    Navigation { url: String },
    /// Viewport dimension change
    ViewportResize { width: u32, height: u32 },
    /// Pointer click, by selector or by coordinates
    Click { target: ClickTarget },
    /// Form input (text or checked-state)
    Input { selector: String, value: InputValue },
    /// Scroll offset change on an element
    Scroll { selector: String, x: f64, y: f64 },
}

impl ActionKind {
    /// Short kind label used by summaries and diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Navigation { .. } => "navigation",
            ActionKind::ViewportResize { .. } => "viewport",
            ActionKind::Click { .. } => "click",
            ActionKind::Input { .. } => "input",
            ActionKind::Scroll { .. } => "scroll",
        }
    }
}

/// A normalized user action with its originating timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub kind: ActionKind,
    /// Timestamp of the source event, milliseconds
    pub timestamp_ms: u64,
}

impl Action {
    pub fn new(kind: ActionKind, timestamp_ms: u64) -> Self {
        Self { kind, timestamp_ms }
    }

    /// Whether this click action fell back to raw coordinates.
    pub fn is_coordinate_fallback(&self) -> bool {
        matches!(
            self.kind,
            ActionKind::Click {
                target: ClickTarget::Coordinates { .. }
            }
        )
    }
}
