//! Test specification assembly
//!
//! Folds the action list and the stream's first/last timestamps into one
//! [`TestSpecification`], the aggregate handed to code generation.

use crate::events::types::RecordedEvent;
use crate::interpret::actions::{Action, ActionKind};
use serde::{Deserialize, Serialize};

/// Viewport used when the recording contains no resize information.
pub const DEFAULT_VIEWPORT: Viewport = Viewport {
    width: 1920,
    height: 1080,
};

/// Browser viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// The assembled, replayable test specification.
///
/// `actions` is ordered: insertion order equals chronological order equals
/// execution order. Constructed once; read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSpecification {
    /// Url of the first navigation, if any
    pub start_url: Option<String>,
    /// First observed viewport, or the 1920×1080 default
    pub viewport: Viewport,
    /// Ordered action sequence
    pub actions: Vec<Action>,
    /// Last event timestamp minus first, 0 for streams of length ≤ 1
    pub total_duration_ms: u64,
}

/// Folds actions and stream timing into a [`TestSpecification`].
#[derive(Debug, Default)]
pub struct ActionAssembler;

impl ActionAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Assemble the specification.
    ///
    /// Only the first navigation seeds `start_url`; later navigations stay
    /// in the action list as mid-session redirects. Likewise the first
    /// resize seeds the viewport.
    pub fn assemble(&self, actions: Vec<Action>, events: &[RecordedEvent]) -> TestSpecification {
        let start_url = actions.iter().find_map(|a| match &a.kind {
            ActionKind::Navigation { url } => Some(url.clone()),
            _ => None,
        });

        let viewport = actions
            .iter()
            .find_map(|a| match a.kind {
                ActionKind::ViewportResize { width, height } => Some(Viewport { width, height }),
                _ => None,
            })
            .unwrap_or(DEFAULT_VIEWPORT);

        let total_duration_ms = match (events.first(), events.last()) {
            (Some(first), Some(last)) => {
                last.timestamp_ms.saturating_sub(first.timestamp_ms)
            }
            _ => 0,
        };

        TestSpecification {
            start_url,
            viewport,
            actions,
            total_duration_ms,
        }
    }
}
