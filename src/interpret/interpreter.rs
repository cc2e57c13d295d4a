//! Incremental event interpretation
//!
//! Streams the event list in arrival order, exactly once, and converts each
//! recognized interaction into a normalized [`Action`] using the selector
//! table. Memory stays bounded by the output size: mouse-move samples and
//! mutation noise are dispatched and discarded without accumulation.
//!
//! This component never raises. Every branch resolves to either an action,
//! a fallback action, or an explicit no-op.

use crate::events::types::{
    EventPayload, IncrementalPayload, MouseInteractionKind, RecordedEvent,
};
use crate::interpret::actions::{Action, ActionKind, ClickTarget, InputValue};
use crate::snapshot::indexer::SelectorTable;

/// Sentinel selector for scrolls whose node cannot be resolved.
pub const SCROLL_FALLBACK_SELECTOR: &str = "body";

/// One-pass converter from events to actions.
pub struct EventInterpreter<'a> {
    table: &'a SelectorTable,
}

impl<'a> EventInterpreter<'a> {
    /// Create an interpreter borrowing the recording's selector table.
    pub fn new(table: &'a SelectorTable) -> Self {
        Self { table }
    }

    /// Convert the full event stream into an ordered action list.
    ///
    /// Input order is preserved; the stream is assumed chronologically
    /// sorted by the recorder.
    pub fn interpret(&self, events: &[RecordedEvent]) -> Vec<Action> {
        let mut actions = Vec::new();

        for event in events {
            self.dispatch(event, &mut actions);
        }

        tracing::debug!(
            events = events.len(),
            actions = actions.len(),
            "interpreted event stream"
        );
        actions
    }

    fn dispatch(&self, event: &RecordedEvent, actions: &mut Vec<Action>) {
        let ts = event.timestamp_ms;

        match &event.payload {
            EventPayload::Meta {
                href,
                width,
                height,
            } => {
                // Navigation first, then the viewport, both on the meta
                // event's timestamp.
                actions.push(Action::new(
                    ActionKind::Navigation { url: href.clone() },
                    ts,
                ));
                actions.push(Action::new(
                    ActionKind::ViewportResize {
                        width: *width,
                        height: *height,
                    },
                    ts,
                ));
            }
            EventPayload::IncrementalUpdate(payload) => {
                self.dispatch_incremental(payload, ts, actions)
            }
            // Structural events contribute no actions.
            EventPayload::DomReady
            | EventPayload::Load
            | EventPayload::FullSnapshot { .. }
            | EventPayload::Custom
            | EventPayload::Unknown => {}
        }
    }

    fn dispatch_incremental(
        &self,
        payload: &IncrementalPayload,
        ts: u64,
        actions: &mut Vec<Action>,
    ) {
        match payload {
            IncrementalPayload::MouseInteraction {
                interaction: MouseInteractionKind::Click,
                id,
                x,
                y,
            } => {
                let target = match self.table.get(*id) {
                    Some(entry) => ClickTarget::Selector {
                        selector: entry.selector.clone(),
                        reliable: entry.reliable,
                    },
                    None => {
                        tracing::debug!(
                            node_id = id,
                            "click on unindexed node; falling back to coordinates"
                        );
                        ClickTarget::Coordinates { x: *x, y: *y }
                    }
                };
                actions.push(Action::new(ActionKind::Click { target }, ts));
            }
            // Non-click pointer interactions (downs, ups, focus shifts) are
            // subsumed by the click they belong to.
            IncrementalPayload::MouseInteraction { .. } => {}
            IncrementalPayload::Input {
                id,
                text,
                is_checked,
            } => {
                // Checked-state beats text when both are present.
                let value = match (is_checked, text) {
                    (Some(true), _) => Some(InputValue::Check),
                    (Some(false), _) => Some(InputValue::Uncheck),
                    (None, Some(text)) => Some(InputValue::Text(text.clone())),
                    // Partial input events are common and carry nothing to
                    // replay; skipping them is not an error.
                    (None, None) => None,
                };

                if let Some(value) = value {
                    match self.table.get(*id) {
                        Some(entry) => actions.push(Action::new(
                            ActionKind::Input {
                                selector: entry.selector.clone(),
                                value,
                            },
                            ts,
                        )),
                        None => {
                            // Typing has no coordinate analog, so an input on
                            // an unindexed node cannot be replayed.
                            tracing::debug!(
                                node_id = id,
                                "input on unindexed node; skipping action"
                            );
                        }
                    }
                }
            }
            IncrementalPayload::Scroll { id, x, y } => {
                let selector = self
                    .table
                    .get(*id)
                    .map(|entry| entry.selector.clone())
                    .unwrap_or_else(|| SCROLL_FALLBACK_SELECTOR.to_string());
                actions.push(Action::new(
                    ActionKind::Scroll {
                        selector,
                        x: *x,
                        y: *y,
                    },
                    ts,
                ));
            }
            // Recognized noise: mutations, pointer trails, mid-stream
            // resizes, media/style/canvas updates. Deliberate no-ops.
            IncrementalPayload::Mutation
            | IncrementalPayload::MouseMove
            | IncrementalPayload::ViewportResize
            | IncrementalPayload::TouchMove
            | IncrementalPayload::MediaInteraction
            | IncrementalPayload::StyleSheetRule
            | IncrementalPayload::CanvasMutation
            | IncrementalPayload::Font
            | IncrementalPayload::Log
            | IncrementalPayload::Drag
            | IncrementalPayload::StyleDeclaration
            | IncrementalPayload::Unrecognized => {}
        }
    }
}
