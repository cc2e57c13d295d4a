//! Core types for the recorded event stream
//!
//! The recorder writes events as `{ "type": <u8>, "data": <object>,
//! "timestamp": <ms> }`. The numeric discriminants below follow the rrweb
//! wire format. Decoding is deliberately infallible: unknown kinds, unknown
//! incremental sources and malformed payloads all map to explicit no-op
//! variants so that one bad event can never abort a whole recording.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level event kinds in a recording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EventKind {
    /// DOMContentLoaded fired
    DomReady = 0,
    /// Window load fired
    Load = 1,
    /// Complete serialized DOM tree
    FullSnapshot = 2,
    /// Change or interaction after the initial snapshot
    IncrementalUpdate = 3,
    /// Page metadata (url, viewport dimensions)
    Meta = 4,
    /// Recorder-defined custom event
    Custom = 5,
}

impl TryFrom<u64> for EventKind {
    type Error = ();

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EventKind::DomReady),
            1 => Ok(EventKind::Load),
            2 => Ok(EventKind::FullSnapshot),
            3 => Ok(EventKind::IncrementalUpdate),
            4 => Ok(EventKind::Meta),
            5 => Ok(EventKind::Custom),
            _ => Err(()),
        }
    }
}

/// Incremental update sources (the `data.source` discriminant)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum IncrementalSource {
    Mutation = 0,
    MouseMove = 1,
    MouseInteraction = 2,
    Scroll = 3,
    ViewportResize = 4,
    Input = 5,
    TouchMove = 6,
    MediaInteraction = 7,
    StyleSheetRule = 8,
    CanvasMutation = 9,
    Font = 10,
    Log = 11,
    Drag = 12,
    StyleDeclaration = 13,
}

impl TryFrom<u64> for IncrementalSource {
    type Error = ();

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(IncrementalSource::Mutation),
            1 => Ok(IncrementalSource::MouseMove),
            2 => Ok(IncrementalSource::MouseInteraction),
            3 => Ok(IncrementalSource::Scroll),
            4 => Ok(IncrementalSource::ViewportResize),
            5 => Ok(IncrementalSource::Input),
            6 => Ok(IncrementalSource::TouchMove),
            7 => Ok(IncrementalSource::MediaInteraction),
            8 => Ok(IncrementalSource::StyleSheetRule),
            9 => Ok(IncrementalSource::CanvasMutation),
            10 => Ok(IncrementalSource::Font),
            11 => Ok(IncrementalSource::Log),
            12 => Ok(IncrementalSource::Drag),
            13 => Ok(IncrementalSource::StyleDeclaration),
            _ => Err(()),
        }
    }
}

/// Mouse interaction sub-types (the nested `data.type` under source 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MouseInteractionKind {
    MouseUp = 0,
    MouseDown = 1,
    Click = 2,
    ContextMenu = 3,
    DblClick = 4,
    Focus = 5,
    Blur = 6,
    TouchStart = 7,
    TouchEnd = 9,
}

impl TryFrom<u64> for MouseInteractionKind {
    type Error = ();

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(MouseInteractionKind::MouseUp),
            1 => Ok(MouseInteractionKind::MouseDown),
            2 => Ok(MouseInteractionKind::Click),
            3 => Ok(MouseInteractionKind::ContextMenu),
            4 => Ok(MouseInteractionKind::DblClick),
            5 => Ok(MouseInteractionKind::Focus),
            6 => Ok(MouseInteractionKind::Blur),
            7 => Ok(MouseInteractionKind::TouchStart),
            9 => Ok(MouseInteractionKind::TouchEnd),
            _ => Err(()),
        }
    }
}

/// A node in the serialized DOM snapshot tree
///
/// Only element nodes carry a `tagName`; document and fragment containers
/// have children but no tag. `attributes` stays loosely typed because the
/// recorder serializes some attribute values as numbers or booleans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DomNode {
    /// Node identifier, unique within one recording
    pub id: i64,
    /// Tag name, present for element nodes only
    pub tag_name: Option<String>,
    /// Attribute name → value
    pub attributes: serde_json::Map<String, Value>,
    /// Ordered child nodes
    pub child_nodes: Vec<DomNode>,
}

impl DomNode {
    /// Look up an attribute as a string.
    ///
    /// Numeric and boolean attribute values are accepted and stringified;
    /// anything else (null, nested objects) reads as absent.
    pub fn attr(&self, name: &str) -> Option<String> {
        match self.attributes.get(name)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Whether this node is an element (eligible for a selector)
    pub fn is_element(&self) -> bool {
        self.tag_name.is_some()
    }
}

/// Kind-specific event payload
///
/// Closed union keyed by [`EventKind`] so the interpreter's dispatch is
/// exhaustiveness-checked. Variants that never produce an action are
/// explicit no-op arms rather than decode errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventPayload {
    DomReady,
    Load,
    /// Complete DOM tree rooted at `node`
    FullSnapshot { node: DomNode },
    IncrementalUpdate(IncrementalPayload),
    /// Page url and viewport dimensions at recording start (or navigation)
    Meta {
        href: String,
        width: u32,
        height: u32,
    },
    Custom,
    /// Unrecognized kind or malformed kind-specific payload
    Unknown,
}

/// Source-specific incremental update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum IncrementalPayload {
    /// Pointer interaction on a specific node
    MouseInteraction {
        interaction: MouseInteractionKind,
        id: i64,
        x: f64,
        y: f64,
    },
    /// Text or checked-state change on a form element
    Input {
        id: i64,
        text: Option<String>,
        is_checked: Option<bool>,
    },
    /// Scroll offset change on a node
    Scroll { id: i64, x: f64, y: f64 },
    // Recognized sources that intentionally produce no action: they are
    // structural or visual noise for interaction-test purposes.
    Mutation,
    MouseMove,
    ViewportResize,
    TouchMove,
    MediaInteraction,
    StyleSheetRule,
    CanvasMutation,
    Font,
    Log,
    Drag,
    StyleDeclaration,
    /// Source discriminant not in the known set
    Unrecognized,
}

/// A single recorded event: kind-specific payload plus its timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RawRecordedEvent")]
pub struct RecordedEvent {
    /// Kind-specific payload
    pub payload: EventPayload,
    /// Milliseconds, monotone within one recording
    pub timestamp_ms: u64,
}

impl RecordedEvent {
    /// Construct directly from a typed payload (used by tests and callers
    /// that synthesize streams)
    pub fn new(payload: EventPayload, timestamp_ms: u64) -> Self {
        Self {
            payload,
            timestamp_ms,
        }
    }

    /// The top-level kind, or `None` for unrecognized events
    pub fn kind(&self) -> Option<EventKind> {
        match self.payload {
            EventPayload::DomReady => Some(EventKind::DomReady),
            EventPayload::Load => Some(EventKind::Load),
            EventPayload::FullSnapshot { .. } => Some(EventKind::FullSnapshot),
            EventPayload::IncrementalUpdate(_) => Some(EventKind::IncrementalUpdate),
            EventPayload::Meta { .. } => Some(EventKind::Meta),
            EventPayload::Custom => Some(EventKind::Custom),
            EventPayload::Unknown => None,
        }
    }
}

/// Wire-format event before payload typing
#[derive(Debug, Deserialize)]
struct RawRecordedEvent {
    #[serde(rename = "type")]
    kind: u64,
    #[serde(default)]
    data: Value,
    #[serde(default)]
    timestamp: u64,
}

impl From<RawRecordedEvent> for RecordedEvent {
    fn from(raw: RawRecordedEvent) -> Self {
        let payload = decode_payload(raw.kind, raw.data);
        RecordedEvent {
            payload,
            timestamp_ms: raw.timestamp,
        }
    }
}

/// Decode the kind-specific payload, degrading to no-op variants on any
/// shape mismatch.
fn decode_payload(kind: u64, data: Value) -> EventPayload {
    let Ok(kind) = EventKind::try_from(kind) else {
        tracing::debug!(kind, "ignoring event with unrecognized kind");
        return EventPayload::Unknown;
    };

    match kind {
        EventKind::DomReady => EventPayload::DomReady,
        EventKind::Load => EventPayload::Load,
        EventKind::Custom => EventPayload::Custom,
        EventKind::FullSnapshot => decode_snapshot(data),
        EventKind::IncrementalUpdate => {
            EventPayload::IncrementalUpdate(decode_incremental(data))
        }
        EventKind::Meta => decode_meta(data),
    }
}

fn decode_snapshot(data: Value) -> EventPayload {
    #[derive(Deserialize)]
    struct SnapshotData {
        node: DomNode,
    }

    match serde_json::from_value::<SnapshotData>(data) {
        Ok(snapshot) => EventPayload::FullSnapshot {
            node: snapshot.node,
        },
        Err(e) => {
            tracing::warn!(error = %e, "malformed full-snapshot payload; table will be empty");
            EventPayload::Unknown
        }
    }
}

fn decode_meta(data: Value) -> EventPayload {
    #[derive(Deserialize)]
    struct MetaData {
        href: String,
        width: u32,
        height: u32,
    }

    match serde_json::from_value::<MetaData>(data) {
        Ok(meta) => EventPayload::Meta {
            href: meta.href,
            width: meta.width,
            height: meta.height,
        },
        Err(e) => {
            tracing::debug!(error = %e, "malformed meta payload; skipping");
            EventPayload::Unknown
        }
    }
}

fn decode_incremental(data: Value) -> IncrementalPayload {
    let Some(source) = data.get("source").and_then(Value::as_u64) else {
        return IncrementalPayload::Unrecognized;
    };
    let Ok(source) = IncrementalSource::try_from(source) else {
        tracing::debug!(source, "ignoring incremental update with unrecognized source");
        return IncrementalPayload::Unrecognized;
    };

    match source {
        IncrementalSource::MouseInteraction => decode_mouse_interaction(&data),
        IncrementalSource::Input => decode_input(&data),
        IncrementalSource::Scroll => decode_scroll(&data),
        IncrementalSource::Mutation => IncrementalPayload::Mutation,
        IncrementalSource::MouseMove => IncrementalPayload::MouseMove,
        IncrementalSource::ViewportResize => IncrementalPayload::ViewportResize,
        IncrementalSource::TouchMove => IncrementalPayload::TouchMove,
        IncrementalSource::MediaInteraction => IncrementalPayload::MediaInteraction,
        IncrementalSource::StyleSheetRule => IncrementalPayload::StyleSheetRule,
        IncrementalSource::CanvasMutation => IncrementalPayload::CanvasMutation,
        IncrementalSource::Font => IncrementalPayload::Font,
        IncrementalSource::Log => IncrementalPayload::Log,
        IncrementalSource::Drag => IncrementalPayload::Drag,
        IncrementalSource::StyleDeclaration => IncrementalPayload::StyleDeclaration,
    }
}

fn decode_mouse_interaction(data: &Value) -> IncrementalPayload {
    let interaction = data
        .get("type")
        .and_then(Value::as_u64)
        .and_then(|t| MouseInteractionKind::try_from(t).ok());
    let id = data.get("id").and_then(Value::as_i64);

    match (interaction, id) {
        (Some(interaction), Some(id)) => IncrementalPayload::MouseInteraction {
            interaction,
            id,
            x: data.get("x").and_then(Value::as_f64).unwrap_or(0.0),
            y: data.get("y").and_then(Value::as_f64).unwrap_or(0.0),
        },
        _ => IncrementalPayload::Unrecognized,
    }
}

fn decode_input(data: &Value) -> IncrementalPayload {
    let Some(id) = data.get("id").and_then(Value::as_i64) else {
        return IncrementalPayload::Unrecognized;
    };
    IncrementalPayload::Input {
        id,
        text: data
            .get("text")
            .and_then(Value::as_str)
            .map(str::to_string),
        is_checked: data.get("isChecked").and_then(Value::as_bool),
    }
}

fn decode_scroll(data: &Value) -> IncrementalPayload {
    let Some(id) = data.get("id").and_then(Value::as_i64) else {
        return IncrementalPayload::Unrecognized;
    };
    IncrementalPayload::Scroll {
        id,
        x: data.get("x").and_then(Value::as_f64).unwrap_or(0.0),
        y: data.get("y").and_then(Value::as_f64).unwrap_or(0.0),
    }
}
