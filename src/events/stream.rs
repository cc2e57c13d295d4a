//! Recording stream loading
//!
//! Reads a recording file into a typed event list. File-level failures
//! (missing file, invalid JSON) are the only hard errors in the whole
//! pipeline; individual event decoding never fails (see [`super::types`]).

use crate::events::types::RecordedEvent;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Recording file shapes seen in the wild: either a bare event array or an
/// exporter wrapper object with an `events` field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordingFile {
    Events(Vec<RecordedEvent>),
    Wrapped { events: Vec<RecordedEvent> },
}

/// Parse a recording from a JSON string.
pub fn parse_events(json: &str) -> Result<Vec<RecordedEvent>> {
    let file: RecordingFile =
        serde_json::from_str(json).map_err(|e| Error::Parse(e.to_string()))?;
    let events = match file {
        RecordingFile::Events(events) => events,
        RecordingFile::Wrapped { events } => events,
    };
    tracing::debug!(count = events.len(), "parsed recording events");
    Ok(events)
}

/// Load a recording from a file.
///
/// The stream is expected to be chronologically sorted by the recorder;
/// out-of-order input is not re-sorted and only triggers a warning.
pub fn load_events(path: &Path) -> Result<Vec<RecordedEvent>> {
    let content = std::fs::read_to_string(path)?;
    let events = parse_events(&content)?;

    if !is_sorted(&events) {
        tracing::warn!(
            path = %path.display(),
            "recording events are not sorted by timestamp; output ordering follows arrival order"
        );
    }

    Ok(events)
}

fn is_sorted(events: &[RecordedEvent]) -> bool {
    events
        .windows(2)
        .all(|w| w[0].timestamp_ms <= w[1].timestamp_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::types::{EventKind, EventPayload};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_bare_array() {
        let json = r#"[
            { "type": 4, "data": { "href": "https://a.test", "width": 1280, "height": 720 }, "timestamp": 10 },
            { "type": 3, "data": { "source": 1 }, "timestamp": 20 }
        ]"#;

        let events = parse_events(json).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind(), Some(EventKind::Meta));
        assert_eq!(events[1].kind(), Some(EventKind::IncrementalUpdate));
    }

    #[test]
    fn test_parse_wrapped_object() {
        let json = r#"{ "events": [
            { "type": 1, "data": {}, "timestamp": 5 }
        ] }"#;

        let events = parse_events(json).unwrap();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0].payload, EventPayload::Load));
    }

    #[test]
    fn test_parse_empty_array() {
        let events = parse_events("[]").unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_parse_invalid_json_is_hard_error() {
        let result = parse_events("not json at all");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{ "type": 4, "data": {{ "href": "https://a.test", "width": 800, "height": 600 }}, "timestamp": 0 }}]"#
        )
        .unwrap();

        let events = load_events(file.path()).unwrap();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_load_missing_file_is_hard_error() {
        let result = load_events(Path::new("/nonexistent/recording.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_is_sorted() {
        let sorted = parse_events(
            r#"[
                { "type": 1, "data": {}, "timestamp": 1 },
                { "type": 1, "data": {}, "timestamp": 2 }
            ]"#,
        )
        .unwrap();
        assert!(is_sorted(&sorted));

        let unsorted = parse_events(
            r#"[
                { "type": 1, "data": {}, "timestamp": 2 },
                { "type": 1, "data": {}, "timestamp": 1 }
            ]"#,
        )
        .unwrap();
        assert!(!is_sorted(&unsorted));
    }
}
