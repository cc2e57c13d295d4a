//! Session conversion facade
//!
//! One [`SessionConverter`] call runs a recording through the full chain.
//! Each conversion owns its own selector table and interpreter state, so
//! converters can be reused and recordings processed concurrently without
//! shared state. The transform is synchronous and CPU-bound; all I/O stays
//! with the caller.

use crate::codegen::emitter::{EmitterOptions, ScriptEmitter};
use crate::codegen::summary::ConversionSummary;
use crate::events::types::RecordedEvent;
use crate::interpret::assembler::{ActionAssembler, TestSpecification};
use crate::interpret::interpreter::EventInterpreter;
use crate::snapshot::indexer::SnapshotIndexer;

/// Pipeline options. Only emitter cosmetics are configurable; nothing here
/// changes which actions are produced.
#[derive(Debug, Clone, Default)]
pub struct ConverterOptions {
    pub emitter: EmitterOptions,
}

/// Everything produced by one conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Assembled, replayable specification
    pub spec: TestSpecification,
    /// Generated Playwright test source
    pub script: String,
    /// Conversion statistics
    pub summary: ConversionSummary,
}

/// Converts one recording into a generated test.
#[derive(Debug, Default)]
pub struct SessionConverter {
    options: ConverterOptions,
}

impl SessionConverter {
    /// Create a converter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConverterOptions) -> Self {
        Self { options }
    }

    /// Run the full pipeline on one recording.
    ///
    /// Always produces output for a syntactically valid stream: degraded
    /// recordings (no snapshot, empty stream) yield degraded but complete
    /// tests, never errors.
    pub fn convert(&self, events: &[RecordedEvent], test_name: &str) -> Conversion {
        let table = SnapshotIndexer::new().index(events);
        let actions = EventInterpreter::new(&table).interpret(events);
        let spec = ActionAssembler::new().assemble(actions, events);

        let script = ScriptEmitter::with_options(self.options.emitter.clone())
            .emit(&spec, test_name);
        let summary = ConversionSummary::from_spec(&spec, test_name, events.len());

        tracing::info!(
            test = test_name,
            events = events.len(),
            actions = spec.actions.len(),
            fallbacks = summary.coordinate_fallback_count,
            "converted recording"
        );

        Conversion {
            spec,
            script,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::stream::parse_events;
    use crate::interpret::actions::{ActionKind, ClickTarget};

    #[test]
    fn test_scenario_a_meta_plus_testid_click() {
        let json = r#"[
            { "type": 4, "data": { "href": "https://x.test/a", "width": 800, "height": 600 }, "timestamp": 0 },
            { "type": 2, "data": { "node": {
                "id": 1, "tagName": "body", "childNodes": [
                    { "id": 2, "tagName": "button", "attributes": { "data-testid": "go" } }
                ]
            }}, "timestamp": 1 },
            { "type": 3, "data": { "source": 2, "type": 2, "id": 2, "x": 10, "y": 20 }, "timestamp": 2 }
        ]"#;
        let events = parse_events(json).unwrap();

        let conversion = SessionConverter::new().convert(&events, "scenario-a");
        let kinds: Vec<&ActionKind> = conversion.spec.actions.iter().map(|a| &a.kind).collect();

        assert_eq!(
            kinds,
            vec![
                &ActionKind::Navigation {
                    url: "https://x.test/a".into()
                },
                &ActionKind::ViewportResize {
                    width: 800,
                    height: 600
                },
                &ActionKind::Click {
                    target: ClickTarget::Selector {
                        selector: "[data-testid=\"go\"]".into(),
                        reliable: true,
                    }
                },
            ]
        );
        assert_eq!(conversion.spec.start_url.as_deref(), Some("https://x.test/a"));
    }

    #[test]
    fn test_scenario_b_coordinate_passthrough() {
        let json = r#"[
            { "type": 3, "data": { "source": 2, "type": 2, "id": 77, "x": 42, "y": 99 }, "timestamp": 0 }
        ]"#;
        let events = parse_events(json).unwrap();

        let conversion = SessionConverter::new().convert(&events, "scenario-b");

        assert_eq!(conversion.spec.actions.len(), 1);
        assert_eq!(
            conversion.spec.actions[0].kind,
            ActionKind::Click {
                target: ClickTarget::Coordinates { x: 42.0, y: 99.0 }
            }
        );
        assert_eq!(conversion.summary.coordinate_fallback_count, 1);
        assert!(conversion.script.contains("// WARNING:"));
    }

    #[test]
    fn test_scenario_c_empty_stream() {
        let conversion = SessionConverter::new().convert(&[], "scenario-c");

        assert!(conversion.spec.actions.is_empty());
        assert_eq!(conversion.spec.total_duration_ms, 0);
        assert!(conversion.script.contains("await page.waitForTimeout(1000);"));
        assert!(conversion.script.contains("await page.screenshot"));
    }

    #[test]
    fn test_idempotent_output() {
        let json = r#"[
            { "type": 4, "data": { "href": "https://x.test", "width": 1280, "height": 720 }, "timestamp": 0 },
            { "type": 3, "data": { "source": 2, "type": 2, "id": 5, "x": 1, "y": 2 }, "timestamp": 10 }
        ]"#;
        let events = parse_events(json).unwrap();
        let converter = SessionConverter::new();

        let first = converter.convert(&events, "same-name");
        let second = converter.convert(&events, "same-name");

        assert_eq!(first.script, second.script);
        assert_eq!(
            first.summary.to_json().unwrap(),
            second.summary.to_json().unwrap()
        );
    }
}
