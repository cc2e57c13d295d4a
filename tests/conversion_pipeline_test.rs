//! End-to-end tests for the recording-to-test conversion pipeline
//!
//! These tests exercise the complete chain from raw JSON event streams to
//! generated Playwright scripts and summaries.

use replay_testgen::codegen::summary::ConversionSummary;
use replay_testgen::events::stream::{load_events, parse_events};
use replay_testgen::events::types::EventKind;
use replay_testgen::interpret::actions::{ActionKind, ClickTarget, InputValue};
use replay_testgen::pipeline::converter::SessionConverter;
use tempfile::tempdir;

/// A realistic recording: meta, snapshot, pointer noise, then a click, an
/// input and a scroll.
fn checkout_recording() -> String {
    r#"[
        { "type": 0, "data": {}, "timestamp": 1000 },
        { "type": 4, "data": { "href": "https://shop.test/checkout", "width": 1280, "height": 720 }, "timestamp": 1000 },
        { "type": 2, "data": { "node": {
            "id": 1,
            "childNodes": [{
                "id": 2, "tagName": "html", "childNodes": [{
                    "id": 3, "tagName": "body", "childNodes": [
                        { "id": 10, "tagName": "input", "attributes": { "id": "email", "class": "form-input" } },
                        { "id": 11, "tagName": "input", "attributes": { "type": "checkbox", "name": "terms" } },
                        { "id": 12, "tagName": "button", "attributes": { "data-testid": "place-order" } },
                        { "id": 13, "tagName": "div", "attributes": { "class": "order-list compact" } }
                    ]
                }]
            }]
        }}, "timestamp": 1050 },
        { "type": 3, "data": { "source": 1, "positions": [] }, "timestamp": 1100 },
        { "type": 3, "data": { "source": 1, "positions": [] }, "timestamp": 1150 },
        { "type": 3, "data": { "source": 5, "id": 10, "text": "user@example.com" }, "timestamp": 2000 },
        { "type": 3, "data": { "source": 5, "id": 11, "isChecked": true }, "timestamp": 3000 },
        { "type": 3, "data": { "source": 3, "id": 13, "x": 0, "y": 320 }, "timestamp": 4000 },
        { "type": 3, "data": { "source": 2, "type": 1, "id": 12, "x": 640, "y": 500 }, "timestamp": 4990 },
        { "type": 3, "data": { "source": 2, "type": 2, "id": 12, "x": 640, "y": 500 }, "timestamp": 5000 }
    ]"#
    .to_string()
}

#[test]
fn test_full_checkout_conversion() {
    let events = parse_events(&checkout_recording()).unwrap();
    let conversion = SessionConverter::new().convert(&events, "checkout");

    let kinds: Vec<&str> = conversion
        .spec
        .actions
        .iter()
        .map(|a| a.kind.label())
        .collect();
    assert_eq!(
        kinds,
        vec!["navigation", "viewport", "input", "input", "scroll", "click"]
    );

    assert_eq!(
        conversion.spec.start_url.as_deref(),
        Some("https://shop.test/checkout")
    );
    assert_eq!(conversion.spec.viewport.width, 1280);
    assert_eq!(conversion.spec.total_duration_ms, 4000);

    // Selector priority: testid for the button, id for the email field,
    // tag[name] for the checkbox, tag.first-class for the list
    assert!(conversion.script.contains("await page.fill('#email', 'user@example.com');"));
    assert!(conversion.script.contains("await page.check('input[name=\"terms\"]');"));
    assert!(conversion.script.contains("await page.click('[data-testid=\"place-order\"]');"));
    assert!(conversion
        .script
        .contains("document.querySelector('div.order-list')?.scrollTo(0, 320)"));

    // Everything resolved; no fallback warnings
    assert_eq!(conversion.summary.coordinate_fallback_count, 0);
    assert!(!conversion.script.contains("WARNING"));
}

#[test]
fn test_navigation_count_bounded_by_meta_count() {
    let events = parse_events(&checkout_recording()).unwrap();
    let meta_count = events
        .iter()
        .filter(|e| e.kind() == Some(EventKind::Meta))
        .count();

    let conversion = SessionConverter::new().convert(&events, "checkout");
    let nav_count = conversion
        .spec
        .actions
        .iter()
        .filter(|a| matches!(a.kind, ActionKind::Navigation { .. }))
        .count();

    assert!(nav_count <= meta_count);
    assert_eq!(nav_count, 1);
}

#[test]
fn test_action_timestamps_monotonic() {
    let events = parse_events(&checkout_recording()).unwrap();
    let conversion = SessionConverter::new().convert(&events, "checkout");

    let timestamps: Vec<u64> = conversion
        .spec
        .actions
        .iter()
        .map(|a| a.timestamp_ms)
        .collect();
    assert!(timestamps.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_recording_without_snapshot_degrades_to_coordinates() {
    let json = r#"[
        { "type": 4, "data": { "href": "https://shop.test", "width": 800, "height": 600 }, "timestamp": 0 },
        { "type": 3, "data": { "source": 2, "type": 2, "id": 12, "x": 640, "y": 500 }, "timestamp": 100 },
        { "type": 3, "data": { "source": 2, "type": 2, "id": 13, "x": 10, "y": 20 }, "timestamp": 200 }
    ]"#;
    let events = parse_events(json).unwrap();

    let conversion = SessionConverter::new().convert(&events, "no-snapshot");

    let coordinate_clicks: Vec<_> = conversion
        .spec
        .actions
        .iter()
        .filter(|a| a.is_coordinate_fallback())
        .collect();
    assert_eq!(coordinate_clicks.len(), 2);
    assert_eq!(conversion.summary.coordinate_fallback_count, 2);

    // Both flagged steps visible in the generated script
    assert_eq!(conversion.script.matches("// WARNING:").count(), 2);
    assert!(conversion.script.contains("await page.mouse.click(640, 500);"));
    assert!(conversion.script.contains("await page.mouse.click(10, 20);"));
}

#[test]
fn test_mid_session_redirect_stays_in_actions() {
    let json = r#"[
        { "type": 4, "data": { "href": "https://shop.test/a", "width": 800, "height": 600 }, "timestamp": 0 },
        { "type": 4, "data": { "href": "https://shop.test/b", "width": 800, "height": 600 }, "timestamp": 500 }
    ]"#;
    let events = parse_events(json).unwrap();

    let conversion = SessionConverter::new().convert(&events, "redirect");

    assert_eq!(conversion.spec.start_url.as_deref(), Some("https://shop.test/a"));
    let urls: Vec<&str> = conversion
        .spec
        .actions
        .iter()
        .filter_map(|a| match &a.kind {
            ActionKind::Navigation { url } => Some(url.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(urls, vec!["https://shop.test/a", "https://shop.test/b"]);
    assert_eq!(conversion.script.matches("await page.goto(").count(), 2);
}

#[test]
fn test_unknown_events_are_tolerated() {
    let json = r#"[
        { "type": 99, "data": { "whatever": true }, "timestamp": 0 },
        { "type": 3, "data": { "source": 77 }, "timestamp": 10 },
        { "type": 5, "data": { "tag": "breadcrumb", "payload": {} }, "timestamp": 20 },
        { "type": 4, "data": { "href": "https://x.test", "width": 640, "height": 480 }, "timestamp": 30 }
    ]"#;
    let events = parse_events(json).unwrap();

    let conversion = SessionConverter::new().convert(&events, "mixed");

    assert_eq!(conversion.spec.actions.len(), 2); // navigation + viewport
    assert_eq!(conversion.spec.total_duration_ms, 30);
}

#[test]
fn test_empty_recording_yields_runnable_test() {
    let conversion = SessionConverter::new().convert(&[], "empty");

    assert!(conversion.spec.actions.is_empty());
    assert_eq!(conversion.spec.total_duration_ms, 0);
    assert_eq!(conversion.spec.viewport.width, 1920);
    assert_eq!(conversion.spec.viewport.height, 1080);

    // Structurally complete script: header, trailer, close
    assert!(conversion.script.contains("import { test, expect } from '@playwright/test';"));
    assert!(conversion.script.contains("await page.waitForTimeout(1000);"));
    assert!(conversion.script.contains("await page.screenshot"));
    assert!(conversion.script.trim_end().ends_with("});"));
}

#[test]
fn test_checked_state_beats_text() {
    let json = r#"[
        { "type": 2, "data": { "node": {
            "id": 1, "tagName": "body", "childNodes": [
                { "id": 5, "tagName": "input", "attributes": { "id": "opt-in" } }
            ]
        }}, "timestamp": 0 },
        { "type": 3, "data": { "source": 5, "id": 5, "text": "on", "isChecked": true }, "timestamp": 10 }
    ]"#;
    let events = parse_events(json).unwrap();

    let conversion = SessionConverter::new().convert(&events, "checkbox");

    assert_eq!(
        conversion.spec.actions[0].kind,
        ActionKind::Input {
            selector: "#opt-in".into(),
            value: InputValue::Check,
        }
    );
    assert!(conversion.script.contains("await page.check('#opt-in');"));
    assert!(!conversion.script.contains("page.fill"));
}

#[test]
fn test_selector_priority_end_to_end() {
    // One node per cascade rung, clicked in document order
    let json = r#"[
        { "type": 2, "data": { "node": {
            "id": 1, "tagName": "body", "childNodes": [
                { "id": 10, "tagName": "button", "attributes": { "data-testid": "t", "id": "i", "class": "c" } },
                { "id": 11, "tagName": "input", "attributes": { "id": "i", "name": "n" } },
                { "id": 12, "tagName": "input", "attributes": { "name": "n", "type": "text" } },
                { "id": 13, "tagName": "input", "attributes": { "type": "text", "class": "c x" } },
                { "id": 14, "tagName": "div", "attributes": { "class": "c x" } },
                { "id": 15, "tagName": "span", "attributes": {} }
            ]
        }}, "timestamp": 0 },
        { "type": 3, "data": { "source": 2, "type": 2, "id": 10 }, "timestamp": 1 },
        { "type": 3, "data": { "source": 2, "type": 2, "id": 11 }, "timestamp": 2 },
        { "type": 3, "data": { "source": 2, "type": 2, "id": 12 }, "timestamp": 3 },
        { "type": 3, "data": { "source": 2, "type": 2, "id": 13 }, "timestamp": 4 },
        { "type": 3, "data": { "source": 2, "type": 2, "id": 14 }, "timestamp": 5 },
        { "type": 3, "data": { "source": 2, "type": 2, "id": 15 }, "timestamp": 6 }
    ]"#;
    let events = parse_events(json).unwrap();

    let conversion = SessionConverter::new().convert(&events, "priority");

    let selectors: Vec<String> = conversion
        .spec
        .actions
        .iter()
        .filter_map(|a| match &a.kind {
            ActionKind::Click {
                target: ClickTarget::Selector { selector, .. },
            } => Some(selector.clone()),
            _ => None,
        })
        .collect();

    assert_eq!(
        selectors,
        vec![
            "[data-testid=\"t\"]",
            "#i",
            "input[name=\"n\"]",
            "input[type=\"text\"]",
            "div.c",
            "span",
        ]
    );

    // The bare-tag click gets the reviewer note
    assert!(conversion.script.contains("// NOTE: tag-only selector"));
}

#[test]
fn test_file_round_trip_is_idempotent() {
    let dir = tempdir().unwrap();
    let recording_path = dir.path().join("session.json");
    std::fs::write(&recording_path, checkout_recording()).unwrap();

    let events = load_events(&recording_path).unwrap();
    let converter = SessionConverter::new();

    let first = converter.convert(&events, "session");
    let second = converter.convert(&events, "session");

    assert_eq!(first.script, second.script);
    assert_eq!(
        first.summary.to_json().unwrap(),
        second.summary.to_json().unwrap()
    );

    // Write the artifacts the way the CLI does and read the summary back
    let script_path = dir.path().join("session.spec.ts");
    let summary_path = dir.path().join("session.summary.json");
    std::fs::write(&script_path, &first.script).unwrap();
    std::fs::write(&summary_path, first.summary.to_json().unwrap()).unwrap();

    let loaded: ConversionSummary =
        serde_json::from_str(&std::fs::read_to_string(&summary_path).unwrap()).unwrap();
    assert_eq!(loaded.action_count, first.summary.action_count);
    assert_eq!(loaded.counts, first.summary.counts);
}

#[test]
fn test_summary_statistics() {
    let events = parse_events(&checkout_recording()).unwrap();
    let conversion = SessionConverter::new().convert(&events, "checkout");
    let summary = &conversion.summary;

    assert_eq!(summary.event_count, events.len());
    assert_eq!(summary.action_count, 6);
    assert_eq!(summary.counts.navigation, 1);
    assert_eq!(summary.counts.viewport, 1);
    assert_eq!(summary.counts.click, 1);
    assert_eq!(summary.counts.input, 2);
    assert_eq!(summary.counts.scroll, 1);
    assert_eq!(summary.duration_ms, 4000);

    let text = summary.render_text();
    assert!(text.contains("Actions:   6"));
    assert!(text.contains("navigation: 1, viewport: 1, click: 1, input: 2, scroll: 1"));
}
