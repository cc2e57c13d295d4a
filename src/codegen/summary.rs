//! Conversion summary
//!
//! Aggregated statistics about one conversion: where the session started,
//! how long it ran, what was replayed and how many steps needed the
//! coordinate fallback. Rendered as text for the console and serialized as
//! a JSON artifact next to the generated test. Contains no wall-clock
//! values so artifacts stay byte-reproducible.

use crate::interpret::actions::ActionKind;
use crate::interpret::assembler::{TestSpecification, Viewport};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Per-kind action counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCounts {
    pub navigation: usize,
    pub viewport: usize,
    pub click: usize,
    pub input: usize,
    pub scroll: usize,
}

/// Summary of one recording-to-test conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionSummary {
    /// Generated test name
    pub test_name: String,
    /// Start url, if the recording navigated anywhere
    pub source_url: Option<String>,
    /// Viewport used by the generated test
    pub viewport: Viewport,
    /// Session duration in milliseconds
    pub duration_ms: u64,
    /// Number of input events consumed
    pub event_count: usize,
    /// Total replayable actions
    pub action_count: usize,
    /// Breakdown by action kind
    pub counts: ActionCounts,
    /// Clicks that fell back to raw coordinates
    pub coordinate_fallback_count: usize,
}

impl ConversionSummary {
    /// Build a summary from an assembled specification.
    pub fn from_spec(spec: &TestSpecification, test_name: &str, event_count: usize) -> Self {
        let mut counts = ActionCounts::default();
        let mut coordinate_fallback_count = 0;

        for action in &spec.actions {
            match &action.kind {
                ActionKind::Navigation { .. } => counts.navigation += 1,
                ActionKind::ViewportResize { .. } => counts.viewport += 1,
                ActionKind::Click { .. } => counts.click += 1,
                ActionKind::Input { .. } => counts.input += 1,
                ActionKind::Scroll { .. } => counts.scroll += 1,
            }
            if action.is_coordinate_fallback() {
                coordinate_fallback_count += 1;
            }
        }

        Self {
            test_name: test_name.to_string(),
            source_url: spec.start_url.clone(),
            viewport: spec.viewport,
            duration_ms: spec.total_duration_ms,
            event_count,
            action_count: spec.actions.len(),
            counts,
            coordinate_fallback_count,
        }
    }

    /// Render the console summary.
    pub fn render_text(&self) -> String {
        let mut out = String::with_capacity(512);

        // Writing to a String is infallible
        let _ = writeln!(out, "Conversion Summary");
        let _ = writeln!(out, "  Test:      {}", self.test_name);
        let _ = writeln!(
            out,
            "  URL:       {}",
            self.source_url.as_deref().unwrap_or("(none)")
        );
        let _ = writeln!(
            out,
            "  Viewport:  {}x{}",
            self.viewport.width, self.viewport.height
        );
        let _ = writeln!(
            out,
            "  Duration:  {:.1}s",
            self.duration_ms as f64 / 1000.0
        );
        let _ = writeln!(out, "  Events:    {}", self.event_count);
        let _ = writeln!(out, "  Actions:   {}", self.action_count);
        let _ = writeln!(
            out,
            "    navigation: {}, viewport: {}, click: {}, input: {}, scroll: {}",
            self.counts.navigation,
            self.counts.viewport,
            self.counts.click,
            self.counts.input,
            self.counts.scroll
        );
        if self.coordinate_fallback_count > 0 {
            let _ = writeln!(
                out,
                "  Warnings:  {} click(s) replay raw coordinates (element not in snapshot)",
                self.coordinate_fallback_count
            );
        }

        out
    }

    /// Serialize the JSON artifact written next to the generated test.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
