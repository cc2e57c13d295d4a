//! Playwright test script emission
//!
//! Pure transform from a [`TestSpecification`] to executable TypeScript.
//! One step template per action variant, a per-step synchronization wait,
//! and a fixed trailer (stabilization wait + full-page screenshot) appended
//! regardless of action count, so an empty recording still yields a
//! runnable test. No I/O, no retries, no randomness: identical input and
//! name produce byte-identical output.

use crate::interpret::actions::{Action, ActionKind, ClickTarget, InputValue};
use crate::interpret::assembler::TestSpecification;
use std::fmt::Write;

/// Rendering options; cosmetic only, none alter which steps exist.
#[derive(Debug, Clone)]
pub struct EmitterOptions {
    /// Wait inserted after each replayed action, milliseconds
    pub step_delay_ms: u64,
    /// Trailing stabilization wait before the final capture, milliseconds
    pub stabilization_wait_ms: u64,
    /// Directory the final screenshot is written into at replay time
    pub screenshot_dir: String,
}

impl Default for EmitterOptions {
    fn default() -> Self {
        Self {
            step_delay_ms: 100,
            stabilization_wait_ms: 1000,
            screenshot_dir: "screenshots".to_string(),
        }
    }
}

/// Builds the generated test script.
pub struct ScriptEmitter {
    options: EmitterOptions,
    buffer: String,
}

impl ScriptEmitter {
    /// Create an emitter with default options.
    pub fn new() -> Self {
        Self::with_options(EmitterOptions::default())
    }

    pub fn with_options(options: EmitterOptions) -> Self {
        Self {
            options,
            buffer: String::with_capacity(4096),
        }
    }

    /// Render the specification into a complete test file.
    pub fn emit(&mut self, spec: &TestSpecification, test_name: &str) -> String {
        self.buffer.clear();

        // Writing to a String is infallible, so these cannot fail
        self.write_header(spec, test_name).expect("write to String");
        for action in &spec.actions {
            self.write_action(action).expect("write to String");
        }
        self.write_trailer(test_name).expect("write to String");

        std::mem::take(&mut self.buffer)
    }

    fn write_header(&mut self, spec: &TestSpecification, test_name: &str) -> std::fmt::Result {
        writeln!(self.buffer, "import {{ test, expect }} from '@playwright/test';")?;
        writeln!(self.buffer)?;
        writeln!(
            self.buffer,
            "test('{}', async ({{ page }}) => {{",
            escape_js(test_name)
        )?;
        writeln!(
            self.buffer,
            "  // Original session duration: {}ms",
            spec.total_duration_ms
        )?;
        if let Some(url) = &spec.start_url {
            writeln!(self.buffer, "  // Start URL: {}", url)?;
        }
        writeln!(self.buffer)?;
        Ok(())
    }

    fn write_action(&mut self, action: &Action) -> std::fmt::Result {
        match &action.kind {
            ActionKind::Navigation { url } => {
                writeln!(self.buffer, "  await page.goto('{}');", escape_js(url))?;
            }
            ActionKind::ViewportResize { width, height } => {
                writeln!(
                    self.buffer,
                    "  await page.setViewportSize({{ width: {}, height: {} }});",
                    width, height
                )?;
            }
            ActionKind::Click { target } => self.write_click(target)?,
            ActionKind::Input { selector, value } => match value {
                InputValue::Text(text) => {
                    writeln!(
                        self.buffer,
                        "  await page.fill('{}', '{}');",
                        escape_js(selector),
                        escape_js(text)
                    )?;
                }
                InputValue::Check => {
                    writeln!(self.buffer, "  await page.check('{}');", escape_js(selector))?;
                }
                InputValue::Uncheck => {
                    writeln!(self.buffer, "  await page.uncheck('{}');", escape_js(selector))?;
                }
            },
            ActionKind::Scroll { selector, x, y } => {
                writeln!(
                    self.buffer,
                    "  await page.evaluate(() => document.querySelector('{}')?.scrollTo({}, {}));",
                    escape_js(selector),
                    x,
                    y
                )?;
            }
        }

        if self.options.step_delay_ms > 0 {
            writeln!(
                self.buffer,
                "  await page.waitForTimeout({});",
                self.options.step_delay_ms
            )?;
        }
        writeln!(self.buffer)?;
        Ok(())
    }

    fn write_click(&mut self, target: &ClickTarget) -> std::fmt::Result {
        match target {
            ClickTarget::Selector { selector, reliable } => {
                if !*reliable {
                    writeln!(
                        self.buffer,
                        "  // NOTE: tag-only selector; may match multiple elements"
                    )?;
                }
                writeln!(self.buffer, "  await page.click('{}');", escape_js(selector))?;
            }
            ClickTarget::Coordinates { x, y } => {
                // Required observable behavior: a reviewer must be able to
                // locate unreliable steps immediately.
                writeln!(
                    self.buffer,
                    "  // WARNING: element not found in snapshot; replaying raw coordinates"
                )?;
                writeln!(self.buffer, "  await page.mouse.click({}, {});", x, y)?;
            }
        }
        Ok(())
    }

    fn write_trailer(&mut self, test_name: &str) -> std::fmt::Result {
        writeln!(self.buffer, "  // Wait for the page to stabilize")?;
        writeln!(
            self.buffer,
            "  await page.waitForTimeout({});",
            self.options.stabilization_wait_ms
        )?;
        writeln!(self.buffer)?;
        writeln!(self.buffer, "  // Final screenshot for comparison")?;
        writeln!(
            self.buffer,
            "  await page.screenshot({{ path: '{}/{}.png', fullPage: true }});",
            escape_js(&self.options.screenshot_dir),
            escape_js(test_name)
        )?;
        writeln!(self.buffer, "}});")?;
        Ok(())
    }
}

impl Default for ScriptEmitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape a value for a single-quoted JS string literal.
fn escape_js(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}
