//! Configuration Management
//!
//! TOML configuration for output locations and emitter cosmetics. No value
//! here changes the core conversion algorithm.

use crate::codegen::emitter::EmitterOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,
    /// Generated-script settings
    pub emitter: EmitterConfig,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory generated tests are written into
    pub dir: PathBuf,
}

/// Emitter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    /// Wait after each replayed step (ms)
    pub step_delay_ms: u64,
    /// Trailing stabilization wait (ms)
    pub stabilization_wait_ms: u64,
    /// Screenshot directory referenced by generated tests
    pub screenshot_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("generated-tests"),
        }
    }
}

impl Default for EmitterConfig {
    fn default() -> Self {
        let defaults = EmitterOptions::default();
        Self {
            step_delay_ms: defaults.step_delay_ms,
            stabilization_wait_ms: defaults.stabilization_wait_ms,
            screenshot_dir: defaults.screenshot_dir,
        }
    }
}

impl Config {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.emitter.step_delay_ms > 60_000 {
            return Err(crate::Error::Config(format!(
                "step_delay_ms must be at most 60000, got {}",
                self.emitter.step_delay_ms
            )));
        }
        if self.emitter.stabilization_wait_ms > 600_000 {
            return Err(crate::Error::Config(format!(
                "stabilization_wait_ms must be at most 600000, got {}",
                self.emitter.stabilization_wait_ms
            )));
        }
        if self.emitter.screenshot_dir.trim().is_empty() {
            return Err(crate::Error::Config(
                "screenshot_dir must not be empty".to_string(),
            ));
        }
        if self.output.dir.as_os_str().is_empty() {
            return Err(crate::Error::Config("output dir must not be empty".to_string()));
        }
        Ok(())
    }

    /// Load config from file
    pub fn load(path: &PathBuf) -> Result<Self, crate::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from the default location, falling back to defaults if
    /// no file exists yet
    pub fn load_default() -> Result<Self, crate::Error> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &PathBuf) -> Result<(), crate::Error> {
        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save to the default location
    pub fn save_default(&self) -> Result<(), crate::Error> {
        self.save(&Self::default_path())
    }

    /// Default config path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".replay_testgen").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Generate TOML representation
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Emitter options derived from this config
    pub fn emitter_options(&self) -> EmitterOptions {
        EmitterOptions {
            step_delay_ms: self.emitter.step_delay_ms,
            stabilization_wait_ms: self.emitter.stabilization_wait_ms,
            screenshot_dir: self.emitter.screenshot_dir.clone(),
        }
    }
}
