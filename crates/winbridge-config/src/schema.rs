//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::loader::ConfigLoader;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub channel: ChannelConfig,

    #[serde(default)]
    pub bridge: BridgeConfig,

    #[serde(default)]
    pub fullscreen: FullscreenConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Channel the window bridge is registered under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelConfig {
    #[serde(default = "default_channel_name")]
    pub name: String,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            name: default_channel_name(),
        }
    }
}

fn default_channel_name() -> String {
    "window_manager".to_string()
}

/// Bridge behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BridgeConfig {
    #[serde(default)]
    pub failure_mode: FailureMode,

    #[serde(default)]
    pub window_target: WindowTarget,
}

/// How native call failures are reported to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureMode {
    /// Absorb failures: empty bounds, unconditional success. Failures are logged.
    #[default]
    Lenient,
    /// Report failures as `native_error` responses.
    Strict,
}

/// Which top-level window the bridge operates on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowTarget {
    /// The calling thread's active window.
    #[default]
    Active,
    /// The system-wide foreground window.
    Foreground,
}

/// Fullscreen toggle behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FullscreenConfig {
    #[serde(default)]
    pub geometry_capture: GeometryCapture,
}

/// When the pre-fullscreen rectangle is captured relative to the style switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryCapture {
    /// Capture the decorated window before it is restyled.
    ///
    /// This default departs from the legacy ordering: leaving fullscreen
    /// restores the decorated rectangle instead of the borderless one. Set
    /// `after_restyle` to keep the legacy result.
    #[default]
    BeforeRestyle,
    /// Capture after switching to the popup style (legacy ordering).
    AfterRestyle,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directives, e.g. `info` or `winbridge=debug,info`.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable text.
    #[serde(default)]
    pub json: bool,

    /// Also write a daily rolling log file.
    #[serde(default)]
    pub file: bool,

    /// Directory for the log file. Defaults to `~/.winbridge/logs`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            file: false,
            file_dir: None,
        }
    }
}

impl LoggingConfig {
    /// Resolved log directory, or `None` when file logging is off.
    pub fn log_dir(&self) -> Option<PathBuf> {
        if !self.file {
            return None;
        }
        match &self.file_dir {
            Some(dir) => Some(PathBuf::from(ConfigLoader::expand_path(dir))),
            None => dirs::home_dir().map(|home| home.join(".winbridge").join("logs")),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
