//! Configuration validation.

use crate::schema::{Config, GeometryCapture, WindowTarget};

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_channel(config, &mut result);
        Self::validate_bridge(config, &mut result);
        Self::validate_fullscreen(config, &mut result);
        Self::validate_logging(config, &mut result);

        result
    }

    fn validate_channel(config: &Config, result: &mut ValidationResult) {
        let name = &config.channel.name;
        if name.trim().is_empty() {
            result.add_error(ValidationError::new("channel.name", "Channel name cannot be empty"));
        } else if name.chars().any(char::is_whitespace) {
            result.add_error(ValidationError::new(
                "channel.name",
                "Channel name cannot contain whitespace",
            ));
        }
    }

    fn validate_bridge(config: &Config, result: &mut ValidationResult) {
        if config.bridge.window_target == WindowTarget::Foreground && !cfg!(windows) {
            result.add_warning(ValidationWarning::new(
                "bridge.window_target",
                "Foreground targeting only differs from active targeting on Windows",
            ));
        }
    }

    fn validate_fullscreen(config: &Config, result: &mut ValidationResult) {
        if config.fullscreen.geometry_capture == GeometryCapture::AfterRestyle {
            result.add_warning(ValidationWarning::new(
                "fullscreen.geometry_capture",
                "after_restyle captures the borderless rectangle; leaving fullscreen may not restore the original geometry",
            ));
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.trim();
        if level.is_empty() {
            result.add_error(ValidationError::new("logging.level", "Log level cannot be empty"));
            return;
        }

        for directive in level.split(',') {
            let level_part = directive.rsplit('=').next().unwrap_or(directive).trim();
            if !LEVELS.contains(&level_part.to_ascii_lowercase().as_str()) {
                result.add_error(ValidationError::new(
                    "logging.level",
                    format!("Unknown log level '{}'", level_part),
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
