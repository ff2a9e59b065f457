//! `check-config` subcommand.

use std::path::Path;

use winbridge_config::{Config, ConfigValidator};

/// Print validation results for a loaded config.
pub(crate) fn check_config(path: &Path, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let validation = ConfigValidator::validate(config);

    if path.exists() {
        println!("Config: {}", path.display());
    } else {
        println!("Config: {} (not found, using defaults)", path.display());
    }
    println!("  channel:          {}", config.channel.name);
    println!("  failure_mode:     {:?}", config.bridge.failure_mode);
    println!("  window_target:    {:?}", config.bridge.window_target);
    println!("  geometry_capture: {:?}", config.fullscreen.geometry_capture);
    println!("  log level:        {}", config.logging.level);

    for warning in &validation.warnings {
        println!("warning: {}: {}", warning.path, warning.message);
    }
    for e in &validation.errors {
        println!("error: {}: {}", e.path, e.message);
    }

    if validation.is_valid() {
        println!("OK");
        Ok(())
    } else {
        Err(format!("{} configuration error(s)", validation.errors.len()).into())
    }
}
