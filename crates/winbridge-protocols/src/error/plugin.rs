//! Plugin registration errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("Channel already registered: {0}")]
    AlreadyRegistered(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_registered_error() {
        let err = PluginError::AlreadyRegistered("window_manager".to_string());
        let display = err.to_string();
        assert!(display.contains("already registered"));
        assert!(display.contains("window_manager"));
    }
}
