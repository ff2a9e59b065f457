//! Method response types.

use serde::{Deserialize, Serialize};

use crate::error::ChannelError;

/// Outcome of a method call.
///
/// `NotImplemented` is a stable, expected answer for unknown or reserved
/// method names; it is not a fault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MethodResponse {
    Success {
        result: serde_json::Value,
    },
    Error {
        code: String,
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<serde_json::Value>,
    },
    NotImplemented,
}

impl MethodResponse {
    /// Create a successful response.
    pub fn success(result: impl Into<serde_json::Value>) -> Self {
        Self::Success {
            result: result.into(),
        }
    }

    /// Create an error response.
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create a not-implemented response.
    pub fn not_implemented() -> Self {
        Self::NotImplemented
    }

    /// Attach details to an error response. No effect on other variants.
    pub fn with_details(mut self, value: serde_json::Value) -> Self {
        if let Self::Error { details, .. } = &mut self {
            *details = Some(value);
        }
        self
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented)
    }

    /// The success payload, if any.
    pub fn result(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Success { result } => Some(result),
            _ => None,
        }
    }

    /// The error code, if this is an error response.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::Error { code, .. } => Some(code),
            _ => None,
        }
    }
}

impl From<ChannelError> for MethodResponse {
    fn from(err: ChannelError) -> Self {
        Self::error(err.code(), err.to_string())
    }
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
