//! Method call type.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ChannelError;

/// A named method invocation with its argument bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    /// Method name, e.g. `getBounds`.
    pub method: String,

    /// Arguments, usually a JSON object. `null` when the method takes none.
    #[serde(default)]
    pub arguments: serde_json::Value,
}

impl MethodCall {
    /// Create a call with no arguments.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: serde_json::Value::Null,
        }
    }

    /// Attach an argument bag.
    pub fn with_arguments(mut self, arguments: serde_json::Value) -> Self {
        self.arguments = arguments;
        self
    }

    /// Deserialize the argument bag into a typed parameter struct.
    ///
    /// A `null` bag is treated as an empty object so that parameter structs
    /// made only of optional fields still parse.
    pub fn arguments_as<T: DeserializeOwned>(&self) -> Result<T, ChannelError> {
        let value = if self.arguments.is_null() {
            serde_json::Value::Object(serde_json::Map::new())
        } else {
            self.arguments.clone()
        };
        serde_json::from_value(value).map_err(|e| ChannelError::InvalidArguments(e.to_string()))
    }
}

#[cfg(test)]
#[path = "call_tests.rs"]
mod tests;
