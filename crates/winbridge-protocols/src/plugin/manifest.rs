//! Plugin manifest types.

use serde::{Deserialize, Serialize};

use crate::types::Version;

/// Plugin manifest containing metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginManifest {
    pub id: String,
    pub name: String,
    pub version: Version,
    pub description: String,
    #[serde(default)]
    pub provides: Provides,
}

impl PluginManifest {
    /// Create a new plugin manifest.
    pub fn new(id: impl Into<String>, name: impl Into<String>, version: Version) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version,
            description: String::new(),
            provides: Provides::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// What a plugin provides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Provides {
    /// Channel names.
    #[serde(default)]
    pub channels: Vec<String>,
    /// Method names answered with a real result (not `NotImplemented`).
    #[serde(default)]
    pub methods: Vec<String>,
}
