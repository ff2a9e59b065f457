//! Channel registry for method handlers.

use std::sync::Arc;

use winbridge_protocols::channel::MethodHandler;
use winbridge_protocols::error::PluginError;
use winbridge_protocols::plugin::ChannelRegistryAccess;

use super::base::{BaseRegistry, Registerable};

impl Registerable for dyn MethodHandler {
    fn registry_id(&self) -> &str {
        self.channel()
    }
}

/// Registry of method handlers keyed by channel name.
pub struct ChannelRegistry {
    inner: BaseRegistry<dyn MethodHandler>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self {
            inner: BaseRegistry::new(),
        }
    }

    /// Register a handler under its channel name.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel name is already taken.
    pub fn register(&self, handler: Arc<dyn MethodHandler>) -> Result<(), PluginError> {
        self.inner.register(handler)
    }

    /// Get the handler serving `channel`.
    pub fn get(&self, channel: &str) -> Option<Arc<dyn MethodHandler>> {
        self.inner.get(channel)
    }

    pub fn contains(&self, channel: &str) -> bool {
        self.inner.contains(channel)
    }

    pub fn list_ids(&self) -> Vec<String> {
        self.inner.list_ids()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for ChannelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelRegistryAccess for ChannelRegistry {
    fn register_handler(&self, handler: Arc<dyn MethodHandler>) -> Result<(), PluginError> {
        self.register(handler)
    }
}
