//! Plugin trait definition.

use std::sync::Arc;

use super::PluginManifest;
use crate::channel::MethodHandler;
use crate::error::PluginError;

/// Core trait for all plugins.
pub trait Plugin: Send + Sync + 'static {
    /// Returns the plugin manifest.
    fn manifest(&self) -> &PluginManifest;

    /// Register the plugin's channels with the host.
    fn register(&self, registry: &dyn ChannelRegistryAccess) -> Result<(), PluginError>;
}

/// Trait for accessing the channel registry from plugins.
pub trait ChannelRegistryAccess: Send + Sync {
    /// Register a handler under its channel name.
    fn register_handler(&self, handler: Arc<dyn MethodHandler>) -> Result<(), PluginError>;
}
