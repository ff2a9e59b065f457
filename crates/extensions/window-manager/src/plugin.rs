//! Window manager plugin.

use std::sync::Arc;

use winbridge_config::Config;
use winbridge_protocols::channel::MethodHandler;
use winbridge_protocols::error::PluginError;
use winbridge_protocols::plugin::{ChannelRegistryAccess, Plugin, PluginManifest, Provides};
use winbridge_protocols::types::Version;

use crate::channel::{BridgeOptions, WindowManagerChannel};
use crate::method::Method;
use crate::native::{platform_window_system, WindowSystem};

/// Registers the window manager channel with the host.
pub struct WindowManagerPlugin {
    manifest: PluginManifest,
    channel: Arc<WindowManagerChannel>,
}

impl WindowManagerPlugin {
    pub fn new(options: BridgeOptions, system: Arc<dyn WindowSystem>) -> Self {
        let mut manifest =
            PluginManifest::new("window-manager", "Window Manager", Version::new(0, 1, 0))
                .with_description("Native window bounds, always-on-top and fullscreen control");
        manifest.provides = Provides {
            channels: vec![options.channel_name.clone()],
            methods: Method::ALL
                .into_iter()
                .filter(|method| !method.is_reserved())
                .map(|method| method.name().to_string())
                .collect(),
        };

        Self {
            manifest,
            channel: Arc::new(WindowManagerChannel::new(options, system)),
        }
    }

    /// Build against the platform window system.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            BridgeOptions::from_config(config),
            platform_window_system(config.bridge.window_target),
        )
    }

    pub fn channel(&self) -> &Arc<WindowManagerChannel> {
        &self.channel
    }
}

impl Plugin for WindowManagerPlugin {
    fn manifest(&self) -> &PluginManifest {
        &self.manifest
    }

    fn register(&self, registry: &dyn ChannelRegistryAccess) -> Result<(), PluginError> {
        let handler: Arc<dyn MethodHandler> = self.channel.clone();
        registry.register_handler(handler)?;
        tracing::info!(channel = %self.channel.channel(), "Registered window manager channel");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::HeadlessWindowSystem;
    use winbridge_core::ChannelRegistry;

    fn plugin() -> WindowManagerPlugin {
        WindowManagerPlugin::new(BridgeOptions::default(), Arc::new(HeadlessWindowSystem::new()))
    }

    #[test]
    fn test_plugin_manifest() {
        let plugin = plugin();
        assert_eq!(plugin.manifest().id, "window-manager");
        assert_eq!(plugin.manifest().name, "Window Manager");
        assert_eq!(plugin.manifest().version, Version::new(0, 1, 0));
        assert!(plugin.manifest().description.contains("fullscreen"));
    }

    #[test]
    fn test_provides_channel() {
        let plugin = plugin();
        assert_eq!(plugin.manifest().provides.channels, vec!["window_manager".to_string()]);
    }

    #[test]
    fn test_provides_methods_excludes_reserved() {
        let plugin = plugin();
        let methods = &plugin.manifest().provides.methods;
        assert_eq!(methods.len(), 6);
        assert!(methods.contains(&"getBounds".to_string()));
        assert!(methods.contains(&"setFullScreen".to_string()));
        assert!(!methods.contains(&"setMinimumSize".to_string()));
        assert!(!methods.contains(&"setMaximumSize".to_string()));
    }

    #[test]
    fn test_custom_channel_name() {
        let options = BridgeOptions {
            channel_name: "desktop_window".to_string(),
            ..BridgeOptions::default()
        };
        let plugin = WindowManagerPlugin::new(options, Arc::new(HeadlessWindowSystem::new()));
        assert_eq!(plugin.channel().channel(), "desktop_window");
        assert_eq!(plugin.manifest().provides.channels, vec!["desktop_window".to_string()]);
    }

    #[test]
    fn test_register() {
        let registry = ChannelRegistry::new();
        plugin().register(&registry).unwrap();
        assert!(registry.contains("window_manager"));
    }

    #[test]
    fn test_register_twice_fails() {
        let registry = ChannelRegistry::new();
        let plugin = plugin();
        plugin.register(&registry).unwrap();
        assert!(matches!(
            plugin.register(&registry),
            Err(PluginError::AlreadyRegistered(_))
        ));
    }

    #[test]
    fn test_from_config_uses_channel_name() {
        let mut config = Config::default();
        config.channel.name = "wm".to_string();
        let plugin = WindowManagerPlugin::from_config(&config);
        assert!(plugin.manifest().provides.channels.contains(&"wm".to_string()));
        assert!(!plugin.channel().is_full_screen());
    }
}
