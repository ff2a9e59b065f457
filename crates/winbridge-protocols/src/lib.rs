//! # winbridge Protocols
//!
//! Core protocol definitions for the winbridge window bridge.
//! Contains only interface definitions and wire types - no implementations.
//!
//! ## Core Traits
//!
//! - [`MethodHandler`] - Handles named method calls arriving on a channel
//! - [`Plugin`] - Registers one or more method handlers with a host
//!
//! ## Wire Types
//!
//! - [`MethodCall`] - A method name plus a key-value argument bag
//! - [`MethodResponse`] - Success payload, error, or not-implemented status

pub mod channel;
pub mod error;
pub mod plugin;
pub mod types;

pub use channel::{MethodCall, MethodHandler, MethodResponse};
pub use error::{ChannelError, NativeError, PluginError};
pub use plugin::{ChannelRegistryAccess, Plugin, PluginManifest, Provides};
pub use types::*;
