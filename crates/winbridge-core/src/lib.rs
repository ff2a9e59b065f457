//! # winbridge Core
//!
//! Host-side plumbing for winbridge.
//!
//! ## Components
//!
//! - [`ChannelRegistry`] - Registry of method handlers keyed by channel name
//! - [`Messenger`] - Routes incoming [`Envelope`]s to their channel and wraps the [`Reply`]

pub mod messenger;
pub mod registry;

pub use messenger::{Envelope, Messenger, Reply};
pub use registry::ChannelRegistry;
