//! Registries for method channels.

mod base;
mod channel;

pub use base::{BaseRegistry, Registerable};
pub use channel::ChannelRegistry;
