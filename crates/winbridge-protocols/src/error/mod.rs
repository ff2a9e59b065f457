//! Error types for the winbridge protocol layer.

mod channel;
mod native;
mod plugin;

pub use channel::*;
pub use native::*;
pub use plugin::*;
