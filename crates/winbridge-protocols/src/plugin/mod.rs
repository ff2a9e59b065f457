//! Plugin protocol definitions.
//!
//! A plugin contributes method channels to the host.

mod manifest;
mod traits;

pub use manifest::*;
pub use traits::*;
