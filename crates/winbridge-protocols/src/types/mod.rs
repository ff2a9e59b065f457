//! Common types used across winbridge.

mod common;
mod geometry;

pub use common::*;
pub use geometry::*;
