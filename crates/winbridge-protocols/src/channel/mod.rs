//! Method channel protocol definitions.
//!
//! A channel carries named method calls with a key-value argument bag from
//! the embedding host and returns a structured response.

mod call;
mod handler;
mod response;

pub use call::*;
pub use handler::*;
pub use response::*;
