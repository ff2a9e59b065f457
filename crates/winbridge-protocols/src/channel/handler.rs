//! Method handler trait definition.

use super::{MethodCall, MethodResponse};

/// Core trait for method channel handlers.
///
/// A handler owns one named channel and answers every call arriving on it.
/// Handlers never fail at the Rust level: faults are reported through
/// [`MethodResponse::Error`] and unknown methods through
/// [`MethodResponse::NotImplemented`].
pub trait MethodHandler: Send + Sync {
    /// Name of the channel this handler serves.
    fn channel(&self) -> &str;

    /// Handle a single call.
    fn handle(&self, call: &MethodCall) -> MethodResponse;
}
