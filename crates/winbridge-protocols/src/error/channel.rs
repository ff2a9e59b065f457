//! Method channel errors.

use thiserror::Error;

use super::NativeError;

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("Channel not found: {0}")]
    NotFound(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Native call failed: {0}")]
    Native(#[from] NativeError),

    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),
}

impl ChannelError {
    /// Stable error code reported on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "channel_not_found",
            Self::InvalidArguments(_) => "invalid_arguments",
            Self::Native(_) => "native_error",
            Self::MalformedEnvelope(_) => "malformed_envelope",
        }
    }
}
