//! Native window-system errors.

use thiserror::Error;

/// Failure of a single native windowing primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NativeError {
    #[error("No target window is available")]
    NoTargetWindow,

    #[error("Failed to query window rectangle: {0}")]
    WindowRect(String),

    #[error("Failed to position window: {0}")]
    SetPosition(String),

    #[error("Failed to read window style: {0}")]
    GetStyle(String),

    #[error("Failed to change window style: {0}")]
    SetStyle(String),

    #[error("Failed to query monitor: {0}")]
    Monitor(String),

    #[error("Failed to change show state: {0}")]
    ShowState(String),
}
