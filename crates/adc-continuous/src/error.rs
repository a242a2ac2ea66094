//! Driver Error Types

use thiserror::Error;

/// Errors reported by a continuous sampling driver
#[derive(Debug, Error)]
pub enum DriverError {
    /// Conversion buffers could not be allocated
    #[error("Failed to allocate conversion buffers: {0}")]
    Allocation(String),

    /// The requested channel pattern or frequency is not supported
    #[error("Channel pattern rejected: {0}")]
    PatternRejected(String),

    /// The frame callback could not be installed
    #[error("Frame callback rejected: {0}")]
    CallbackRejected(String),

    /// Continuous conversion could not begin
    #[error("Acquisition start failed: {0}")]
    StartFailed(String),

    /// Continuous conversion could not be halted
    #[error("Acquisition stop failed: {0}")]
    StopFailed(String),

    /// The operation is not valid in the handle's current state
    #[error("Invalid driver state: {0}")]
    InvalidState(&'static str),
}
