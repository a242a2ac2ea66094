//! Aggregator Error Types

use adc_continuous::DriverError;
use thiserror::Error;

/// Errors reported by aggregator lifecycle operations.
///
/// Only the control plane reports errors. The frame path has no error
/// channel at all: it runs in the driver's producer context, which cannot
/// block or propagate, so malformed input there is skipped silently.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    /// The acquisition handle could not be created
    #[error("Failed to allocate acquisition session: {0}")]
    Allocation(#[source] DriverError),

    /// The configuration is invalid or was rejected by the driver
    #[error("Invalid acquisition config: {0}")]
    Config(String),

    /// The frame callback could not be installed
    #[error("Failed to register frame callback: {0}")]
    CallbackRegistration(#[source] DriverError),

    /// Continuous conversion did not start
    #[error("Failed to start acquisition: {0}")]
    Start(#[source] DriverError),

    /// Continuous conversion did not stop cleanly
    #[error("Failed to stop acquisition: {0}")]
    Stop(#[source] DriverError),

    /// The acquisition session was not released cleanly
    #[error("Failed to release acquisition session: {0}")]
    Deinit(#[source] DriverError),

    /// start was called while a session is already running
    #[error("Acquisition is already running")]
    AlreadyRunning,
}
