//! Continuous Sampling Aggregator
//!
//! Receives fixed-size frames of raw conversion records from a
//! driver-managed producer context, filters them down to one channel, and
//! publishes each frame's truncated average through a lock-free slot that
//! any execution context may read at any time.
//!
//! One aggregator instance owns one converter. Consumers never see
//! individual samples, only the most recent per-frame average.

mod aggregator;
mod config;
mod error;
mod stats;
mod value;

pub use aggregator::{frame_average, AggregatorState, SampleAggregator};
pub use config::AcquisitionConfig;
pub use error::AcquisitionError;
pub use stats::AcquisitionStats;
pub use value::LatestValue;
