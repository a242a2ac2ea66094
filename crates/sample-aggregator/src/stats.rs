//! Acquisition Counters

use std::sync::atomic::{AtomicU64, Ordering};

/// Running counters updated by the frame handler.
///
/// Relaxed atomics only: the producer context may not block, and readers
/// need nothing more than approximate totals for health reporting. Counts
/// accumulate over the aggregator's whole lifetime, across restarts.
#[derive(Debug, Default)]
pub struct AcquisitionStats {
    frames: AtomicU64,
    matched_samples: AtomicU64,
}

impl AcquisitionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames handled since the aggregator was created
    pub fn frames(&self) -> u64 {
        self.frames.load(Ordering::Relaxed)
    }

    /// Records that matched the target channel since the aggregator was
    /// created
    pub fn matched_samples(&self) -> u64 {
        self.matched_samples.load(Ordering::Relaxed)
    }

    pub(crate) fn record_frame(&self, matched: u32) {
        self.frames.fetch_add(1, Ordering::Relaxed);
        self.matched_samples.fetch_add(u64::from(matched), Ordering::Relaxed);
    }
}
