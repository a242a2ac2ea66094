//! Sample Aggregator
//!
//! Owns the acquisition session and the shared latest-value slot. The
//! frame handler runs synchronously in the driver's producer context, one
//! frame at a time in delivery order, so the published value always moves
//! forward in frame order.

use crate::config::AcquisitionConfig;
use crate::error::AcquisitionError;
use crate::stats::AcquisitionStats;
use crate::value::LatestValue;
use adc_continuous::{AcquisitionHandle, AdcChannel, Frame, FrameHandler, SamplingDriver};
use std::sync::Arc;
use tracing::{error, info};

/// Lifecycle of one aggregator instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AggregatorState {
    /// No session has ever been started
    #[default]
    Uninitialized,
    /// Frames are being handled
    Running,
    /// A previous session was stopped; a new one may be started
    Stopped,
}

/// Continuous-sampling aggregator, one instance per physical converter.
///
/// The aggregator exclusively owns its acquisition session and is the only
/// writer of the latest-value slot. `start` and `stop` are control-plane
/// calls made from one context at a time (`&mut self` enforces this);
/// [`latest_value`](Self::latest_value) may be called from anywhere.
pub struct SampleAggregator<D: SamplingDriver> {
    driver: D,
    state: AggregatorState,
    handle: Option<D::Handle>,
    latest: Arc<LatestValue>,
    stats: Arc<AcquisitionStats>,
}

impl<D: SamplingDriver> SampleAggregator<D> {
    /// Create an idle aggregator on top of `driver`
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            state: AggregatorState::Uninitialized,
            handle: None,
            latest: Arc::new(LatestValue::new()),
            stats: Arc::new(AcquisitionStats::new()),
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> AggregatorState {
        self.state
    }

    /// Latest per-frame average; zero until the first frame is handled.
    /// The value survives a stop and carries over into the next session
    /// until a new frame replaces it.
    pub fn latest_value(&self) -> u32 {
        self.latest.get()
    }

    /// Shared handle to the latest-value slot, for consumers such as the
    /// value server
    pub fn latest(&self) -> Arc<LatestValue> {
        Arc::clone(&self.latest)
    }

    /// Shared handle to the acquisition counters
    pub fn stats(&self) -> Arc<AcquisitionStats> {
        Arc::clone(&self.stats)
    }

    /// Start a continuous acquisition session.
    ///
    /// Valid from `Uninitialized` or `Stopped`; a running session is never
    /// disturbed and is reported as [`AcquisitionError::AlreadyRunning`].
    /// Bring-up is staged, and when any stage fails the already-created
    /// session is released before the error propagates, so a failed start
    /// never leaks conversion buffers.
    pub fn start(&mut self, config: AcquisitionConfig) -> Result<(), AcquisitionError> {
        if self.state == AggregatorState::Running {
            return Err(AcquisitionError::AlreadyRunning);
        }
        config.validate()?;

        let mut handle = self
            .driver
            .create_handle(config.buffer_layout())
            .map_err(|e| {
                error!("Failed to create acquisition session: {}", e);
                AcquisitionError::Allocation(e)
            })?;

        if let Err(e) = handle.configure(config.pattern(), config.sample_freq_hz) {
            error!("Failed to configure acquisition: {}", e);
            release_after_failure(handle);
            return Err(AcquisitionError::Config(e.to_string()));
        }

        let handler = frame_handler(
            config.channel,
            Arc::clone(&self.latest),
            Arc::clone(&self.stats),
        );
        if let Err(e) = handle.register_frame_handler(handler) {
            error!("Failed to register frame callback: {}", e);
            release_after_failure(handle);
            return Err(AcquisitionError::CallbackRegistration(e));
        }

        if let Err(e) = handle.start() {
            error!("Failed to start acquisition: {}", e);
            release_after_failure(handle);
            return Err(AcquisitionError::Start(e));
        }

        self.handle = Some(handle);
        self.state = AggregatorState::Running;
        info!(
            "Continuous acquisition started: channel {} at {} Hz, {} byte frames",
            config.channel.0, config.sample_freq_hz, config.frame_size
        );
        Ok(())
    }

    /// Stop the running session and release it.
    ///
    /// Idempotent: without a live session this is a successful no-op, so
    /// it is safe to call from any state and to call twice. The session is
    /// always released, even when stopping it fails; a release failure
    /// takes precedence in the reported error.
    pub fn stop(&mut self) -> Result<(), AcquisitionError> {
        let Some(mut handle) = self.handle.take() else {
            return Ok(());
        };
        self.state = AggregatorState::Stopped;

        let stopped = handle.stop();
        let released = handle.release();

        if let Err(e) = released {
            error!("Failed to release acquisition session: {}", e);
            return Err(AcquisitionError::Deinit(e));
        }
        if let Err(e) = stopped {
            error!("Failed to stop acquisition: {}", e);
            return Err(AcquisitionError::Stop(e));
        }

        info!("Continuous acquisition stopped");
        Ok(())
    }
}

impl<D: SamplingDriver> Drop for SampleAggregator<D> {
    fn drop(&mut self) {
        if self.handle.is_some() {
            let _ = self.stop();
        }
    }
}

/// Release a session that failed partway through bring-up. The original
/// failure is what propagates; a release failure here is only logged.
fn release_after_failure<H: AcquisitionHandle>(handle: H) {
    if let Err(e) = handle.release() {
        error!("Failed to release partially set up session: {}", e);
    }
}

/// Truncated average of the records in `frame` matching `channel`, or
/// `None` when no record matches (callers then keep the previous value)
pub fn frame_average(frame: Frame<'_>, channel: AdcChannel) -> Option<u32> {
    let (sum, count) = accumulate(frame, channel);
    if count == 0 {
        None
    } else {
        Some((sum / u64::from(count)) as u32)
    }
}

fn accumulate(frame: Frame<'_>, channel: AdcChannel) -> (u64, u32) {
    let mut sum: u64 = 0;
    let mut count: u32 = 0;
    for record in frame.records() {
        if record.channel == channel.0 {
            sum += u64::from(record.raw);
            count += 1;
        }
    }
    (sum, count)
}

/// Build the per-frame callback. Everything it needs is captured up front
/// so the producer-context body only decodes, accumulates, and stores.
fn frame_handler(
    channel: AdcChannel,
    latest: Arc<LatestValue>,
    stats: Arc<AcquisitionStats>,
) -> FrameHandler {
    Box::new(move |frame: Frame<'_>| {
        let (sum, count) = accumulate(frame, channel);
        if count > 0 {
            latest.store((sum / u64::from(count)) as u32);
        }
        stats.record_frame(count);
        // Readers poll the slot; there is never a consumer to wake.
        false
    })
}
