//! Simulated Sampling Driver
//!
//! Drives the registered frame callback from a worker thread at the
//! configured frame rate, synthesizing a deterministic triangle waveform
//! on the configured channel. Lets the full pipeline run and be tested
//! without converter hardware attached.

use crate::driver::{AcquisitionHandle, FrameHandler, SamplingDriver};
use crate::error::DriverError;
use crate::frame::Frame;
use crate::record::{SampleRecord, SAMPLE_RECORD_BYTES};
use crate::{BufferLayout, ChannelPattern};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Number of samples in one full rise-and-fall period of the synthesized wave
const WAVE_PERIOD_SAMPLES: u64 = 256;

/// Channels the simulated converter exposes (eight single-ended inputs)
pub const SIM_CHANNEL_COUNT: u8 = 8;

/// Factory for simulated acquisition sessions
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedDriver;

impl SimulatedDriver {
    pub fn new() -> Self {
        Self
    }
}

impl SamplingDriver for SimulatedDriver {
    type Handle = SimulatedHandle;

    fn create_handle(&self, layout: BufferLayout) -> Result<SimulatedHandle, DriverError> {
        if layout.frame_size == 0 || layout.frame_size % SAMPLE_RECORD_BYTES != 0 {
            return Err(DriverError::Allocation(format!(
                "frame size {} is not a positive multiple of {} bytes",
                layout.frame_size, SAMPLE_RECORD_BYTES
            )));
        }
        if layout.frame_size > layout.max_buffer_size {
            return Err(DriverError::Allocation(format!(
                "frame size {} exceeds buffer capacity {}",
                layout.frame_size, layout.max_buffer_size
            )));
        }

        debug!(
            "Created simulated acquisition handle: {} byte frames, {} byte buffer",
            layout.frame_size, layout.max_buffer_size
        );
        Ok(SimulatedHandle {
            layout,
            pattern: None,
            sample_freq_hz: 0,
            handler: None,
            worker: None,
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }
}

/// One simulated acquisition session
pub struct SimulatedHandle {
    layout: BufferLayout,
    pattern: Option<ChannelPattern>,
    sample_freq_hz: u32,
    handler: Option<FrameHandler>,
    worker: Option<JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
}

impl SimulatedHandle {
    fn join_worker(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("Simulated acquisition worker panicked");
            }
        }
    }
}

impl AcquisitionHandle for SimulatedHandle {
    fn configure(&mut self, pattern: ChannelPattern, sample_freq_hz: u32) -> Result<(), DriverError> {
        if self.worker.is_some() {
            return Err(DriverError::InvalidState("cannot reconfigure while converting"));
        }
        if pattern.channel.0 >= SIM_CHANNEL_COUNT {
            return Err(DriverError::PatternRejected(format!(
                "channel {} does not exist on this converter",
                pattern.channel.0
            )));
        }
        if sample_freq_hz == 0 {
            return Err(DriverError::PatternRejected(
                "sample frequency must be greater than zero".to_string(),
            ));
        }

        self.pattern = Some(pattern);
        self.sample_freq_hz = sample_freq_hz;
        Ok(())
    }

    fn register_frame_handler(&mut self, handler: FrameHandler) -> Result<(), DriverError> {
        if self.worker.is_some() {
            return Err(DriverError::CallbackRejected(
                "conversion is already running".to_string(),
            ));
        }
        self.handler = Some(handler);
        Ok(())
    }

    fn start(&mut self) -> Result<(), DriverError> {
        if self.worker.is_some() {
            return Err(DriverError::StartFailed("conversion is already running".to_string()));
        }
        let pattern = self
            .pattern
            .ok_or(DriverError::InvalidState("no channel pattern configured"))?;
        let mut handler = self
            .handler
            .take()
            .ok_or(DriverError::InvalidState("no frame callback registered"))?;

        let records_per_frame = self.layout.frame_size / SAMPLE_RECORD_BYTES;
        let frame_interval =
            Duration::from_secs_f64(records_per_frame as f64 / f64::from(self.sample_freq_hz));
        let shutdown = Arc::clone(&self.shutdown);
        shutdown.store(false, Ordering::SeqCst);

        let worker = std::thread::spawn(move || {
            // The frame buffer is allocated once out here; the callback
            // itself runs allocation-free.
            let mut buf = vec![0u8; records_per_frame * SAMPLE_RECORD_BYTES];
            let mut sample_index: u64 = 0;
            let max_raw = pattern.bit_width.max_raw();

            while !shutdown.load(Ordering::SeqCst) {
                for slot in buf.chunks_exact_mut(SAMPLE_RECORD_BYTES) {
                    let raw = triangle_sample(sample_index, max_raw);
                    slot.copy_from_slice(&SampleRecord::encode(pattern.channel.0, raw));
                    sample_index = sample_index.wrapping_add(1);
                }
                // A hardware backend would yield to a consumer the callback
                // woke; there is no one to wake here.
                let _ = handler(Frame::new(&buf));
                std::thread::sleep(frame_interval);
            }
        });

        self.worker = Some(worker);
        info!(
            "Simulated continuous conversion started: channel {} at {} Hz",
            pattern.channel.0, self.sample_freq_hz
        );
        Ok(())
    }

    fn stop(&mut self) -> Result<(), DriverError> {
        if self.worker.is_none() {
            return Ok(());
        }
        self.join_worker();
        info!("Simulated continuous conversion stopped");
        Ok(())
    }

    fn release(mut self) -> Result<(), DriverError> {
        self.join_worker();
        debug!("Simulated acquisition handle released");
        Ok(())
    }
}

impl Drop for SimulatedHandle {
    fn drop(&mut self) {
        self.join_worker();
    }
}

/// Triangle wave over the full raw scale, one period every
/// `WAVE_PERIOD_SAMPLES` samples
fn triangle_sample(index: u64, max_raw: u16) -> u16 {
    let phase = index % WAVE_PERIOD_SAMPLES;
    let half = WAVE_PERIOD_SAMPLES / 2;
    let position = if phase < half { phase } else { WAVE_PERIOD_SAMPLES - phase };
    ((position * u64::from(max_raw)) / half) as u16
}
