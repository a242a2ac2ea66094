//! Driver Interface
//!
//! The seam between the aggregation layer and whatever produces conversion
//! frames: real hardware behind FFI, or the in-process simulator.

use crate::error::DriverError;
use crate::frame::Frame;
use crate::{BufferLayout, ChannelPattern};

/// Per-frame callback, invoked by the driver in its producer context.
///
/// The producer context cannot be preempted by ordinary work, so the
/// callback body must not block, allocate, or perform I/O, and must return
/// promptly. The return value reports whether the callback made a
/// higher-priority consumer runnable and wants an immediate reschedule;
/// pull-based consumers always return `false`.
pub type FrameHandler = Box<dyn FnMut(Frame<'_>) -> bool + Send>;

/// Factory for acquisition sessions
pub trait SamplingDriver: Send {
    /// Session handle type produced by this driver
    type Handle: AcquisitionHandle;

    /// Allocate conversion buffers and create a handle for one session
    fn create_handle(&self, layout: BufferLayout) -> Result<Self::Handle, DriverError>;
}

/// One continuous acquisition session.
///
/// Call order: `configure`, `register_frame_handler`, `start`, then `stop`
/// and `release`. `release` must succeed from any point in that sequence,
/// including right after a failed stage, so callers can unwind a partially
/// set up session without leaking buffers.
pub trait AcquisitionHandle: Send {
    /// Apply the channel pattern and sampling frequency
    fn configure(&mut self, pattern: ChannelPattern, sample_freq_hz: u32) -> Result<(), DriverError>;

    /// Install the frame-ready callback
    fn register_frame_handler(&mut self, handler: FrameHandler) -> Result<(), DriverError>;

    /// Begin continuous conversion; frames arrive in completion order
    fn start(&mut self) -> Result<(), DriverError>;

    /// Halt conversion; no frames arrive after this returns
    fn stop(&mut self) -> Result<(), DriverError>;

    /// Tear the session down and free its conversion buffers
    fn release(self) -> Result<(), DriverError>;
}
