//! Continuous Analog Sampling Driver
//!
//! Interface to a continuous-mode analog-to-digital converter. Once a
//! session is started the converter pushes fixed-size frames of raw
//! conversion records to a registered callback, in completion order.
//!
//! This crate provides:
//! - The conversion-record codec and the transient [`Frame`] view
//! - The [`SamplingDriver`] / [`AcquisitionHandle`] traits that concrete
//!   backends implement
//! - A thread-backed [`SimulatedDriver`] for running without hardware

mod driver;
mod error;
mod frame;
mod record;
mod sim;

pub use driver::{AcquisitionHandle, FrameHandler, SamplingDriver};
pub use error::DriverError;
pub use frame::{Frame, Records};
pub use record::{SampleRecord, MAX_CHANNEL_ID, MAX_RAW_VALUE, SAMPLE_RECORD_BYTES};
pub use sim::{SimulatedDriver, SimulatedHandle};

use serde::{Deserialize, Serialize};

/// Analog input channel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdcChannel(pub u8);

/// Input attenuation applied ahead of conversion, setting the usable
/// input voltage range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Attenuation {
    /// No attenuation, roughly 1.1 V full scale
    Db0,
    /// 2.5 dB, roughly 1.5 V full scale
    Db2p5,
    /// 6 dB, roughly 2.2 V full scale
    Db6,
    /// 12 dB, roughly 3.3 V full scale
    #[default]
    Db12,
}

/// Per-sample conversion resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BitWidth {
    Bits9,
    Bits10,
    Bits11,
    #[default]
    Bits12,
}

impl BitWidth {
    /// Resolution in bits
    pub fn bits(self) -> u8 {
        match self {
            BitWidth::Bits9 => 9,
            BitWidth::Bits10 => 10,
            BitWidth::Bits11 => 11,
            BitWidth::Bits12 => 12,
        }
    }

    /// Largest raw reading representable at this resolution
    pub fn max_raw(self) -> u16 {
        (1u16 << self.bits()) - 1
    }
}

/// Single-channel conversion pattern, fixed for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelPattern {
    /// Channel to convert
    pub channel: AdcChannel,
    /// Input attenuation
    pub attenuation: Attenuation,
    /// Conversion resolution
    pub bit_width: BitWidth,
}

/// Conversion buffer geometry for one acquisition session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferLayout {
    /// Total conversion ring-buffer capacity in bytes
    pub max_buffer_size: usize,
    /// Bytes per delivered frame, at most `max_buffer_size`
    pub frame_size: usize,
}
