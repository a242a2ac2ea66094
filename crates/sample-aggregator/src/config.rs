//! Acquisition Configuration

use crate::error::AcquisitionError;
use adc_continuous::{
    AdcChannel, Attenuation, BitWidth, BufferLayout, ChannelPattern, SAMPLE_RECORD_BYTES,
};
use serde::{Deserialize, Serialize};

/// Acquisition parameters, immutable for the lifetime of a session.
///
/// Changing any of these requires stopping and starting a new session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcquisitionConfig {
    /// Target channel; records from other channels are ignored
    pub channel: AdcChannel,
    /// Input attenuation ahead of conversion
    pub attenuation: Attenuation,
    /// Per-sample conversion resolution
    pub bit_width: BitWidth,
    /// Sampling frequency in Hz
    pub sample_freq_hz: u32,
    /// Bytes delivered per conversion frame
    pub frame_size: usize,
    /// Total conversion ring-buffer capacity in bytes
    pub max_buffer_size: usize,
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            channel: AdcChannel(7),
            attenuation: Attenuation::Db12,
            bit_width: BitWidth::Bits12,
            sample_freq_hz: 20_000,
            frame_size: 128,
            max_buffer_size: 512,
        }
    }
}

impl AcquisitionConfig {
    /// Check the invariants the driver relies on
    pub fn validate(&self) -> Result<(), AcquisitionError> {
        if self.sample_freq_hz == 0 {
            return Err(AcquisitionError::Config(
                "sample frequency must be greater than zero".to_string(),
            ));
        }
        if self.frame_size == 0 || self.frame_size % SAMPLE_RECORD_BYTES != 0 {
            return Err(AcquisitionError::Config(format!(
                "frame size {} must be a positive multiple of {} bytes",
                self.frame_size, SAMPLE_RECORD_BYTES
            )));
        }
        if self.frame_size > self.max_buffer_size {
            return Err(AcquisitionError::Config(format!(
                "frame size {} exceeds ring-buffer capacity {}",
                self.frame_size, self.max_buffer_size
            )));
        }
        Ok(())
    }

    /// Buffer geometry handed to the driver
    pub fn buffer_layout(&self) -> BufferLayout {
        BufferLayout {
            max_buffer_size: self.max_buffer_size,
            frame_size: self.frame_size,
        }
    }

    /// Conversion pattern handed to the driver
    pub fn pattern(&self) -> ChannelPattern {
        ChannelPattern {
            channel: self.channel,
            attenuation: self.attenuation,
            bit_width: self.bit_width,
        }
    }
}
