//! Conversion Record Codec
//!
//! One conversion result occupies a fixed-size little-endian word: the low
//! 12 bits carry the raw reading, the high 4 bits the source channel. The
//! layout is a property of the converter itself, not of any session config,
//! so frames can be decoded without knowing how the session was configured.

/// Size in bytes of one conversion record
pub const SAMPLE_RECORD_BYTES: usize = 2;

/// Largest raw reading a record can carry (12 data bits)
pub const MAX_RAW_VALUE: u16 = 0x0FFF;

/// Largest channel id a record can carry (4 channel bits)
pub const MAX_CHANNEL_ID: u8 = 0x0F;

/// One decoded conversion result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRecord {
    /// Source channel id
    pub channel: u8,
    /// Raw reading, within the configured bit width
    pub raw: u16,
}

impl SampleRecord {
    /// Decode a record from its wire bytes
    pub fn decode(bytes: [u8; SAMPLE_RECORD_BYTES]) -> Self {
        let word = u16::from_le_bytes(bytes);
        Self {
            channel: (word >> 12) as u8,
            raw: word & MAX_RAW_VALUE,
        }
    }

    /// Encode a record to its wire bytes, masking out-of-range fields to
    /// the layout's widths
    pub fn encode(channel: u8, raw: u16) -> [u8; SAMPLE_RECORD_BYTES] {
        let word = (u16::from(channel & MAX_CHANNEL_ID) << 12) | (raw & MAX_RAW_VALUE);
        word.to_le_bytes()
    }
}
