//! Conversion Frame View

use crate::record::{SampleRecord, SAMPLE_RECORD_BYTES};
use std::slice::ChunksExact;

/// Borrowed view over one completed conversion frame.
///
/// The driver owns the underlying buffer and recycles it after the
/// frame-ready callback returns, so a frame is only valid inside that
/// callback. The borrow makes retaining one past the callback impossible;
/// anything needed later must be copied out.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    bytes: &'a [u8],
}

impl<'a> Frame<'a> {
    /// Wrap a completed conversion buffer
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Raw frame bytes
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Frame length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when the frame carries no bytes
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of whole records in the frame
    pub fn record_count(&self) -> usize {
        self.bytes.len() / SAMPLE_RECORD_BYTES
    }

    /// Iterate over the whole records in the frame. A trailing partial
    /// record, which a well-formed driver never delivers, is ignored.
    pub fn records(&self) -> Records<'a> {
        Records {
            chunks: self.bytes.chunks_exact(SAMPLE_RECORD_BYTES),
        }
    }
}

/// Iterator over the decoded records of a frame
#[derive(Debug, Clone)]
pub struct Records<'a> {
    chunks: ChunksExact<'a, u8>,
}

impl Iterator for Records<'_> {
    type Item = SampleRecord;

    fn next(&mut self) -> Option<SampleRecord> {
        self.chunks.next().map(|c| SampleRecord::decode([c[0], c[1]]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Records<'_> {}
