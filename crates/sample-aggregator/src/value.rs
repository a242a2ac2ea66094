//! Shared Latest-Value Slot

use std::sync::atomic::{AtomicU32, Ordering};

/// The most recent per-frame average, shared between the frame handler
/// (the single writer) and any number of readers.
///
/// The slot is one machine word wide, so a reader always observes either
/// the previous value or the next one, never a torn mix of both. Relaxed
/// ordering suffices: readers only need some recent value, not an ordering
/// relationship with any other memory.
#[derive(Debug, Default)]
pub struct LatestValue {
    raw: AtomicU32,
}

impl LatestValue {
    /// New slot holding zero, the value served before any frame arrives
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value; wait-free, callable from any context
    pub fn get(&self) -> u32 {
        self.raw.load(Ordering::Relaxed)
    }

    /// Replace the value. Only the frame handler writes here.
    pub(crate) fn store(&self, value: u32) {
        self.raw.store(value, Ordering::Relaxed);
    }
}
