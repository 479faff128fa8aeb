//! A [`Timer`] that records requested delays instead of blocking.

use crate::bus::Timer;

/// Records every delay request.
#[derive(Debug, Clone, Default)]
pub struct RecordingTimer {
    delays: Vec<u32>,
}

impl RecordingTimer {
    /// Creates a timer with an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the requested delays in microseconds, in order.
    pub fn delays(&self) -> &[u32] {
        &self.delays
    }

    /// Returns the sum of all requested delays in microseconds.
    pub fn total_us(&self) -> u64 {
        self.delays.iter().map(|&us| u64::from(us)).sum()
    }
}

impl Timer for RecordingTimer {
    fn sleep_us(&mut self, us: u32) {
        self.delays.push(us);
    }
}
