//! Gravity timer - turns elapsed wall time into discrete gravity steps

use crate::types::GRAVITY_INTERVAL_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gravity {
    interval_ms: u32,
    accumulated_ms: u32,
}

impl Gravity {
    /// An interval of 0 is treated as 1ms.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Add `elapsed_ms` and return how many whole intervals completed.
    /// The remainder carries over to the next call.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
        let steps = self.accumulated_ms / self.interval_ms;
        self.accumulated_ms %= self.interval_ms;
        steps
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self::new(GRAVITY_INTERVAL_MS)
    }
}
