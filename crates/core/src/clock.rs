//! Tick clock - the cancelable periodic timer that drives `GameSession::tick`.
//!
//! The host feeds wall-clock milliseconds in and gets back how many ticks are
//! due. The clock is armed on session start and canceled on session finish;
//! it keeps running across pause/resume because ticks are no-ops while paused.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickClock {
    interval_ms: u32,
    accumulated_ms: u32,
    running: bool,
}

impl TickClock {
    /// Create a stopped clock. An interval of 0 is treated as 1ms.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
            running: false,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Arm the clock, discarding any partial interval.
    pub fn start(&mut self) {
        self.running = true;
        self.accumulated_ms = 0;
    }

    pub fn cancel(&mut self) {
        self.running = false;
        self.accumulated_ms = 0;
    }

    /// Feed elapsed wall-clock time; returns the number of ticks now due.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running {
            return 0;
        }
        let total = self.accumulated_ms.saturating_add(elapsed_ms);
        self.accumulated_ms = total % self.interval_ms;
        total / self.interval_ms
    }

    /// Milliseconds until the next tick is due (for poll timeouts).
    pub fn until_next_ms(&self) -> Option<u32> {
        self.running.then(|| self.interval_ms - self.accumulated_ms)
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(crate::types::TICK_MS)
    }
}
