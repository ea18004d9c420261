//! Fixed-interval periodic task
//!
//! Converts irregular wall-clock deltas into a whole number of fixed ticks.
//! Stopping the clock cancels pending time; nothing runs until it restarts.

/// Accumulator that turns elapsed time into fixed-interval ticks
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    /// Milliseconds per tick
    interval_ms: f64,
    /// Cap on ticks released by one `advance`
    max_substeps: u32,
    accumulator: f64,
    running: bool,
}

impl FixedTimestep {
    /// Create a stopped clock
    pub fn new(interval_ms: f64, max_substeps: u32) -> Self {
        Self {
            interval_ms,
            max_substeps,
            accumulator: 0.0,
            running: false,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start releasing ticks. The first tick is due immediately.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.accumulator = self.interval_ms;
        }
    }

    /// Stop and drop any accumulated time
    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator = 0.0;
    }

    /// Feed elapsed wall time; returns how many ticks are now due.
    ///
    /// Time beyond `max_substeps` ticks is discarded so a long stall (a
    /// backgrounded tab) doesn't replay minutes of simulation at once.
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        if !self.running || !elapsed_ms.is_finite() {
            return 0;
        }

        self.accumulator += elapsed_ms.max(0.0);

        let mut due = 0;
        while self.accumulator >= self.interval_ms && due < self.max_substeps {
            self.accumulator -= self.interval_ms;
            due += 1;
        }

        if due == self.max_substeps {
            self.accumulator = self.accumulator.min(self.interval_ms);
        }
        due
    }
}
