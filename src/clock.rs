use std::time::Duration;

/// Fixed-timestep gate: accumulates elapsed time and fires once the
/// threshold is reached, then starts over from zero.
#[derive(Clone, Debug)]
pub struct TickClock {
    threshold: Duration,
    accumulated: Duration,
}

impl TickClock {
    pub fn new(threshold: Duration) -> Self {
        TickClock { threshold, accumulated: Duration::ZERO }
    }

    /// Adds `dt` and returns true if a simulation step is due.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.accumulated += dt;
        if self.accumulated >= self.threshold {
            self.accumulated = Duration::ZERO;
            true
        } else {
            false
        }
    }
}
