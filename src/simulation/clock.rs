//! Simulated time.

use serde::Serialize;

/// Elapsed simulated time and accepted step count.
///
/// Only moves forward, one accepted step at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct SimulationClock {
    time: f64,
    steps: usize,
}

impl SimulationClock {
    /// Clock at `t = 0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time [s].
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Number of accepted steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Record an accepted step ending at `time`.
    pub fn advance_to(&mut self, time: f64) {
        debug_assert!(time >= self.time, "clock cannot run backwards");
        self.time = time;
        self.steps += 1;
    }
}
