use crate::counters::Timer;
use std::fmt::{Display, Formatter, Result};

/// Performance counters related to the broad-phase detection stage.
#[derive(Default, Clone, Copy)]
pub struct BroadPhaseCounters {
    /// Number of collision pairs reported by the last detection pass.
    pub ncollision_pairs: usize,
    /// Time spent running the active broad-phase detector.
    pub detection_time: Timer,
}

impl BroadPhaseCounters {
    /// Creates a new counter initialized to zero.
    pub fn new() -> Self {
        BroadPhaseCounters {
            ncollision_pairs: 0,
            detection_time: Timer::new(),
        }
    }

    /// Resets all the counters and timers.
    pub fn reset(&mut self) {
        self.ncollision_pairs = 0;
        self.detection_time.reset();
    }
}

impl Display for BroadPhaseCounters {
    fn fmt(&self, f: &mut Formatter) -> Result {
        writeln!(f, "Number of collision pairs: {}", self.ncollision_pairs)?;
        writeln!(f, "Detection time: {}", self.detection_time)
    }
}
