//! Counters for benchmarking the collision-detection pipeline.

use std::fmt::{Display, Formatter, Result};

pub use self::broad_phase_counters::BroadPhaseCounters;
pub use self::timer::Timer;

mod broad_phase_counters;
mod timer;

/// Aggregation of all the performance counters tracked by the pipeline.
///
/// Timers are compiled to no-ops unless the `profiler` feature is enabled.
#[derive(Clone, Copy)]
pub struct Counters {
    /// Whether these counters are enabled or not.
    pub enabled: bool,
    /// Timer for a whole tick.
    pub step_time: Timer,
    /// Counters of the broad-phase detection stage.
    pub bp: BroadPhaseCounters,
}

impl Counters {
    /// Creates a new set of counters initialized to zero.
    pub fn new(enabled: bool) -> Self {
        Counters {
            enabled,
            step_time: Timer::new(),
            bp: BroadPhaseCounters::new(),
        }
    }

    /// Enables all the counters.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Returns `true` if the counters are enabled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Disables all the counters.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Notify that the tick has started.
    pub fn step_started(&mut self) {
        if self.enabled {
            self.step_time.start();
        }
    }

    /// Notify that the tick has finished.
    pub fn step_completed(&mut self) {
        if self.enabled {
            self.step_time.pause();
        }
    }

    /// Total time spent for one tick, in milliseconds.
    pub fn step_time(&self) -> f64 {
        self.step_time.time()
    }

    /// Notify that the broad-phase detection has started.
    pub fn detection_started(&mut self) {
        if self.enabled {
            self.bp.detection_time.start();
        }
    }

    /// Notify that the broad-phase detection has finished.
    pub fn detection_completed(&mut self) {
        if self.enabled {
            self.bp.detection_time.pause();
        }
    }

    /// Time spent in the broad-phase detector during the last tick, in
    /// milliseconds.
    pub fn detection_time(&self) -> f64 {
        self.bp.detection_time.time()
    }

    /// Sets the number of collision pairs reported.
    pub fn set_ncollision_pairs(&mut self, n: usize) {
        self.bp.ncollision_pairs = n;
    }

    /// Resets all the counters and timers.
    pub fn reset(&mut self) {
        if self.enabled {
            self.step_time.reset();
            self.bp.reset();
        }
    }
}

impl Display for Counters {
    fn fmt(&self, f: &mut Formatter) -> Result {
        writeln!(f, "Total tick time: {}", self.step_time)?;
        self.bp.fmt(f)
    }
}

impl Default for Counters {
    fn default() -> Self {
        Self::new(false)
    }
}
