//! Data structures shared by the broad-phase detectors.

pub mod hashmap;
