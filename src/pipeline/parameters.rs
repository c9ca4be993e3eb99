use crate::math::Real;

/// The broad-phase strategy executed by the pipeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum BroadPhaseStrategy {
    /// A dense grid of buckets covering a bounded world extent.
    UniformGrid,
    /// An unbounded sparse map keyed by integer cell coordinates.
    SpatialHash,
    /// A sweep over an interval list sorted along the X axis.
    SweepAndPrune,
}

/// Parameters for a detection tick of the collision pipeline.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DetectionParameters {
    /// The edge length of the grid and hash cells (default: `1.5`).
    ///
    /// Must be strictly positive. The pair counts reported by the grid and
    /// hash detectors do not depend on this value; only their candidate
    /// enumeration cost does.
    pub cell_size: Real,
    /// The active broad-phase strategy (default:
    /// [`BroadPhaseStrategy::UniformGrid`]).
    pub strategy: BroadPhaseStrategy,
}

impl Default for DetectionParameters {
    fn default() -> Self {
        Self {
            cell_size: 1.5,
            strategy: BroadPhaseStrategy::UniformGrid,
        }
    }
}
