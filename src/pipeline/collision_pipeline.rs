//! Pipeline running one broad-phase detection pass per simulation tick.

use crate::counters::Counters;
use crate::geometry::{
    BroadPhase, ShapeSet, SpatialHash, SweepAndPrune, UniformGrid, WorldExtent,
};
use crate::math::Real;
use crate::pipeline::{BroadPhaseStrategy, DetectionParameters};

/// The collision pipeline, responsible for running the active broad-phase
/// detector once per simulation tick.
///
/// The pipeline owns one instance of every detector so a driver can switch
/// strategies between ticks without losing the detectors' internal
/// allocations. Positions are never mutated here: the external driver
/// integrates motion and replaces the dynamic snapshot of the [`ShapeSet`]
/// before each call to [`CollisionPipeline::step`].
pub struct CollisionPipeline {
    /// The performance counters of this pipeline.
    pub counters: Counters,
    params: DetectionParameters,
    grid: UniformGrid,
    hash: SpatialHash,
    sap: SweepAndPrune,
    time: Real,
}

impl CollisionPipeline {
    /// Creates a pipeline with the given parameters.
    ///
    /// `extent` seeds the uniform grid; it is refreshed from the value
    /// passed to every [`CollisionPipeline::step`] call afterwards.
    pub fn new(params: DetectionParameters, extent: WorldExtent) -> Self {
        Self {
            counters: Counters::new(false),
            params,
            grid: UniformGrid::new(params.cell_size, extent),
            hash: SpatialHash::new(params.cell_size),
            sap: SweepAndPrune::new(),
            time: 0.0,
        }
    }

    /// The currently active strategy.
    pub fn strategy(&self) -> BroadPhaseStrategy {
        self.params.strategy
    }

    /// Selects the strategy executed by subsequent [`CollisionPipeline::step`] calls.
    pub fn set_strategy(&mut self, strategy: BroadPhaseStrategy) {
        self.params.strategy = strategy;
    }

    /// Changes the cell size used by the grid and hash detectors.
    ///
    /// # Panics
    /// Panics if `cell_size` is not strictly positive.
    pub fn set_cell_size(&mut self, cell_size: Real) {
        self.params.cell_size = cell_size;
        self.grid.set_cell_size(cell_size);
        self.hash.set_cell_size(cell_size);
    }

    /// The simulated time accumulated by `step` calls, in seconds.
    pub fn time(&self) -> Real {
        self.time
    }

    /// The uniform-grid detector (for debug overlays).
    pub fn grid(&self) -> &UniformGrid {
        &self.grid
    }

    /// The spatial-hash detector (for debug overlays).
    pub fn spatial_hash(&self) -> &SpatialHash {
        &self.hash
    }

    /// Runs one detection tick and returns the number of overlapping shape
    /// pairs reported by the active detector.
    ///
    /// `dt` is the simulated timestep of this tick; it only advances the
    /// pipeline clock, since all shapes are treated as static boxes at a
    /// single instant. An unassigned shape set yields 0 and a
    /// warning-level log notice rather than a panic.
    pub fn step(&mut self, dt: Real, extent: WorldExtent, shapes: &ShapeSet) -> usize {
        self.counters.reset();
        self.counters.step_started();
        self.time += dt;

        let Some((statics, dynamics)) = shapes.snapshot() else {
            log::warn!("shape sequences not assigned, skipping detection pass");
            self.counters.step_completed();
            return 0;
        };

        self.counters.detection_started();
        let count = match self.params.strategy {
            BroadPhaseStrategy::UniformGrid => {
                self.grid.set_extent(extent);
                self.grid.detect(statics, dynamics)
            }
            BroadPhaseStrategy::SpatialHash => self.hash.detect(statics, dynamics),
            BroadPhaseStrategy::SweepAndPrune => self.sap.detect(statics, dynamics),
        };
        self.counters.detection_completed();

        self.counters.set_ncollision_pairs(count);
        self.counters.step_completed();
        count
    }
}
