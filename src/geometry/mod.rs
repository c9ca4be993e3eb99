//! Structures related to geometry: shapes, bounding boxes, and the
//! broad-phase detectors.

pub use self::aabb::AABB;
pub use self::broad_phase::{BroadPhase, WorldExtent};
pub use self::broad_phase_grid::UniformGrid;
pub use self::broad_phase_hash::SpatialHash;
pub use self::broad_phase_sap::SweepAndPrune;
pub use self::pair_filter::PairFilter;
pub use self::shape::{Shape, ShapeId};
pub use self::shape_set::{ShapeBuilder, ShapeSet};

mod aabb;
mod broad_phase;
mod broad_phase_grid;
mod broad_phase_hash;
mod broad_phase_sap;
mod pair_filter;
mod shape;
mod shape_set;
