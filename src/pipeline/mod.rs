//! The per-tick detection pipeline and its parameters.

pub use self::collision_pipeline::CollisionPipeline;
pub use self::parameters::{BroadPhaseStrategy, DetectionParameters};

mod collision_pipeline;
mod parameters;
