//! # broadphase2d
//!
//! broadphase2d compares three broad-phase collision-detection strategies
//! running over the same population of moving and stationary 2D
//! axis-aligned shapes:
//! - a [`UniformGrid`](geometry::UniformGrid) of buckets covering a bounded
//!   world extent,
//! - an unbounded [`SpatialHash`](geometry::SpatialHash) keyed by integer
//!   cell coordinates,
//! - a [`SweepAndPrune`](geometry::SweepAndPrune) pass over an interval
//!   list sorted along the X axis.
//!
//! Every simulation tick, the active strategy consumes the same
//! static + dynamic shape snapshot, rebuilds its internal index from
//! scratch, and reports the number of overlapping shape pairs. The grid and
//! hash detectors confirm every candidate with the same closed-interval
//! AABB overlap test, so their counts always agree; the sweep-and-prune
//! detector deliberately keeps a known blind spot inherited from its
//! original formulation (see [`geometry::SweepAndPrune`]).
//!
//! The entry point is [`pipeline::CollisionPipeline::step`], invoked once
//! per tick by an external driver loop.

#![deny(bare_trait_objects)]
#![warn(missing_docs)]

pub extern crate nalgebra as na;
#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;

/// The string version of broadphase2d.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod counters;
pub mod data;
pub mod geometry;
pub mod pipeline;

/// Elementary mathematical entities (scalars, points, vectors).
pub mod math {
    use na::{Point2, Vector2};

    /// The scalar type used throughout this crate.
    pub type Real = f32;

    /// The dimension of the ambient space.
    pub const DIM: usize = 2;

    /// The point type.
    pub type Point<N> = Point2<N>;

    /// The vector type.
    pub type Vector<N> = Vector2<N>;
}

/// Prelude containing the common types defined by this crate.
pub mod prelude {
    pub use crate::geometry::*;
    pub use crate::math::*;
    pub use crate::pipeline::*;
    pub use na::{point, vector};
}
