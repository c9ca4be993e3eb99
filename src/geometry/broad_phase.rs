use crate::geometry::{Shape, ShapeId, AABB};
use crate::math::{Point, Real};

/// A broad-phase collision-detection strategy.
///
/// Implementations rebuild their internal index from scratch on every call:
/// no incremental state survives from one tick to the next, so a detector
/// may be handed a completely different snapshot every time.
pub trait BroadPhase {
    /// Runs one full detection pass over the given static and dynamic shape
    /// sequences and returns the number of distinct overlapping pairs.
    fn detect(&mut self, statics: &[Shape], dynamics: &[Shape]) -> usize;
}

/// The data extracted from one shape at the beginning of a detection pass.
#[derive(Copy, Clone, Debug)]
pub(crate) struct BroadPhaseProxy {
    pub id: ShapeId,
    pub aabb: AABB,
    pub is_static: bool,
}

/// Rebuilds the per-pass proxy list: statics first, then dynamics.
pub(crate) fn collect_proxies(
    statics: &[Shape],
    dynamics: &[Shape],
    out: &mut Vec<BroadPhaseProxy>,
) {
    out.clear();
    out.extend(statics.iter().map(|s| BroadPhaseProxy {
        id: s.id,
        aabb: s.compute_aabb(),
        is_static: true,
    }));
    out.extend(dynamics.iter().map(|s| BroadPhaseProxy {
        id: s.id,
        aabb: s.compute_aabb(),
        is_static: false,
    }));
}

/// Maps a world-space point to the integer coordinates of the cell
/// containing it, in the unbounded cell frame used by the spatial hash.
pub(crate) fn cell_key(point: Point<Real>, cell_size: Real) -> Point<i32> {
    (point / cell_size).coords.map(|e| e.floor() as i32).into()
}

/// The rectangular world region covered by the bounded uniform grid.
///
/// Typically recomputed by an external camera/viewport provider whenever the
/// render surface changes. Degenerate extents (zero or negative spans) are
/// valid inputs: the grid simply ends up with no cells.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct WorldExtent {
    /// The left edge of the region.
    pub min_x: Real,
    /// The right edge of the region.
    pub max_x: Real,
    /// The bottom edge of the region.
    pub min_y: Real,
    /// The top edge of the region.
    pub max_y: Real,
}

impl WorldExtent {
    /// Creates a new extent from its four edges.
    pub fn new(min_x: Real, max_x: Real, min_y: Real, max_y: Real) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// The horizontal span of this extent.
    pub fn width(&self) -> Real {
        self.max_x - self.min_x
    }

    /// The vertical span of this extent.
    pub fn height(&self) -> Real {
        self.max_y - self.min_y
    }
}

#[cfg(test)]
mod test {
    use super::{cell_key, WorldExtent};
    use na::point;

    #[test]
    fn cell_key_floors_toward_negative_infinity() {
        assert_eq!(cell_key(point![0.1, 0.9], 1.0), point![0, 0]);
        assert_eq!(cell_key(point![-0.1, 0.1], 1.0), point![-1, 0]);
        assert_eq!(cell_key(point![-3.0, 4.5], 1.5), point![-2, 3]);
    }

    #[test]
    fn extent_spans() {
        let extent = WorldExtent::new(-16.0, 16.0, -9.0, 9.0);
        assert_eq!(extent.width(), 32.0);
        assert_eq!(extent.height(), 18.0);

        let degenerate = WorldExtent::new(4.0, 4.0, 5.0, 3.0);
        assert_eq!(degenerate.width(), 0.0);
        assert!(degenerate.height() < 0.0);
    }
}
