use crate::data::hashmap::HashMap;
use crate::geometry::broad_phase::{cell_key, collect_proxies, BroadPhaseProxy};
use crate::geometry::{BroadPhase, PairFilter, Shape};
use crate::math::{Point, Real};

/// A broad-phase detector backed by an unbounded spatial hash.
///
/// Insertion and scanning work exactly like [`UniformGrid`]'s, but the
/// buckets live in an associative map keyed by integer cell coordinates in
/// the global frame: no world extent is needed, nothing is clamped, and
/// memory is proportional to the number of occupied cells rather than to
/// the world area. For any shape configuration and any positive cell size,
/// this detector reports the same pair count as the grid.
///
/// [`UniformGrid`]: crate::geometry::UniformGrid
pub struct SpatialHash {
    cell_size: Real,
    buckets: HashMap<Point<i32>, Vec<u32>>,
    proxies: Vec<BroadPhaseProxy>, // Workspace
    filter: PairFilter,
}

impl SpatialHash {
    /// Creates a spatial hash with square cells of side `cell_size`.
    ///
    /// # Panics
    /// Panics if `cell_size` is not strictly positive.
    pub fn new(cell_size: Real) -> Self {
        assert!(cell_size > 0.0, "cell_size must be strictly positive");

        Self {
            cell_size,
            buckets: HashMap::default(),
            proxies: Vec::new(),
            filter: PairFilter::new(),
        }
    }

    /// The edge length of one cell.
    pub fn cell_size(&self) -> Real {
        self.cell_size
    }

    /// Changes the cell size.
    ///
    /// # Panics
    /// Panics if `cell_size` is not strictly positive.
    pub fn set_cell_size(&mut self, cell_size: Real) {
        assert!(cell_size > 0.0, "cell_size must be strictly positive");
        self.cell_size = cell_size;
    }

    /// The coordinates of every cell holding at least one shape after the
    /// last detection pass. Consumed by debug overlays only.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Point<i32>> + '_ {
        self.buckets.keys().copied()
    }

    fn insert(&mut self, proxy_index: u32) {
        let aabb = self.proxies[proxy_index as usize].aabb;
        let c_min = cell_key(aabb.mins, self.cell_size);
        let c_max = cell_key(aabb.maxs, self.cell_size);

        for x in c_min.x..=c_max.x {
            for y in c_min.y..=c_max.y {
                self.buckets
                    .entry(Point::new(x, y))
                    .or_default()
                    .push(proxy_index);
            }
        }
    }
}

impl BroadPhase for SpatialHash {
    fn detect(&mut self, statics: &[Shape], dynamics: &[Shape]) -> usize {
        self.buckets.clear();

        collect_proxies(statics, dynamics, &mut self.proxies);
        for i in 0..self.proxies.len() {
            self.insert(i as u32);
        }

        self.filter.begin_pass(statics);

        let proxies = &self.proxies;
        let filter = &mut self.filter;
        let mut count = 0;

        for bucket in self.buckets.values() {
            for i in 0..bucket.len() {
                for j in (i + 1)..bucket.len() {
                    let pa = &proxies[bucket[i] as usize];
                    let pb = &proxies[bucket[j] as usize];

                    if !filter.accept(pa.id, pb.id) {
                        continue;
                    }

                    if pa.aabb.intersects(&pb.aabb) {
                        count += 1;
                    }
                }
            }
        }

        count
    }
}

#[cfg(test)]
mod test {
    use super::SpatialHash;
    use crate::geometry::{BroadPhase, ShapeBuilder, ShapeSet};

    #[test]
    fn overlap_in_negative_coordinates() {
        let mut shapes = ShapeSet::new();
        shapes.insert_dynamic(ShapeBuilder::new(1.0).translation(-10.2, -7.7).build());
        shapes.insert_dynamic(ShapeBuilder::new(1.0).translation(-10.5, -7.5).build());

        let mut hash = SpatialHash::new(1.5);
        assert_eq!(
            hash.detect(shapes.static_shapes(), shapes.dynamic_shapes()),
            1
        );
    }

    #[test]
    fn pair_spanning_many_cells_is_counted_once() {
        let mut shapes = ShapeSet::new();
        shapes.insert_dynamic(ShapeBuilder::new(2.0).build());
        shapes.insert_dynamic(ShapeBuilder::new(2.0).translation(0.5, 0.5).build());

        let mut hash = SpatialHash::new(0.5);
        assert_eq!(
            hash.detect(shapes.static_shapes(), shapes.dynamic_shapes()),
            1
        );
    }

    #[test]
    fn static_pairs_are_not_reported() {
        let mut shapes = ShapeSet::new();
        shapes.insert_static(ShapeBuilder::new(1.0).build());
        shapes.insert_static(ShapeBuilder::new(1.0).translation(0.25, 0.0).build());

        let mut hash = SpatialHash::new(1.5);
        assert_eq!(
            hash.detect(shapes.static_shapes(), shapes.dynamic_shapes()),
            0
        );
    }

    #[test]
    fn memory_tracks_occupied_cells_only() {
        let mut shapes = ShapeSet::new();
        shapes.insert_dynamic(ShapeBuilder::new(1.0).translation(1000.0, 1000.0).build());
        shapes.insert_dynamic(ShapeBuilder::new(1.0).translation(-1000.0, -1000.0).build());

        let mut hash = SpatialHash::new(1.0);
        hash.detect(shapes.static_shapes(), shapes.dynamic_shapes());

        // A unit shape covers at most a 2x2 cell block; two far-apart
        // shapes occupy at most 8 cells, not a 2000x2000 area.
        let occupied = hash.occupied_cells().count();
        assert!(occupied >= 2 && occupied <= 8);
    }
}
