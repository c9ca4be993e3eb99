use crate::geometry::broad_phase::{collect_proxies, BroadPhaseProxy};
use crate::geometry::{BroadPhase, PairFilter, Shape, WorldExtent};
use crate::math::{Point, Real};

/// A broad-phase detector backed by a dense, bounded grid of buckets.
///
/// The grid covers an externally supplied [`WorldExtent`] with square cells
/// of side `cell_size`. Buckets live in a single flat row-major buffer
/// (`row * ncols + col`), reallocated only when the row or column count
/// changes; every tick merely clears and refills them.
///
/// Shapes whose AABB extends outside the extent are clamped onto the border
/// rows/columns. This folds unrelated far-away shapes into the same border
/// buckets, creating false adjacency that the exact overlap test then
/// rejects; the cost is wasted candidate tests, not wrong counts.
pub struct UniformGrid {
    cell_size: Real,
    extent: WorldExtent,
    nrows: usize,
    ncols: usize,
    buckets: Vec<Vec<u32>>,
    proxies: Vec<BroadPhaseProxy>, // Workspace
    filter: PairFilter,
}

impl UniformGrid {
    /// Creates a grid covering `extent` with square cells of side
    /// `cell_size`.
    ///
    /// # Panics
    /// Panics if `cell_size` is not strictly positive.
    pub fn new(cell_size: Real, extent: WorldExtent) -> Self {
        assert!(cell_size > 0.0, "cell_size must be strictly positive");

        let mut result = Self {
            cell_size,
            extent,
            nrows: 0,
            ncols: 0,
            buckets: Vec::new(),
            proxies: Vec::new(),
            filter: PairFilter::new(),
        };
        result.resize_to_extent();
        result
    }

    /// The edge length of one grid cell.
    pub fn cell_size(&self) -> Real {
        self.cell_size
    }

    /// The number of bucket rows (cells along the Y axis).
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// The number of bucket columns (cells along the X axis).
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Updates the covered world extent, reallocating the bucket buffer
    /// when the row or column count changes.
    pub fn set_extent(&mut self, extent: WorldExtent) {
        self.extent = extent;
        self.resize_to_extent();
    }

    /// Changes the cell size.
    ///
    /// # Panics
    /// Panics if `cell_size` is not strictly positive.
    pub fn set_cell_size(&mut self, cell_size: Real) {
        assert!(cell_size > 0.0, "cell_size must be strictly positive");
        self.cell_size = cell_size;
        self.resize_to_extent();
    }

    /// The grid coordinates (`x` = column, `y` = row) of every bucket
    /// holding at least one shape after the last detection pass. Consumed
    /// by debug overlays only.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Point<i32>> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(move |(i, _)| Point::new((i % self.ncols) as i32, (i / self.ncols) as i32))
    }

    fn resize_to_extent(&mut self) {
        let nrows = Self::cell_count(self.extent.height(), self.cell_size);
        let ncols = Self::cell_count(self.extent.width(), self.cell_size);

        if nrows != self.nrows || ncols != self.ncols {
            self.nrows = nrows;
            self.ncols = ncols;
            self.buckets = vec![Vec::new(); nrows * ncols];
        }
    }

    fn cell_count(span: Real, cell_size: Real) -> usize {
        if span <= 0.0 {
            0
        } else {
            (span / cell_size).ceil() as usize
        }
    }

    /// Maps a world-space point to `(row, col)`, clamped to the grid
    /// bounds. Must not be called on a grid with zero rows or columns.
    fn world_to_cell(&self, point: Point<Real>) -> (usize, usize) {
        let row = ((point.y - self.extent.min_y) / self.cell_size).floor() as i64;
        let col = ((point.x - self.extent.min_x) / self.cell_size).floor() as i64;
        let row = row.clamp(0, self.nrows as i64 - 1) as usize;
        let col = col.clamp(0, self.ncols as i64 - 1) as usize;
        (row, col)
    }

    fn insert(&mut self, proxy_index: u32) {
        let aabb = self.proxies[proxy_index as usize].aabb;
        let (row_min, col_min) = self.world_to_cell(aabb.mins);
        let (row_max, col_max) = self.world_to_cell(aabb.maxs);

        for row in row_min..=row_max {
            for col in col_min..=col_max {
                let index = row * self.ncols + col;
                self.buckets[index].push(proxy_index);
            }
        }
    }
}

impl BroadPhase for UniformGrid {
    fn detect(&mut self, statics: &[Shape], dynamics: &[Shape]) -> usize {
        if self.nrows == 0 || self.ncols == 0 {
            return 0;
        }

        for bucket in &mut self.buckets {
            bucket.clear();
        }

        collect_proxies(statics, dynamics, &mut self.proxies);
        for i in 0..self.proxies.len() {
            self.insert(i as u32);
        }

        self.filter.begin_pass(statics);

        let proxies = &self.proxies;
        let filter = &mut self.filter;
        let mut count = 0;

        for bucket in &self.buckets {
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
    use super::UniformGrid;
    use crate::geometry::{BroadPhase, ShapeBuilder, ShapeSet, WorldExtent};

    fn extent() -> WorldExtent {
        WorldExtent::new(-8.0, 8.0, -4.5, 4.5)
    }

    #[test]
    fn rows_and_cols_follow_the_extent() {
        let grid = UniformGrid::new(1.5, extent());
        assert_eq!(grid.ncols(), 11); // ceil(16 / 1.5)
        assert_eq!(grid.nrows(), 6); // ceil(9 / 1.5)
    }

    #[test]
    fn degenerate_extent_yields_no_cells_and_no_pairs() {
        let mut shapes = ShapeSet::new();
        shapes.insert_dynamic(ShapeBuilder::new(1.0).build());
        shapes.insert_dynamic(ShapeBuilder::new(1.0).translation(0.25, 0.0).build());

        for degenerate in [
            WorldExtent::new(0.0, 0.0, 0.0, 0.0),
            WorldExtent::new(1.0, -1.0, -1.0, 1.0),
        ] {
            let mut grid = UniformGrid::new(1.5, degenerate);
            assert_eq!(grid.nrows() * grid.ncols(), 0);
            assert_eq!(
                grid.detect(shapes.static_shapes(), shapes.dynamic_shapes()),
                0
            );
        }
    }

    #[test]
    fn pair_spanning_many_cells_is_counted_once() {
        let mut shapes = ShapeSet::new();
        shapes.insert_dynamic(ShapeBuilder::new(2.0).build());
        shapes.insert_dynamic(ShapeBuilder::new(2.0).translation(0.5, 0.5).build());

        // Cells much smaller than the shapes: both shapes cover a 5x5 cell
        // block and meet in many buckets.
        let mut grid = UniformGrid::new(0.5, extent());
        assert_eq!(
            grid.detect(shapes.static_shapes(), shapes.dynamic_shapes()),
            1
        );
    }

    #[test]
    fn static_pairs_are_not_reported() {
        let mut shapes = ShapeSet::new();
        shapes.insert_static(ShapeBuilder::new(1.0).build());
        shapes.insert_static(ShapeBuilder::new(1.0).translation(0.25, 0.0).build());

        let mut grid = UniformGrid::new(1.5, extent());
        assert_eq!(
            grid.detect(shapes.static_shapes(), shapes.dynamic_shapes()),
            0
        );
    }

    #[test]
    fn clamping_folds_outside_shapes_onto_the_border() {
        // Both shapes sit far outside the extent. They are folded onto the
        // same border bucket, but the exact test keeps them apart unless
        // they really overlap.
        let mut apart = ShapeSet::new();
        apart.insert_dynamic(ShapeBuilder::new(1.0).translation(20.0, 20.0).build());
        apart.insert_dynamic(ShapeBuilder::new(1.0).translation(30.0, 25.0).build());

        let mut grid = UniformGrid::new(1.5, extent());
        assert_eq!(
            grid.detect(apart.static_shapes(), apart.dynamic_shapes()),
            0
        );

        let mut touching = ShapeSet::new();
        touching.insert_dynamic(ShapeBuilder::new(1.0).translation(20.0, 20.0).build());
        touching.insert_dynamic(ShapeBuilder::new(1.0).translation(20.5, 20.0).build());

        assert_eq!(
            grid.detect(touching.static_shapes(), touching.dynamic_shapes()),
            1
        );
    }

    #[test]
    fn extent_change_reallocates_and_detection_still_works() {
        let mut shapes = ShapeSet::new();
        shapes.insert_dynamic(ShapeBuilder::new(1.0).build());
        shapes.insert_dynamic(ShapeBuilder::new(1.0).translation(0.5, 0.0).build());

        let mut grid = UniformGrid::new(1.5, extent());
        assert_eq!(
            grid.detect(shapes.static_shapes(), shapes.dynamic_shapes()),
            1
        );

        grid.set_extent(WorldExtent::new(-100.0, 100.0, -50.0, 50.0));
        assert_eq!(
            grid.detect(shapes.static_shapes(), shapes.dynamic_shapes()),
            1
        );
    }

    #[test]
    fn occupied_cells_reflect_the_last_pass() {
        let mut shapes = ShapeSet::new();
        shapes.insert_dynamic(ShapeBuilder::new(1.0).build());

        let mut grid = UniformGrid::new(1.5, extent());
        grid.detect(shapes.static_shapes(), shapes.dynamic_shapes());
        assert!(grid.occupied_cells().count() >= 1);
    }
}
