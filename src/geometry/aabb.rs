use crate::math::{Point, Real, Vector};

/// An axis-aligned bounding box.
///
/// The ordering invariant `mins.x <= maxs.x && mins.y <= maxs.y` holds for
/// every AABB built by this crate. Zero-area boxes (`mins == maxs`) are
/// valid.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct AABB {
    /// The smallest corner of the box.
    pub mins: Point<Real>,
    /// The largest corner of the box.
    pub maxs: Point<Real>,
}

impl AABB {
    /// Creates a new AABB from its two extremal corners.
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Self {
        Self { mins, maxs }
    }

    /// Creates a new AABB from its center and its half side lengths.
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Tests whether this AABB intersects `other`.
    ///
    /// The extents are treated as closed intervals on both axes: boxes whose
    /// edges merely touch do intersect. This predicate is the single
    /// ground-truth confirmation test shared by all the broad-phase
    /// detectors.
    pub fn intersects(&self, other: &AABB) -> bool {
        self.mins.x <= other.maxs.x
            && self.maxs.x >= other.mins.x
            && self.mins.y <= other.maxs.y
            && self.maxs.y >= other.mins.y
    }
}

#[cfg(test)]
mod test {
    use super::AABB;
    use na::{point, vector};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    fn random_aabb(rng: &mut Pcg64) -> AABB {
        let center = point![rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)];
        let half = vector![rng.gen_range(0.0..2.0), rng.gen_range(0.0..2.0)];
        AABB::from_half_extents(center, half)
    }

    #[test]
    fn intersects_is_symmetric() {
        let mut rng = Pcg64::seed_from_u64(0);

        for _ in 0..1000 {
            let a = random_aabb(&mut rng);
            let b = random_aabb(&mut rng);
            assert_eq!(a.intersects(&b), b.intersects(&a));
        }
    }

    #[test]
    fn touching_edges_intersect() {
        // Unit boxes centered at (0, 0) and (1, 0): the shared edge at
        // x = 0.5 counts as an intersection.
        let a = AABB::new(point![-0.5, -0.5], point![0.5, 0.5]);
        let b = AABB::new(point![0.5, -0.5], point![1.5, 0.5]);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_corners_intersect() {
        let a = AABB::new(point![0.0, 0.0], point![1.0, 1.0]);
        let b = AABB::new(point![1.0, 1.0], point![2.0, 2.0]);
        assert!(a.intersects(&b));
    }

    #[test]
    fn disjoint_boxes_do_not_intersect() {
        let a = AABB::new(point![-0.5, -0.5], point![0.5, 0.5]);
        let b = AABB::new(point![9.5, -0.5], point![10.5, 0.5]);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn zero_area_box_intersects_its_container() {
        let point_box = AABB::new(point![0.25, 0.25], point![0.25, 0.25]);
        let container = AABB::new(point![0.0, 0.0], point![1.0, 1.0]);
        let elsewhere = AABB::new(point![2.0, 2.0], point![3.0, 3.0]);
        assert!(point_box.intersects(&container));
        assert!(!point_box.intersects(&elsewhere));
    }
}
