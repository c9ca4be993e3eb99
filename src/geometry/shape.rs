use crate::geometry::AABB;
use crate::math::{Point, Real, Vector};

/// The unique identifier of a shape.
///
/// Identifiers are assigned monotonically by a
/// [`ShapeSet`](crate::geometry::ShapeSet) and are never reused.
pub type ShapeId = u32;

/// A single stationary or moving shape tracked by the broad-phase detectors.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Shape {
    /// The unique identifier of this shape, assigned when it is inserted
    /// into a [`ShapeSet`](crate::geometry::ShapeSet).
    pub id: ShapeId,
    /// The world-space position of the center of this shape.
    pub position: Point<Real>,
    /// The orientation of this shape, in degrees.
    ///
    /// Irrelevant to broad-phase detection; carried for the motion
    /// integrator driving the simulation.
    pub rotation: Real,
    /// The side length of the square bounding extent of this shape.
    pub scale: Real,
    /// The linear velocity of this shape. Irrelevant to broad-phase
    /// detection.
    pub velocity: Vector<Real>,
    /// The angular speed of this shape, in degrees per second. Irrelevant
    /// to broad-phase detection.
    pub angular_speed: Real,
}

impl Shape {
    /// Computes the AABB enclosing this shape at its current position.
    ///
    /// A non-positive `scale` yields a valid zero-area box located at
    /// `position` rather than an inverted one.
    pub fn compute_aabb(&self) -> AABB {
        let half = (self.scale * 0.5).max(0.0);
        AABB::from_half_extents(self.position, Vector::repeat(half))
    }
}

#[cfg(test)]
mod test {
    use crate::geometry::ShapeBuilder;
    use na::point;

    #[test]
    fn aabb_is_centered_with_half_extents() {
        let shape = ShapeBuilder::new(3.0).translation(1.0, -2.0).build();
        let aabb = shape.compute_aabb();
        assert_eq!(aabb.mins, point![-0.5, -3.5]);
        assert_eq!(aabb.maxs, point![2.5, -0.5]);
    }

    #[test]
    fn non_positive_scale_degenerates_to_a_point() {
        for scale in [0.0, -1.0] {
            let shape = ShapeBuilder::new(scale).translation(4.0, 5.0).build();
            let aabb = shape.compute_aabb();
            assert_eq!(aabb.mins, point![4.0, 5.0]);
            assert_eq!(aabb.maxs, point![4.0, 5.0]);
        }
    }
}
