use crate::data::hashmap::HashSet;
use crate::geometry::{Shape, ShapeId};
use crate::math::{Point, Real, Vector};

/// A builder for shapes inserted into a [`ShapeSet`].
#[derive(Copy, Clone, Debug)]
pub struct ShapeBuilder {
    position: Point<Real>,
    rotation: Real,
    scale: Real,
    velocity: Vector<Real>,
    angular_speed: Real,
}

impl ShapeBuilder {
    /// Starts building a shape whose square bounding extent has the given
    /// side length.
    pub fn new(scale: Real) -> Self {
        Self {
            position: Point::origin(),
            rotation: 0.0,
            scale,
            velocity: Vector::zeros(),
            angular_speed: 0.0,
        }
    }

    /// Sets the world-space position of the shape center.
    pub fn translation(mut self, tx: Real, ty: Real) -> Self {
        self.position = Point::new(tx, ty);
        self
    }

    /// Sets the initial orientation, in degrees.
    pub fn rotation(mut self, rotation: Real) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the linear velocity.
    pub fn linvel(mut self, vx: Real, vy: Real) -> Self {
        self.velocity = Vector::new(vx, vy);
        self
    }

    /// Sets the angular speed, in degrees per second.
    pub fn angvel(mut self, angular_speed: Real) -> Self {
        self.angular_speed = angular_speed;
        self
    }

    /// Builds the shape. Its identifier is a placeholder overwritten by the
    /// [`ShapeSet`] on insertion.
    pub fn build(&self) -> Shape {
        Shape {
            id: 0,
            position: self.position,
            rotation: self.rotation,
            scale: self.scale,
            velocity: self.velocity,
            angular_speed: self.angular_speed,
        }
    }
}

/// A registry of shapes partitioned into an immutable static sequence and a
/// dynamic sequence replaced wholesale every tick.
///
/// Identifiers are allocated monotonically and never reused, so uniqueness
/// across both sequences holds by construction for inserted shapes; the
/// wholesale-replacement path asserts it, since the snapshot is produced
/// outside the registry.
///
/// A freshly created set is *unassigned*: [`ShapeSet::snapshot`] returns
/// `None` until any ingestion operation has run, which is how a driver that
/// ticks before initialization is detected.
#[derive(Clone)]
pub struct ShapeSet {
    statics: Vec<Shape>,
    dynamics: Vec<Shape>,
    static_ids: HashSet<ShapeId>,
    next_id: ShapeId,
    assigned: bool,
}

impl ShapeSet {
    /// Creates an empty, unassigned shape set.
    pub fn new() -> Self {
        Self {
            statics: Vec::new(),
            dynamics: Vec::new(),
            static_ids: HashSet::default(),
            next_id: 0,
            assigned: false,
        }
    }

    fn alloc_id(&mut self) -> ShapeId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Inserts a shape into the static sequence and returns its identifier.
    pub fn insert_static(&mut self, shape: Shape) -> ShapeId {
        let mut shape = shape;
        shape.id = self.alloc_id();
        self.static_ids.insert(shape.id);
        self.statics.push(shape);
        self.assigned = true;
        shape.id
    }

    /// Inserts a shape into the dynamic sequence and returns its identifier.
    pub fn insert_dynamic(&mut self, shape: Shape) -> ShapeId {
        let mut shape = shape;
        shape.id = self.alloc_id();
        self.dynamics.push(shape);
        self.assigned = true;
        shape.id
    }

    /// Replaces the dynamic sequence wholesale with a new snapshot.
    ///
    /// Identifiers must be stable across ticks: the snapshot is expected to
    /// carry the ids assigned at insertion time, with only positions and
    /// kinematic fields updated by the external integrator.
    ///
    /// # Panics
    /// Panics if the snapshot repeats an identifier or reuses one owned by
    /// the static sequence.
    pub fn set_dynamic_snapshot(&mut self, snapshot: Vec<Shape>) {
        let mut seen = HashSet::default();
        for shape in &snapshot {
            assert!(
                !self.static_ids.contains(&shape.id),
                "dynamic shape {} reuses a static shape id",
                shape.id
            );
            assert!(
                seen.insert(shape.id),
                "duplicate shape id {} in dynamic snapshot",
                shape.id
            );
        }

        self.dynamics = snapshot;
        self.assigned = true;
    }

    /// The static shape sequence.
    pub fn static_shapes(&self) -> &[Shape] {
        &self.statics
    }

    /// The dynamic shape sequence.
    pub fn dynamic_shapes(&self) -> &[Shape] {
        &self.dynamics
    }

    /// The number of shapes across both sequences.
    pub fn len(&self) -> usize {
        self.statics.len() + self.dynamics.len()
    }

    /// `true` if this set contains no shapes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Both sequences, or `None` while the set has never been assigned.
    pub fn snapshot(&self) -> Option<(&[Shape], &[Shape])> {
        if self.assigned {
            Some((&self.statics, &self.dynamics))
        } else {
            None
        }
    }
}

impl Default for ShapeSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::{ShapeBuilder, ShapeSet};

    #[test]
    fn ids_are_monotonic_and_unique() {
        let mut shapes = ShapeSet::new();
        let a = shapes.insert_static(ShapeBuilder::new(1.0).build());
        let b = shapes.insert_dynamic(ShapeBuilder::new(1.0).build());
        let c = shapes.insert_static(ShapeBuilder::new(1.0).build());
        assert_eq!((a, b, c), (0, 1, 2));
        assert_eq!(shapes.len(), 3);
    }

    #[test]
    fn snapshot_is_none_until_assigned() {
        let mut shapes = ShapeSet::new();
        assert!(shapes.snapshot().is_none());

        shapes.insert_static(ShapeBuilder::new(1.0).build());
        assert!(shapes.snapshot().is_some());
    }

    #[test]
    fn dynamic_snapshot_replaces_wholesale() {
        let mut shapes = ShapeSet::new();
        shapes.insert_dynamic(ShapeBuilder::new(1.0).build());
        shapes.insert_dynamic(ShapeBuilder::new(1.0).translation(3.0, 0.0).build());

        let mut moved = shapes.dynamic_shapes().to_vec();
        moved[0].position.x += 1.0;
        shapes.set_dynamic_snapshot(moved);

        assert_eq!(shapes.dynamic_shapes().len(), 2);
        assert_eq!(shapes.dynamic_shapes()[0].position.x, 1.0);
        assert_eq!(shapes.dynamic_shapes()[0].id, 0);
    }

    #[test]
    #[should_panic(expected = "duplicate shape id")]
    fn duplicate_dynamic_ids_are_rejected() {
        let mut shapes = ShapeSet::new();
        let shape = ShapeBuilder::new(1.0).build();
        shapes.set_dynamic_snapshot(vec![shape, shape]);
    }

    #[test]
    #[should_panic(expected = "reuses a static shape id")]
    fn dynamic_id_shadowing_a_static_id_is_rejected() {
        let mut shapes = ShapeSet::new();
        shapes.insert_static(ShapeBuilder::new(1.0).build());

        let mut shadow = ShapeBuilder::new(1.0).build();
        shadow.id = 0;
        shapes.set_dynamic_snapshot(vec![shadow]);
    }
}
