use crate::data::hashmap::HashSet;
use crate::geometry::{Shape, ShapeId};

pub(crate) fn sort2(a: ShapeId, b: ShapeId) -> (ShapeId, ShapeId) {
    assert_ne!(a, b);

    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Suppresses candidate pairs that must not reach the exact overlap test.
///
/// Two suppression rules apply: pairs where both shapes belong to the static
/// sequence (static shapes never move and are pre-validated non-overlapping
/// by contract), and unordered pairs already accepted during the current
/// pass (a shape inserted into several cells meets its neighbors several
/// times). Shared by the grid and hash detectors; the sweep-and-prune
/// detector performs no deduplication by construction.
pub struct PairFilter {
    static_ids: HashSet<ShapeId>,
    seen: HashSet<(ShapeId, ShapeId)>,
}

impl PairFilter {
    /// Creates an empty filter.
    pub fn new() -> Self {
        Self {
            static_ids: HashSet::default(),
            seen: HashSet::default(),
        }
    }

    /// Resets the filter for a new detection pass over the given static
    /// sequence.
    pub fn begin_pass(&mut self, statics: &[Shape]) {
        self.static_ids.clear();
        self.static_ids.extend(statics.iter().map(|s| s.id));
        self.seen.clear();
    }

    /// Tests whether the unordered pair `(a, b)` should proceed to the exact
    /// overlap test, recording it as seen when it does.
    pub fn accept(&mut self, a: ShapeId, b: ShapeId) -> bool {
        if self.static_ids.contains(&a) && self.static_ids.contains(&b) {
            return false;
        }

        self.seen.insert(sort2(a, b))
    }
}

impl Default for PairFilter {
    fn default() -> Self {
        Self::new()
    }
}
