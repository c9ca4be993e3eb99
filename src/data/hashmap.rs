//! Hash-map and hash-set aliases backed by a fast, platform-independent
//! hasher. Iteration order never reaches the public API of this crate, so a
//! non-deterministic-order map is fine everywhere.

pub use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
