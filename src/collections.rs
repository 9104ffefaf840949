use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;


/// Insertion-ordered map with fast hashing.
/// The insertion index doubles as a stable handle, so search nodes can
/// point at their parent by index instead of by reference.
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Sentinel parent index for the root of an ancestry chain
pub(crate) const NO_PARENT: usize = usize::MAX;
