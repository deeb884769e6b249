//! Storage backends for memoized resolution.

use std::collections::HashMap;
use std::hash::Hash;

/// A storage backend for resolved values.
///
/// This trait defines the interface for storing and retrieving cached values.
/// Implementations can use different data structures (Vec, HashMap, etc.)
/// based on the index type requirements.
///
/// # Contract
///
/// - `get` returns the stored value for an index, or `None` if the index has
///   never been resolved
/// - `insert` replaces any previous entry for the index
/// - entries are never evicted; a backend only grows
pub trait Backend<I, V> {
    /// Returns the cached value for the given index, if any.
    fn get(&self, index: &I) -> Option<&V>;

    /// Stores the value for the given index, replacing any previous entry.
    fn insert(&mut self, index: I, value: V);
}

/// A Vec-based backend for `usize` indices.
///
/// Efficient for dense, mostly-sequential integer indices starting from 0,
/// which is the access pattern of sequences whose rules reach strictly
/// earlier indices. The Vec automatically grows to accommodate new indices;
/// unresolved slots in between hold `None`.
#[derive(Debug)]
pub struct VecBackend<V> {
    data: Vec<Option<V>>,
}

impl<V> VecBackend<V> {
    /// Creates a new empty VecBackend.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates a new VecBackend with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }
}

impl<V> Default for VecBackend<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Backend<usize, V> for VecBackend<V> {
    fn get(&self, index: &usize) -> Option<&V> {
        self.data.get(*index).and_then(|slot| slot.as_ref())
    }

    fn insert(&mut self, index: usize, value: V) {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
        self.data[index] = Some(value);
    }
}

/// A HashMap-based backend for arbitrary hashable indices.
///
/// Supports any index type that implements `Hash + Eq`, including composite
/// tuple keys. Suitable for sparse indices or non-integer index types.
#[derive(Debug)]
pub struct HashMapBackend<I, V> {
    data: HashMap<I, V>,
}

impl<I, V> HashMapBackend<I, V> {
    /// Creates a new empty HashMapBackend.
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<I, V> Default for HashMapBackend<I, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, V> Backend<I, V> for HashMapBackend<I, V> {
    fn get(&self, index: &I) -> Option<&V> {
        self.data.get(index)
    }

    fn insert(&mut self, index: I, value: V) {
        self.data.insert(index, value);
    }
}
