//! Arbitrary-key lazy mappings defined by a recurrence function.

use std::hash::Hash;
use std::rc::Rc;

use crate::backend::HashMapBackend;
use crate::error::Result;
use crate::memo::Memo;
use crate::ops::{BinOp, Element};

/// A recurrence: given the mapping itself and a key, produce the value.
type RecurrenceFn<K, V> = Rc<dyn Fn(&LazyMap<K, V>, &K) -> Result<V>>;

/// A lazily-computed mapping over an arbitrary hashable key space.
///
/// A `LazyMap` is defined by a single recurrence function supplied at
/// construction. On the first request for a key, the recurrence runs with
/// the mapping itself as an argument, so it may request other keys
/// (including keys closer to a base case) and the shared cache memoizes
/// every intermediate result. The key set is exactly the set of keys ever
/// requested, directly or recursively.
///
/// Like [`LazySeq`](crate::LazySeq), a `LazyMap` is a cheap
/// cloneable handle; clones share the same container.
///
/// Composite keys such as tuples encode multi-dimensional recurrences:
///
/// ```rust
/// use lazy_containers::LazyMap;
///
/// // Steps to reach 1 in the Collatz iteration.
/// let collatz = LazyMap::new(|steps, n: &u64| {
///     if *n <= 1 {
///         Ok(0)
///     } else if n % 2 == 0 {
///         Ok(1 + steps.get(&(n / 2))?)
///     } else {
///         Ok(1 + steps.get(&(3 * n + 1))?)
///     }
/// });
/// assert_eq!(collatz.get(&27).unwrap(), 111);
/// ```
pub struct LazyMap<K, V> {
    inner: Rc<MapInner<K, V>>,
}

impl<K, V> Clone for LazyMap<K, V> {
    fn clone(&self) -> Self {
        LazyMap {
            inner: Rc::clone(&self.inner),
        }
    }
}

struct MapInner<K, V> {
    memo: Memo<K, V, HashMapBackend<K, V>>,
    def: MapDef<K, V>,
}

/// How a mapping's values are defined: a user recurrence for primary
/// mappings, or one of the closed set of elementwise combinations for
/// derived ones. Every variant resolves through the mapping's own cache.
enum MapDef<K, V> {
    Recurrence(RecurrenceFn<K, V>),
    Zip {
        lhs: LazyMap<K, V>,
        rhs: LazyMap<K, V>,
        op: BinOp,
    },
    ZipScalar {
        src: LazyMap<K, V>,
        scalar: V,
        op: BinOp,
    },
}

impl<K, V> LazyMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Element,
{
    /// Creates a mapping from a recurrence function.
    ///
    /// The cache starts empty; the function receives the mapping itself so
    /// it can make recursive lookups. Errors returned by the recurrence
    /// surface to the caller of [`get`](Self::get) and are not cached, so a
    /// later request for the same key re-attempts resolution.
    pub fn new(recurrence: impl Fn(&LazyMap<K, V>, &K) -> Result<V> + 'static) -> Self {
        Self::with_def(MapDef::Recurrence(Rc::new(recurrence)))
    }

    fn with_def(def: MapDef<K, V>) -> Self {
        LazyMap {
            inner: Rc::new(MapInner {
                memo: Memo::new(HashMapBackend::new()),
                def,
            }),
        }
    }

    pub(crate) fn zip(lhs: Self, rhs: Self, op: BinOp) -> Self {
        Self::with_def(MapDef::Zip { lhs, rhs, op })
    }

    pub(crate) fn zip_scalar(src: Self, scalar: V, op: BinOp) -> Self {
        Self::with_def(MapDef::ZipScalar { src, scalar, op })
    }

    /// Returns the value for `key`, resolving and caching it if needed.
    ///
    /// The recurrence runs at most once per key; an ill-founded definition
    /// fails with [`Error::RecursionExceeded`](crate::Error) once too many
    /// of its resolutions are in flight.
    pub fn get(&self, key: &K) -> Result<V> {
        self.inner.memo.get_or_resolve(key, || self.resolve(key))
    }

    fn resolve(&self, key: &K) -> Result<V> {
        match &self.inner.def {
            MapDef::Recurrence(f) => f(self, key),
            MapDef::Zip { lhs, rhs, op } => Ok(op.apply(lhs.get(key)?, rhs.get(key)?)),
            MapDef::ZipScalar { src, scalar, op } => Ok(op.apply(src.get(key)?, scalar.clone())),
        }
    }

    /// Seeds a key with an explicit value, overwriting any cached entry.
    ///
    /// Seeding base cases lets a recurrence be written without them:
    ///
    /// ```rust
    /// use lazy_containers::LazyMap;
    ///
    /// let fib = LazyMap::new(|fib, n: &u64| {
    ///     Ok(fib.get(&(n - 1))? + fib.get(&(n - 2))?)
    /// });
    /// fib.set(0, 0u64);
    /// fib.set(1, 1);
    /// assert_eq!(fib.get(&12).unwrap(), 144);
    /// ```
    pub fn set(&self, key: K, value: V) {
        self.inner.memo.seed(key, value);
    }
}
