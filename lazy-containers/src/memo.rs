//! Memoized get-or-compute resolution shared by both container kinds.

use std::cell::{Cell, RefCell};
use std::marker::PhantomData;

use crate::backend::Backend;
use crate::error::{Error, Result};

/// Depth at which an in-flight resolution is abandoned with
/// [`Error::RecursionExceeded`].
///
/// The counter is per resolver instance and counts cache misses currently
/// being resolved, so a recurrence that keeps requiring its own value before
/// reaching a cached base case fails once this many of its resolutions are
/// in flight at the same time. The limit also bounds how deep a well-founded
/// chain can be resolved in a single call; requesting shallower entries
/// first, or iterating a sequence in order, stages the cache so that later
/// calls stay flat.
pub const RECURSION_LIMIT: usize = 512;

/// A memoizing resolver: a per-container cache plus the get-or-compute
/// protocol.
///
/// `Memo` provides memoization for recursive computations where values may
/// depend on other values of the same or a different container. Each value
/// is resolved at most once; a cached hit never re-invokes the resolution
/// procedure.
///
/// # Type Parameters
///
/// - `I`: Index type (must implement `Clone`)
/// - `V`: Value type (must implement `Clone`)
/// - `B`: Backend storage type (must implement `Backend<I, V>`)
///
/// # Example
///
/// ```rust
/// use lazy_containers::{Memo, VecBackend};
///
/// let memo: Memo<usize, u64, _> = Memo::new(VecBackend::new());
/// assert_eq!(memo.get_or_resolve(&3, || Ok(9)).unwrap(), 9);
/// // Cached now: the closure is not consulted again.
/// assert_eq!(memo.get_or_resolve(&3, || Ok(0)).unwrap(), 9);
/// ```
pub struct Memo<I, V, B> {
    backend: RefCell<B>,
    depth: Cell<usize>,
    _phantom: PhantomData<(I, V)>,
}

impl<I, V, B> Memo<I, V, B>
where
    I: Clone,
    V: Clone,
    B: Backend<I, V>,
{
    /// Creates a new resolver over the given storage backend.
    pub fn new(backend: B) -> Self {
        Self {
            backend: RefCell::new(backend),
            depth: Cell::new(0),
            _phantom: PhantomData,
        }
    }

    /// Stores a value directly, replacing any previous entry for the index.
    ///
    /// Used to pre-populate explicit prefixes and for point assignment.
    pub fn seed(&self, index: I, value: V) {
        self.backend.borrow_mut().insert(index, value);
    }

    /// Returns the cached value for the index, or runs `resolve`, caches its
    /// result and returns it.
    ///
    /// `resolve` may recursively request other entries of this or any other
    /// container; no borrow is held while it runs. A failed resolution
    /// stores nothing, so a later call re-attempts it. Re-entrant requests
    /// for the same still-unresolved index are not detected as cycles; they
    /// recurse until [`RECURSION_LIMIT`] in-flight resolutions accumulate
    /// and the call fails with [`Error::RecursionExceeded`].
    pub fn get_or_resolve<F>(&self, index: &I, resolve: F) -> Result<V>
    where
        F: FnOnce() -> Result<V>,
    {
        let cached = self.backend.borrow().get(index).cloned();
        if let Some(value) = cached {
            return Ok(value);
        }

        let depth = self.depth.get();
        if depth >= RECURSION_LIMIT {
            return Err(Error::RecursionExceeded(RECURSION_LIMIT));
        }
        self.depth.set(depth + 1);
        let resolved = resolve();
        self.depth.set(self.depth.get() - 1);
        let value = resolved?;

        let mut backend = self.backend.borrow_mut();
        // A nested resolution may have stored this index already; the first
        // stored value wins.
        if let Some(stored) = backend.get(index).cloned() {
            return Ok(stored);
        }
        backend.insert(index.clone(), value.clone());
        Ok(value)
    }
}
