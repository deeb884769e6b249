//! Self-Referential Lazy Containers
//!
//! This crate provides two container types whose elements are defined by
//! recurrence rules instead of eager computation:
//!
//! - [`LazySeq`]: an integer-indexed sequence with an explicit finite prefix
//!   and installable *extension rules* that define every later index in
//!   terms of another (possibly derived, possibly the same) container
//! - [`LazyMap`]: an arbitrary-key mapping defined by a single recurrence
//!   function that may call back into the mapping itself
//!
//! Both kinds resolve elements on first access through a shared
//! get-or-compute protocol ([`Memo`]): a cache probe, a single invocation of
//! the container's resolution rule on a miss, and a store before returning.
//! Resolution rules may recursively request other elements of the same or a
//! different container; the cache makes recursive definitions cost linear
//! work instead of exponential.
//!
//! # Sequences
//!
//! Arithmetic operators build *derived* containers that reference their
//! operands without copying them, so a rule can be an expression over the
//! sequence being defined:
//!
//! ```rust
//! use lazy_containers::LazySeq;
//!
//! // Fibonacci: explicit [0, 1], then "myself shifted by one, plus myself"
//! // from index 2 onward.
//! let fib = LazySeq::new([0u64, 1]);
//! let rule = &fib.shifted(1) + &fib;
//! fib.set_extension(2, &rule);
//!
//! assert_eq!(fib.get(7).unwrap(), 13);
//! assert_eq!(fib.iter().take(8).collect::<Vec<_>>(), vec![0, 1, 1, 2, 3, 5, 8, 13]);
//! ```
//!
//! # Mappings
//!
//! A mapping's recurrence receives the mapping itself, enabling memoized
//! recursion over arbitrary hashable keys, including tuples:
//!
//! ```rust
//! use lazy_containers::LazyMap;
//!
//! let collatz = LazyMap::new(|steps, n: &u64| {
//!     if *n <= 1 {
//!         Ok(0)
//!     } else if n % 2 == 0 {
//!         Ok(1 + steps.get(&(n / 2))?)
//!     } else {
//!         Ok(1 + steps.get(&(3 * n + 1))?)
//!     }
//! });
//!
//! assert_eq!(collatz.get(&93).unwrap(), 17);
//! // Derived mappings combine elementwise, with their own independent cache.
//! assert_eq!((&collatz + &collatz).get(&93).unwrap(), 34);
//! assert_eq!((&collatz + 3).get(&93).unwrap(), 20);
//! ```
//!
//! # Failure model
//!
//! All failures surface immediately to the caller of `get` as [`Error`];
//! nothing is swallowed or retried, and a failed resolution is not cached.
//! There is no cycle detection: a definition that requires its own value
//! before reaching a base case fails with [`Error::RecursionExceeded`] once
//! [`RECURSION_LIMIT`] of its resolutions are in flight:
//!
//! ```rust
//! use lazy_containers::{Error, LazyMap};
//!
//! let loops = LazyMap::<u32, u64>::new(|m, key: &u32| Ok(1 + m.get(key)?));
//! assert!(matches!(loops.get(&7), Err(Error::RecursionExceeded(_))));
//! ```
//!
//! The same limit bounds how deep a well-founded chain can resolve in one
//! call; iterating a sequence in order, or requesting shallower entries
//! first, stages the cache so arbitrarily deep entries stay reachable.
//!
//! # Concurrency
//!
//! Evaluation is single-threaded and cooperative; the call stack is the only
//! suspension mechanism. Containers are `Rc`-based handles and are not
//! `Send`/`Sync`, so concurrent use must be serialized externally by
//! construction.

mod backend;
mod error;
mod mapping;
mod memo;
mod ops;
mod sequence;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use error::{Error, Result};
pub use mapping::LazyMap;
pub use memo::{Memo, RECURSION_LIMIT};
pub use ops::Element;
pub use sequence::{Iter, LazySeq};
