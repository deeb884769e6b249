//! Integer-indexed lazy sequences with installable extension rules.

use std::cell::RefCell;
use std::rc::Rc;

use crate::backend::VecBackend;
use crate::error::{Error, Result};
use crate::memo::Memo;
use crate::ops::{BinOp, Element};

/// A function defining sequence values relative to a rule start, with access
/// to the sequence being resolved for recursive lookups.
type SeqFn<T> = Rc<dyn Fn(&LazySeq<T>, usize) -> Result<T>>;

/// A lazily-extended, integer-indexed sequence.
///
/// A `LazySeq` is conceptually unbounded to the right. It starts from an
/// explicit finite prefix and grows through *extension rules*: each rule
/// `(start, source)` defines `value(i) = source.get(i - start)` for every
/// `i >= start` not covered by a later rule. Values are computed on first
/// access, cached in the sequence's private [`Memo`], and never recomputed.
///
/// `LazySeq` is a cheap cloneable handle; clones share the same container.
/// That is what allows a sequence to appear in its own extension rules,
/// giving self-referential definitions their natural form. A rule that
/// references its own container keeps it alive for the life of the program,
/// which matches the create-once, grow-only lifecycle of these containers.
///
/// # Example
///
/// The Peano numbers: an explicit `0`, then "myself plus one" from index 1
/// onward.
///
/// ```rust
/// use lazy_containers::LazySeq;
///
/// let peano = LazySeq::new([0u64]);
/// let successors = &peano + 1;
/// peano.set_extension(1, &successors);
///
/// assert_eq!(peano.get(0).unwrap(), 0);
/// assert_eq!(peano.get(15).unwrap(), 15);
/// ```
pub struct LazySeq<T> {
    inner: Rc<SeqInner<T>>,
}

impl<T> Clone for LazySeq<T> {
    fn clone(&self) -> Self {
        LazySeq {
            inner: Rc::clone(&self.inner),
        }
    }
}

struct SeqInner<T> {
    memo: Memo<usize, T, VecBackend<T>>,
    rules: RefCell<Vec<ExtensionRule<T>>>,
}

/// An installed extension rule: indices from `start` onward draw values from
/// `source`, offset by `start`.
struct ExtensionRule<T> {
    start: usize,
    source: SeqSource<T>,
}

impl<T: Clone> Clone for ExtensionRule<T> {
    fn clone(&self) -> Self {
        ExtensionRule {
            start: self.start,
            source: self.source.clone(),
        }
    }
}

/// What a rule draws its values from.
///
/// The derived-container variants (`Zip`, `ZipScalar`, `Shift`) are the
/// closed set of elementwise combinations; each derived sequence is an
/// ordinary `LazySeq` whose single rule carries one of these variants, so
/// derived sequences compose and can serve as rule sources themselves.
enum SeqSource<T> {
    /// Another container, possibly itself derived.
    Container(LazySeq<T>),
    /// A function of the sequence being resolved and the offset past the
    /// rule start.
    Fn(SeqFn<T>),
    /// Elementwise combination of two source sequences.
    Zip {
        lhs: LazySeq<T>,
        rhs: LazySeq<T>,
        op: BinOp,
    },
    /// Elementwise combination of a source sequence with a scalar.
    ZipScalar {
        src: LazySeq<T>,
        scalar: T,
        op: BinOp,
    },
    /// View of a source sequence shifted by a fixed amount.
    Shift { src: LazySeq<T>, by: i64 },
}

impl<T: Clone> Clone for SeqSource<T> {
    fn clone(&self) -> Self {
        match self {
            SeqSource::Container(src) => SeqSource::Container(src.clone()),
            SeqSource::Fn(f) => SeqSource::Fn(Rc::clone(f)),
            SeqSource::Zip { lhs, rhs, op } => SeqSource::Zip {
                lhs: lhs.clone(),
                rhs: rhs.clone(),
                op: *op,
            },
            SeqSource::ZipScalar { src, scalar, op } => SeqSource::ZipScalar {
                src: src.clone(),
                scalar: scalar.clone(),
                op: *op,
            },
            SeqSource::Shift { src, by } => SeqSource::Shift {
                src: src.clone(),
                by: *by,
            },
        }
    }
}

impl<T: Element> SeqSource<T> {
    /// Resolves the value `offset` positions past the owning rule's start.
    ///
    /// `seq` is the sequence being resolved, handed through so that `Fn`
    /// sources can look up other entries of it.
    fn resolve_at(&self, seq: &LazySeq<T>, offset: usize) -> Result<T> {
        match self {
            SeqSource::Container(source) => source.get(offset),
            SeqSource::Fn(f) => f(seq, offset),
            SeqSource::Zip { lhs, rhs, op } => Ok(op.apply(lhs.get(offset)?, rhs.get(offset)?)),
            SeqSource::ZipScalar { src, scalar, op } => {
                Ok(op.apply(src.get(offset)?, scalar.clone()))
            }
            SeqSource::Shift { src, by } => {
                let index = offset as i64 + by;
                if index < 0 {
                    return Err(Error::InvalidIndex(index));
                }
                src.get(index as usize)
            }
        }
    }
}

impl<T: Element> LazySeq<T> {
    /// Creates a sequence from an explicit ordered prefix.
    ///
    /// The cache is pre-populated at indices `0..len`; no extension rule is
    /// installed yet, so indices past the prefix fail with
    /// [`Error::IndexUndefined`] until [`set_extension`](Self::set_extension)
    /// is called.
    pub fn new(initial: impl IntoIterator<Item = T>) -> Self {
        let seq = Self::with_rules(Vec::new());
        for (index, value) in initial.into_iter().enumerate() {
            seq.inner.memo.seed(index, value);
        }
        seq
    }

    /// Creates a sequence defined by a function of itself and the index.
    ///
    /// The function receives the sequence handle, so it may request earlier
    /// entries recursively; each entry is still resolved at most once.
    ///
    /// ```rust
    /// use lazy_containers::LazySeq;
    ///
    /// let powers = LazySeq::from_fn(|p, i| {
    ///     if i == 0 { Ok(1u64) } else { Ok(p.get(i - 1)? * 2) }
    /// });
    /// assert_eq!(powers.get(10).unwrap(), 1024);
    /// ```
    pub fn from_fn(f: impl Fn(&LazySeq<T>, usize) -> Result<T> + 'static) -> Self {
        Self::derived(SeqSource::Fn(Rc::new(f)))
    }

    fn with_rules(rules: Vec<ExtensionRule<T>>) -> Self {
        LazySeq {
            inner: Rc::new(SeqInner {
                memo: Memo::new(VecBackend::new()),
                rules: RefCell::new(rules),
            }),
        }
    }

    /// Builds a derived sequence: its single rule covers every index.
    fn derived(source: SeqSource<T>) -> Self {
        Self::with_rules(vec![ExtensionRule { start: 0, source }])
    }

    pub(crate) fn zip(lhs: Self, rhs: Self, op: BinOp) -> Self {
        Self::derived(SeqSource::Zip { lhs, rhs, op })
    }

    pub(crate) fn zip_scalar(src: Self, scalar: T, op: BinOp) -> Self {
        Self::derived(SeqSource::ZipScalar { src, scalar, op })
    }

    /// Installs an extension rule: for every `i >= start` not covered by a
    /// later rule, `value(i) = source.get(i - start)`.
    ///
    /// A rule installed later fully shadows earlier rules for the indices it
    /// covers; indices below `start`, and indices already cached, keep
    /// whatever prefix or rule covered them.
    ///
    /// ```rust
    /// use lazy_containers::LazySeq;
    ///
    /// let base = LazySeq::new([100u64, 101, 102, 103]);
    /// let seq = LazySeq::new([0u64]);
    /// seq.set_extension(1, &base);
    /// assert_eq!(seq.get(3).unwrap(), base.get(2).unwrap());
    /// ```
    pub fn set_extension(&self, start: usize, source: &LazySeq<T>) {
        self.push_rule(start, SeqSource::Container(source.clone()));
    }

    /// Installs a function rule: for every `i >= start` not covered by a
    /// later rule, `value(i) = f(self, i - start)`.
    pub fn set_extension_fn(
        &self,
        start: usize,
        f: impl Fn(&LazySeq<T>, usize) -> Result<T> + 'static,
    ) {
        self.push_rule(start, SeqSource::Fn(Rc::new(f)));
    }

    fn push_rule(&self, start: usize, source: SeqSource<T>) {
        self.inner
            .rules
            .borrow_mut()
            .push(ExtensionRule { start, source });
    }

    /// Returns the value at `index`, resolving and caching it if needed.
    ///
    /// Resolution may recursively request other entries of this or another
    /// container; an ill-founded definition fails with
    /// [`Error::RecursionExceeded`] once too many of its resolutions are in
    /// flight.
    ///
    /// ```rust
    /// use lazy_containers::{Error, LazySeq};
    ///
    /// let seq = LazySeq::new([7u64]);
    /// assert_eq!(seq.get(0).unwrap(), 7);
    /// assert!(matches!(seq.get(1), Err(Error::IndexUndefined(1))));
    /// ```
    pub fn get(&self, index: usize) -> Result<T> {
        self.inner.memo.get_or_resolve(&index, || self.resolve(index))
    }

    fn resolve(&self, index: usize) -> Result<T> {
        // The most recently installed rule whose start covers the index
        // wins. The rule is cloned out so no borrow is held while the
        // source recurses, possibly back into this sequence.
        let rule = self
            .inner
            .rules
            .borrow()
            .iter()
            .rev()
            .find(|rule| rule.start <= index)
            .cloned();
        match rule {
            Some(rule) => rule.source.resolve_at(self, index - rule.start),
            None => Err(Error::IndexUndefined(index)),
        }
    }

    /// Seeds a single index with an explicit value, overwriting any cached
    /// entry.
    pub fn set(&self, index: usize, value: T) {
        self.inner.memo.seed(index, value);
    }

    /// Returns a derived view shifted by `offset`:
    /// `view.get(i) == self.get(i + offset)`.
    ///
    /// A negative `offset` shifts the other way; the first `-offset` indices
    /// of such a view fail with [`Error::InvalidIndex`].
    ///
    /// ```rust
    /// use lazy_containers::LazySeq;
    ///
    /// let seq = LazySeq::new([10u64, 11, 12]);
    /// assert_eq!(seq.shifted(1).get(0).unwrap(), 11);
    /// ```
    pub fn shifted(&self, offset: i64) -> Self {
        Self::derived(SeqSource::Shift {
            src: self.clone(),
            by: offset,
        })
    }

    /// Iterates values from index 0, ending at the first index that fails to
    /// resolve.
    ///
    /// In-order iteration resolves each entry on top of an already-staged
    /// cache, so even deeply self-referential sequences iterate with flat
    /// recursion depth.
    ///
    /// ```rust
    /// use lazy_containers::LazySeq;
    ///
    /// let seq = LazySeq::new([1u64, 2, 3]);
    /// assert_eq!(seq.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { seq: self, index: 0 }
    }
}

/// Iterator over a sequence's values, created by [`LazySeq::iter`].
pub struct Iter<'a, T> {
    seq: &'a LazySeq<T>,
    index: usize,
}

impl<T: Element> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = self.seq.get(self.index).ok()?;
        self.index += 1;
        Some(value)
    }
}
