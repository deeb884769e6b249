//! Elementwise algebra over lazy containers.
//!
//! Arithmetic operators on container handles build derived containers: new
//! lazy containers whose elements are computed from the operands on demand,
//! without copying or eagerly evaluating them. The operator set is a small
//! closed one (`+`, `-`, `*`, each with a container or a scalar on the
//! right), and unsupported operand combinations simply do not have an
//! `impl`, so they are rejected at compile time.

use std::hash::Hash;
use std::ops::{Add, Mul, Sub};

use crate::mapping::LazyMap;
use crate::sequence::LazySeq;

/// Element types usable in derived-container arithmetic.
///
/// Blanket-implemented for every type with the required `std::ops`
/// closure properties, e.g. `u64`, `i64` and `f64`.
pub trait Element:
    Clone + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
}

impl<T> Element for T where T: Clone + Add<Output = T> + Sub<Output = T> + Mul<Output = T> {}

/// Operator applied elementwise by a derived container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinOp {
    Add,
    Sub,
    Mul,
}

impl BinOp {
    pub(crate) fn apply<T: Element>(self, lhs: T, rhs: T) -> T {
        match self {
            BinOp::Add => lhs + rhs,
            BinOp::Sub => lhs - rhs,
            BinOp::Mul => lhs * rhs,
        }
    }
}

macro_rules! lazy_seq_binop {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<T: Element> $trait<&LazySeq<T>> for &LazySeq<T> {
            type Output = LazySeq<T>;

            fn $method(self, rhs: &LazySeq<T>) -> LazySeq<T> {
                LazySeq::zip(self.clone(), rhs.clone(), $op)
            }
        }

        impl<T: Element> $trait<T> for &LazySeq<T> {
            type Output = LazySeq<T>;

            fn $method(self, rhs: T) -> LazySeq<T> {
                LazySeq::zip_scalar(self.clone(), rhs, $op)
            }
        }
    };
}

lazy_seq_binop!(Add, add, BinOp::Add);
lazy_seq_binop!(Sub, sub, BinOp::Sub);
lazy_seq_binop!(Mul, mul, BinOp::Mul);

macro_rules! lazy_map_binop {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<K, V> $trait<&LazyMap<K, V>> for &LazyMap<K, V>
        where
            K: Clone + Eq + Hash,
            V: Element,
        {
            type Output = LazyMap<K, V>;

            fn $method(self, rhs: &LazyMap<K, V>) -> LazyMap<K, V> {
                LazyMap::zip(self.clone(), rhs.clone(), $op)
            }
        }

        impl<K, V> $trait<V> for &LazyMap<K, V>
        where
            K: Clone + Eq + Hash,
            V: Element,
        {
            type Output = LazyMap<K, V>;

            fn $method(self, rhs: V) -> LazyMap<K, V> {
                LazyMap::zip_scalar(self.clone(), rhs, $op)
            }
        }
    };
}

lazy_map_binop!(Add, add, BinOp::Add);
lazy_map_binop!(Sub, sub, BinOp::Sub);
lazy_map_binop!(Mul, mul, BinOp::Mul);
