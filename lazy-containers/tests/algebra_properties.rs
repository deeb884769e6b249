//! Property-based tests for the derived-container algebra.

use lazy_containers::LazySeq;
use proptest::collection::vec;
use proptest::prelude::*;

proptest! {
    /// *For any* sequence `a` and in-range index `i`,
    /// `(a + a).get(i) == 2 * a.get(i)`.
    #[test]
    fn prop_self_sum_doubles(values in vec(-1_000i64..1_000, 1..32)) {
        let seq = LazySeq::new(values.clone());
        let doubled = &seq + &seq;

        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(doubled.get(i).unwrap(), 2 * value);
        }
    }

    /// Scalar broadcast touches every element uniformly.
    #[test]
    fn prop_scalar_broadcast(values in vec(-1_000i64..1_000, 1..32), scalar in -100i64..100) {
        let seq = LazySeq::new(values.clone());
        let added = &seq + scalar;
        let scaled = &seq * scalar;

        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(added.get(i).unwrap(), value + scalar);
            prop_assert_eq!(scaled.get(i).unwrap(), value * scalar);
        }
    }

    /// A shifted view agrees with the source at the shifted index.
    #[test]
    fn prop_shifted_view_agrees_with_source(
        values in vec(-1_000i64..1_000, 2..32),
        offset in 1usize..8,
    ) {
        let seq = LazySeq::new(values.clone());
        let view = seq.shifted(offset as i64);

        for i in 0..values.len().saturating_sub(offset) {
            prop_assert_eq!(view.get(i).unwrap(), values[i + offset]);
        }
    }

    /// The Peano construction is the identity on indices, however deep the
    /// request within the resolution depth limit.
    #[test]
    fn prop_peano_identity(n in 0usize..250) {
        let peano = LazySeq::new([0u64]);
        let successors = &peano + 1;
        peano.set_extension(1, &successors);

        prop_assert_eq!(peano.get(n).unwrap(), n as u64);
    }

    /// Elementwise sums commute while both operands are defined.
    #[test]
    fn prop_sum_commutes(
        left in vec(-1_000i64..1_000, 1..32),
        right in vec(-1_000i64..1_000, 1..32),
    ) {
        let a = LazySeq::new(left.clone());
        let b = LazySeq::new(right.clone());
        let ab = &a + &b;
        let ba = &b + &a;

        for i in 0..left.len().min(right.len()) {
            prop_assert_eq!(ab.get(i).unwrap(), ba.get(i).unwrap());
        }
    }
}
