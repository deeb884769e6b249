//! Property-based tests for the catalog recurrences.

use lazy_classics::mappings::{collatz_steps, gcd};
use lazy_classics::sequences::fibonacci;
use proptest::prelude::*;

fn euclid(mut a: u64, mut b: u64) -> u64 {
    while a != 0 {
        (a, b) = (b % a, a);
    }
    b
}

proptest! {
    /// *For any* index `n`, `fib(n + 2) == fib(n + 1) + fib(n)`.
    #[test]
    fn prop_fibonacci_recurrence(n in 0usize..=18) {
        let fib = fibonacci();
        prop_assert_eq!(
            fib.get(n + 2).unwrap(),
            fib.get(n + 1).unwrap() + fib.get(n).unwrap()
        );
    }

    /// The lazy GCD agrees with a plain iterative Euclid.
    #[test]
    fn prop_gcd_matches_euclid(a in 0u64..500, b in 0u64..500) {
        let divisors = gcd();
        prop_assert_eq!(divisors.get(&(a, b)).unwrap(), euclid(a, b));
    }

    /// Doubling a number adds exactly one Collatz step.
    #[test]
    fn prop_collatz_doubling_adds_one_step(n in 1u64..200) {
        let steps = collatz_steps();
        prop_assert_eq!(
            steps.get(&(2 * n)).unwrap(),
            steps.get(&n).unwrap() + 1
        );
    }
}
