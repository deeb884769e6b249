//! Mappings defined by recurrences over arbitrary keys.

use lazy_containers::LazyMap;

/// Steps to reach 1 in the Collatz iteration: 0 for `n <= 1`, otherwise one
/// step to `n / 2` (even) or `3n + 1` (odd).
pub fn collatz_steps() -> LazyMap<u64, u64> {
    LazyMap::new(|steps, n: &u64| {
        if *n <= 1 {
            Ok(0)
        } else if n % 2 == 0 {
            Ok(1 + steps.get(&(n / 2))?)
        } else {
            Ok(1 + steps.get(&(3 * n + 1))?)
        }
    })
}

/// Probability that a symmetric random walk starting at `position` sits at
/// the origin after `steps` steps, keyed by `(position, steps)`.
///
/// Each step moves one unit up or down with equal probability, so the value
/// averages the two neighbouring one-step-shorter walks.
pub fn hitting_probability() -> LazyMap<(i64, u32), f64> {
    LazyMap::new(|walk, key: &(i64, u32)| {
        let (position, steps) = *key;
        if steps == 0 {
            return Ok(if position == 0 { 1.0 } else { 0.0 });
        }
        let up = walk.get(&(position + 1, steps - 1))?;
        let down = walk.get(&(position - 1, steps - 1))?;
        Ok(0.5 * (up + down))
    })
}

/// Greatest common divisor over pair keys, by the Euclidean recurrence.
pub fn gcd() -> LazyMap<(u64, u64), u64> {
    LazyMap::new(|gcd, key: &(u64, u64)| {
        let (a, b) = *key;
        if a > b {
            return gcd.get(&(b, a));
        }
        if a == 0 {
            return Ok(b);
        }
        gcd.get(&(b % a, a))
    })
}
