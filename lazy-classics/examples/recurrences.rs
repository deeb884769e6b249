//! Prints the catalog recurrences, resolving each container on demand.
//!
//! Run with: cargo run --example recurrences

use anyhow::Result;
use itertools::Itertools;
use lazy_classics::mappings::{collatz_steps, gcd, hitting_probability};
use lazy_classics::sequences::{factorial, fibonacci, peano};

fn main() -> Result<()> {
    println!("peano     : {}", peano().iter().take(10).join(", "));
    println!("factorial : {}", factorial().iter().take(11).join(", "));
    println!("fibonacci : {}", fibonacci().iter().take(15).join(", "));

    let steps = collatz_steps();
    for n in [27u64, 93, 97] {
        println!("collatz steps({n}) = {}", steps.get(&n)?);
    }

    let walk = hitting_probability();
    println!(
        "P(back at the origin after 30 steps) = {:.6}",
        walk.get(&(0, 30))?
    );
    println!("gcd(1071, 462) = {}", gcd().get(&(1071, 462))?);
    Ok(())
}
