//! Two equivalent ways of summing the upper tail of a binomial distribution.
//!
//! [`by_successes`] adds up the mass of every winning success count, while
//! [`by_misses`] adds up the mass of every losing miss count and takes the
//! complement. Both produce P(at least `k_min` successes in `n` trials); the
//! caller picks whichever needs fewer terms.

use crate::binomial::ln_binomial;
use crate::util::{ensure_choice, Count, Probability, Result};

/// `e * ln(x)`, with `x^0 == 1` even when `x` is zero.
fn ln_pow(x: Probability, e: Count) -> f64 {
    if e == 0 {
        0.0
    } else {
        f64::from(e) * x.ln()
    }
}

// Terms are built in log space: C(n, j) outgrows f64 long before the
// product with p^j * q^(n-j) does.
fn mass(n: Count, j: Count, p: Probability, q: Probability) -> Result<Probability> {
    Ok((ln_binomial(n, j)? + ln_pow(p, j) + ln_pow(q, n - j)).exp())
}

/// Sums the probability of exactly `j` successes for `j` in `k_min..=n`.
pub fn by_successes(n: Count, k_min: Count, p: Probability) -> Result<Probability> {
    ensure_choice(n, k_min)?;
    let q = 1.0 - p;

    let mut total = 0.0;
    for j in k_min..n {
        total += mass(n, j, p, q)?;
    }
    // C(n, n) == 1
    total += ln_pow(p, n).exp();

    Ok(total)
}

/// Sums the probability of too many misses and returns its complement.
pub fn by_misses(n: Count, k_min: Count, p: Probability) -> Result<Probability> {
    ensure_choice(n, k_min)?;
    if k_min == 0 {
        return Ok(1.0);
    }

    let q = 1.0 - p;
    let miss_allowed = n - k_min;

    let mut total = 0.0;
    for j in miss_allowed + 1..n {
        total += mass(n, j, q, p)?;
    }
    // every die missed
    total += ln_pow(q, n).exp();

    Ok(1.0 - total)
}
