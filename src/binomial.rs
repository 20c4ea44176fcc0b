use std::f64::consts::LN_2;

use num::traits::One;
use num::ToPrimitive;

use crate::util::{ensure_choice, BigUint, Count, Result};

/// Number of ways to choose `k` items out of `n`.
///
/// Only one full factorial is computed: the larger of `k` and `n - k` is
/// cancelled out of `n!`, leaving a partial product over the top of the range.
pub fn binomial(n: Count, k: Count) -> Result<BigUint> {
    ensure_choice(n, k)?;

    if k == 0 || k == n {
        return Ok(BigUint::one());
    }

    let (hi, lo) = if k > n - k { (k, n - k) } else { (n - k, k) };

    let numerator = product(hi + 1..=n);
    let denominator = factorial(lo);

    Ok(numerator / denominator)
}

/// Natural logarithm of `C(n, k)`, usable long after the coefficient itself
/// stops fitting in an `f64`.
pub fn ln_binomial(n: Count, k: Count) -> Result<f64> {
    binomial(n, k).map(|c| ln_big(&c))
}

fn ln_big(x: &BigUint) -> f64 {
    // keep the top 53 bits, the rest only shifts the exponent
    let shift = x.bits().saturating_sub(u64::from(f64::MANTISSA_DIGITS));
    let top = (x >> shift).to_f64().unwrap_or(f64::INFINITY);
    top.ln() + shift as f64 * LN_2
}

#[must_use]
pub fn factorial(n: Count) -> BigUint {
    product(2..=n)
}

fn product<I>(range: I) -> BigUint
where
    I: IntoIterator<Item = Count>,
{
    range
        .into_iter()
        .fold(BigUint::one(), |acc, x| acc * BigUint::from(x))
}
