use num::traits::{One, Pow, Zero};

use crate::binomial::binomial;
use crate::status::Status;
use crate::util::{BigInt, BigRatio, BigUint, Count, Result};

/// Exact probability of rolling at least `successes` successes on `dice` dice.
///
/// With one success in `d` rolls, the chance of exactly `j` successes is
/// `C(n, j) * (d - 1)^(n - j) / d^n`, so the whole tail shares a single
/// denominator and can be summed in integers.
pub fn exact_chance(dice: Count, successes: Count, status: Status) -> Result<BigRatio> {
    if successes == 0 {
        return Ok(BigRatio::one());
    }
    if successes > dice {
        return Ok(BigRatio::zero());
    }

    let d = BigUint::from(status.denominator());
    let misses = &d - BigUint::one();

    let mut numer = BigUint::zero();
    for j in successes..=dice {
        numer += binomial(dice, j)? * Pow::pow(&misses, dice - j);
    }
    let denom = Pow::pow(&d, dice);

    Ok(BigRatio::new(BigInt::from(numer), BigInt::from(denom)))
}
