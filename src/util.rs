use thiserror::Error;

pub type Count = u32;
pub type Probability = f64;
pub type BigRatio = num::BigRational;
pub type BigInt = num::BigInt;
pub type BigUint = num::BigUint;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("cannot choose {k} items out of {n}")]
    InvalidChoice { n: Count, k: Count },
    #[error("unknown status `{0}`, expected one of: normal, blessed, cursed")]
    UnknownStatus(String),
    #[error("no status succeeds on 1 in {0} rolls")]
    InvalidDenominator(u32),
}

pub type Result<T> = core::result::Result<T, Error>;

#[inline]
pub(crate) fn ensure_choice(n: Count, k: Count) -> Result<()> {
    if k > n {
        Err(Error::InvalidChoice { n, k })
    } else {
        Ok(())
    }
}
