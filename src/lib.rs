mod approx;
mod binomial;
mod chance;
mod exact;
pub mod print;
mod status;
pub mod tail;
mod util;

pub use approx::Approx;
pub use binomial::{binomial, factorial, ln_binomial};
pub use chance::{chance_table, success_chance, Strategy};
pub use exact::exact_chance;
pub use status::Status;
pub use util::{BigRatio, BigUint, Count, Error, Probability, Result};

const APPROX_SAMPLE_SIZE: u32 = 1_000_000;
const DIE_FACES: u32 = 6;

/// Largest pool the command line accepts, matching the physical game.
pub const MAX_DICE: Count = 20;
