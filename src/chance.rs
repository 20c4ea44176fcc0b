use tracing::{debug, instrument};

use crate::status::Status;
use crate::tail::{by_misses, by_successes};
use crate::util::{Count, Probability, Result};

/// Which side of the distribution gets summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Nothing to sum, the answer is known up front.
    Certain(bool),
    BySuccesses,
    ByMisses,
}

impl Strategy {
    #[must_use]
    pub fn select(dice: Count, successes: Count) -> Self {
        if successes == 0 {
            Strategy::Certain(true)
        } else if dice == 0 || successes > dice {
            Strategy::Certain(false)
        } else if successes > dice / 2 {
            Strategy::BySuccesses
        } else {
            Strategy::ByMisses
        }
    }

    /// Number of binomial terms the strategy evaluates.
    #[must_use]
    pub fn terms(self, dice: Count, successes: Count) -> Count {
        match self {
            Strategy::Certain(_) => 0,
            Strategy::BySuccesses => dice - successes + 1,
            Strategy::ByMisses => successes,
        }
    }
}

/// Probability of rolling at least `successes` successes on `dice` dice.
#[instrument(level = "trace")]
pub fn success_chance(dice: Count, successes: Count, status: Status) -> Result<Probability> {
    let strategy = Strategy::select(dice, successes);
    debug!(
        ?strategy,
        terms = strategy.terms(dice, successes),
        "summing binomial tail"
    );

    let p = status.hit_chance();
    let chance = match strategy {
        Strategy::Certain(true) => return Ok(1.0),
        Strategy::Certain(false) => return Ok(0.0),
        Strategy::BySuccesses => by_successes(dice, successes, p)?,
        Strategy::ByMisses => by_misses(dice, successes, p)?,
    };

    Ok(chance.clamp(0.0, 1.0))
}

/// Chance of at least `k` successes for every `k` in `0..=dice`.
pub fn chance_table(dice: Count, status: Status) -> Result<Vec<Probability>> {
    (0..=dice)
        .map(|k| success_chance(dice, k, status))
        .collect()
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn strategy_selection() {
        assert_eq!(Strategy::select(0, 0), Strategy::Certain(true));
        assert_eq!(Strategy::select(4, 0), Strategy::Certain(true));
        assert_eq!(Strategy::select(0, 1), Strategy::Certain(false));
        assert_eq!(Strategy::select(5, 6), Strategy::Certain(false));
        assert_eq!(Strategy::select(5, 3), Strategy::BySuccesses);
        assert_eq!(Strategy::select(5, 2), Strategy::ByMisses);
        assert_eq!(Strategy::select(4, 2), Strategy::ByMisses);
        assert_eq!(Strategy::select(1, 1), Strategy::BySuccesses);
    }

    #[test]
    fn selection_minimises_terms() {
        for n in 1..=30 {
            for k in 1..=n {
                let chosen = Strategy::select(n, k);
                let other = match chosen {
                    Strategy::BySuccesses => Strategy::ByMisses,
                    _ => Strategy::BySuccesses,
                };
                assert!(chosen.terms(n, k) <= other.terms(n, k) + 1, "n={n} k={k}");
            }
        }
    }

    #[test]
    fn impossible() {
        assert_eq!(success_chance(0, 1, Status::Normal), Ok(0.0));
        assert_eq!(success_chance(5, 6, Status::Normal), Ok(0.0));
    }

    #[test]
    fn zero_successes_always_pass() {
        for status in Status::ALL {
            for n in 0..=20 {
                assert_eq!(success_chance(n, 0, status), Ok(1.0));
            }
        }
    }

    #[test]
    fn known_values() {
        let v = success_chance(1, 1, Status::Normal).unwrap();
        assert!(close(v, 1.0 / 3.0));
        let v = success_chance(2, 1, Status::Normal).unwrap();
        assert!(close(v, 5.0 / 9.0));
        let v = success_chance(3, 2, Status::Blessed).unwrap();
        assert!(close(v, 0.5));
        let v = success_chance(2, 2, Status::Cursed).unwrap();
        assert!(close(v, 1.0 / 36.0));
    }

    #[test]
    fn table_is_monotone() {
        for status in Status::ALL {
            let table = chance_table(12, status).unwrap();
            assert_eq!(table.len(), 13);
            assert_eq!(table[0], 1.0);
            for (a, b) in table.iter().tuple_windows() {
                assert!(a + 1e-12 >= *b, "{status}: {a} < {b}");
            }
        }
    }

    #[test]
    fn empty_pool_table() {
        assert_eq!(chance_table(0, Status::Cursed), Ok(vec![1.0]));
    }
}
