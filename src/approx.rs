use bon::Builder;
use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng, RngCore};
use tracing::debug;

use crate::status::Status;
use crate::util::{Count, Probability};
use crate::{APPROX_SAMPLE_SIZE, DIE_FACES};

/// Estimates success chances by actually rolling dice.
///
/// Used to sanity check the closed-form results, not as a replacement for them.
#[derive(Debug, Builder)]
pub struct Approx<G = ThreadRng>
where
    G: RngCore,
{
    #[builder(finish_fn)]
    rng: G,
    #[builder(default = APPROX_SAMPLE_SIZE)]
    sample_size: u32,
}

impl Default for Approx<ThreadRng> {
    fn default() -> Self {
        Self::builder().build(thread_rng())
    }
}

impl<G> Approx<G>
where
    G: RngCore,
{
    #[must_use]
    pub fn sample_size(&self) -> u32 {
        self.sample_size
    }

    /// Rolls `dice` dice once and counts the successes.
    pub fn roll(&mut self, dice: Count, status: Status) -> Count {
        let rng = &mut self.rng;
        (0..dice)
            .filter(|_| status.is_success(rng.gen_range(1..=DIE_FACES)))
            .count() as Count
    }

    #[must_use]
    pub fn success_chance(&mut self, dice: Count, successes: Count, status: Status) -> Probability {
        if self.sample_size == 0 {
            return 0.0;
        }

        let mut hits = 0u32;
        for _ in 0..self.sample_size {
            if self.roll(dice, status) >= successes {
                hits += 1;
            }
        }

        debug!(samples = self.sample_size, hits, "approximated success chance");
        f64::from(hits) / f64::from(self.sample_size)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::chance::success_chance;

    fn seeded(sample_size: u32) -> Approx<StdRng> {
        Approx::builder()
            .sample_size(sample_size)
            .build(StdRng::seed_from_u64(0x5eed))
    }

    #[test]
    fn rolls_stay_in_range() {
        let mut approx = seeded(1);
        for _ in 0..1000 {
            assert!(approx.roll(5, Status::Blessed) <= 5);
        }
        assert_eq!(approx.roll(0, Status::Blessed), 0);
    }

    #[test]
    fn close_to_closed_form() {
        let mut approx = seeded(200_000);
        for status in Status::ALL {
            for (n, k) in [(1, 1), (4, 2), (6, 1), (8, 5)] {
                let estimate = approx.success_chance(n, k, status);
                let expected = success_chance(n, k, status).unwrap();
                assert!(
                    (estimate - expected).abs() < 0.01,
                    "{status} n={n} k={k}: {estimate} vs {expected}"
                );
            }
        }
    }

    #[test]
    fn trivial_cases() {
        let mut approx = seeded(100);
        assert_eq!(approx.success_chance(3, 0, Status::Cursed), 1.0);
        assert_eq!(approx.success_chance(3, 4, Status::Blessed), 0.0);
        assert_eq!(seeded(0).success_chance(3, 1, Status::Normal), 0.0);
    }

    #[test]
    fn default_sample_size() {
        assert_eq!(Approx::<ThreadRng>::default().sample_size(), APPROX_SAMPLE_SIZE);
    }
}
