//! Seeded randomness for simulated deliveries.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8 RNG seeded from a `u64`. Same seed, same deliveries.
#[derive(Clone, Debug)]
pub struct BowlerRng {
    inner: ChaCha8Rng,
}

impl BowlerRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// True with the given probability, clamped to `0.0..=1.0`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Pins knocked down when each of `standing` falls independently with
    /// probability `per_pin`.
    pub fn knock_down(&mut self, standing: u8, per_pin: f64) -> u8 {
        (0..standing).filter(|_| self.gen_bool(per_pin)).count() as u8
    }
}
