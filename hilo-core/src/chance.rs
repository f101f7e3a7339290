//! Secret-number selection behind an injectable source.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

/// How secrets are drawn at round start.
pub enum SecretSource {
    /// Pseudorandom secrets backed by a small PRNG.
    Rng { rng: Box<ChaCha8Rng> },
    /// Fixed secret for deterministic tests.
    Fixed { value: u32 },
}

impl SecretSource {
    pub fn from_entropy() -> Self {
        SecretSource::Rng {
            rng: Box::new(ChaCha8Rng::from_entropy()),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        SecretSource::Rng {
            rng: Box::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    pub fn fixed(value: u32) -> Self {
        SecretSource::Fixed { value }
    }

    /// Draw a secret uniformly from `[0, max_number]`, endpoints included.
    ///
    /// The `Fixed` arm clamps into range so the round invariant holds even
    /// when a test forces a value above the bound.
    pub fn draw(&mut self, max_number: u32) -> u32 {
        match self {
            SecretSource::Rng { rng } => rng.gen_range(0..=max_number),
            SecretSource::Fixed { value } => (*value).min(max_number),
        }
    }
}
