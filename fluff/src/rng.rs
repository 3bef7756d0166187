//! Random source providers.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Trait for providing random number generators
pub trait RngProvider {
    /// The type of RNG this provider creates
    type Rng: rand::RngCore;

    /// Create a new RNG instance with an optional seed
    fn create_rng(&self, seed: Option<u64>) -> Self::Rng;

    /// Create a new RNG instance with a random seed
    fn create_random_rng(&self) -> Self::Rng {
        self.create_rng(None)
    }
}

/// Default RNG provider using the standard library's StdRng
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRngProvider;

impl RngProvider for DefaultRngProvider {
    type Rng = StdRng;

    fn create_rng(&self, seed: Option<u64>) -> Self::Rng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Provider that never touches entropy; unseeded requests fall back to `base_seed`
#[derive(Debug, Clone, Copy)]
pub struct SeededRngProvider {
    base_seed: u64,
}

impl SeededRngProvider {
    /// Create a new seeded provider with a base seed
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }
}

impl RngProvider for SeededRngProvider {
    type Rng = StdRng;

    fn create_rng(&self, seed: Option<u64>) -> Self::Rng {
        StdRng::seed_from_u64(seed.unwrap_or(self.base_seed))
    }
}
