use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::ports::PositionSource;

/// Uniform target positions backed by a seedable RNG.
///
/// `from_entropy` is what the game uses; `seeded` gives a reproducible sequence
/// for demos and tests.
pub struct RandomPositions {
    rng: StdRng,
}

impl RandomPositions {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl PositionSource for RandomPositions {
    fn next_percent(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }
}
