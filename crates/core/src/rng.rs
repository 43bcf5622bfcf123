//! RNG module - respawn launch angles
//!
//! The only randomness in the game is the direction a ball is relaunched in
//! after a miss. It is drawn from a seeded PCG stream so that a given seed and
//! input sequence always replays the same game.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::physics::launch_direction;

/// Seeded source of respawn directions
#[derive(Debug, Clone)]
pub struct LaunchRng {
    seed: u64,
    rng: Pcg32,
}

impl LaunchRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Uniform sample in `[0, 1)`
    pub fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Next respawn direction (unit vector, always upwards)
    pub fn next_launch(&mut self) -> (f64, f64) {
        let t = self.next_unit();
        let rightward = self.rng.random_bool(0.5);
        launch_direction(t, rightward)
    }

    /// Seed this stream was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for LaunchRng {
    fn default() -> Self {
        Self::new(1)
    }
}
