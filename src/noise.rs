//! Noise generation for terrain synthesis.
//!
//! The height sampler only depends on the [`NoiseSource`] capability so any
//! 2D gradient noise can be plugged in (and tests can pin the output).

use noise::{NoiseFn, Simplex};

/// 2D noise capability consumed by the height sampler
pub trait NoiseSource: Send + Sync {
    /// Sample noise at planar position, roughly in [-1, 1]
    fn sample(&self, x: f64, y: f64) -> f64;

    /// Replace the permutation table with one derived from `seed`
    fn reseed(&mut self, seed: u32);
}

/// Simplex noise generator backed by the `noise` crate
pub struct SimplexNoise {
    simplex: Simplex,
    seed: u32,
}

impl SimplexNoise {
    /// Create new noise generator with seed
    pub fn new(seed: u32) -> Self {
        Self {
            simplex: Simplex::new(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl NoiseSource for SimplexNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        self.simplex.get([x, y])
    }

    fn reseed(&mut self, seed: u32) {
        self.simplex = Simplex::new(seed);
        self.seed = seed;
    }
}
