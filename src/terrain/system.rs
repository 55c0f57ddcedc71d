//! High-level terrain system: mesh, live parameters and noise source.

use super::mesh::TerrainMesh;
use crate::error::TerrainError;
use crate::noise::{NoiseSource, SimplexNoise};
use crate::params::{NoiseParameters, TerrainConfig};

/// Terrain system driven once per frame
pub struct TerrainSystem<N: NoiseSource = SimplexNoise> {
    pub mesh: TerrainMesh,
    pub params: NoiseParameters,
    noise: N,
}

impl TerrainSystem<SimplexNoise> {
    /// Create terrain with simplex noise seeded from the config
    pub fn new(config: &TerrainConfig, params: NoiseParameters) -> Self {
        Self::with_noise(config, params, SimplexNoise::new(config.noise_seed))
    }
}

impl<N: NoiseSource> TerrainSystem<N> {
    pub fn with_noise(config: &TerrainConfig, params: NoiseParameters, noise: N) -> Self {
        Self {
            mesh: TerrainMesh::new(config),
            params,
            noise,
        }
    }

    /// Advance the height field to `elapsed_s`
    ///
    /// Parameter edits must happen between ticks, never during one.
    pub fn tick(&mut self, elapsed_s: f64) -> Result<(), TerrainError> {
        self.mesh.update(elapsed_s, &self.params, &self.noise)
    }

    pub fn reseed(&mut self, seed: u32) {
        self.noise.reseed(seed);
    }

    pub fn noise(&self) -> &N {
        &self.noise
    }
}
