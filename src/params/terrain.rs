//! Terrain grid layout and noise synthesis parameters.

use crate::error::TerrainError;

/// Grid layout for the terrain plane
#[derive(Debug, Clone)]
pub struct TerrainConfig {
    /// Segments along planar X (vertices per row = segments_x + 1)
    pub segments_x: usize,

    /// Segments along planar Y (rows = segments_y + 1)
    pub segments_y: usize,

    /// Plane extent along X (world units)
    pub size_x: f64,

    /// Plane extent along Y (world units)
    pub size_y: f64,

    /// Initial simplex noise seed
    pub noise_seed: u32,
}

impl TerrainConfig {
    /// Largest segment count per side (vertex and index buffers stay under
    /// the default 256 MiB buffer limit)
    pub const MAX_SEGMENTS: usize = 2048;
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            segments_x: 100,
            segments_y: 100,
            size_x: 100.0,
            size_y: 100.0,
            noise_seed: 0,
        }
    }
}

/// Layered noise parameters, edited live between frames
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseParameters {
    /// Number of noise layers summed (negative is rejected by the mesh update)
    pub octaves: i32,

    /// Amplitude multiplier shared by all octaves
    pub base_scale: f64,

    /// Persistence in [0, 1]: octave j is attenuated by complexity^j
    /// Values outside the range diverge or oscillate; accepted as-is
    pub complexity: f64,

    /// Planar coordinate shift per second, applied to both axes
    pub scroll_speed: f64,
}

impl Default for NoiseParameters {
    fn default() -> Self {
        Self {
            octaves: 5,
            base_scale: 5.0,
            complexity: 0.67,
            scroll_speed: 5.0,
        }
    }
}

impl NoiseParameters {
    /// Live-control range for octaves
    pub const OCTAVES_RANGE: (i32, i32) = (1, 10);
    /// Live-control range for base scale
    pub const BASE_SCALE_RANGE: (f64, f64) = (1.0, 10.0);
    /// Live-control range for scroll speed
    pub const SCROLL_SPEED_RANGE: (f64, f64) = (0.0, 25.0);

    /// Reject parameter sets the sampler cannot evaluate
    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.octaves < 0 {
            return Err(TerrainError::InvalidParameter {
                name: "octaves",
                reason: format!("must be >= 0, got {}", self.octaves),
            });
        }
        Ok(())
    }

    /// Number of octaves to sum (zero for invalid counts)
    pub fn octave_count(&self) -> usize {
        self.octaves.max(0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(NoiseParameters::default().validate().is_ok());
    }

    #[test]
    fn test_zero_octaves_is_valid() {
        let params = NoiseParameters {
            octaves: 0,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
        assert_eq!(params.octave_count(), 0);
    }

    #[test]
    fn test_negative_octaves_rejected() {
        let params = NoiseParameters {
            octaves: -1,
            ..Default::default()
        };
        match params.validate() {
            Err(TerrainError::InvalidParameter { name, .. }) => assert_eq!(name, "octaves"),
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
        assert_eq!(params.octave_count(), 0);
    }

    #[test]
    fn test_out_of_range_complexity_accepted() {
        let params = NoiseParameters {
            complexity: 1.5,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }
}
