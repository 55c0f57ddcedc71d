//! Per-point height synthesis from layered noise.
//!
//! Each octave samples a disjoint region of the same noise field (shifted
//! along X by `2^j * 100`) instead of using separately seeded generators, at
//! frequency `(j + 1) / 100` and amplitude `(j + 1) * base_scale`, attenuated
//! by `complexity^j`.

use glam::DVec2;

use crate::noise::NoiseSource;
use crate::params::NoiseParameters;

/// Planar distance between octave sample regions (scaled by 2^j)
const OCTAVE_OFFSET: f64 = 100.0;

/// Wavelength of the first octave in planar units
const BASE_WAVELENGTH: f64 = 100.0;

/// Height of the terrain at `point` after `elapsed_s` seconds of scrolling
///
/// Both planar axes scroll by the same amount, so the terrain drifts along
/// the diagonal. A negative octave count contributes nothing here; the mesh
/// update rejects it before sampling.
pub fn height(
    point: DVec2,
    elapsed_s: f64,
    params: &NoiseParameters,
    noise: &dyn NoiseSource,
) -> f64 {
    let shift = elapsed_s * params.scroll_speed;
    let sx = point.x + shift;
    let sy = point.y + shift;

    let mut height = 0.0;
    for j in 0..params.octave_count() {
        let octave = (j + 1) as f64;
        let divisor = BASE_WAVELENGTH / octave;
        let offset = 2f64.powi(j as i32) * OCTAVE_OFFSET;

        height += octave
            * params.base_scale
            * noise.sample((sx + offset) / divisor, sy / divisor)
            * params.complexity.powi(j as i32);
    }
    height
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Noise source returning the same value everywhere
    struct ConstantNoise(f64);

    impl NoiseSource for ConstantNoise {
        fn sample(&self, _x: f64, _y: f64) -> f64 {
            self.0
        }

        fn reseed(&mut self, _seed: u32) {}
    }

    /// Noise source that records every coordinate it is asked for
    struct RecordingNoise {
        value: f64,
        calls: Mutex<Vec<(f64, f64)>>,
    }

    impl RecordingNoise {
        fn new(value: f64) -> Self {
            Self {
                value,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(f64, f64)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl NoiseSource for RecordingNoise {
        fn sample(&self, x: f64, y: f64) -> f64 {
            self.calls.lock().unwrap().push((x, y));
            self.value
        }

        fn reseed(&mut self, _seed: u32) {}
    }

    /// Noise source that is a smooth, non-constant function of position
    struct WaveNoise;

    impl NoiseSource for WaveNoise {
        fn sample(&self, x: f64, y: f64) -> f64 {
            (x * 1.7).sin() * (y * 0.9).cos()
        }

        fn reseed(&mut self, _seed: u32) {}
    }

    #[test]
    fn test_constant_noise_matches_closed_form() {
        let params = NoiseParameters {
            octaves: 6,
            base_scale: 3.0,
            complexity: 0.5,
            scroll_speed: 2.0,
        };
        let v = 0.25;
        let h = height(DVec2::new(12.0, -7.0), 3.5, &params, &ConstantNoise(v));

        let expected: f64 = (0..6)
            .map(|j| (j + 1) as f64 * 3.0 * v * 0.5f64.powi(j))
            .sum();
        assert!((h - expected).abs() < 1e-12, "{} != {}", h, expected);
    }

    #[test]
    fn test_zero_octaves_is_flat() {
        let params = NoiseParameters {
            octaves: 0,
            ..Default::default()
        };
        let noise = RecordingNoise::new(1.0);
        assert_eq!(height(DVec2::new(5.0, 5.0), 10.0, &params, &noise), 0.0);
        assert!(noise.calls().is_empty());
    }

    #[test]
    fn test_zero_complexity_keeps_first_octave_only() {
        let params = NoiseParameters {
            octaves: 4,
            base_scale: 2.5,
            complexity: 0.0,
            scroll_speed: 1.5,
        };
        let point = DVec2::new(3.0, 8.0);
        let t = 2.0;
        let sx = point.x + t * params.scroll_speed;
        let sy = point.y + t * params.scroll_speed;

        let h = height(point, t, &params, &WaveNoise);
        let expected = params.base_scale * WaveNoise.sample((sx + 100.0) / 100.0, sy / 100.0);
        assert_eq!(h, expected);
    }

    #[test]
    fn test_octave_sample_coordinates() {
        let params = NoiseParameters {
            octaves: 3,
            base_scale: 1.0,
            complexity: 1.0,
            scroll_speed: 0.0,
        };
        let noise = RecordingNoise::new(0.0);
        height(DVec2::new(10.0, 20.0), 0.0, &params, &noise);

        let calls = noise.calls();
        assert_eq!(calls.len(), 3);
        // octave 0: offset 100, divisor 100
        assert_eq!(calls[0], (110.0 / 100.0, 20.0 / 100.0));
        // octave 1: offset 200, divisor 50
        assert_eq!(calls[1], (210.0 / 50.0, 20.0 / 50.0));
        // octave 2: offset 400, divisor 100/3
        assert_eq!(calls[2], (410.0 / (100.0 / 3.0), 20.0 / (100.0 / 3.0)));
    }

    #[test]
    fn test_scrolling_is_a_translation() {
        let params = NoiseParameters {
            octaves: 5,
            base_scale: 4.0,
            complexity: 0.7,
            scroll_speed: 3.0,
        };
        let point = DVec2::new(-12.0, 30.0);
        let t = 4.0;
        let shifted = point + DVec2::splat(t * params.scroll_speed);

        let moving = RecordingNoise::new(0.1);
        let translated = RecordingNoise::new(0.1);
        let a = height(point, t, &params, &moving);
        let b = height(shifted, 0.0, &params, &translated);

        assert_eq!(moving.calls(), translated.calls());
        assert_eq!(a, b);

        let c = height(point, t, &params, &WaveNoise);
        let d = height(shifted, 0.0, &params, &WaveNoise);
        assert_eq!(c, d);
    }

    #[test]
    fn test_non_finite_noise_propagates() {
        let params = NoiseParameters::default();
        let h = height(DVec2::ZERO, 0.0, &params, &ConstantNoise(f64::NAN));
        assert!(h.is_nan());
    }

    #[test]
    fn test_single_octave_scenario() {
        let params = NoiseParameters {
            octaves: 1,
            base_scale: 2.0,
            complexity: 1.0,
            scroll_speed: 0.0,
        };
        let noise = ConstantNoise(0.5);
        assert_eq!(height(DVec2::new(0.0, 0.0), 0.0, &params, &noise), 1.0);
        assert_eq!(height(DVec2::new(1.0, 0.0), 0.0, &params, &noise), 1.0);
    }
}
