//! Headless heightmap export to grayscale PNG.

use std::path::Path;

use image::{GrayImage, Luma};
use log::info;

use crate::error::ExportError;
use crate::params::{NoiseParameters, TerrainConfig};
use crate::terrain::{TerrainMesh, TerrainSystem};

/// Evaluate the terrain once at `elapsed_s` and write it to `path`
pub fn export_heightmap(
    path: &Path,
    config: &TerrainConfig,
    params: NoiseParameters,
    elapsed_s: f64,
) -> Result<(), ExportError> {
    let mut terrain = TerrainSystem::new(config, params);
    terrain.tick(elapsed_s)?;

    let img = heightmap_image(&terrain.mesh)?;
    img.save(path)?;

    info!(
        "Heightmap: {}x{} at t={}s -> {}",
        img.width(),
        img.height(),
        elapsed_s,
        path.display()
    );
    Ok(())
}

/// Map the mesh heights linearly onto 0..=255, one pixel per grid point
///
/// A flat field maps to mid gray; non-finite heights map to black.
pub fn heightmap_image(mesh: &TerrainMesh) -> Result<GrayImage, ExportError> {
    let grid = mesh.grid();
    let (columns, rows) = (grid.columns(), grid.rows());
    let width = u32::try_from(columns).map_err(|_| ExportError::Dimensions(columns, rows))?;
    let height = u32::try_from(rows).map_err(|_| ExportError::Dimensions(columns, rows))?;

    let (min, max) = mesh
        .heights()
        .iter()
        .filter(|h| h.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &h| {
            (lo.min(h), hi.max(h))
        });
    let range = max - min;

    let mut img = GrayImage::new(width, height);
    for (i, &h) in mesh.heights().iter().enumerate() {
        let gray = if !h.is_finite() {
            0
        } else if range < 1e-12 {
            128
        } else {
            ((h - min) / range * 255.0).round().clamp(0.0, 255.0) as u8
        };
        let x = (i % columns) as u32;
        let y = (i / columns) as u32;
        img.put_pixel(x, y, Luma([gray]));
    }

    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::NoiseSource;

    struct RampNoise;

    impl NoiseSource for RampNoise {
        fn sample(&self, x: f64, _y: f64) -> f64 {
            x
        }

        fn reseed(&mut self, _seed: u32) {}
    }

    fn config() -> TerrainConfig {
        TerrainConfig {
            segments_x: 10,
            segments_y: 4,
            size_x: 10.0,
            size_y: 4.0,
            noise_seed: 1,
        }
    }

    #[test]
    fn test_image_spans_full_range() {
        let params = NoiseParameters {
            octaves: 1,
            base_scale: 1.0,
            complexity: 1.0,
            scroll_speed: 0.0,
        };
        let mut terrain = TerrainSystem::with_noise(&config(), params, RampNoise);
        terrain.tick(0.0).unwrap();

        let img = heightmap_image(&terrain.mesh).unwrap();
        assert_eq!(img.dimensions(), (11, 5));

        // height rises with planar x: left edge black, right edge white
        for y in 0..5 {
            assert_eq!(img.get_pixel(0, y).0[0], 0);
            assert_eq!(img.get_pixel(10, y).0[0], 255);
        }
    }

    #[test]
    fn test_flat_field_is_mid_gray() {
        let params = NoiseParameters {
            octaves: 0,
            ..Default::default()
        };
        let mut terrain = TerrainSystem::new(&config(), params);
        terrain.tick(0.0).unwrap();

        let img = heightmap_image(&terrain.mesh).unwrap();
        assert!(img.pixels().all(|p| p.0[0] == 128));
    }

    #[test]
    fn test_export_rejects_invalid_params() {
        let params = NoiseParameters {
            octaves: -3,
            ..Default::default()
        };
        let path = std::env::temp_dir().join("driftland_invalid.png");
        let err = export_heightmap(&path, &config(), params, 0.0).unwrap_err();
        assert!(matches!(err, ExportError::Terrain(_)));
    }

    #[test]
    fn test_export_writes_png() {
        let path = std::env::temp_dir().join(format!("driftland_{}.png", std::process::id()));
        export_heightmap(&path, &config(), NoiseParameters::default(), 1.0).unwrap();

        let loaded = image::open(&path).unwrap().into_luma8();
        assert_eq!(loaded.dimensions(), (11, 5));
        std::fs::remove_file(&path).unwrap();
    }
}
