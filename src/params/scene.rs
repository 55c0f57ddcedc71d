//! Scene appearance: sun light, ambient light and terrain material.

/// Sun and material parameters
#[derive(Debug, Clone)]
pub struct SceneParams {
    /// Sun elevation angle (degrees, 0..=180, 90 = overhead)
    pub sun_angle_deg: f32,

    /// Sun distance from the origin (world units)
    pub sun_distance: f32,

    /// Point light intensity
    pub sun_intensity: f32,

    /// Point light cutoff distance (world units, 0 = no falloff)
    pub sun_range: f32,

    /// Ambient light color (0xRRGGBB)
    pub ambient: u32,

    /// Terrain material color (0xRRGGBB)
    pub color: u32,

    /// Draw grid lines instead of filled triangles
    pub wireframe: bool,

    /// Set once the sun angle has been edited; the initial sun sits straight
    /// above the origin at full distance
    pub sun_moved: bool,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            sun_angle_deg: 90.0,
            sun_distance: 500.0,
            sun_intensity: 0.8,
            sun_range: 1000.0,
            ambient: 0x040404,
            color: 0xff0004,
            wireframe: true,
            sun_moved: false,
        }
    }
}

impl SceneParams {
    pub const SUN_ANGLE_RANGE: (f32, f32) = (0.0, 180.0);

    /// Sun position in world space
    ///
    /// After the angle is edited the sun sweeps a half-ellipse in the XY
    /// plane: full distance along X, half distance along Y.
    pub fn sun_position(&self) -> [f32; 3] {
        if !self.sun_moved {
            return [0.0, self.sun_distance, 0.0];
        }
        let theta = self.sun_angle_deg.to_radians();
        [
            self.sun_distance * theta.cos(),
            self.sun_distance * theta.sin() / 2.0,
            0.0,
        ]
    }
}

/// Split 0xRRGGBB into linear-ish [0, 1] channels
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_sun_overhead() {
        let scene = SceneParams::default();
        assert_eq!(scene.sun_position(), [0.0, 500.0, 0.0]);
    }

    #[test]
    fn test_moved_sun_on_half_ellipse() {
        let scene = SceneParams {
            sun_angle_deg: 0.0,
            sun_moved: true,
            ..Default::default()
        };
        let [x, y, z] = scene.sun_position();
        assert!((x - 500.0).abs() < 1e-3);
        assert!(y.abs() < 1e-3);
        assert_eq!(z, 0.0);

        let overhead = SceneParams {
            sun_moved: true,
            ..Default::default()
        };
        let [x, y, _] = overhead.sun_position();
        assert!(x.abs() < 1e-3);
        assert!((y - 250.0).abs() < 1e-3);
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb(0xff0000), [1.0, 0.0, 0.0]);
        assert_eq!(hex_to_rgb(0x0000ff), [0.0, 0.0, 1.0]);
        let [r, g, b] = hex_to_rgb(0x040404);
        assert!(r > 0.0 && r == g && g == b);
    }
}
