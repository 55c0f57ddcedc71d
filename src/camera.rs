//! Fixed perspective camera looking down at the terrain.

use glam::{Mat4, Vec3};

use crate::params::{CameraConfig, RenderConfig};

/// Stationary camera; only the aspect ratio changes at runtime
pub struct CameraRig {
    config: CameraConfig,
}

impl CameraRig {
    pub fn new(config: CameraConfig) -> Self {
        Self { config }
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::from_array(self.config.position)
    }

    /// Create view-projection matrix for rendering
    ///
    /// # Returns
    /// Tuple of (view_proj_matrix, camera_position)
    pub fn view_proj(&self, render_config: &RenderConfig) -> (Mat4, Vec3) {
        let eye = self.eye();
        let target = Vec3::from_array(self.config.target);

        let view = Mat4::look_at_rh(eye, target, Vec3::Y);
        let proj = Mat4::perspective_rh(
            self.config.fov_degrees.to_radians(),
            render_config.aspect_ratio(),
            self.config.near_plane,
            self.config.far_plane,
        );

        (proj * view, eye)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_proj_matrix_generation() {
        let camera = CameraRig::new(CameraConfig::default());
        let (view_proj, eye) = camera.view_proj(&RenderConfig::default());

        assert_ne!(view_proj, Mat4::IDENTITY);
        assert_ne!(view_proj, Mat4::ZERO);
        assert_eq!(eye, Vec3::new(120.0, 60.0, 120.0));
    }

    #[test]
    fn test_target_projects_to_screen_center() {
        let camera = CameraRig::new(CameraConfig::default());
        let (view_proj, _) = camera.view_proj(&RenderConfig::default());

        let clip = view_proj * Vec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-4);
        assert!(ndc.y.abs() < 1e-4);
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    #[test]
    fn test_aspect_follows_window() {
        let camera = CameraRig::new(CameraConfig::default());
        let wide = RenderConfig {
            window_width: 2000,
            window_height: 500,
        };
        let (a, _) = camera.view_proj(&RenderConfig::default());
        let (b, _) = camera.view_proj(&wide);
        assert_ne!(a, b);
    }
}
