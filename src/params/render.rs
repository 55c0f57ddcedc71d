//! Window and camera configuration.

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height.max(1) as f32
    }
}

/// Fixed perspective camera
#[derive(Debug, Clone)]
pub struct CameraConfig {
    /// Camera position (world units)
    pub position: [f32; 3],

    /// Look-at target (world units)
    pub target: [f32; 3],

    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane
    pub near_plane: f32,

    /// Far clipping plane
    pub far_plane: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [120.0, 60.0, 120.0],
            target: [0.0, 0.0, 0.0],
            fov_degrees: 45.0,
            near_plane: 1.0,
            far_plane: 10000.0,
        }
    }
}
