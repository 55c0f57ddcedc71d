//! Parameter definitions with units and documented ranges.
//!
//! Defaults reproduce the reference terrain demo: a 100x100 plane with
//! 100x100 segments, five octaves, a red wireframe lit by an overhead sun.

mod render;
mod scene;
mod terrain;

pub use render::{CameraConfig, RenderConfig};
pub use scene::{hex_to_rgb, SceneParams};
pub use terrain::{NoiseParameters, TerrainConfig};
