//! Procedural terrain: per-point height synthesis and the animated mesh.

mod mesh;
pub mod sampler;
mod system;

pub use mesh::{Grid, TerrainMesh, Vertex};
pub use system::TerrainSystem;
