//! Error types for terrain synthesis, rendering and export.

use thiserror::Error;

/// Errors raised while updating the terrain height field
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TerrainError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Errors raised while setting up or driving the GPU pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("failed to find suitable GPU adapter")]
    NoAdapter,

    #[error("failed to request device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("{label} needs {size} bytes, device limit is {limit}")]
    BufferTooLarge {
        label: &'static str,
        size: u64,
        limit: u64,
    },
}

/// Errors raised by the headless heightmap export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Terrain(#[from] TerrainError),

    #[error("failed to write heightmap: {0}")]
    Image(#[from] image::ImageError),

    #[error("heightmap dimensions {0}x{1} exceed image limits")]
    Dimensions(usize, usize),
}
