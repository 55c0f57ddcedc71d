//! Terrain grid mesh: fixed lattice topology with a mutable height field.

use bytemuck::{Pod, Zeroable};
use glam::{DVec2, DVec3};
use rayon::prelude::*;

use super::sampler;
use crate::error::TerrainError;
use crate::noise::NoiseSource;
use crate::params::{NoiseParameters, TerrainConfig};

/// Vertex data for the terrain mesh (position + normal)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Regular planar lattice of sample points
///
/// Points are stored row-major: `(segments_x + 1)` points per row,
/// `(segments_y + 1)` rows. Planar `(x, y)` maps to world `(x, _, -y)` with
/// height on world Y.
#[derive(Debug, Clone)]
pub struct Grid {
    segments_x: usize,
    segments_y: usize,
    points: Vec<DVec2>,
    indices: Vec<u32>,
    line_indices: Vec<u32>,
}

impl Grid {
    /// Centered plane of `size_x` by `size_y` units, first row at +Y
    pub fn new(config: &TerrainConfig) -> Self {
        let step_x = if config.segments_x == 0 {
            0.0
        } else {
            config.size_x / config.segments_x as f64
        };
        let step_y = if config.segments_y == 0 {
            0.0
        } else {
            config.size_y / config.segments_y as f64
        };

        Self::lattice(
            DVec2::new(-config.size_x / 2.0, config.size_y / 2.0),
            DVec2::new(step_x, -step_y),
            config.segments_x,
            config.segments_y,
        )
    }

    /// Lattice starting at `origin`, advancing by `step.x` per column and
    /// `step.y` per row
    pub fn lattice(origin: DVec2, step: DVec2, segments_x: usize, segments_y: usize) -> Self {
        let row = segments_x + 1;

        let mut points = Vec::with_capacity(row * (segments_y + 1));
        for iy in 0..=segments_y {
            for ix in 0..=segments_x {
                points.push(origin + DVec2::new(ix as f64 * step.x, iy as f64 * step.y));
            }
        }

        // Triangles wind counter-clockwise seen from +Y whichever way the
        // lattice steps run
        let flip = step.x * step.y > 0.0;

        let mut indices = Vec::with_capacity(segments_x * segments_y * 6);
        let mut line_indices = Vec::new();
        for iy in 0..segments_y {
            for ix in 0..segments_x {
                let top_left = (iy * row + ix) as u32;
                let top_right = top_left + 1;
                let bottom_left = ((iy + 1) * row + ix) as u32;
                let bottom_right = bottom_left + 1;

                if flip {
                    indices.extend_from_slice(&[
                        top_left,
                        top_right,
                        bottom_left,
                        top_right,
                        bottom_right,
                        bottom_left,
                    ]);
                } else {
                    indices.extend_from_slice(&[
                        top_left,
                        bottom_left,
                        top_right,
                        top_right,
                        bottom_left,
                        bottom_right,
                    ]);
                }

                // Top edge, left edge and the shared diagonal of each cell
                line_indices.extend_from_slice(&[
                    top_left,
                    top_right,
                    top_left,
                    bottom_left,
                    bottom_left,
                    top_right,
                ]);
            }
        }

        // Closing bottom row and right column
        for ix in 0..segments_x {
            let i = (segments_y * row + ix) as u32;
            line_indices.extend_from_slice(&[i, i + 1]);
        }
        for iy in 0..segments_y {
            let i = (iy * row + segments_x) as u32;
            line_indices.extend_from_slice(&[i, i + row as u32]);
        }

        Self {
            segments_x,
            segments_y,
            points,
            indices,
            line_indices,
        }
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points per row
    pub fn columns(&self) -> usize {
        self.segments_x + 1
    }

    pub fn rows(&self) -> usize {
        self.segments_y + 1
    }
}

/// Terrain mesh owning the grid and its height field
pub struct TerrainMesh {
    grid: Grid,
    heights: Vec<f64>,
    normals: Vec<DVec3>,
    vertices: Vec<Vertex>,
    ready: bool,
}

impl TerrainMesh {
    /// Create a flat mesh over the configured grid
    pub fn new(config: &TerrainConfig) -> Self {
        Self::from_grid(Grid::new(config))
    }

    pub fn from_grid(grid: Grid) -> Self {
        let count = grid.len();
        let vertices = grid
            .points()
            .iter()
            .map(|p| Vertex {
                position: [p.x as f32, 0.0, -p.y as f32],
                normal: [0.0, 1.0, 0.0],
            })
            .collect();

        Self {
            grid,
            heights: vec![0.0; count],
            normals: vec![DVec3::Y; count],
            vertices,
            ready: false,
        }
    }

    /// Re-evaluate every height for `elapsed_s`, then rebuild the normals
    ///
    /// Invalid parameters leave the previous field untouched.
    pub fn update(
        &mut self,
        elapsed_s: f64,
        params: &NoiseParameters,
        noise: &dyn NoiseSource,
    ) -> Result<(), TerrainError> {
        params.validate()?;

        self.heights
            .par_iter_mut()
            .zip(self.grid.points.par_iter())
            .for_each(|(h, &point)| *h = sampler::height(point, elapsed_s, params, noise));

        self.compute_normals();
        self.write_vertices();
        self.ready = true;
        Ok(())
    }

    /// Area-weighted vertex normals from the incident triangle faces
    fn compute_normals(&mut self) {
        let world = |i: usize| {
            let p = self.grid.points[i];
            DVec3::new(p.x, self.heights[i], -p.y)
        };

        let mut accum = vec![DVec3::ZERO; self.heights.len()];
        for tri in self.grid.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let (va, vb, vc) = (world(a), world(b), world(c));
            let face = (vb - va).cross(vc - va);
            accum[a] += face;
            accum[b] += face;
            accum[c] += face;
        }

        // Isolated points (no faces) and degenerate sums fall back to up
        self.normals = accum
            .into_iter()
            .map(|n| n.try_normalize().unwrap_or(DVec3::Y))
            .collect();
    }

    fn write_vertices(&mut self) {
        self.vertices
            .par_iter_mut()
            .zip(self.heights.par_iter())
            .zip(self.normals.par_iter())
            .for_each(|((vertex, &h), n)| {
                vertex.position[1] = h as f32;
                vertex.normal = n.as_vec3().to_array();
            });
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// GPU-ready vertex array mirroring heights and normals
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Triangle-list indices
    pub fn indices(&self) -> &[u32] {
        &self.grid.indices
    }

    /// Line-list indices for wireframe drawing
    pub fn line_indices(&self) -> &[u32] {
        &self.grid.line_indices
    }

    /// Whether heights and normals are consistent and safe to render
    pub fn is_ready(&self) -> bool {
        self.ready
    }
}
