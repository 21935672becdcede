//! # Primitives
//!
//! One builder per shape family. Builders are pure functions of their
//! arguments and the seeded [`BuildContext`]; they assume parameters were
//! validated beforehand and always emit a non-empty mesh.

pub mod crystal;
pub mod rock;
pub mod sphere;
pub mod terrain;
pub mod torus;
pub mod tube;

pub use crystal::create_crystal;
pub use rock::create_rock;
pub use sphere::create_sphere;
pub use terrain::create_terrain;
pub use torus::create_torus;
pub use tube::create_tube;

use crate::mesh::RawMesh;
use crate::noise_field::NoiseField;
use crate::params::{ShapeParameters, ShapeType};
use crate::random::RandomStream;

/// Seed-derived state shared by the builders of one generation call.
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Noise sampled by rock and terrain.
    pub noise: NoiseField,
    /// Random stream drawn by crystal.
    pub random: RandomStream,
}

impl BuildContext {
    /// Initializes noise and random stream from one seed.
    pub fn new(seed: i64) -> Self {
        Self {
            noise: NoiseField::new(seed),
            random: RandomStream::new(seed),
        }
    }
}

/// Runs the builder matching `params.shape_type`.
pub fn build_raw(params: &ShapeParameters, ctx: &mut BuildContext) -> RawMesh {
    match params.shape_type {
        ShapeType::Sphere => create_sphere(params.subdivision_level, params.size),
        ShapeType::Rock => create_rock(params, &ctx.noise),
        ShapeType::Crystal => create_crystal(params.size, &mut ctx.random),
        ShapeType::Tube => create_tube(params.subdivision_level, params.size),
        ShapeType::Torus => create_torus(params.subdivision_level, params.size),
        ShapeType::Terrain => create_terrain(params, &ctx.noise),
    }
}

/// Vertex order used when splitting a grid cell into two triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CellWinding {
    /// `(a, a1, b)` then `(a1, b1, b)`.
    ColumnFirst,
    /// `(a, b, a1)` then `(a1, b, b1)`.
    RowFirst,
}

/// Emits two triangles per cell of a `rows x cols` cell grid whose vertices
/// are stored row-major with `cols + 1` vertices per row.
///
/// Cell `(r, c)` has corners `a = (r, c)`, `b = (r + 1, c)`,
/// `a1 = (r, c + 1)` and `b1 = (r + 1, c + 1)`.
pub(crate) fn stitch_grid(mesh: &mut RawMesh, rows: u32, cols: u32, winding: CellWinding) {
    let stride = cols + 1;
    for r in 0..rows {
        for c in 0..cols {
            let current = r * stride + c;
            let next = current + stride;

            match winding {
                CellWinding::ColumnFirst => {
                    mesh.add_triangle(current, current + 1, next);
                    mesh.add_triangle(current + 1, next + 1, next);
                }
                CellWinding::RowFirst => {
                    mesh.add_triangle(current, next, current + 1);
                    mesh.add_triangle(current + 1, next, next + 1);
                }
            }
        }
    }
}
