//! # Torus Primitive
//!
//! Generates a ring torus lying in the XZ plane.

use super::{stitch_grid, CellWinding};
use crate::mesh::RawMesh;
use config::constants::{
    scaled_count, TORUS_MAIN_SEGMENTS_MIN, TORUS_MAIN_SEGMENTS_PER_LEVEL,
    TORUS_TUBE_RADIUS_RATIO, TORUS_TUBE_SEGMENTS_MIN, TORUS_TUBE_SEGMENTS_PER_LEVEL,
};
use glam::DVec3;
use std::f64::consts::PI;

/// Main-ring and tube segment counts for a detail level.
///
/// ```rust
/// use shape_mesh::primitives::torus::torus_segments;
///
/// assert_eq!(torus_segments(2), (12, 8));
/// ```
pub fn torus_segments(subdivision_level: u32) -> (u32, u32) {
    (
        scaled_count(
            subdivision_level,
            TORUS_MAIN_SEGMENTS_PER_LEVEL,
            TORUS_MAIN_SEGMENTS_MIN,
        ),
        scaled_count(
            subdivision_level,
            TORUS_TUBE_SEGMENTS_PER_LEVEL,
            TORUS_TUBE_SEGMENTS_MIN,
        ),
    )
}

/// Creates a torus mesh.
///
/// # Arguments
///
/// * `subdivision_level` - Detail level, scales both segment counts
/// * `size` - Main radius; the tube radius is `0.3·size`
///
/// # Algorithm
///
/// For main step `i` (angle `u`) and tube step `j` (angle `v`), both
/// inclusive of the wrap step, the vertex is
/// `center(u) + r·(cos u·cos v, sin v, sin u·cos v)` where `center(u)` lies
/// on the main ring. The wrap duplicates are kept, as for the sphere.
///
/// # Example
///
/// ```rust
/// use shape_mesh::primitives::create_torus;
///
/// let mesh = create_torus(2, 1.0);
/// assert_eq!(mesh.vertex_count(), 13 * 9);
/// ```
pub fn create_torus(subdivision_level: u32, size: f64) -> RawMesh {
    let (main_segments, tube_segments) = torus_segments(subdivision_level);
    let main_radius = size;
    let tube_radius = size * TORUS_TUBE_RADIUS_RATIO;
    tracing::trace!(main_segments, tube_segments, size, "building torus");

    let (rows, cols) = (main_segments as usize, tube_segments as usize);
    let mut mesh = RawMesh::with_capacity((rows + 1) * (cols + 1), rows * cols * 2);

    for i in 0..=main_segments {
        let u = i as f64 * 2.0 * PI / main_segments as f64;
        let (sin_u, cos_u) = u.sin_cos();
        let center = DVec3::new(cos_u, 0.0, sin_u) * main_radius;

        for j in 0..=tube_segments {
            let v = j as f64 * 2.0 * PI / tube_segments as f64;
            let (sin_v, cos_v) = v.sin_cos();
            let offset = DVec3::new(cos_u * cos_v, sin_v, sin_u * cos_v) * tube_radius;
            mesh.add_vertex(center + offset);
        }
    }

    stitch_grid(&mut mesh, main_segments, tube_segments, CellWinding::ColumnFirst);

    mesh
}
