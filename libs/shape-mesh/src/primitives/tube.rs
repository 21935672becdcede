//! # Tube Primitive
//!
//! Generates an open hollow cylinder (pipe) with an outer and inner wall
//! and no end caps.

use crate::mesh::RawMesh;
use config::constants::{
    scaled_count, TUBE_HEIGHT_RATIO, TUBE_INNER_RADIUS_RATIO, TUBE_SEGMENTS_MIN,
    TUBE_SEGMENTS_PER_LEVEL,
};
use glam::DVec3;
use std::f64::consts::PI;

/// Segment count around the tube for a detail level.
pub fn tube_segments(subdivision_level: u32) -> u32 {
    scaled_count(subdivision_level, TUBE_SEGMENTS_PER_LEVEL, TUBE_SEGMENTS_MIN)
}

/// Creates a tube mesh centered on the origin along the Y axis.
///
/// # Arguments
///
/// * `subdivision_level` - Detail level, scales the segment count
/// * `size` - Outer radius; inner radius is `0.7·size`, height `2·size`
///
/// # Layout
///
/// Two rings (bottom then top), each holding an interleaved
/// `[outer_0, inner_0, outer_1, inner_1, ...]` sequence. Segment `i` of
/// ring `k` therefore owns vertices `2·(k·segments + i)` (outer) and
/// `2·(k·segments + i) + 1` (inner).
///
/// # Example
///
/// ```rust
/// use shape_mesh::primitives::create_tube;
///
/// let mesh = create_tube(1, 1.0);
/// assert_eq!(mesh.vertex_count(), 6 * 4);
/// assert_eq!(mesh.triangle_count(), 6 * 4);
/// ```
pub fn create_tube(subdivision_level: u32, size: f64) -> RawMesh {
    let segments = tube_segments(subdivision_level);
    let height = size * TUBE_HEIGHT_RATIO;
    let outer_radius = size;
    let inner_radius = size * TUBE_INNER_RADIUS_RATIO;
    tracing::trace!(segments, size, "building tube");

    let mut mesh = RawMesh::with_capacity(segments as usize * 4, segments as usize * 4);

    for y in [-height / 2.0, height / 2.0] {
        for i in 0..segments {
            let angle = i as f64 * 2.0 * PI / segments as f64;
            let (sin, cos) = angle.sin_cos();
            mesh.add_vertex(DVec3::new(cos * outer_radius, y, sin * outer_radius));
            mesh.add_vertex(DVec3::new(cos * inner_radius, y, sin * inner_radius));
        }
    }

    let top = segments * 2;
    for i in 0..segments {
        let next = (i + 1) % segments;

        // Outer wall faces away from the axis
        let bo = i * 2;
        let bno = next * 2;
        let to = top + i * 2;
        let tno = top + next * 2;
        mesh.add_triangle(bo, to, bno);
        mesh.add_triangle(bno, to, tno);

        // Inner wall faces the axis
        let bi = bo + 1;
        let bni = bno + 1;
        let ti = to + 1;
        let tni = tno + 1;
        mesh.add_triangle(bi, bni, ti);
        mesh.add_triangle(bni, tni, ti);
    }

    mesh
}
