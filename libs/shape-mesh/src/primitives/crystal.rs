//! # Crystal Primitive
//!
//! A hexagonal bipyramid: two apexes joined to a single jittered ring.

use crate::mesh::RawMesh;
use crate::random::RandomStream;
use config::constants::{
    CRYSTAL_BOTTOM_APEX_RATIO, CRYSTAL_HEIGHT_RATIO, CRYSTAL_RADIUS_JITTER,
    CRYSTAL_RADIUS_RATIO, CRYSTAL_SEGMENTS, CRYSTAL_TOP_APEX_RATIO,
};
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a crystal mesh.
///
/// Vertex layout: `0` is the bottom apex at `-0.3·height`, `1..=6` the ring
/// at `y = 0`, `7` the top apex at `0.7·height`, with `height = 2·size`.
/// Each ring vertex draws one jitter factor from `random` in `[0.8, 1.2]`,
/// in ring order.
///
/// # Example
///
/// ```rust
/// use shape_mesh::primitives::create_crystal;
/// use shape_mesh::RandomStream;
///
/// let mesh = create_crystal(1.0, &mut RandomStream::new(0));
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_crystal(size: f64, random: &mut RandomStream) -> RawMesh {
    let segments = CRYSTAL_SEGMENTS;
    let height = size * CRYSTAL_HEIGHT_RATIO;
    let radius = size * CRYSTAL_RADIUS_RATIO;

    let mut mesh = RawMesh::with_capacity(segments as usize + 2, segments as usize * 2);

    let bottom = mesh.add_vertex(DVec3::new(0.0, -height * CRYSTAL_BOTTOM_APEX_RATIO, 0.0));

    for i in 0..segments {
        let angle = i as f64 * 2.0 * PI / segments as f64;
        let r = radius
            * random.range(1.0 - CRYSTAL_RADIUS_JITTER, 1.0 + CRYSTAL_RADIUS_JITTER);
        mesh.add_vertex(DVec3::new(angle.cos() * r, 0.0, angle.sin() * r));
    }

    let top = mesh.add_vertex(DVec3::new(0.0, height * CRYSTAL_TOP_APEX_RATIO, 0.0));

    let ring = |i: u32| 1 + i % segments;

    // Bottom fan faces down, top fan faces up
    for i in 0..segments {
        mesh.add_triangle(bottom, ring(i), ring(i + 1));
    }
    for i in 0..segments {
        mesh.add_triangle(top, ring(i + 1), ring(i));
    }

    tracing::trace!(size, "built crystal");
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_crystal_counts() {
        let mesh = create_crystal(1.0, &mut RandomStream::new(0));
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.validate_indices().is_ok());
    }

    #[test]
    fn test_crystal_apexes() {
        let size = 1.5;
        let mesh = create_crystal(size, &mut RandomStream::new(4));
        let verts = mesh.vertices();
        assert_relative_eq!(verts[0].y, -0.3 * 2.0 * size, epsilon = 1e-12);
        assert_relative_eq!(verts[7].y, 0.7 * 2.0 * size, epsilon = 1e-12);
        assert_eq!(verts[0].x, 0.0);
        assert_eq!(verts[7].z, 0.0);
    }

    #[test]
    fn test_ring_radius_jitter_range() {
        let size = 2.0;
        for seed in 0..20 {
            let mesh = create_crystal(size, &mut RandomStream::new(seed));
            for v in &mesh.vertices()[1..7] {
                assert_eq!(v.y, 0.0);
                let r = (v.x * v.x + v.z * v.z).sqrt();
                assert!(r >= size * 0.4 * 0.8 - 1e-12 && r <= size * 0.4 * 1.2 + 1e-12);
            }
        }
    }

    #[test]
    fn test_fans_wrap_around_ring() {
        let mesh = create_crystal(1.0, &mut RandomStream::new(0));
        let tris = mesh.triangles();
        assert_eq!(tris[0], [0, 1, 2]);
        assert_eq!(tris[5], [0, 6, 1]);
        assert_eq!(tris[6], [7, 2, 1]);
        assert_eq!(tris[11], [7, 1, 6]);
    }

    #[test]
    fn test_caps_face_outward() {
        let mesh = create_crystal(1.0, &mut RandomStream::new(9));
        let verts = mesh.vertices();
        for (t, tri) in mesh.triangles().iter().enumerate() {
            let [a, b, c] = tri.map(|i| verts[i as usize]);
            let normal = (b - a).cross(c - a);
            if t < 6 {
                assert!(normal.y < 0.0, "bottom face {t} points up");
            } else {
                assert!(normal.y > 0.0, "top face {t} points down");
            }
            let centroid = (a + b + c) / 3.0;
            let radial = DVec3::new(centroid.x, 0.0, centroid.z);
            assert!(normal.dot(radial) > 0.0);
        }
    }

    #[test]
    fn test_seed_changes_ring() {
        let a = create_crystal(1.0, &mut RandomStream::new(1));
        let b = create_crystal(1.0, &mut RandomStream::new(2));
        assert_ne!(a.vertices()[1..7], b.vertices()[1..7]);
    }
}
