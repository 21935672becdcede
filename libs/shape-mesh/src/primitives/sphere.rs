//! # Sphere Primitive
//!
//! Generates a UV sphere using latitude/longitude tessellation.

use super::{stitch_grid, CellWinding};
use crate::mesh::RawMesh;
use config::constants::{
    scaled_count, SPHERE_LATITUDE_MIN, SPHERE_LATITUDE_PER_LEVEL, SPHERE_LONGITUDE_MIN,
    SPHERE_LONGITUDE_PER_LEVEL,
};
use glam::DVec3;
use std::f64::consts::PI;

/// Latitude and longitude band counts for a detail level.
///
/// ```rust
/// use shape_mesh::primitives::sphere::sphere_bands;
///
/// assert_eq!(sphere_bands(3), (12, 18));
/// assert_eq!(sphere_bands(1), (4, 6));
/// ```
pub fn sphere_bands(subdivision_level: u32) -> (u32, u32) {
    (
        scaled_count(
            subdivision_level,
            SPHERE_LATITUDE_PER_LEVEL,
            SPHERE_LATITUDE_MIN,
        ),
        scaled_count(
            subdivision_level,
            SPHERE_LONGITUDE_PER_LEVEL,
            SPHERE_LONGITUDE_MIN,
        ),
    )
}

/// Creates a sphere mesh using latitude/longitude tessellation.
///
/// # Arguments
///
/// * `subdivision_level` - Detail level, scales both band counts
/// * `size` - The radius of the sphere
///
/// # Algorithm
///
/// - Ring `i` sits at polar angle `θ = i·π/latitudes` (0 = north pole, +Y)
/// - Column `j` sits at azimuth `φ = j·2π/longitudes`
/// - Position = `size · (sinθ·cosφ, cosθ, sinθ·sinφ)`
/// - Every ring stores `longitudes + 1` vertices; the seam column at
///   `φ = 2π` duplicates column 0 and the pole rings collapse to a point.
///   Neither is welded.
///
/// # Example
///
/// ```rust
/// use shape_mesh::primitives::create_sphere;
///
/// let mesh = create_sphere(3, 1.0);
/// assert_eq!(mesh.vertex_count(), 13 * 19);
/// assert_eq!(mesh.triangle_count(), 12 * 18 * 2);
/// ```
pub fn create_sphere(subdivision_level: u32, size: f64) -> RawMesh {
    let (latitudes, longitudes) = sphere_bands(subdivision_level);
    tracing::trace!(latitudes, longitudes, size, "building sphere");

    let (rows, cols) = (latitudes as usize, longitudes as usize);
    let mut mesh = RawMesh::with_capacity((rows + 1) * (cols + 1), rows * cols * 2);

    for lat in 0..=latitudes {
        let theta = lat as f64 * PI / latitudes as f64;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for lon in 0..=longitudes {
            let phi = lon as f64 * 2.0 * PI / longitudes as f64;
            let (sin_phi, cos_phi) = phi.sin_cos();

            mesh.add_vertex(DVec3::new(cos_phi * sin_theta, cos_theta, sin_phi * sin_theta) * size);
        }
    }

    stitch_grid(&mut mesh, latitudes, longitudes, CellWinding::ColumnFirst);

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sphere_counts() {
        let mesh = create_sphere(3, 1.0);
        assert_eq!(mesh.vertex_count(), 247);
        assert_eq!(mesh.triangle_count(), 432);
        assert!(mesh.validate_indices().is_ok());
    }

    #[test]
    fn test_sphere_minimum_level() {
        let mesh = create_sphere(1, 1.0);
        assert_eq!(mesh.vertex_count(), 5 * 7);
        assert_eq!(mesh.triangle_count(), 4 * 6 * 2);
    }

    #[test]
    fn test_sphere_vertices_on_surface() {
        let radius = 2.5;
        let mesh = create_sphere(2, radius);
        for v in mesh.vertices() {
            assert_relative_eq!(v.length(), radius, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_sphere_poles_and_seam() {
        let mesh = create_sphere(1, 1.0);
        let (latitudes, longitudes) = sphere_bands(1);
        let stride = (longitudes + 1) as usize;
        let verts = mesh.vertices();

        // North pole is the first vertex, south pole the last
        assert_relative_eq!(verts[0].y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(verts[verts.len() - 1].y, -1.0, epsilon = 1e-12);

        // Seam column duplicates column zero on every ring
        for lat in 0..=latitudes as usize {
            let first = verts[lat * stride];
            let last = verts[lat * stride + longitudes as usize];
            assert!(first.distance(last) < 1e-12);
        }
    }

    #[test]
    fn test_sphere_first_cell_triangles() {
        let mesh = create_sphere(3, 1.0);
        // Row length is 19
        assert_eq!(mesh.triangles()[0], [0, 1, 19]);
        assert_eq!(mesh.triangles()[1], [1, 20, 19]);
    }

    #[test]
    fn test_sphere_faces_point_outward() {
        let mesh = create_sphere(2, 1.0);
        let verts = mesh.vertices();
        for tri in mesh.triangles() {
            let [a, b, c] = tri.map(|i| verts[i as usize]);
            let normal = (b - a).cross(c - a);
            if normal.length_squared() < 1e-12 {
                continue; // collapsed pole triangle
            }
            let centroid = (a + b + c) / 3.0;
            assert!(normal.dot(centroid) > 0.0);
        }
    }
}
