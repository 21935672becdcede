//! # Terrain Primitive
//!
//! A square heightfield patch spanning `[-size, size]` on X and Z.

use super::{stitch_grid, CellWinding};
use crate::mesh::RawMesh;
use crate::noise_field::NoiseField;
use crate::params::ShapeParameters;
use config::constants::{
    scaled_count, TERRAIN_NOISE_FREQUENCY, TERRAIN_RESOLUTION_MIN, TERRAIN_RESOLUTION_PER_LEVEL,
};
use glam::DVec3;

/// Grid cells per side for a detail level.
pub fn terrain_resolution(subdivision_level: u32) -> u32 {
    scaled_count(
        subdivision_level,
        TERRAIN_RESOLUTION_PER_LEVEL,
        TERRAIN_RESOLUTION_MIN,
    )
}

/// Creates a terrain mesh.
///
/// Rows run along Z, columns along X. The height at grid index `(x, z)` is
/// a single noise octave sampled at the grid index, not the world
/// position:
///
/// ```text
/// y = sample(x·s·0.1 + seed, z·s·0.1 + seed) · noise_strength · size
/// ```
///
/// so heights lie in `[0, noise_strength·size]`. Seeds beyond `±2^19` are
/// folded first (see [`NoiseField::coordinate_offset`]).
pub fn create_terrain(params: &ShapeParameters, noise: &NoiseField) -> RawMesh {
    let res = terrain_resolution(params.subdivision_level);
    let offset = noise.coordinate_offset();
    let frequency = params.noise_scale * TERRAIN_NOISE_FREQUENCY;
    let amplitude = params.noise_strength * params.size;
    tracing::trace!(resolution = res, "building terrain");

    let side = res as usize + 1;
    let mut mesh = RawMesh::with_capacity(side * side, res as usize * res as usize * 2);

    for z in 0..=res {
        for x in 0..=res {
            let x_pos = (x as f64 / res as f64 - 0.5) * params.size * 2.0;
            let z_pos = (z as f64 / res as f64 - 0.5) * params.size * 2.0;
            let y = noise.sample(x as f64 * frequency + offset, z as f64 * frequency + offset)
                * amplitude;
            mesh.add_vertex(DVec3::new(x_pos, y, z_pos));
        }
    }

    stitch_grid(&mut mesh, res, res, CellWinding::RowFirst);

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ShapeType;
    use approx::assert_relative_eq;

    fn terrain(level: u32, seed: i64) -> ShapeParameters {
        ShapeParameters {
            subdivision_level: level,
            noise_strength: 0.8,
            ..ShapeParameters::new(ShapeType::Terrain).with_seed(seed)
        }
    }

    #[test]
    fn test_terrain_counts() {
        let params = terrain(2, 0);
        let mesh = create_terrain(&params, &NoiseField::new(params.seed));
        assert_eq!(terrain_resolution(2), 16);
        assert_eq!(mesh.vertex_count(), 17 * 17);
        assert_eq!(mesh.triangle_count(), 16 * 16 * 2);
        assert!(mesh.validate_indices().is_ok());
    }

    #[test]
    fn test_terrain_extent() {
        let params = ShapeParameters {
            size: 4.0,
            ..terrain(1, 3)
        };
        let mesh = create_terrain(&params, &NoiseField::new(params.seed));
        let verts = mesh.vertices();
        assert_relative_eq!(verts[0].x, -4.0);
        assert_relative_eq!(verts[0].z, -4.0);
        let last = verts[verts.len() - 1];
        assert_relative_eq!(last.x, 4.0);
        assert_relative_eq!(last.z, 4.0);
        for v in verts {
            assert!(v.y >= 0.0 && v.y <= params.noise_strength * params.size + 1e-12);
        }
    }

    #[test]
    fn test_flat_when_strength_zero() {
        let params = ShapeParameters {
            noise_strength: 0.0,
            ..terrain(1, 77)
        };
        let mesh = create_terrain(&params, &NoiseField::new(params.seed));
        assert!(mesh.vertices().iter().all(|v| v.y == 0.0));
    }

    #[test]
    fn test_terrain_faces_up() {
        let params = terrain(1, 5);
        let mesh = create_terrain(&params, &NoiseField::new(params.seed));
        let verts = mesh.vertices();
        for tri in mesh.triangles() {
            let [a, b, c] = tri.map(|i| verts[i as usize]);
            assert!((b - a).cross(c - a).y > 0.0);
        }
    }

    #[test]
    fn test_seed_changes_heights() {
        let a = terrain(1, 10);
        let b = terrain(1, 20);
        let mesh_a = create_terrain(&a, &NoiseField::new(a.seed));
        let mesh_b = create_terrain(&b, &NoiseField::new(b.seed));
        assert_ne!(mesh_a.vertices(), mesh_b.vertices());
    }
}
