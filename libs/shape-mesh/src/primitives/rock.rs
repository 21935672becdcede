//! # Rock Primitive
//!
//! A sphere whose vertices are pushed in or out along their radius by
//! two-octave noise.

use super::sphere::create_sphere;
use crate::mesh::RawMesh;
use crate::noise_field::NoiseField;
use crate::params::ShapeParameters;

/// Creates a rock mesh.
///
/// The topology is exactly that of [`create_sphere`] for the same detail
/// level; only positions move. For a vertex `v` the noise value is
///
/// ```text
/// n = sample(v.x·s + seed, v.z·s + seed) + 0.5·sample(v.y·2s + seed, v.x·2s + seed)
/// ```
///
/// with `s = noise_scale`, and the vertex becomes
/// `v · (1 + (n − 0.5)·2·noise_strength)`. `n` is not renormalized, so
/// displacement is biased outward.
pub fn create_rock(params: &ShapeParameters, noise: &NoiseField) -> RawMesh {
    let mut mesh = create_sphere(params.subdivision_level, params.size);
    let offset = noise.coordinate_offset();

    tracing::trace!(
        strength = params.noise_strength,
        scale = params.noise_scale,
        "displacing rock"
    );

    for v in mesh.vertices_mut() {
        let n = noise.sample_two_octave((v.x, v.z), (v.y, v.x), params.noise_scale, offset);
        *v *= 1.0 + (n - 0.5) * 2.0 * params.noise_strength;
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ShapeType;
    use approx::assert_relative_eq;

    fn rock(seed: i64, strength: f64) -> ShapeParameters {
        ShapeParameters {
            noise_strength: strength,
            ..ShapeParameters::new(ShapeType::Rock).with_seed(seed)
        }
    }

    #[test]
    fn test_rock_keeps_sphere_topology() {
        let params = rock(3, 0.4);
        let mesh = create_rock(&params, &NoiseField::new(params.seed));
        let sphere = create_sphere(params.subdivision_level, params.size);
        assert_eq!(mesh.vertex_count(), sphere.vertex_count());
        assert_eq!(mesh.triangles(), sphere.triangles());
    }

    #[test]
    fn test_zero_strength_is_a_sphere() {
        let params = rock(8, 0.0);
        let mesh = create_rock(&params, &NoiseField::new(params.seed));
        let sphere = create_sphere(params.subdivision_level, params.size);
        for (a, b) in mesh.vertices().iter().zip(sphere.vertices()) {
            assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-12);
            assert_relative_eq!(a.z, b.z, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_displacement_is_radial_and_bounded() {
        let params = rock(21, 1.0);
        let mesh = create_rock(&params, &NoiseField::new(params.seed));
        let sphere = create_sphere(params.subdivision_level, params.size);
        for (displaced, base) in mesh.vertices().iter().zip(sphere.vertices()) {
            // n in [0, 1.5] so the factor lies in [0, 3] at full strength
            let factor = displaced.length() / base.length();
            assert!((-1e-9..=3.0 + 1e-9).contains(&factor));
            if displaced.length() > 1e-9 {
                assert!(displaced.normalize().dot(base.normalize()) > 1.0 - 1e-9);
            }
        }
    }

    #[test]
    fn test_seed_changes_rock() {
        let a = rock(1, 0.3);
        let b = rock(2, 0.3);
        let mesh_a = create_rock(&a, &NoiseField::new(a.seed));
        let mesh_b = create_rock(&b, &NoiseField::new(b.seed));
        assert_ne!(mesh_a.vertices(), mesh_b.vertices());
    }
}
