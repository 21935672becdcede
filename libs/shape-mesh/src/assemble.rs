//! # Mesh Assembly
//!
//! Turns a [`RawMesh`] into a [`FinishedMesh`]: checks the buffers,
//! derives area-weighted vertex normals from triangle winding and computes
//! the bounding box.

use crate::error::{MeshError, MeshResult};
use crate::mesh::{Bounds, FinishedMesh, RawMesh};
use config::constants::{FALLBACK_NORMAL, NORMAL_EPSILON};
use glam::DVec3;

/// Finalizes a raw mesh.
///
/// # Errors
///
/// - [`MeshError::DegenerateMesh`] if the mesh has no vertices or no triangles
/// - [`MeshError::InvalidTopology`] if a triangle references a missing vertex
///
/// # Example
///
/// ```rust
/// use shape_mesh::{finalize, RawMesh};
/// use glam::DVec3;
///
/// let mut raw = RawMesh::new();
/// raw.add_vertex(DVec3::ZERO);
/// raw.add_vertex(DVec3::X);
/// raw.add_vertex(DVec3::Z);
/// raw.add_triangle(0, 2, 1);
///
/// let mesh = finalize(raw).unwrap();
/// assert_eq!(mesh.normals()[0], DVec3::Y);
/// ```
pub fn finalize(raw: RawMesh) -> MeshResult<FinishedMesh> {
    if raw.vertex_count() == 0 {
        return Err(MeshError::degenerate("mesh has no vertices"));
    }
    if raw.triangle_count() == 0 {
        return Err(MeshError::degenerate("mesh has no triangles"));
    }
    raw.validate_indices()?;

    let normals = compute_normals(&raw);
    let bounds = Bounds::from_points(raw.vertices())
        .ok_or_else(|| MeshError::degenerate("mesh has no vertices"))?;

    Ok(FinishedMesh::from_parts(raw, normals, bounds))
}

/// Computes one unit normal per vertex.
///
/// Each triangle adds its unnormalized face normal `(v1 − v0) × (v2 − v0)`
/// to its three vertices, so larger faces weigh more. Vertices whose sum
/// vanishes get [`FALLBACK_NORMAL`].
///
/// Indices must already be validated.
pub fn compute_normals(raw: &RawMesh) -> Vec<DVec3> {
    let vertices = raw.vertices();
    let mut normals = vec![DVec3::ZERO; vertices.len()];

    for tri in raw.triangles() {
        let v0 = vertices[tri[0] as usize];
        let v1 = vertices[tri[1] as usize];
        let v2 = vertices[tri[2] as usize];

        let normal = (v1 - v0).cross(v2 - v0);

        normals[tri[0] as usize] += normal;
        normals[tri[1] as usize] += normal;
        normals[tri[2] as usize] += normal;
    }

    let fallback = DVec3::from_array(FALLBACK_NORMAL);
    let mut fallbacks = 0usize;
    for normal in &mut normals {
        if normal.length_squared() > NORMAL_EPSILON {
            *normal = normal.normalize();
        } else {
            *normal = fallback;
            fallbacks += 1;
        }
    }

    if fallbacks > 0 {
        tracing::warn!(fallbacks, "vertices without a usable normal");
    }

    normals
}
