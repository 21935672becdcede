//! Renderer payloads built from a finished mesh.
//!
//! Nothing here touches the filesystem; callers decide where the data goes.

use crate::mesh::FinishedMesh;
use std::fmt::Write;

/// Flat buffers suitable for GPU upload, using `f32` precision.
///
/// # Examples
/// ```
/// use shape_mesh::{generate, ShapeParameters, ShapeType};
///
/// let mesh = generate(&ShapeParameters::new(ShapeType::Crystal)).unwrap();
/// let buffers = mesh.to_buffers();
///
/// assert_eq!(buffers.positions.len(), 8 * 3); // 8 vertices * 3 components
/// assert_eq!(buffers.indices.len(), 12 * 3); // 12 triangles * 3 indices
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions as `[x, y, z, x, y, z, ...]`.
    pub positions: Vec<f32>,
    /// Vertex normals, parallel to `positions`.
    pub normals: Vec<f32>,
    /// Triangle indices as `[i0, i1, i2, ...]`.
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl FinishedMesh {
    /// Exports positions, normals and indices as flat buffers.
    pub fn to_buffers(&self) -> MeshBuffers {
        let flatten = |vs: &[glam::DVec3]| {
            vs.iter()
                .flat_map(|v| v.as_vec3().to_array())
                .collect::<Vec<f32>>()
        };
        MeshBuffers {
            positions: flatten(self.vertices()),
            normals: flatten(self.normals()),
            indices: self.indices(),
        }
    }

    /// Renders the mesh as Wavefront OBJ text with one object named `name`.
    ///
    /// Indices are 1-based and every face shares its position and normal
    /// index (`f a//a b//b c//c`).
    ///
    /// ```rust
    /// use shape_mesh::{generate, ShapeParameters, ShapeType};
    ///
    /// let params = ShapeParameters::new(ShapeType::Crystal);
    /// let obj = generate(&params).unwrap().to_obj(&params.label());
    /// assert!(obj.starts_with("o Crystal_0\n"));
    /// assert_eq!(obj.lines().filter(|l| l.starts_with("f ")).count(), 12);
    /// ```
    pub fn to_obj(&self, name: &str) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = writeln!(out, "o {name}");
        for v in self.vertices() {
            let _ = writeln!(out, "v {} {} {}", v.x, v.y, v.z);
        }
        for n in self.normals() {
            let _ = writeln!(out, "vn {} {} {}", n.x, n.y, n.z);
        }
        for [a, b, c] in self.triangles() {
            let (a, b, c) = (a + 1, b + 1, c + 1);
            let _ = writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}");
        }
        out
    }
}
