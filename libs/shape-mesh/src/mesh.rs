//! # Mesh Data Structures
//!
//! [`RawMesh`] is what a shape builder emits: positions plus triangle
//! index triples. [`FinishedMesh`] adds per-vertex normals and an
//! axis-aligned [`Bounds`]; it is produced once by
//! [`finalize`](crate::assemble::finalize) and never mutated afterwards.

use crate::error::{MeshError, MeshResult};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A triangle mesh before normals and bounds are derived.
///
/// All geometry calculations use f64. Export to f32 only happens when
/// building renderer payloads.
///
/// # Example
///
/// ```rust
/// use shape_mesh::RawMesh;
/// use glam::DVec3;
///
/// let mut mesh = RawMesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.indices(), vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Triangle indices, counter-clockwise seen from outside
    triangles: Vec<[u32; 3]>,
}

impl RawMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    ///
    /// Builders only run on validated parameters, which cap the vertex
    /// count well below `u32::MAX`.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        debug_assert!(self.vertices.len() < u32::MAX as usize);
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns mutable vertex positions. Topology cannot be changed this way.
    #[inline]
    pub fn vertices_mut(&mut self) -> &mut [DVec3] {
        &mut self.vertices
    }

    /// Returns the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the flattened index list `[i0, i1, i2, i0, i1, i2, ...]`.
    pub fn indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Checks that every triangle references an existing vertex.
    pub fn validate_indices(&self) -> MeshResult<()> {
        let vertex_count = self.vertices.len();
        for (t, tri) in self.triangles.iter().enumerate() {
            if let Some(bad) = tri.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::invalid_topology(format!(
                    "triangle {t} references vertex {bad} but the mesh has {vertex_count} vertices"
                )));
            }
        }
        Ok(())
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Component-wise minimum corner.
    pub min: DVec3,
    /// Component-wise maximum corner.
    pub max: DVec3,
}

impl Bounds {
    /// Computes the bounds of a point set. Returns `None` for an empty set.
    ///
    /// ```rust
    /// use shape_mesh::Bounds;
    /// use glam::DVec3;
    ///
    /// let b = Bounds::from_points(&[DVec3::new(-1.0, 2.0, 0.0), DVec3::new(3.0, -2.0, 1.0)]).unwrap();
    /// assert_eq!(b.min, DVec3::new(-1.0, -2.0, 0.0));
    /// assert_eq!(b.max, DVec3::new(3.0, 2.0, 1.0));
    /// ```
    pub fn from_points(points: &[DVec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(Self { min, max })
    }

    /// Midpoint of the box.
    #[inline]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths of the box.
    #[inline]
    pub fn extent(&self) -> DVec3 {
        self.max - self.min
    }

    /// True if `point` lies inside the box grown by `tolerance` on every side.
    pub fn contains(&self, point: DVec3, tolerance: f64) -> bool {
        point.cmpge(self.min - DVec3::splat(tolerance)).all()
            && point.cmple(self.max + DVec3::splat(tolerance)).all()
    }
}

/// A generated mesh with derived normals and bounds.
///
/// Owned exclusively by the caller that requested it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishedMesh {
    raw: RawMesh,
    normals: Vec<DVec3>,
    bounds: Bounds,
}

impl FinishedMesh {
    pub(crate) fn from_parts(raw: RawMesh, normals: Vec<DVec3>, bounds: Bounds) -> Self {
        debug_assert_eq!(raw.vertex_count(), normals.len());
        Self {
            raw,
            normals,
            bounds,
        }
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        self.raw.vertices()
    }

    /// Returns the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        self.raw.triangles()
    }

    /// Returns the flattened index list.
    pub fn indices(&self) -> Vec<u32> {
        self.raw.indices()
    }

    /// Returns one unit normal per vertex.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the axis-aligned bounds.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.raw.vertex_count()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.raw.triangle_count()
    }

    /// Returns the underlying raw mesh, dropping normals and bounds.
    pub fn into_raw(self) -> RawMesh {
        self.raw
    }
}
