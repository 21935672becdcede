//! # Shape Mesh
//!
//! Deterministic procedural mesh synthesis for six parametric shape
//! families: rock, crystal, sphere, tube, torus and terrain.
//!
//! ## Architecture
//!
//! ```text
//! ShapeParameters ──validate──▶ BuildContext (noise + random, from seed)
//!        │                             │
//!        └──────────▶ primitives::build_raw ──▶ RawMesh
//!                                                 │
//!                               assemble::finalize ▼
//!                                            FinishedMesh
//! ```
//!
//! Every call is a pure function of its [`ShapeParameters`]: the same
//! parameters always yield the same vertices and indices. Batches derive
//! one seed per member and may run in parallel.
//!
//! ## Usage
//!
//! ```rust
//! use shape_mesh::{generate, ShapeParameters, ShapeType};
//!
//! let params = ShapeParameters {
//!     shape_type: ShapeType::Sphere,
//!     subdivision_level: 3,
//!     size: 1.0,
//!     ..ShapeParameters::default()
//! };
//! let mesh = generate(&params)?;
//! assert_eq!(mesh.vertex_count(), 247);
//! assert_eq!(mesh.triangle_count(), 432);
//! # Ok::<(), shape_mesh::MeshError>(())
//! ```

pub mod assemble;
pub mod error;
pub mod export;
pub mod mesh;
pub mod noise_field;
pub mod params;
pub mod primitives;
pub mod random;
pub mod variation;

pub use assemble::finalize;
pub use error::{MeshError, MeshResult};
pub use export::MeshBuffers;
pub use mesh::{Bounds, FinishedMesh, RawMesh};
pub use noise_field::NoiseField;
pub use params::{ShapeParameters, ShapeType};
pub use random::RandomStream;
pub use variation::{
    generate_batch, generate_batch_with, generate_variations, variation_offset,
    variation_parameters, Variation,
};

use primitives::{build_raw, BuildContext};

/// Generates one finished mesh.
///
/// Parameters are validated before any geometry is built.
///
/// # Errors
///
/// - [`MeshError::InvalidParameter`] for out-of-range parameters
/// - [`MeshError::DegenerateMesh`] if a builder produced an empty mesh
pub fn generate(params: &ShapeParameters) -> MeshResult<FinishedMesh> {
    params.validate()?;

    let mut ctx = BuildContext::new(params.seed);
    let raw = build_raw(params, &mut ctx);
    let mesh = finalize(raw)?;

    tracing::debug!(
        shape = %params.shape_type,
        seed = params.seed,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated mesh"
    );

    Ok(mesh)
}
