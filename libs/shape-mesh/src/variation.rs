//! # Variation Batches
//!
//! Generates families of meshes from one parameter bundle by deriving a
//! distinct seed per member (`seed + i·stride`). Members are independent,
//! so the batch can run on the rayon pool; results are always returned in
//! index order.

use crate::error::MeshResult;
use crate::generate;
use crate::mesh::FinishedMesh;
use crate::params::ShapeParameters;
use config::constants::{variation_seed, GeneratorConfig, VARIATION_SPACING};
use glam::DVec3;
use rayon::prelude::*;
use serde::Serialize;

/// One member of a laid-out variation batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variation {
    /// Position in the batch.
    pub index: usize,
    /// Parameters the mesh was generated from.
    pub params: ShapeParameters,
    /// Suggested placement so members sit side by side along +X.
    pub offset: DVec3,
    /// The generated mesh.
    pub mesh: FinishedMesh,
}

/// Parameter bundles of a batch, without generating geometry.
///
/// ```rust
/// use shape_mesh::{variation_parameters, ShapeParameters};
///
/// let base = ShapeParameters::default().with_seed(10);
/// let seeds: Vec<i64> = variation_parameters(&base, 3).iter().map(|p| p.seed).collect();
/// assert_eq!(seeds, vec![10, 1010, 2010]);
/// ```
pub fn variation_parameters(params: &ShapeParameters, count: usize) -> Vec<ShapeParameters> {
    derive_parameters(params, count, &GeneratorConfig::default())
}

/// Placement of the `index`-th variation.
pub fn variation_offset(index: usize, size: f64) -> DVec3 {
    DVec3::new(index as f64 * size * VARIATION_SPACING, 0.0, 0.0)
}

/// Generates `count` meshes with seeds `seed + i·1000`, in order.
///
/// `params` is never modified. The first failing member aborts the whole
/// batch and no partial result is returned. `count == 0` yields an empty
/// batch.
///
/// # Example
///
/// ```rust
/// use shape_mesh::{generate, generate_batch, ShapeParameters, ShapeType};
///
/// let params = ShapeParameters::new(ShapeType::Crystal).with_seed(4);
/// let batch = generate_batch(&params, 3).unwrap();
/// assert_eq!(batch.len(), 3);
/// assert_eq!(batch[2], generate(&params.with_seed(2004)).unwrap());
/// ```
pub fn generate_batch(params: &ShapeParameters, count: usize) -> MeshResult<Vec<FinishedMesh>> {
    generate_batch_with(params, count, &GeneratorConfig::default())
}

/// Like [`generate_batch`] with an explicit stride and threading choice.
pub fn generate_batch_with(
    params: &ShapeParameters,
    count: usize,
    config: &GeneratorConfig,
) -> MeshResult<Vec<FinishedMesh>> {
    let members = prepare_batch(params, count, config)?;
    generate_members(&members, config)
}

/// Generates a batch and attaches placement and parameters to each member.
pub fn generate_variations(params: &ShapeParameters, count: usize) -> MeshResult<Vec<Variation>> {
    let config = GeneratorConfig::default();
    let members = prepare_batch(params, count, &config)?;
    let meshes = generate_members(&members, &config)?;
    Ok(members
        .into_iter()
        .zip(meshes)
        .enumerate()
        .map(|(index, (member, mesh))| Variation {
            index,
            params: member,
            offset: variation_offset(index, params.size),
            mesh,
        })
        .collect())
}

/// Validates inputs and derives member parameters; fails before any work
/// is spawned.
fn prepare_batch(
    params: &ShapeParameters,
    count: usize,
    config: &GeneratorConfig,
) -> MeshResult<Vec<ShapeParameters>> {
    config.validate()?;
    params.validate()?;

    tracing::info!(
        shape = %params.shape_type,
        base_seed = params.seed,
        count,
        parallel = config.parallel,
        "generating variation batch"
    );
    Ok(derive_parameters(params, count, config))
}

fn generate_members(
    members: &[ShapeParameters],
    config: &GeneratorConfig,
) -> MeshResult<Vec<FinishedMesh>> {
    if config.parallel {
        // Indexed collect keeps member order regardless of scheduling
        members.par_iter().map(generate).collect()
    } else {
        members.iter().map(generate).collect()
    }
}

fn derive_parameters(
    params: &ShapeParameters,
    count: usize,
    config: &GeneratorConfig,
) -> Vec<ShapeParameters> {
    (0..count)
        .map(|i| params.with_seed(variation_seed(params.seed, i, config.seed_stride)))
        .collect()
}
