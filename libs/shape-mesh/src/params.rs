//! # Shape Parameters
//!
//! The immutable value bundle that fully determines a generated mesh,
//! plus the shape family enum and its validation.

use crate::error::{MeshError, MeshResult};
use config::constants::{
    DEFAULT_NOISE_SCALE, DEFAULT_NOISE_STRENGTH, DEFAULT_SEED, DEFAULT_SIZE,
    DEFAULT_SUBDIVISION_LEVEL, MAX_SUBDIVISION_LEVEL,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six parametric shape families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShapeType {
    /// Noise-displaced sphere.
    #[default]
    Rock,
    /// Hexagonal bipyramid with a jittered waist.
    Crystal,
    /// Latitude/longitude sphere.
    Sphere,
    /// Open hollow cylinder.
    Tube,
    /// Ring torus.
    Torus,
    /// Noise heightfield patch.
    Terrain,
}

impl ShapeType {
    /// All families in declaration order.
    pub const ALL: [ShapeType; 6] = [
        ShapeType::Rock,
        ShapeType::Crystal,
        ShapeType::Sphere,
        ShapeType::Tube,
        ShapeType::Torus,
        ShapeType::Terrain,
    ];

    /// Canonical name, also used in object labels.
    pub fn name(self) -> &'static str {
        match self {
            ShapeType::Rock => "Rock",
            ShapeType::Crystal => "Crystal",
            ShapeType::Sphere => "Sphere",
            ShapeType::Tube => "Tube",
            ShapeType::Torus => "Torus",
            ShapeType::Terrain => "Terrain",
        }
    }

    /// One-line description for pickers and tooltips.
    pub fn description(self) -> &'static str {
        match self {
            ShapeType::Rock => "Organic rock with noise displacement",
            ShapeType::Crystal => "Crystalline structure with sharp edges",
            ShapeType::Sphere => "Smooth sphere with subdivisions",
            ShapeType::Tube => "Hollow tube/pipe shape",
            ShapeType::Torus => "Donut shape",
            ShapeType::Terrain => "Flat terrain patch with noise",
        }
    }

    /// True for families whose geometry depends on the noise parameters.
    pub fn uses_noise(self) -> bool {
        matches!(self, ShapeType::Rock | ShapeType::Terrain)
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeType {
    type Err = MeshError;

    /// Parses a family name, ignoring ASCII case.
    ///
    /// ```rust
    /// use shape_mesh::ShapeType;
    ///
    /// assert_eq!("torus".parse::<ShapeType>().unwrap(), ShapeType::Torus);
    /// assert!("cube".parse::<ShapeType>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ShapeType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| MeshError::unsupported_shape(trimmed))
    }
}

impl TryFrom<u8> for ShapeType {
    type Error = MeshError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ShapeType::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| MeshError::unsupported_shape(format!("#{value}")))
    }
}

/// Inputs of one generation call.
///
/// Every field is validated even when the selected family ignores it.
///
/// # Example
///
/// ```rust
/// use shape_mesh::{ShapeParameters, ShapeType};
///
/// let params = ShapeParameters::default()
///     .with_shape(ShapeType::Crystal)
///     .with_seed(42);
/// assert!(params.validate().is_ok());
/// assert_eq!(params.label(), "Crystal_42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeParameters {
    /// Shape family.
    pub shape_type: ShapeType,
    /// Detail level, from 1 to `MAX_SUBDIVISION_LEVEL`.
    pub subdivision_level: u32,
    /// Overall size in world units, strictly positive.
    pub size: f64,
    /// Displacement strength in `[0, 1]`.
    pub noise_strength: f64,
    /// Noise frequency multiplier, strictly positive.
    pub noise_scale: f64,
    /// Seed for noise and jitter.
    pub seed: i64,
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self {
            shape_type: ShapeType::default(),
            subdivision_level: DEFAULT_SUBDIVISION_LEVEL,
            size: DEFAULT_SIZE,
            noise_strength: DEFAULT_NOISE_STRENGTH,
            noise_scale: DEFAULT_NOISE_SCALE,
            seed: DEFAULT_SEED,
        }
    }
}

impl ShapeParameters {
    /// Default parameters for the given family.
    pub fn new(shape_type: ShapeType) -> Self {
        Self {
            shape_type,
            ..Self::default()
        }
    }

    /// Returns a copy with a different shape family.
    pub fn with_shape(self, shape_type: ShapeType) -> Self {
        Self { shape_type, ..self }
    }

    /// Returns a copy with a different seed.
    pub fn with_seed(self, seed: i64) -> Self {
        Self { seed, ..self }
    }

    /// Object label in the form `<Type>_<seed>`.
    pub fn label(&self) -> String {
        format!("{}_{}", self.shape_type, self.seed)
    }

    /// Checks every field, failing on the first out-of-range value.
    pub fn validate(&self) -> MeshResult<()> {
        if self.subdivision_level < 1 {
            return Err(MeshError::invalid_parameter(
                "subdivision_level",
                format!("must be at least 1, got {}", self.subdivision_level),
            ));
        }
        if self.subdivision_level > MAX_SUBDIVISION_LEVEL {
            return Err(MeshError::invalid_parameter(
                "subdivision_level",
                format!(
                    "must be at most {MAX_SUBDIVISION_LEVEL}, got {}",
                    self.subdivision_level
                ),
            ));
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(MeshError::invalid_parameter(
                "size",
                format!("must be positive and finite, got {}", self.size),
            ));
        }
        if !(0.0..=1.0).contains(&self.noise_strength) {
            return Err(MeshError::invalid_parameter(
                "noise_strength",
                format!("must lie in [0, 1], got {}", self.noise_strength),
            ));
        }
        if !self.noise_scale.is_finite() || self.noise_scale <= 0.0 {
            return Err(MeshError::invalid_parameter(
                "noise_scale",
                format!("must be positive and finite, got {}", self.noise_scale),
            ));
        }
        Ok(())
    }
}
