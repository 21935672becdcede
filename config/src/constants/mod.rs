//! Centralized configuration values shared across the shape synthesis crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Squared length below which an accumulated vertex normal is treated as zero.
///
/// # Examples
/// ```
/// use config::constants::NORMAL_EPSILON;
/// assert!(NORMAL_EPSILON < 1.0e-12);
/// ```
pub const NORMAL_EPSILON: f64 = 1.0e-20;

/// Unit vector assigned to vertices whose accumulated normal has zero length
/// (unreferenced vertices or vertices touching only degenerate triangles).
///
/// # Examples
/// ```
/// use config::constants::FALLBACK_NORMAL;
/// assert_eq!(FALLBACK_NORMAL, [0.0, 1.0, 0.0]);
/// ```
pub const FALLBACK_NORMAL: [f64; 3] = [0.0, 1.0, 0.0];

// =============================================================================
// PARAMETER DEFAULTS
// =============================================================================

/// Default detail level.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SUBDIVISION_LEVEL;
/// assert!(DEFAULT_SUBDIVISION_LEVEL >= 1);
/// ```
pub const DEFAULT_SUBDIVISION_LEVEL: u32 = 3;

/// Highest accepted detail level.
///
/// At this level the densest family (terrain, `8·level` cells per side)
/// stays far below `u32::MAX` vertices, so every `u32` index fits.
pub const MAX_SUBDIVISION_LEVEL: u32 = 4096;

/// Default overall size in world units.
pub const DEFAULT_SIZE: f64 = 1.0;

/// Default noise displacement strength, within `[0, 1]`.
pub const DEFAULT_NOISE_STRENGTH: f64 = 0.3;

/// Default noise frequency multiplier.
pub const DEFAULT_NOISE_SCALE: f64 = 2.0;

/// Default seed.
pub const DEFAULT_SEED: i64 = 0;

/// Default number of meshes produced by a variation batch.
pub const DEFAULT_VARIATION_COUNT: usize = 5;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Sphere latitude bands added per detail level.
pub const SPHERE_LATITUDE_PER_LEVEL: u32 = 4;
/// Minimum sphere latitude bands.
pub const SPHERE_LATITUDE_MIN: u32 = 3;
/// Sphere longitude bands added per detail level.
pub const SPHERE_LONGITUDE_PER_LEVEL: u32 = 6;
/// Minimum sphere longitude bands.
pub const SPHERE_LONGITUDE_MIN: u32 = 4;

/// Tube wall segments added per detail level.
pub const TUBE_SEGMENTS_PER_LEVEL: u32 = 4;
/// Minimum tube wall segments.
pub const TUBE_SEGMENTS_MIN: u32 = 6;

/// Torus segments around the main ring added per detail level.
pub const TORUS_MAIN_SEGMENTS_PER_LEVEL: u32 = 6;
/// Minimum torus main-ring segments.
pub const TORUS_MAIN_SEGMENTS_MIN: u32 = 8;
/// Torus segments around the tube cross-section added per detail level.
pub const TORUS_TUBE_SEGMENTS_PER_LEVEL: u32 = 4;
/// Minimum torus tube segments.
pub const TORUS_TUBE_SEGMENTS_MIN: u32 = 6;

/// Terrain grid cells per side added per detail level.
pub const TERRAIN_RESOLUTION_PER_LEVEL: u32 = 8;
/// Minimum terrain grid cells per side.
pub const TERRAIN_RESOLUTION_MIN: u32 = 4;

/// Number of sides of the crystal cross-section.
///
/// # Examples
/// ```
/// use config::constants::CRYSTAL_SEGMENTS;
/// assert_eq!(CRYSTAL_SEGMENTS, 6);
/// ```
pub const CRYSTAL_SEGMENTS: u32 = 6;

// =============================================================================
// SHAPE PROPORTIONS
// =============================================================================

/// Inner radius of the tube as a fraction of its outer radius.
pub const TUBE_INNER_RADIUS_RATIO: f64 = 0.7;

/// Tube height as a multiple of its size.
pub const TUBE_HEIGHT_RATIO: f64 = 2.0;

/// Torus tube radius as a fraction of the main radius.
pub const TORUS_TUBE_RADIUS_RATIO: f64 = 0.3;

/// Crystal height as a multiple of its size.
pub const CRYSTAL_HEIGHT_RATIO: f64 = 2.0;

/// Crystal ring radius as a fraction of its size.
pub const CRYSTAL_RADIUS_RATIO: f64 = 0.4;

/// Fraction of the crystal height below the ring (bottom apex depth).
pub const CRYSTAL_BOTTOM_APEX_RATIO: f64 = 0.3;

/// Fraction of the crystal height above the ring (top apex height).
pub const CRYSTAL_TOP_APEX_RATIO: f64 = 0.7;

/// Maximum relative ring-radius jitter; each ring vertex scales by a factor
/// drawn uniformly from `[1 - jitter, 1 + jitter]`.
///
/// # Examples
/// ```
/// use config::constants::CRYSTAL_RADIUS_JITTER;
/// let (lo, hi) = (1.0 - CRYSTAL_RADIUS_JITTER, 1.0 + CRYSTAL_RADIUS_JITTER);
/// assert!((lo - 0.8).abs() < 1e-12 && (hi - 1.2).abs() < 1e-12);
/// ```
pub const CRYSTAL_RADIUS_JITTER: f64 = 0.2;

/// Frequency multiplier applied to terrain grid coordinates before sampling.
pub const TERRAIN_NOISE_FREQUENCY: f64 = 0.1;

/// Weight of the detail octave in the rock displacement.
pub const ROCK_DETAIL_WEIGHT: f64 = 0.5;

/// Frequency multiplier of the rock detail octave.
pub const ROCK_DETAIL_FREQUENCY: f64 = 2.0;

/// Seeds are folded into `[-period/2, period/2)` before being added to noise
/// coordinates, keeping the fractional part of every sample exact in `f64`.
pub const NOISE_OFFSET_PERIOD: i64 = 1 << 20;

/// Range of the per-seed fractional shift that keeps samples off the
/// integer lattice, where gradient noise is always zero.
pub const NOISE_LATTICE_SHIFT_MIN: f64 = 0.25;

/// Upper end of the lattice shift range.
pub const NOISE_LATTICE_SHIFT_MAX: f64 = 0.75;

// =============================================================================
// VARIATION CONSTANTS
// =============================================================================

/// Seed distance between consecutive meshes of a variation batch.
///
/// # Examples
/// ```
/// use config::constants::{variation_seed, VARIATION_SEED_STRIDE};
/// assert_eq!(variation_seed(7, 2, VARIATION_SEED_STRIDE), 2007);
/// ```
pub const VARIATION_SEED_STRIDE: i64 = 1000;

/// Horizontal spacing between laid-out variations, as a multiple of size.
pub const VARIATION_SPACING: f64 = 2.5;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Scales a per-level count by the detail level and applies a floor.
///
/// # Examples
/// ```
/// use config::constants::scaled_count;
/// assert_eq!(scaled_count(1, 4, 6), 6);
/// assert_eq!(scaled_count(3, 4, 6), 12);
/// ```
#[inline]
pub fn scaled_count(level: u32, per_level: u32, min: u32) -> u32 {
    level.saturating_mul(per_level).max(min)
}

/// Folds a seed into `[-NOISE_OFFSET_PERIOD/2, NOISE_OFFSET_PERIOD/2)`.
///
/// Seeds already inside the range are returned unchanged.
///
/// # Examples
/// ```
/// use config::constants::{fold_seed_offset, NOISE_OFFSET_PERIOD};
/// assert_eq!(fold_seed_offset(-7), -7);
/// assert_eq!(fold_seed_offset(NOISE_OFFSET_PERIOD + 3), 3);
/// ```
#[inline]
pub fn fold_seed_offset(seed: i64) -> i64 {
    let half = NOISE_OFFSET_PERIOD / 2;
    seed.wrapping_add(half).rem_euclid(NOISE_OFFSET_PERIOD) - half
}

/// Derives the seed of the `index`-th member of a variation batch.
///
/// Uses wrapping arithmetic so extreme base seeds never overflow.
///
/// # Examples
/// ```
/// use config::constants::variation_seed;
/// assert_eq!(variation_seed(0, 4, 1000), 4000);
/// assert_eq!(variation_seed(-10, 1, 1000), 990);
/// ```
#[inline]
pub fn variation_seed(base: i64, index: usize, stride: i64) -> i64 {
    base.wrapping_add((index as i64).wrapping_mul(stride))
}

// =============================================================================
// GENERATOR CONFIGURATION
// =============================================================================

/// Immutable snapshot of the batch generation settings.
///
/// # Examples
/// ```
/// use config::constants::GeneratorConfig;
/// let config = GeneratorConfig::default();
/// assert_eq!(config.seed_stride, 1000);
/// assert!(config.parallel);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Seed distance between consecutive batch members.
    pub seed_stride: i64,
    /// Whether batch members are generated on the rayon thread pool.
    pub parallel: bool,
}

impl GeneratorConfig {
    /// Builds a configuration, rejecting a zero stride (every batch member
    /// would share the same seed).
    ///
    /// # Examples
    /// ```
    /// use config::constants::GeneratorConfig;
    /// let cfg = GeneratorConfig::new(500, false).expect("valid config");
    /// assert_eq!(cfg.seed_stride, 500);
    /// assert!(GeneratorConfig::new(0, true).is_err());
    /// ```
    pub fn new(seed_stride: i64, parallel: bool) -> Result<Self, ConfigError> {
        if seed_stride == 0 {
            return Err(ConfigError::InvalidSeedStride(seed_stride));
        }
        Ok(Self {
            seed_stride,
            parallel,
        })
    }

    /// Returns a copy that generates batches on the calling thread.
    pub fn sequential(self) -> Self {
        Self {
            parallel: false,
            ..self
        }
    }

    /// Checks a configuration built with struct literal syntax.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::new(self.seed_stride, self.parallel).map(|_| ())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed_stride: VARIATION_SEED_STRIDE,
            parallel: true,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the variation seed stride is zero.
    InvalidSeedStride(i64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSeedStride(value) => {
                write!(f, "seed_stride must be non-zero: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
