//! # Noise Field
//!
//! Seeded, continuous 2D noise normalized to `[0, 1]`, used by the rock
//! and terrain builders.

use crate::random::RandomStream;
use config::constants::{
    fold_seed_offset, NOISE_LATTICE_SHIFT_MAX, NOISE_LATTICE_SHIFT_MIN, ROCK_DETAIL_FREQUENCY,
    ROCK_DETAIL_WEIGHT,
};
use noise::{NoiseFn, Perlin};

/// Deterministic 2D gradient noise.
///
/// All state derives from the seed, so a field can be shared freely between
/// threads and sampled in any order.
///
/// Gradient noise is zero on every integer lattice point. Builders sample
/// on grids that can align with the lattice, so each field shifts its input
/// by a fractional amount drawn from the seed.
///
/// # Example
///
/// ```rust
/// use shape_mesh::NoiseField;
///
/// let field = NoiseField::new(7);
/// let a = field.sample(0.25, 1.75);
/// assert!((0.0..=1.0).contains(&a));
/// assert_eq!(a, NoiseField::new(7).sample(0.25, 1.75));
/// ```
#[derive(Debug, Clone)]
pub struct NoiseField {
    seed: i64,
    perlin: Perlin,
    lattice_shift: (f64, f64),
}

impl NoiseField {
    /// Creates a field for the given seed.
    pub fn new(seed: i64) -> Self {
        let mut stream = RandomStream::new(seed);
        let shift_x = stream.range(NOISE_LATTICE_SHIFT_MIN, NOISE_LATTICE_SHIFT_MAX);
        let shift_y = stream.range(NOISE_LATTICE_SHIFT_MIN, NOISE_LATTICE_SHIFT_MAX);
        // Permutation tables take the low 32 bits
        Self {
            seed,
            perlin: Perlin::new(seed as u32),
            lattice_shift: (shift_x, shift_y),
        }
    }

    /// Seed the field was created with.
    #[inline]
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Coordinate offset builders add to their sample positions.
    ///
    /// Equal to the seed for `|seed| < 2^19`; larger seeds are folded so
    /// the offset never swamps the fractional part of a coordinate.
    #[inline]
    pub fn coordinate_offset(&self) -> f64 {
        fold_seed_offset(self.seed) as f64
    }

    /// Samples the field at an arbitrary point. The result lies in `[0, 1]`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let raw = self
            .perlin
            .get([x + self.lattice_shift.0, y + self.lattice_shift.1]);
        (raw * 0.5 + 0.5).clamp(0.0, 1.0)
    }

    /// Base octave plus a half-weight detail octave at doubled frequency.
    ///
    /// `base` and `detail` are the unscaled sample coordinates of each octave;
    /// `scale` and `offset` are applied here. The sum is not renormalized and
    /// ranges over `[0, 1.5]`.
    pub fn sample_two_octave(
        &self,
        base: (f64, f64),
        detail: (f64, f64),
        scale: f64,
        offset: f64,
    ) -> f64 {
        let detail_scale = scale * ROCK_DETAIL_FREQUENCY;
        self.sample(base.0 * scale + offset, base.1 * scale + offset)
            + ROCK_DETAIL_WEIGHT
                * self.sample(detail.0 * detail_scale + offset, detail.1 * detail_scale + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_range() {
        let field = NoiseField::new(1234);
        for i in 0..200 {
            let x = i as f64 * 0.137 - 7.0;
            let y = i as f64 * 0.291 + 3.0;
            let v = field.sample(x, y);
            assert!((0.0..=1.0).contains(&v), "sample {v} out of range");
        }
    }

    #[test]
    fn test_deterministic() {
        let a = NoiseField::new(99);
        let b = NoiseField::new(99);
        for i in 0..50 {
            let p = (i as f64 * 0.31, i as f64 * 0.17);
            assert_eq!(a.sample(p.0, p.1), b.sample(p.0, p.1));
        }
    }

    #[test]
    fn test_continuous() {
        let field = NoiseField::new(5);
        let (x, y) = (3.3, 1.7);
        let a = field.sample(x, y);
        let b = field.sample(x + 1e-6, y + 1e-6);
        assert!((a - b).abs() < 1e-3);
    }

    #[test]
    fn test_seed_changes_field() {
        let a = NoiseField::new(1);
        let b = NoiseField::new(2);
        let differs = (0..50).any(|i| {
            let p = (i as f64 * 0.37 + 0.1, i as f64 * 0.23 + 0.2);
            a.sample(p.0, p.1) != b.sample(p.0, p.1)
        });
        assert!(differs);
    }

    #[test]
    fn test_integer_points_are_not_pinned() {
        let field = NoiseField::new(3);
        let pinned = (0..20)
            .flat_map(|x| (0..20).map(move |y| (x as f64, y as f64)))
            .filter(|&(x, y)| field.sample(x, y) == 0.5)
            .count();
        assert!(pinned < 4, "{pinned} of 400 lattice samples at 0.5");
    }

    #[test]
    fn test_coordinate_offset() {
        assert_eq!(NoiseField::new(42).coordinate_offset(), 42.0);
        assert_eq!(NoiseField::new(-7).coordinate_offset(), -7.0);
        let huge = NoiseField::new(i64::MAX).coordinate_offset();
        assert!(huge.abs() <= (1 << 19) as f64);
        assert_eq!(huge.fract(), 0.0);
    }

    #[test]
    fn test_large_seeds_keep_distinct_fields() {
        let a = NoiseField::new(1 << 60);
        let b = NoiseField::new((1 << 60) + 1);
        let differs = (0..20).any(|i| {
            let p = i as f64 * 0.5;
            a.sample(p + a.coordinate_offset(), p) != b.sample(p + b.coordinate_offset(), p)
        });
        assert!(differs);
    }

    #[test]
    fn test_two_octave_composition() {
        let field = NoiseField::new(11);
        let (scale, offset) = (2.0, 11.0);
        let expected = field.sample(0.3 * scale + offset, 0.6 * scale + offset)
            + 0.5 * field.sample(0.9 * (scale * 2.0) + offset, 0.3 * (scale * 2.0) + offset);
        let got = field.sample_two_octave((0.3, 0.6), (0.9, 0.3), scale, offset);
        assert_eq!(got, expected);
        assert!((0.0..=1.5).contains(&got));
    }
}
