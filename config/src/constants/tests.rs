//! Tests for the generator configuration snapshot.

use super::*;

/// Ensures the default configuration matches the documented constants.
#[test]
fn default_config_is_valid() {
    let cfg = GeneratorConfig::default();
    assert_eq!(cfg.seed_stride, VARIATION_SEED_STRIDE);
    assert!(cfg.parallel);
    assert!(cfg.validate().is_ok());
}

/// Validates the builder rejects a zero stride.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GeneratorConfig::new(0, true).unwrap_err(),
        ConfigError::InvalidSeedStride(0)
    );
    assert!(GeneratorConfig::new(-1000, false).is_ok());
}

#[test]
fn validate_catches_literal_configs() {
    let cfg = GeneratorConfig {
        seed_stride: 0,
        parallel: false,
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn sequential_keeps_stride() {
    let cfg = GeneratorConfig::new(250, true).unwrap().sequential();
    assert_eq!(cfg.seed_stride, 250);
    assert!(!cfg.parallel);
}

#[test]
fn config_error_display() {
    let err = ConfigError::InvalidSeedStride(0);
    assert!(err.to_string().contains("seed_stride"));
}
