//! # Config Crate
//!
//! Centralized configuration constants for procedural shape synthesis.
//! Tessellation counts, shape proportions, parameter defaults and the
//! variation layout are defined here so the geometry core never carries
//! literal magic numbers.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{scaled_count, SPHERE_LATITUDE_MIN, SPHERE_LATITUDE_PER_LEVEL};
//!
//! // Latitude bands for a detail level of 3
//! let bands = scaled_count(3, SPHERE_LATITUDE_PER_LEVEL, SPHERE_LATITUDE_MIN);
//! assert_eq!(bands, 12);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Deterministic**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
