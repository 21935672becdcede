//! # Mesh Errors
//!
//! Error types for shape synthesis. Every failure is surfaced synchronously
//! and no partial mesh is ever returned alongside an error.

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur during mesh generation.
///
/// ## Example
///
/// ```rust
/// use shape_mesh::{generate, MeshError, ShapeParameters};
///
/// let params = ShapeParameters { size: -1.0, ..ShapeParameters::default() };
/// match generate(&params) {
///     Err(MeshError::InvalidParameter { parameter, .. }) => assert_eq!(parameter, "size"),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A shape parameter is outside its accepted range.
    #[error("Invalid parameter `{parameter}`: {message}")]
    InvalidParameter {
        /// Name of the offending field.
        parameter: &'static str,
        /// What was wrong with the value.
        message: String,
    },

    /// A builder produced no vertices or no triangles.
    #[error("Degenerate mesh: {message}")]
    DegenerateMesh {
        /// Description of the empty buffer.
        message: String,
    },

    /// The requested shape family is not recognized.
    #[error("Unsupported shape type: {name}")]
    UnsupportedShapeType {
        /// The name or discriminant that failed to resolve.
        name: String,
    },

    /// A triangle references a vertex that does not exist.
    #[error("Invalid topology: {message}")]
    InvalidTopology {
        /// Description of the bad index.
        message: String,
    },

    /// The batch configuration is invalid.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            message: message.into(),
        }
    }

    /// Creates a degenerate mesh error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateMesh {
            message: message.into(),
        }
    }

    /// Creates an unsupported shape type error.
    pub fn unsupported_shape(name: impl Into<String>) -> Self {
        Self::UnsupportedShapeType { name: name.into() }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh generation.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::invalid_parameter("size", "must be positive, got -1");
        assert!(err.to_string().contains("size"));
        assert!(err.to_string().contains("-1"));

        let err = MeshError::unsupported_shape("Cube");
        assert_eq!(err.to_string(), "Unsupported shape type: Cube");

        let err = MeshError::degenerate("no triangles");
        assert!(err.to_string().starts_with("Degenerate mesh"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: MeshError = ConfigError::InvalidSeedStride(0).into();
        assert!(matches!(err, MeshError::Config(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
