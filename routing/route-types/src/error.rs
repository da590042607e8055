//! Error types for routing operations.
//!
//! An unreachable goal is not an error: searches report it as an empty path
//! with a [`crate::Termination`] reason. [`RoutingError`] covers only inputs
//! that are rejected before any grid is built.

use nalgebra::Point3;
use nav_spatial::SpatialError;

/// Errors that can occur before a search starts.
///
/// # Example
///
/// ```
/// use route_types::RoutingError;
/// use nav_spatial::SpatialError;
///
/// let error: RoutingError = SpatialError::InvalidVoxelSize(0.0).into();
/// assert!(error.is_config_error());
/// assert!(error.to_string().contains("voxel size"));
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum RoutingError {
    /// An invalid configuration parameter was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The grid configuration was rejected.
    #[error("invalid grid: {0}")]
    Spatial(#[from] SpatialError),

    /// A start or end point has a NaN or infinite coordinate.
    #[error("{label} point ({}, {}, {}) is not finite", .point.x, .point.y, .point.z)]
    InvalidPoint {
        /// Which input was rejected (`"start"` or `"end"`).
        label: &'static str,
        /// The rejected point.
        point: Point3<f64>,
    },
}

impl RoutingError {
    /// Creates an invalid configuration error with the given message.
    ///
    /// # Example
    ///
    /// ```
    /// use route_types::RoutingError;
    ///
    /// let error = RoutingError::invalid_config("max_expansions must be positive");
    /// assert!(error.to_string().contains("max_expansions"));
    /// ```
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Checks that a point is finite, labelling the error with `label`.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidPoint`] if any coordinate is NaN or infinite.
    pub fn check_point(label: &'static str, point: &Point3<f64>) -> Result<(), Self> {
        if point.coords.iter().all(|v| v.is_finite()) {
            Ok(())
        } else {
            Err(Self::InvalidPoint {
                label,
                point: *point,
            })
        }
    }

    /// Returns `true` if the error comes from configuration rather than inputs.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig(_) | Self::Spatial(_))
    }
}
