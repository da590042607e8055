//! Error types for spatial operations.

/// Errors that can occur while configuring or building a navigation grid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SpatialError {
    /// The voxel size must be positive and finite.
    #[error("voxel size must be positive and finite, got {0}")]
    InvalidVoxelSize(f64),

    /// The grid extent (half-width of the covered cube) must be positive and finite.
    #[error("grid extent must be positive and finite, got {0}")]
    InvalidExtent(f64),

    /// The grid would have more cells than allowed.
    #[error("grid of {cells_per_axis}^3 cells exceeds the budget of {max_cells} cells")]
    InvalidDimensions {
        /// Number of cells along each axis.
        cells_per_axis: u64,
        /// Configured cell budget.
        max_cells: u64,
    },

    /// Integer overflow occurred during coordinate calculation.
    #[error("integer overflow during coordinate calculation")]
    IntegerOverflow,
}
