//! Grid configuration.
//!
//! # Example
//!
//! ```
//! use nav_spatial::{GridConfig, GridLayout};
//!
//! // Defaults: 0.5 unit voxels covering a cube of half-width 20
//! let config = GridConfig::default();
//! assert_eq!(config.cells_per_axis().unwrap(), 80);
//!
//! // Finer grid centered on the world origin
//! let fine = GridConfig::default()
//!     .with_voxel_size(0.25)
//!     .with_extent(10.0)
//!     .with_layout(GridLayout::Centered);
//! assert_eq!(fine.cells_per_axis().unwrap(), 80);
//! ```

use nalgebra::Point3;

use crate::error::SpatialError;

/// Default voxel edge length in world units.
pub const DEFAULT_VOXEL_SIZE: f64 = 0.5;

/// Default half-width of the covered cube in world units.
pub const DEFAULT_EXTENT: f64 = 20.0;

/// Default upper bound on the number of cells in one grid.
pub const DEFAULT_MAX_CELLS: u64 = 1 << 26;

/// Where the covered cube sits in world space.
///
/// Grid indices always run from `0` to `cells_per_axis - 1` on each axis; the
/// layout only decides which world point cell `(0, 0, 0)` starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridLayout {
    /// Cell `(0, 0, 0)` starts at the world origin. The cube covers
    /// `[0, 2 * extent)` on each axis and points with a negative coordinate
    /// fall outside the grid.
    #[default]
    Corner,

    /// Cell `(0, 0, 0)` starts at `(-extent, -extent, -extent)`. The cube
    /// covers `[-extent, extent)` on each axis.
    Centered,
}

/// Configuration of the voxel grid built around a scene.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Edge length of one voxel in world units.
    voxel_size: f64,
    /// Half-width of the covered cube in world units.
    extent: f64,
    /// Placement of the cube in world space.
    layout: GridLayout,
    /// Maximum number of cells a grid may cover.
    max_cells: u64,
}

impl GridConfig {
    /// Creates a configuration with the default voxel size and extent.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            voxel_size: DEFAULT_VOXEL_SIZE,
            extent: DEFAULT_EXTENT,
            layout: GridLayout::Corner,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }

    /// Sets the voxel edge length.
    ///
    /// Smaller voxels follow obstacles more closely but the cell count grows
    /// cubically.
    #[must_use]
    pub const fn with_voxel_size(mut self, voxel_size: f64) -> Self {
        self.voxel_size = voxel_size;
        self
    }

    /// Sets the half-width of the covered cube.
    #[must_use]
    pub const fn with_extent(mut self, extent: f64) -> Self {
        self.extent = extent;
        self
    }

    /// Sets the placement of the cube in world space.
    #[must_use]
    pub const fn with_layout(mut self, layout: GridLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the maximum number of cells a grid may cover.
    #[must_use]
    pub const fn with_max_cells(mut self, max_cells: u64) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// Returns the voxel edge length.
    #[must_use]
    pub const fn voxel_size(&self) -> f64 {
        self.voxel_size
    }

    /// Returns the half-width of the covered cube.
    #[must_use]
    pub const fn extent(&self) -> f64 {
        self.extent
    }

    /// Returns the grid layout.
    #[must_use]
    pub const fn layout(&self) -> GridLayout {
        self.layout
    }

    /// Returns the cell budget.
    #[must_use]
    pub const fn max_cells(&self) -> u64 {
        self.max_cells
    }

    /// Returns the world position of the minimum corner of cell `(0, 0, 0)`.
    #[must_use]
    pub fn origin(&self) -> Point3<f64> {
        match self.layout {
            GridLayout::Corner => Point3::origin(),
            GridLayout::Centered => Point3::new(-self.extent, -self.extent, -self.extent),
        }
    }

    /// Checks voxel size, extent, and cell budget.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::InvalidVoxelSize`] or [`SpatialError::InvalidExtent`]
    /// for non-positive or non-finite values, and
    /// [`SpatialError::InvalidDimensions`] when the grid exceeds the cell budget.
    pub fn validate(&self) -> Result<(), SpatialError> {
        self.cells_per_axis().map(|_| ())
    }

    /// Returns the number of cells along each axis, `ceil(extent * 2 / voxel_size)`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`GridConfig::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use nav_spatial::{GridConfig, SpatialError};
    ///
    /// let config = GridConfig::default().with_voxel_size(0.3);
    /// assert_eq!(config.cells_per_axis().unwrap(), 134); // ceil(40 / 0.3)
    ///
    /// let bad = GridConfig::default().with_voxel_size(0.0);
    /// assert!(matches!(bad.cells_per_axis(), Err(SpatialError::InvalidVoxelSize(_))));
    /// ```
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn cells_per_axis(&self) -> Result<u32, SpatialError> {
        if !(self.voxel_size.is_finite() && self.voxel_size > 0.0) {
            return Err(SpatialError::InvalidVoxelSize(self.voxel_size));
        }
        if !(self.extent.is_finite() && self.extent > 0.0) {
            return Err(SpatialError::InvalidExtent(self.extent));
        }

        let cells = (self.extent * 2.0 / self.voxel_size).ceil();
        // Beyond this the cube cannot be indexed with i32 coordinates at all.
        if !cells.is_finite() || cells > f64::from(i32::MAX) {
            return Err(SpatialError::IntegerOverflow);
        }

        // Range-checked above
        let cells = cells as u32;
        let volume = u64::from(cells)
            .checked_pow(3)
            .ok_or(SpatialError::IntegerOverflow)?;
        if volume > self.max_cells {
            return Err(SpatialError::InvalidDimensions {
                cells_per_axis: u64::from(cells),
                max_cells: self.max_cells,
            });
        }

        Ok(cells)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}
