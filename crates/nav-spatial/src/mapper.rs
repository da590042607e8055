//! Conversion between world space and grid space.
//!
//! World coordinates are continuous `f64` values. Grid coordinates are
//! discrete `i32` voxel indices counted from the grid origin. Every point
//! inside a voxel maps to that voxel, and a voxel maps back to its center:
//!
//! ```
//! use nav_spatial::{CoordinateMapper, VoxelCoord};
//! use nalgebra::Point3;
//!
//! let mapper = CoordinateMapper::new(0.5);
//!
//! let coord = mapper.world_to_grid(&Point3::new(1.2, 0.1, 3.9));
//! assert_eq!(coord, VoxelCoord::new(2, 0, 7));
//!
//! let center = mapper.grid_to_world(coord);
//! assert_eq!(center, Point3::new(1.25, 0.25, 3.75));
//!
//! // Center-of-voxel mapping makes grid -> world -> grid exact
//! assert_eq!(mapper.world_to_grid(&center), coord);
//! ```

use nalgebra::Point3;

use crate::voxel::VoxelCoord;

/// Maps world points to voxel coordinates and back.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordinateMapper {
    /// Edge length of one voxel in world units.
    voxel_size: f64,
    /// World position of the minimum corner of voxel `(0, 0, 0)`.
    origin: Point3<f64>,
}

impl CoordinateMapper {
    /// Creates a mapper whose voxel `(0, 0, 0)` starts at the world origin.
    ///
    /// The voxel size is not validated here; [`crate::GridConfig::validate`]
    /// rejects non-positive sizes before a grid is built.
    #[must_use]
    pub fn new(voxel_size: f64) -> Self {
        Self::with_origin(voxel_size, Point3::origin())
    }

    /// Creates a mapper with an explicit grid origin.
    #[must_use]
    pub const fn with_origin(voxel_size: f64, origin: Point3<f64>) -> Self {
        Self { voxel_size, origin }
    }

    /// Returns the voxel size.
    #[must_use]
    pub const fn voxel_size(&self) -> f64 {
        self.voxel_size
    }

    /// Returns the grid origin in world space.
    #[must_use]
    pub const fn origin(&self) -> &Point3<f64> {
        &self.origin
    }

    /// Converts a world-space point to the voxel containing it.
    ///
    /// Each axis is `floor((p - origin) / voxel_size)`. Values beyond the
    /// `i32` range saturate; such coordinates never lie inside a grid.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn world_to_grid(&self, point: &Point3<f64>) -> VoxelCoord {
        let relative = point - self.origin;
        // Truncation is intentional: continuous coordinates collapse onto voxels
        VoxelCoord::new(
            (relative.x / self.voxel_size).floor() as i32,
            (relative.y / self.voxel_size).floor() as i32,
            (relative.z / self.voxel_size).floor() as i32,
        )
    }

    /// Converts a voxel coordinate to the world-space center of that voxel.
    #[must_use]
    pub fn grid_to_world(&self, coord: VoxelCoord) -> Point3<f64> {
        Point3::new(
            (f64::from(coord.x) + 0.5).mul_add(self.voxel_size, self.origin.x),
            (f64::from(coord.y) + 0.5).mul_add(self.voxel_size, self.origin.y),
            (f64::from(coord.z) + 0.5).mul_add(self.voxel_size, self.origin.z),
        )
    }

    /// Snaps a world point to the center of its voxel.
    #[must_use]
    pub fn snap(&self, point: &Point3<f64>) -> Point3<f64> {
        self.grid_to_world(self.world_to_grid(point))
    }
}
