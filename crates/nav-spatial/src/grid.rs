//! Walkability grid built from obstacle bounding boxes.

use hashbrown::HashSet;
use nalgebra::Point3;
use tracing::debug;

use crate::bounds::GridBounds;
use crate::config::GridConfig;
use crate::error::SpatialError;
use crate::mapper::CoordinateMapper;
use crate::obstacle::{Aabb, Obstacle};
use crate::voxel::VoxelCoord;

/// One cell of a [`NavGrid`].
///
/// A cell only carries persistent spatial data. Search bookkeeping (costs,
/// parents, open/closed state) belongs to the search that is running over the
/// grid, never to the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    /// Coordinate identifying the cell.
    pub coord: VoxelCoord,
    /// Whether the cell is free of obstacles.
    pub walkable: bool,
}

/// Immutable walkability map over a cubic region of space.
///
/// The grid covers every coordinate `0 <= x, y, z < cells_per_axis`. Each of
/// those coordinates has exactly one cell; cells start walkable and obstacle
/// bounding boxes turn the cells they overlap into blocked cells. Coordinates
/// outside the covered range have no cell and are never walkable.
///
/// Only blocked cells are stored, so an open scene costs almost nothing.
///
/// # Example
///
/// ```
/// use nav_spatial::{Aabb, GridConfig, NavGrid, VoxelCoord};
/// use nalgebra::Point3;
///
/// let config = GridConfig::default().with_voxel_size(1.0).with_extent(5.0);
/// let wall = Aabb::new(Point3::new(2.0, 0.0, 0.0), Point3::new(2.5, 9.0, 9.0));
///
/// let grid = NavGrid::build(&config, &[wall]).unwrap();
/// assert_eq!(grid.cells_per_axis(), 10);
/// assert!(!grid.is_walkable(VoxelCoord::new(2, 3, 3)));
/// assert!(grid.is_walkable(VoxelCoord::new(1, 3, 3)));
///
/// // Outside the covered cube there is no cell at all
/// assert!(grid.cell(VoxelCoord::new(-1, 0, 0)).is_none());
/// assert!(!grid.is_walkable(VoxelCoord::new(-1, 0, 0)));
/// ```
#[derive(Debug, Clone)]
pub struct NavGrid {
    /// World/grid conversion for this grid.
    mapper: CoordinateMapper,
    /// Inclusive index range of existing cells.
    bounds: GridBounds,
    /// Number of cells along each axis.
    cells_per_axis: u32,
    /// Cells overlapped by at least one obstacle.
    blocked: HashSet<VoxelCoord>,
}

impl NavGrid {
    /// Creates a grid with no blocked cells.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid (see
    /// [`GridConfig::validate`]).
    pub fn empty(config: &GridConfig) -> Result<Self, SpatialError> {
        let cells_per_axis = config.cells_per_axis()?;
        let bounds = GridBounds::cube(VoxelCoord::origin(), cells_per_axis)
            .ok_or(SpatialError::IntegerOverflow)?;

        Ok(Self {
            mapper: CoordinateMapper::with_origin(config.voxel_size(), config.origin()),
            bounds,
            cells_per_axis,
            blocked: HashSet::new(),
        })
    }

    /// Builds a grid and rasterizes every obstacle's bounding box into it.
    ///
    /// For each obstacle, both corners of its bounding box are mapped to grid
    /// coordinates and every cell in the inclusive range between them is
    /// blocked. Obstacles that report no bounding box, or a box with
    /// non-finite corners, are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid. Obstacles never cause
    /// an error.
    pub fn build<O: Obstacle>(config: &GridConfig, obstacles: &[O]) -> Result<Self, SpatialError> {
        let mut grid = Self::empty(config)?;

        let mut skipped = 0usize;
        for (index, obstacle) in obstacles.iter().enumerate() {
            match obstacle.bounding_box() {
                Some(aabb) if aabb.is_finite() => {
                    grid.block_aabb(&aabb);
                }
                Some(aabb) => {
                    debug!(index, ?aabb, "Skipping obstacle with non-finite bounds");
                    skipped += 1;
                }
                None => {
                    debug!(index, "Skipping obstacle without a bounding box");
                    skipped += 1;
                }
            }
        }

        debug!(
            cells_per_axis = grid.cells_per_axis,
            obstacles = obstacles.len(),
            skipped,
            blocked = grid.blocked.len(),
            "Built navigation grid"
        );

        Ok(grid)
    }

    /// Marks every cell overlapped by `aabb` as blocked.
    ///
    /// The range is clipped to the grid; cells outside it never exist.
    /// Returns the number of cells that were newly blocked.
    fn block_aabb(&mut self, aabb: &Aabb) -> usize {
        let range = GridBounds::new(
            self.mapper.world_to_grid(&aabb.min),
            self.mapper.world_to_grid(&aabb.max),
        );

        let Some(clipped) = range.intersection(&self.bounds) else {
            return 0;
        };

        let before = self.blocked.len();
        self.blocked.extend(clipped.iter());
        self.blocked.len() - before
    }

    /// Returns the coordinate mapper of this grid.
    #[must_use]
    pub const fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Returns the voxel size.
    #[must_use]
    pub const fn voxel_size(&self) -> f64 {
        self.mapper.voxel_size()
    }

    /// Returns the inclusive index range of existing cells.
    #[must_use]
    pub const fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    /// Returns the number of cells along each axis.
    #[must_use]
    pub const fn cells_per_axis(&self) -> u32 {
        self.cells_per_axis
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> u64 {
        self.bounds.volume()
    }

    /// Returns the number of blocked cells.
    #[must_use]
    pub fn blocked_count(&self) -> usize {
        self.blocked.len()
    }

    /// Returns the number of walkable cells.
    #[must_use]
    pub fn walkable_count(&self) -> u64 {
        // Every blocked cell lies inside the bounds
        self.cell_count() - self.blocked.len() as u64
    }

    /// Returns `true` if a cell exists at `coord`.
    #[must_use]
    pub const fn contains(&self, coord: VoxelCoord) -> bool {
        self.bounds.contains(coord)
    }

    /// Returns `true` if a cell exists at `coord` and it is not blocked.
    #[must_use]
    pub fn is_walkable(&self, coord: VoxelCoord) -> bool {
        self.contains(coord) && !self.blocked.contains(&coord)
    }

    /// Returns the cell at `coord`, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, coord: VoxelCoord) -> Option<GridCell> {
        self.contains(coord).then(|| GridCell {
            coord,
            walkable: !self.blocked.contains(&coord),
        })
    }

    /// Returns the cell containing a world-space point, or `None` outside the grid.
    #[must_use]
    pub fn cell_at_world(&self, point: &Point3<f64>) -> Option<GridCell> {
        self.cell(self.world_to_grid(point))
    }

    /// Converts a world-space point to a grid coordinate.
    ///
    /// The coordinate may lie outside the grid; check it with
    /// [`NavGrid::contains`].
    #[must_use]
    pub fn world_to_grid(&self, point: &Point3<f64>) -> VoxelCoord {
        self.mapper.world_to_grid(point)
    }

    /// Converts a grid coordinate to the world-space center of its voxel.
    #[must_use]
    pub fn grid_to_world(&self, coord: VoxelCoord) -> Point3<f64> {
        self.mapper.grid_to_world(coord)
    }

    /// Returns an iterator over the blocked cell coordinates, in no particular order.
    pub fn blocked(&self) -> impl Iterator<Item = VoxelCoord> + '_ {
        self.blocked.iter().copied()
    }

    /// Returns an iterator over every cell of the grid, X varying fastest.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        self.bounds.iter().map(|coord| GridCell {
            coord,
            walkable: !self.blocked.contains(&coord),
        })
    }
}
