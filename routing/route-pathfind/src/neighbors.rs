//! Neighbor generation for voxel-based pathfinding.
//!
//! Moves are face steps only (6-connectivity). A neighbor is usable when it
//! lies inside the grid and is walkable.
//!
//! # Example
//!
//! ```
//! use route_pathfind::neighbors::NeighborGenerator;
//! use nav_spatial::{GridConfig, NavGrid, VoxelCoord};
//!
//! let config = GridConfig::default().with_voxel_size(1.0).with_extent(5.0);
//! let grid = NavGrid::empty(&config).unwrap();
//! let generator = NeighborGenerator::new(&grid);
//!
//! assert_eq!(generator.neighbors(VoxelCoord::new(5, 5, 5)).count(), 6);
//! // Corner cells have three neighbors inside the grid
//! assert_eq!(generator.neighbors(VoxelCoord::new(0, 0, 0)).count(), 3);
//! ```

use nav_spatial::{NavGrid, VoxelCoord};

use crate::heuristics::step_cost;

/// Generator for walkable neighboring voxels during pathfinding.
///
/// Neighbors come out in the fixed order `+x, -x, +y, -y, +z, -z`, which
/// makes searches deterministic.
#[derive(Debug, Clone)]
pub struct NeighborGenerator<'a> {
    /// The walkability map.
    grid: &'a NavGrid,
}

impl<'a> NeighborGenerator<'a> {
    /// Creates a neighbor generator over the given grid.
    #[must_use]
    pub const fn new(grid: &'a NavGrid) -> Self {
        Self { grid }
    }

    /// Checks if a voxel is blocked or outside the grid.
    #[must_use]
    pub fn is_blocked(&self, coord: VoxelCoord) -> bool {
        !self.grid.is_walkable(coord)
    }

    /// Checks if a voxel is inside the grid and walkable.
    #[must_use]
    pub fn is_free(&self, coord: VoxelCoord) -> bool {
        self.grid.is_walkable(coord)
    }

    /// Returns an iterator over walkable face neighbors of a coordinate.
    ///
    /// # Example
    ///
    /// ```
    /// use route_pathfind::neighbors::NeighborGenerator;
    /// use nav_spatial::{Aabb, GridConfig, NavGrid, Point3, VoxelCoord};
    ///
    /// let config = GridConfig::default().with_voxel_size(1.0).with_extent(5.0);
    /// // Blocks cell (6, 5, 5)
    /// let pillar = Aabb::new(Point3::new(6.2, 5.2, 5.2), Point3::new(6.8, 5.8, 5.8));
    /// let grid = NavGrid::build(&config, &[pillar]).unwrap();
    ///
    /// let generator = NeighborGenerator::new(&grid);
    /// let neighbors: Vec<_> = generator.neighbors(VoxelCoord::new(5, 5, 5)).collect();
    ///
    /// assert_eq!(neighbors.len(), 5);
    /// assert_eq!(neighbors[0], VoxelCoord::new(4, 5, 5));
    /// ```
    pub fn neighbors(&self, coord: VoxelCoord) -> impl Iterator<Item = VoxelCoord> + 'a {
        let grid = self.grid;
        coord
            .face_neighbors()
            .filter(move |&neighbor| grid.is_walkable(neighbor))
    }

    /// Returns walkable neighbors with the cost of moving to each.
    ///
    /// This is the successor function consumed by the A* loop.
    pub fn successors(&self, coord: VoxelCoord) -> impl Iterator<Item = (VoxelCoord, f64)> + 'a {
        self.neighbors(coord)
            .map(move |neighbor| (neighbor, step_cost(coord, neighbor)))
    }
}

/// Collects the successors of a coordinate into a vector.
///
/// Convenience wrapper over [`NeighborGenerator::successors`].
#[must_use]
pub fn successors_for_grid(grid: &NavGrid, coord: VoxelCoord) -> Vec<(VoxelCoord, f64)> {
    NeighborGenerator::new(grid).successors(coord).collect()
}
