//! Heuristic and step-cost functions for voxel search.
//!
//! The search estimates remaining cost with the Manhattan distance and charges
//! each move its Euclidean length. With face-only moves every step costs
//! exactly one voxel, so the Manhattan estimate is exact on an empty grid and
//! never overestimates around obstacles.
//!
//! # Example
//!
//! ```
//! use route_pathfind::heuristics::{manhattan_distance, step_cost};
//! use nav_spatial::VoxelCoord;
//!
//! let from = VoxelCoord::new(0, 0, 0);
//! let to = VoxelCoord::new(3, 4, 0);
//!
//! assert!((manhattan_distance(from, to) - 7.0).abs() < 1e-10);  // 3 + 4
//! assert!((step_cost(from, VoxelCoord::new(1, 0, 0)) - 1.0).abs() < 1e-10);
//! ```

use nav_spatial::VoxelCoord;

/// Manhattan distance (L1 norm).
///
/// Sum of absolute differences: |dx| + |dy| + |dz|
///
/// Admissible for 6-connectivity (face neighbors only).
#[must_use]
pub fn manhattan_distance(from: VoxelCoord, to: VoxelCoord) -> f64 {
    f64::from(from.manhattan_distance(to))
}

/// Euclidean distance (L2 norm).
///
/// Straight-line distance: sqrt(dx² + dy² + dz²)
#[must_use]
pub fn euclidean_distance(from: VoxelCoord, to: VoxelCoord) -> f64 {
    from.euclidean_distance(to)
}

/// Cost of moving between two cells, in voxel units.
///
/// This is the Euclidean distance between the cells, which is `1.0` for
/// every face neighbor.
#[must_use]
pub fn step_cost(from: VoxelCoord, to: VoxelCoord) -> f64 {
    euclidean_distance(from, to)
}
