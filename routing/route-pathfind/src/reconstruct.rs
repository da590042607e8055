//! Path reconstruction from search parent links.
//!
//! # Example
//!
//! ```
//! use route_pathfind::reconstruct::reconstruct_path;
//! use nav_spatial::VoxelCoord;
//!
//! // (0,0,0) <- (1,0,0) <- (1,1,0)
//! let parent_of = |c: VoxelCoord| match (c.x, c.y) {
//!     (1, 1) => Some(VoxelCoord::new(1, 0, 0)),
//!     (1, 0) => Some(VoxelCoord::new(0, 0, 0)),
//!     _ => None,
//! };
//!
//! let path = reconstruct_path(VoxelCoord::new(1, 1, 0), parent_of);
//! assert_eq!(path.first(), Some(&VoxelCoord::new(0, 0, 0)));
//! assert_eq!(path.last(), Some(&VoxelCoord::new(1, 1, 0)));
//! ```

use nav_spatial::{CoordinateMapper, VoxelCoord};
use route_types::{VoxelPath, WorldPath};

/// Walks parent links back from `goal` and returns the path start first.
///
/// `parent_of` returns the cell a coordinate was reached from, or `None` for
/// the start. The walk stops after `max_len` cells if the links never end.
#[must_use]
pub fn reconstruct_path_bounded<F>(goal: VoxelCoord, parent_of: F, max_len: usize) -> VoxelPath
where
    F: Fn(VoxelCoord) -> Option<VoxelCoord>,
{
    let mut coords = vec![goal];
    let mut current = goal;
    while coords.len() < max_len {
        let Some(parent) = parent_of(current) else {
            break;
        };
        coords.push(parent);
        current = parent;
    }
    coords.reverse();
    VoxelPath::new(coords)
}

/// Walks parent links back from `goal` and returns the path start first.
///
/// Equivalent to [`reconstruct_path_bounded`] with no practical bound.
#[must_use]
pub fn reconstruct_path<F>(goal: VoxelCoord, parent_of: F) -> VoxelPath
where
    F: Fn(VoxelCoord) -> Option<VoxelCoord>,
{
    reconstruct_path_bounded(goal, parent_of, usize::MAX)
}

/// Maps every cell of a voxel path to its world-space center.
///
/// # Example
///
/// ```
/// use route_pathfind::reconstruct::to_world_path;
/// use route_types::VoxelPath;
/// use nav_spatial::{CoordinateMapper, Point3, VoxelCoord};
///
/// let mapper = CoordinateMapper::new(0.5);
/// let voxels = VoxelPath::new(vec![VoxelCoord::new(0, 0, 0), VoxelCoord::new(1, 0, 0)]);
///
/// let world = to_world_path(&mapper, &voxels);
/// assert_eq!(world.points(), &[Point3::new(0.25, 0.25, 0.25), Point3::new(0.75, 0.25, 0.25)]);
/// ```
#[must_use]
pub fn to_world_path(mapper: &CoordinateMapper, path: &VoxelPath) -> WorldPath {
    path.iter().map(|&coord| mapper.grid_to_world(coord)).collect()
}
