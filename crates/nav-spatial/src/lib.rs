//! Voxel navigation grids for 3D scenes.
//!
//! This crate turns a scene's obstacles into a discrete walkability map that
//! route-finding code can search:
//!
//! - [`VoxelCoord`] - Integer voxel coordinates, the identity of a grid cell
//! - [`GridBounds`] - Inclusive axis-aligned ranges of voxels
//! - [`Aabb`] and [`Obstacle`] - World-space bounding boxes and the trait
//!   scene objects implement to report them
//! - [`CoordinateMapper`] - World ↔ grid conversion (voxel centers)
//! - [`GridConfig`] - Voxel size, extent, and placement of the covered cube
//! - [`NavGrid`] - Immutable walkability map built from obstacles
//!
//! # Layer 0 Crate
//!
//! Nothing here knows about rendering. The viewer hands over bounding boxes
//! and gets back a grid; meshes, scene graphs, and cameras stay on its side.
//!
//! # Coordinate Systems
//!
//! World coordinates are continuous `f64` values. Grid coordinates are
//! discrete `i32` values counted from the corner of the covered cube, so every
//! existing cell has non-negative coordinates. [`GridLayout`] decides where
//! that corner sits in world space.
//!
//! # Example
//!
//! ```
//! use nav_spatial::{Aabb, GridConfig, NavGrid, VoxelCoord};
//! use nalgebra::Point3;
//!
//! let config = GridConfig::default(); // 0.5 unit voxels, extent 20
//! let table = Aabb::new(Point3::new(2.0, 0.0, 2.0), Point3::new(4.0, 1.0, 3.0));
//!
//! let grid = NavGrid::build(&config, &[table]).unwrap();
//!
//! let under_table = grid.world_to_grid(&Point3::new(3.0, 0.5, 2.5));
//! assert!(!grid.is_walkable(under_table));
//!
//! let beside = grid.world_to_grid(&Point3::new(6.0, 0.5, 2.5));
//! assert!(grid.is_walkable(beside));
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bounds;
mod config;
mod error;
mod grid;
mod mapper;
mod obstacle;
mod voxel;

pub use bounds::{GridBounds, GridBoundsIter};
pub use config::{DEFAULT_EXTENT, DEFAULT_MAX_CELLS, DEFAULT_VOXEL_SIZE, GridConfig, GridLayout};
pub use error::SpatialError;
pub use grid::{GridCell, NavGrid};
pub use mapper::CoordinateMapper;
pub use obstacle::{Aabb, Obstacle};
pub use voxel::{FACE_OFFSETS, VoxelCoord};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
