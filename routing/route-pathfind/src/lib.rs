//! A* pathfinding through voxelized obstacle scenes.
//!
//! This crate connects the `nav-spatial` walkability grid with the
//! `route-types` domain types.
//!
//! # Overview
//!
//! - **Pathfinder** ([`Pathfinder`]): builds a grid from obstacles once and
//!   answers repeated start/end queries in world space
//! - **One-shot search** ([`find_path`]): grid build and search in one call
//! - **A\*** ([`astar::VoxelAStar`]): the search itself, over grid cells
//! - **Direct path** ([`direct_path`]): the straight two-point fallback
//!
//! Supporting modules expose the pieces the search is made of:
//! [`heuristics`], [`neighbors`], [`open_set`], and [`reconstruct`].
//!
//! # Quick Start
//!
//! ```
//! use route_pathfind::find_path;
//! use route_types::PathfinderConfig;
//! use nav_spatial::{Aabb, Point3};
//!
//! let config = PathfinderConfig::default().with_voxel_size(1.0).with_extent(5.0);
//!
//! // A wall at x = 2 leaving the cells above y = 5 open
//! let wall = Aabb::new(Point3::new(2.0, -5.0, -5.0), Point3::new(2.5, 5.5, 5.5));
//!
//! let path = find_path(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(4.0, 0.0, 0.0),
//!     &[wall],
//!     &config,
//! )
//! .unwrap();
//!
//! assert!(!path.is_empty());
//! assert!(path.step_count() > 4);
//! ```
//!
//! # Search Rules
//!
//! | Aspect | Rule |
//! |--------|------|
//! | Moves | Six face neighbors, in the order `+x, -x, +y, -y, +z, -z` |
//! | Step cost | Euclidean length (1 voxel per face step) |
//! | Heuristic | Manhattan distance |
//! | Ties | Lowest `f`, then earliest discovered cell |
//! | Waypoints | Voxel centers, start cell first |
//!
//! An unreachable goal is not an error. The search returns an empty path, and
//! [`Pathfinder::route`] reports the reason as a [`route_types::Termination`].

#![doc(html_root_url = "https://docs.rs/route-pathfind/0.7.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod astar;
pub mod heuristics;
pub mod neighbors;
pub mod open_set;
pub mod pathfinder;
pub mod reconstruct;

// Re-export main types for convenience
pub use astar::VoxelAStar;
pub use heuristics::{manhattan_distance, step_cost};
pub use neighbors::{NeighborGenerator, successors_for_grid};
pub use pathfinder::{Pathfinder, direct_path, find_path};
pub use reconstruct::{reconstruct_path, to_world_path};
