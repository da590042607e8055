//! Core types for voxel route-finding: paths, configuration, and results.
//!
//! This crate provides the vocabulary shared by the search engine and its
//! callers:
//!
//! - **Paths**: discrete cell sequences ([`VoxelPath`]) and world-space
//!   waypoints ([`WorldPath`])
//! - **Configuration**: grid and search settings ([`PathfinderConfig`],
//!   [`SearchConfig`])
//! - **Results**: search outcomes with statistics ([`Route`], [`SearchStats`],
//!   [`Termination`])
//! - **Errors**: inputs rejected before searching ([`RoutingError`])
//!
//! # Example
//!
//! ```
//! use route_types::{PathfinderConfig, SearchConfig, Route, Termination};
//!
//! let config = PathfinderConfig::default()
//!     .with_voxel_size(1.0)
//!     .with_extent(5.0)
//!     .with_search(SearchConfig::default().with_max_expansions(10_000));
//! assert!(config.validate().is_ok());
//!
//! // Searches themselves live in the route-pathfind crate
//! let nothing = Route::not_found(Termination::Exhausted);
//! assert!(nothing.world_path().is_empty());
//! ```
//!
//! # Integration with nav-spatial
//!
//! Paths are built from [`nav_spatial::VoxelCoord`], and the grid half of the
//! configuration is [`nav_spatial::GridConfig`].
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for all types

#![doc(html_root_url = "https://docs.rs/route-types/0.7.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod config;
pub mod error;
pub mod path;
pub mod route;

// Re-export main types at crate root for convenience
pub use config::{PathfinderConfig, SearchConfig};
pub use error::RoutingError;
pub use path::{VoxelPath, WorldPath};
pub use route::{Route, SearchStats, Termination};
