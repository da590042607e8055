//! World-space pathfinding over obstacle scenes.
//!
//! [`Pathfinder`] voxelizes a set of obstacles once and answers any number of
//! start/end queries against it. [`find_path`] does both steps in one call.
//!
//! # Example
//!
//! ```
//! use route_pathfind::Pathfinder;
//! use route_types::PathfinderConfig;
//! use nav_spatial::{Aabb, Point3};
//!
//! let config = PathfinderConfig::default().with_voxel_size(1.0).with_extent(5.0);
//! let wall = Aabb::new(Point3::new(2.0, -5.0, -5.0), Point3::new(2.9, 5.0, 5.0));
//!
//! let pathfinder = Pathfinder::new(config, &[wall]).unwrap();
//! let path = pathfinder
//!     .find_path(Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 0.0, 0.0))
//!     .unwrap();
//!
//! // The wall leaves the upper cells open, so the path climbs over it
//! assert!(path.step_count() > 4);
//! ```

use nalgebra::Point3;
use nav_spatial::{NavGrid, Obstacle};
use route_types::{PathfinderConfig, Route, RoutingError, WorldPath};
use tracing::info;

use crate::astar::VoxelAStar;

/// Pathfinder bound to one obstacle configuration.
///
/// The grid is immutable after construction, so a `Pathfinder` can be shared
/// across threads and queried concurrently.
#[derive(Debug, Clone)]
pub struct Pathfinder {
    config: PathfinderConfig,
    grid: NavGrid,
}

impl Pathfinder {
    /// Validates the configuration and builds the navigation grid.
    ///
    /// Obstacles without a finite bounding box are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::Spatial`] if the grid configuration is invalid
    /// or too large, and [`RoutingError::InvalidConfig`] for invalid search
    /// limits.
    pub fn new<O: Obstacle>(
        config: PathfinderConfig,
        obstacles: &[O],
    ) -> Result<Self, RoutingError> {
        config.validate()?;
        let grid = NavGrid::build(config.grid(), obstacles)?;
        Ok(Self { config, grid })
    }

    /// Creates a pathfinder over an already built grid.
    ///
    /// The grid half of `config` is ignored in favor of the grid itself.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidConfig`] for invalid search limits.
    pub fn from_grid(config: PathfinderConfig, grid: NavGrid) -> Result<Self, RoutingError> {
        config.search().validate()?;
        Ok(Self { config, grid })
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &PathfinderConfig {
        &self.config
    }

    /// Returns the navigation grid.
    #[must_use]
    pub const fn grid(&self) -> &NavGrid {
        &self.grid
    }

    /// Searches from `start` to `end` and reports the full outcome.
    ///
    /// Both points are snapped to their voxels. An unreachable goal, a blocked
    /// goal, or an endpoint outside the grid is not an error: the route is
    /// empty and [`Route::termination`] says why.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidPoint`] if either point is not finite.
    pub fn route(&self, start: Point3<f64>, end: Point3<f64>) -> Result<Route, RoutingError> {
        RoutingError::check_point("start", &start)?;
        RoutingError::check_point("end", &end)?;

        let start_cell = self.grid.world_to_grid(&start);
        let end_cell = self.grid.world_to_grid(&end);

        let route =
            VoxelAStar::new(&self.grid, self.config.search().clone()).search(start_cell, end_cell);

        info!(
            cells_per_axis = self.grid.cells_per_axis(),
            blocked = self.grid.blocked_count(),
            %start_cell,
            %end_cell,
            expanded = route.stats().nodes_expanded(),
            waypoints = route.world_path().len(),
            termination = %route.termination(),
            elapsed = ?route.stats().elapsed(),
            "Pathfinding complete"
        );

        Ok(route)
    }

    /// Searches from `start` to `end` and returns the waypoints.
    ///
    /// Waypoints are voxel centers. The path is empty when no path exists.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidPoint`] if either point is not finite.
    pub fn find_path(
        &self,
        start: Point3<f64>,
        end: Point3<f64>,
    ) -> Result<WorldPath, RoutingError> {
        self.route(start, end).map(Route::into_world_path)
    }
}

/// Builds a grid from `obstacles` and searches from `start` to `end`.
///
/// The grid is rebuilt on every call; use [`Pathfinder`] to answer several
/// queries against the same obstacles.
///
/// # Errors
///
/// Returns an error for an invalid configuration or a non-finite point.
///
/// # Example
///
/// ```
/// use route_pathfind::find_path;
/// use route_types::PathfinderConfig;
/// use nav_spatial::{Aabb, Point3};
///
/// let config = PathfinderConfig::default();
/// let path = find_path(
///     Point3::new(1.0, 1.0, 1.0),
///     Point3::new(3.0, 1.0, 1.0),
///     &[] as &[Aabb],
///     &config,
/// )
/// .unwrap();
///
/// // 0.5 unit voxels: four steps along x
/// assert_eq!(path.len(), 5);
/// assert_eq!(path.first(), Some(&Point3::new(1.25, 1.25, 1.25)));
/// ```
pub fn find_path<O: Obstacle>(
    start: Point3<f64>,
    end: Point3<f64>,
    obstacles: &[O],
    config: &PathfinderConfig,
) -> Result<WorldPath, RoutingError> {
    RoutingError::check_point("start", &start)?;
    RoutingError::check_point("end", &end)?;
    Pathfinder::new(config.clone(), obstacles)?.find_path(start, end)
}

/// Returns the straight two-point path from `start` to `end`.
///
/// No grid is involved and obstacles are ignored; the waypoints are the
/// literal inputs. Callers use this as a fallback when no search is wanted.
#[must_use]
pub fn direct_path(start: Point3<f64>, end: Point3<f64>) -> WorldPath {
    WorldPath::direct(start, end)
}
