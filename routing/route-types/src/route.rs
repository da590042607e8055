//! Search results combining paths with metadata.
//!
//! A [`Route`] is what a search returns when asked for more than the bare
//! waypoints: both path representations, the accumulated step cost, search
//! statistics, and the reason the search stopped.
//!
//! # Example
//!
//! ```
//! use route_types::{Route, SearchStats, Termination, VoxelPath, WorldPath};
//! use nav_spatial::VoxelCoord;
//! use nalgebra::Point3;
//!
//! let route = Route::new(
//!     VoxelPath::from_single(VoxelCoord::origin()),
//!     WorldPath::new(vec![Point3::new(0.25, 0.25, 0.25)]),
//!     Termination::Reached,
//! )
//! .with_stats(SearchStats::new().with_nodes_expanded(1));
//!
//! assert!(route.is_found());
//! assert_eq!(route.cost(), 0.0);
//! ```

use std::fmt;
use std::time::Duration;

use crate::path::{VoxelPath, WorldPath};

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Termination {
    /// The goal was popped from the open set.
    Reached,
    /// The open set emptied without reaching the goal.
    Exhausted,
    /// The start or end point maps outside the grid.
    OutOfBounds,
    /// The goal cell is blocked and differs from the start cell.
    GoalBlocked,
    /// The configured expansion limit was hit.
    ExpansionLimit,
    /// The configured timeout elapsed.
    Timeout,
}

impl Termination {
    /// Returns `true` if the search produced a path.
    #[must_use]
    pub const fn is_reached(self) -> bool {
        matches!(self, Self::Reached)
    }

    /// Returns `true` if a configured limit cut the search short.
    ///
    /// Such a search might have found a path with more budget.
    #[must_use]
    pub const fn is_limit(self) -> bool {
        matches!(self, Self::ExpansionLimit | Self::Timeout)
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Reached => "reached",
            Self::Exhausted => "exhausted",
            Self::OutOfBounds => "out of bounds",
            Self::GoalBlocked => "goal blocked",
            Self::ExpansionLimit => "expansion limit",
            Self::Timeout => "timeout",
        };
        f.write_str(name)
    }
}

/// Statistics about a single search.
///
/// # Example
///
/// ```
/// use route_types::SearchStats;
/// use std::time::Duration;
///
/// let stats = SearchStats::new()
///     .with_nodes_expanded(1500)
///     .with_open_set_size(42)
///     .with_elapsed(Duration::from_millis(3));
/// assert_eq!(stats.nodes_expanded(), 1500);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Number of cells moved to the closed set.
    nodes_expanded: usize,
    /// Number of live entries in the open set at completion.
    open_set_size: usize,
    /// Wall-clock time spent searching.
    elapsed: Duration,
}

impl SearchStats {
    /// Creates empty statistics.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes_expanded: 0,
            open_set_size: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Sets the number of nodes expanded.
    #[must_use]
    pub const fn with_nodes_expanded(mut self, count: usize) -> Self {
        self.nodes_expanded = count;
        self
    }

    /// Sets the open set size at completion.
    #[must_use]
    pub const fn with_open_set_size(mut self, size: usize) -> Self {
        self.open_set_size = size;
        self
    }

    /// Sets the elapsed time.
    #[must_use]
    pub const fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    /// Returns the number of nodes expanded.
    #[must_use]
    pub const fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    /// Returns the open set size at completion.
    #[must_use]
    pub const fn open_set_size(&self) -> usize {
        self.open_set_size
    }

    /// Returns the elapsed time.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// The full outcome of a search.
///
/// When no path exists both paths are empty and [`Route::termination`] says
/// why.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Cell sequence, start first.
    voxel_path: VoxelPath,
    /// Voxel centers of `voxel_path`, in the same order.
    world_path: WorldPath,
    /// Sum of step costs in voxel units.
    cost: f64,
    /// Search statistics.
    stats: SearchStats,
    /// Why the search stopped.
    termination: Termination,
}

impl Route {
    /// Creates a route from its paths and termination reason.
    ///
    /// The cost is taken from the voxel path length and the statistics start
    /// empty.
    #[must_use]
    pub fn new(voxel_path: VoxelPath, world_path: WorldPath, termination: Termination) -> Self {
        Self {
            cost: voxel_path.length(),
            voxel_path,
            world_path,
            stats: SearchStats::new(),
            termination,
        }
    }

    /// Creates a route with no path.
    ///
    /// # Example
    ///
    /// ```
    /// use route_types::{Route, Termination};
    ///
    /// let route = Route::not_found(Termination::Exhausted);
    /// assert!(!route.is_found());
    /// assert!(route.world_path().is_empty());
    /// ```
    #[must_use]
    pub const fn not_found(termination: Termination) -> Self {
        Self {
            voxel_path: VoxelPath::empty(),
            world_path: WorldPath::empty(),
            cost: 0.0,
            stats: SearchStats::new(),
            termination,
        }
    }

    /// Sets the accumulated step cost.
    #[must_use]
    pub const fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    /// Sets the search statistics.
    #[must_use]
    pub const fn with_stats(mut self, stats: SearchStats) -> Self {
        self.stats = stats;
        self
    }

    /// Returns the voxel path.
    #[must_use]
    pub const fn voxel_path(&self) -> &VoxelPath {
        &self.voxel_path
    }

    /// Returns the world path.
    #[must_use]
    pub const fn world_path(&self) -> &WorldPath {
        &self.world_path
    }

    /// Returns the accumulated step cost in voxel units.
    #[must_use]
    pub const fn cost(&self) -> f64 {
        self.cost
    }

    /// Returns the search statistics.
    #[must_use]
    pub const fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Returns why the search stopped.
    #[must_use]
    pub const fn termination(&self) -> Termination {
        self.termination
    }

    /// Returns `true` if the search produced a path.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.termination.is_reached() && !self.world_path.is_empty()
    }

    /// Consumes the route and returns the world path.
    #[must_use]
    pub fn into_world_path(self) -> WorldPath {
        self.world_path
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;
    use nav_spatial::VoxelCoord;

    #[test]
    fn test_termination_predicates() {
        assert!(Termination::Reached.is_reached());
        assert!(!Termination::Exhausted.is_reached());
        assert!(Termination::Timeout.is_limit());
        assert!(Termination::ExpansionLimit.is_limit());
        assert!(!Termination::GoalBlocked.is_limit());
        assert!(!Termination::OutOfBounds.is_limit());
    }

    #[test]
    fn test_termination_display() {
        assert_eq!(Termination::Reached.to_string(), "reached");
        assert_eq!(Termination::OutOfBounds.to_string(), "out of bounds");
        assert_eq!(Termination::ExpansionLimit.to_string(), "expansion limit");
    }

    #[test]
    fn test_search_stats_builder() {
        let stats = SearchStats::new()
            .with_nodes_expanded(10)
            .with_open_set_size(3)
            .with_elapsed(Duration::from_micros(250));
        assert_eq!(stats.nodes_expanded(), 10);
        assert_eq!(stats.open_set_size(), 3);
        assert_eq!(stats.elapsed(), Duration::from_micros(250));
        assert_eq!(SearchStats::default(), SearchStats::new());
    }

    #[test]
    fn test_route_found() {
        let voxels = VoxelPath::new(vec![
            VoxelCoord::new(0, 0, 0),
            VoxelCoord::new(1, 0, 0),
            VoxelCoord::new(1, 1, 0),
        ]);
        let world = WorldPath::new(vec![
            Point3::new(0.5, 0.5, 0.5),
            Point3::new(1.5, 0.5, 0.5),
            Point3::new(1.5, 1.5, 0.5),
        ]);
        let route = Route::new(voxels, world, Termination::Reached)
            .with_stats(SearchStats::new().with_nodes_expanded(3));

        assert!(route.is_found());
        assert_relative_eq!(route.cost(), 2.0);
        assert_eq!(route.voxel_path().len(), 3);
        assert_eq!(route.stats().nodes_expanded(), 3);
        assert_eq!(route.clone().into_world_path().len(), 3);
    }

    #[test]
    fn test_route_not_found() {
        let route = Route::not_found(Termination::GoalBlocked);
        assert!(!route.is_found());
        assert_eq!(route.termination(), Termination::GoalBlocked);
        assert_eq!(route.cost(), 0.0);
        assert!(route.voxel_path().is_empty());
    }

    #[test]
    fn test_route_with_cost() {
        let route = Route::not_found(Termination::Reached).with_cost(4.5);
        assert_eq!(route.cost(), 4.5);
        // No waypoints means nothing was found, whatever the label says
        assert!(!route.is_found());
    }
}
