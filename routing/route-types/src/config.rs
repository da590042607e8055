//! Configuration types for voxel pathfinding.
//!
//! # Example
//!
//! ```
//! use route_types::{PathfinderConfig, SearchConfig};
//! use std::time::Duration;
//!
//! let config = PathfinderConfig::default()
//!     .with_voxel_size(0.25)
//!     .with_extent(10.0)
//!     .with_search(
//!         SearchConfig::default()
//!             .with_max_expansions(200_000)
//!             .with_timeout(Duration::from_millis(8)),
//!     );
//!
//! assert!(config.validate().is_ok());
//! ```

use std::time::Duration;

use nav_spatial::{GridConfig, GridLayout};

use crate::error::RoutingError;

/// Resource limits for a single A* search.
///
/// Both limits are off by default, so a search runs until it reaches the goal
/// or exhausts the reachable cells. Hitting a limit ends the search with no
/// path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Maximum number of cells to expand before giving up.
    max_expansions: Option<usize>,
    /// Maximum wall-clock time before giving up.
    timeout: Option<Duration>,
}

impl SearchConfig {
    /// Creates a configuration with no limits.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_expansions: None,
            timeout: None,
        }
    }

    /// Sets the maximum number of cells to expand.
    #[must_use]
    pub const fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }

    /// Removes the expansion limit.
    #[must_use]
    pub const fn without_max_expansions(mut self) -> Self {
        self.max_expansions = None;
        self
    }

    /// Sets the timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Removes the timeout.
    #[must_use]
    pub const fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Returns the expansion limit, if set.
    #[must_use]
    pub const fn max_expansions(&self) -> Option<usize> {
        self.max_expansions
    }

    /// Returns the timeout, if set.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Validates the limits.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidConfig`] for a zero expansion limit or a
    /// zero timeout; either would stop every search before it starts.
    pub fn validate(&self) -> Result<(), RoutingError> {
        if self.max_expansions == Some(0) {
            return Err(RoutingError::invalid_config(
                "max_expansions must be positive",
            ));
        }
        if self.timeout == Some(Duration::ZERO) {
            return Err(RoutingError::invalid_config("timeout must be positive"));
        }
        Ok(())
    }
}

/// Complete configuration of the grid build and the search.
///
/// # Example
///
/// ```
/// use route_types::PathfinderConfig;
///
/// let config = PathfinderConfig::default();
/// assert_eq!(config.grid().voxel_size(), 0.5);
/// assert_eq!(config.grid().extent(), 20.0);
/// assert!(config.search().max_expansions().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathfinderConfig {
    /// Grid layout and resolution.
    grid: GridConfig,
    /// Search limits.
    search: SearchConfig,
}

impl PathfinderConfig {
    /// Creates a configuration with default grid and no search limits.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            grid: GridConfig::new(),
            search: SearchConfig::new(),
        }
    }

    /// Sets the grid configuration.
    #[must_use]
    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    /// Sets the search configuration.
    #[must_use]
    pub const fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Sets the voxel size of the grid.
    #[must_use]
    pub fn with_voxel_size(mut self, voxel_size: f64) -> Self {
        self.grid = self.grid.with_voxel_size(voxel_size);
        self
    }

    /// Sets the half-width of the covered cube.
    #[must_use]
    pub fn with_extent(mut self, extent: f64) -> Self {
        self.grid = self.grid.with_extent(extent);
        self
    }

    /// Sets the placement of the covered cube.
    #[must_use]
    pub fn with_layout(mut self, layout: GridLayout) -> Self {
        self.grid = self.grid.with_layout(layout);
        self
    }

    /// Returns the grid configuration.
    #[must_use]
    pub const fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// Returns the search configuration.
    #[must_use]
    pub const fn search(&self) -> &SearchConfig {
        &self.search
    }

    /// Validates grid and search settings.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::Spatial`] for an invalid grid and
    /// [`RoutingError::InvalidConfig`] for invalid search limits.
    pub fn validate(&self) -> Result<(), RoutingError> {
        self.grid.validate()?;
        self.search.validate()
    }
}
