//! A* search on navigation grids.
//!
//! The grid is read-only during a search. All per-search state (costs,
//! parents, closed flags) lives in a table owned by one call to
//! [`VoxelAStar::search`], so a single [`NavGrid`] can serve any number of
//! searches, including concurrent ones.
//!
//! # Example
//!
//! ```
//! use route_pathfind::astar::VoxelAStar;
//! use route_types::{SearchConfig, Termination};
//! use nav_spatial::{GridConfig, NavGrid, VoxelCoord};
//!
//! let config = GridConfig::default().with_voxel_size(1.0).with_extent(5.0);
//! let grid = NavGrid::empty(&config).unwrap();
//!
//! let pathfinder = VoxelAStar::new(&grid, SearchConfig::default());
//! let route = pathfinder.search(VoxelCoord::new(0, 0, 0), VoxelCoord::new(5, 0, 0));
//!
//! assert_eq!(route.termination(), Termination::Reached);
//! assert_eq!(route.voxel_path().len(), 6);
//! ```

use std::time::Instant;

use hashbrown::HashMap;
use nav_spatial::{NavGrid, VoxelCoord};
use route_types::{Route, SearchConfig, SearchStats, Termination, VoxelPath};
use tracing::debug;

use crate::heuristics::manhattan_distance;
use crate::neighbors::NeighborGenerator;
use crate::open_set::{OpenEntry, OpenSet};
use crate::reconstruct::{reconstruct_path_bounded, to_world_path};

/// Search bookkeeping for one discovered cell.
#[derive(Debug, Clone, Copy)]
struct NodeRecord {
    /// Best known cost from the start.
    g: f64,
    /// Heuristic estimate to the goal.
    h: f64,
    /// Cell this one was reached from; `None` for the start.
    parent: Option<VoxelCoord>,
    /// Discovery number, used to break `f` ties.
    seq: u64,
    /// Whether the cell has been expanded.
    closed: bool,
}

impl NodeRecord {
    fn f(&self) -> f64 {
        self.g + self.h
    }
}

/// Per-search scratch state: one record per discovered cell plus the open set.
#[derive(Debug, Default)]
struct SearchTable {
    records: HashMap<VoxelCoord, NodeRecord>,
    open: OpenSet,
    /// Discovery number for the next new cell.
    next_seq: u64,
    /// Discovered cells not yet expanded.
    open_count: usize,
}

impl SearchTable {
    /// Records a newly discovered cell and queues it.
    fn discover(&mut self, coord: VoxelCoord, g: f64, h: f64, parent: Option<VoxelCoord>) {
        let record = NodeRecord {
            g,
            h,
            parent,
            seq: self.next_seq,
            closed: false,
        };
        self.next_seq += 1;
        self.open_count += 1;
        self.open.push(OpenEntry {
            coord,
            g,
            f: record.f(),
            seq: record.seq,
        });
        self.records.insert(coord, record);
    }

    /// Offers a path to `coord` through `parent` costing `g`.
    ///
    /// Discovers the cell if it is new. A known open cell is updated and
    /// re-queued with its original discovery number when `g` is strictly
    /// better. Closed cells are left alone.
    fn relax(&mut self, coord: VoxelCoord, g: f64, parent: VoxelCoord, goal: VoxelCoord) {
        let Some(known) = self.records.get_mut(&coord) else {
            self.discover(coord, g, manhattan_distance(coord, goal), Some(parent));
            return;
        };
        if known.closed || g >= known.g {
            return;
        }
        known.g = g;
        known.parent = Some(parent);
        self.open.push(OpenEntry {
            coord,
            g,
            f: known.f(),
            seq: known.seq,
        });
    }

    /// Discards stale entries and returns the next live one without removing it.
    ///
    /// An entry is stale when its cell is already closed or a cheaper entry
    /// for the cell was queued after it.
    fn peek_live(&mut self) -> Option<OpenEntry> {
        while let Some(&entry) = self.open.peek() {
            let live = self
                .records
                .get(&entry.coord)
                .is_some_and(|record| !record.closed && entry.g <= record.g);
            if live {
                return Some(entry);
            }
            self.open.pop();
        }
        None
    }

    /// Removes the entry returned by [`SearchTable::peek_live`] and closes its cell.
    fn close_top(&mut self) {
        if let Some(entry) = self.open.pop() {
            if let Some(record) = self.records.get_mut(&entry.coord) {
                record.closed = true;
                self.open_count -= 1;
            }
        }
    }

    fn parent_of(&self, coord: VoxelCoord) -> Option<VoxelCoord> {
        self.records.get(&coord).and_then(|record| record.parent)
    }
}

/// A* pathfinder over a [`NavGrid`].
///
/// Moves are face steps costing their Euclidean length, and the heuristic is
/// the Manhattan distance. The open set pops the lowest `f`; ties go to the
/// cell discovered first, and neighbors are discovered in the fixed order
/// `+x, -x, +y, -y, +z, -z`. Identical inputs therefore always produce the
/// identical path.
#[derive(Debug, Clone)]
pub struct VoxelAStar<'a> {
    /// The walkability map.
    grid: &'a NavGrid,
    /// Resource limits.
    config: SearchConfig,
}

impl<'a> VoxelAStar<'a> {
    /// Creates a new A* pathfinder with the given grid and limits.
    #[must_use]
    pub const fn new(grid: &'a NavGrid, config: SearchConfig) -> Self {
        Self { grid, config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the grid being searched.
    #[must_use]
    pub const fn grid(&self) -> &'a NavGrid {
        self.grid
    }

    /// Returns the limit that forbids another expansion, if any.
    fn limit_reached(&self, expanded: usize, started: Instant) -> Option<Termination> {
        if self.config.max_expansions().is_some_and(|max| expanded >= max) {
            return Some(Termination::ExpansionLimit);
        }
        if self
            .config
            .timeout()
            .is_some_and(|limit| started.elapsed() >= limit)
        {
            return Some(Termination::Timeout);
        }
        None
    }

    /// Searches for a path from `start` to `goal`.
    ///
    /// Never fails: when no path is produced the route is empty and
    /// [`Route::termination`] says why.
    ///
    /// - Either cell outside the grid ends with [`Termination::OutOfBounds`].
    /// - `start == goal` returns that single cell.
    /// - A blocked goal ends with [`Termination::GoalBlocked`] without
    ///   searching. A blocked start is searched from as usual.
    /// - Running out of reachable cells ends with [`Termination::Exhausted`].
    ///
    /// # Example
    ///
    /// ```
    /// use route_pathfind::astar::VoxelAStar;
    /// use route_types::{SearchConfig, Termination};
    /// use nav_spatial::{GridConfig, NavGrid, VoxelCoord};
    ///
    /// let grid = NavGrid::empty(&GridConfig::default().with_voxel_size(1.0).with_extent(5.0))
    ///     .unwrap();
    /// let pathfinder = VoxelAStar::new(&grid, SearchConfig::default());
    ///
    /// let route = pathfinder.search(VoxelCoord::new(0, 0, 0), VoxelCoord::new(20, 0, 0));
    /// assert_eq!(route.termination(), Termination::OutOfBounds);
    /// assert!(route.world_path().is_empty());
    /// ```
    #[must_use]
    pub fn search(&self, start: VoxelCoord, goal: VoxelCoord) -> Route {
        let started = Instant::now();

        if !self.grid.contains(start) || !self.grid.contains(goal) {
            debug!(%start, %goal, "Start or goal outside the grid");
            return Route::not_found(Termination::OutOfBounds)
                .with_stats(SearchStats::new().with_elapsed(started.elapsed()));
        }

        if start == goal {
            let voxel_path = VoxelPath::from_single(start);
            let world_path = to_world_path(self.grid.mapper(), &voxel_path);
            return Route::new(voxel_path, world_path, Termination::Reached)
                .with_stats(SearchStats::new().with_elapsed(started.elapsed()));
        }

        if !self.grid.is_walkable(goal) {
            debug!(%goal, "Goal cell is blocked");
            return Route::not_found(Termination::GoalBlocked)
                .with_stats(SearchStats::new().with_elapsed(started.elapsed()));
        }

        let generator = NeighborGenerator::new(self.grid);
        let mut table = SearchTable::default();
        table.discover(start, 0.0, manhattan_distance(start, goal), None);

        let mut expanded = 0usize;
        let mut termination = Termination::Exhausted;

        while let Some(entry) = table.peek_live() {
            if let Some(reason) = self.limit_reached(expanded, started) {
                debug!(expanded, %reason, "Search stopped by limit");
                termination = reason;
                break;
            }
            table.close_top();
            expanded += 1;

            if entry.coord == goal {
                termination = Termination::Reached;
                break;
            }

            for (neighbor, cost) in generator.successors(entry.coord) {
                table.relax(neighbor, entry.g + cost, entry.coord, goal);
            }
        }

        let stats = SearchStats::new()
            .with_nodes_expanded(expanded)
            .with_open_set_size(table.open_count)
            .with_elapsed(started.elapsed());

        if termination != Termination::Reached {
            return Route::not_found(termination).with_stats(stats);
        }

        let cost = table.records.get(&goal).map_or(0.0, |record| record.g);
        let voxel_path =
            reconstruct_path_bounded(goal, |coord| table.parent_of(coord), table.records.len());
        let world_path = to_world_path(self.grid.mapper(), &voxel_path);

        Route::new(voxel_path, world_path, Termination::Reached)
            .with_cost(cost)
            .with_stats(stats)
    }
}
