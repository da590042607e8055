//! Priority queue of cells awaiting expansion.
//!
//! Entries pop in order of increasing `f`. Among equal `f` values the entry
//! whose cell was discovered first wins; a cell keeps its discovery number
//! when its cost improves, so re-queuing it does not move it behind cells
//! discovered later.
//!
//! Improved cells are pushed again rather than updated in place. The stale
//! entry stays in the heap and the search discards it when popped.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use nav_spatial::VoxelCoord;

/// A queued cell with its priority.
#[derive(Debug, Clone, Copy)]
pub struct OpenEntry {
    /// Cell to expand.
    pub coord: VoxelCoord,
    /// Cost from the start when this entry was queued.
    pub g: f64,
    /// `g` plus the heuristic estimate to the goal.
    pub f: f64,
    /// Discovery number of the cell; lower was discovered earlier.
    pub seq: u64,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    // Reversed so the max-heap pops the smallest f, then the smallest seq
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
            .then_with(|| other.g.total_cmp(&self.g))
    }
}

/// Min-priority queue over [`OpenEntry`] values.
#[derive(Debug, Clone, Default)]
pub struct OpenSet {
    heap: BinaryHeap<OpenEntry>,
}

impl OpenSet {
    /// Creates an empty open set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an entry.
    pub fn push(&mut self, entry: OpenEntry) {
        self.heap.push(entry);
    }

    /// Removes and returns the entry with the lowest `f`, earliest discovered first.
    pub fn pop(&mut self) -> Option<OpenEntry> {
        self.heap.pop()
    }

    /// Returns the entry [`OpenSet::pop`] would return next.
    #[must_use]
    pub fn peek(&self) -> Option<&OpenEntry> {
        self.heap.peek()
    }

    /// Returns the number of queued entries, stale ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
