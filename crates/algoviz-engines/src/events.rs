//! Animation events recorded by the engines.
//!
//! Each algorithm family has its own tagged event type. Events carry only
//! indices (plus the new values for sort writes), never timestamps, so a
//! prefix of any log replays to the same intermediate state every time.

use serde::{Deserialize, Serialize};

/// Events for breadth-first and depth-first graph traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TraversalEvent {
    /// A node is discovered (BFS: enqueued, DFS: entered).
    VisitNode { node: usize },
    /// The edge a node was discovered through.
    VisitEdge { from: usize, to: usize },
    /// BFS took a node off the queue.
    DequeueNode { node: usize },
    /// DFS returned along an edge.
    BacktrackEdge { from: usize, to: usize },
    /// DFS finished a node.
    BacktrackNode { node: usize },
}

/// Events for quicksort and merge sort.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortEvent {
    /// Partition begins: pivot slot and the two scan pointers.
    Pivot { pivot: usize, low: usize, high: usize },
    /// Low pointer moves past `index`.
    IterateLow { index: usize },
    /// High pointer moves past `index`.
    IterateHigh { index: usize },
    /// Highlight two slots about to exchange values.
    SwapColor { i: usize, j: usize },
    /// Slots `i` and `j` now hold `i_value` and `j_value`.
    SwapValues {
        i: usize,
        i_value: f64,
        j: usize,
        j_value: f64,
    },
    /// Exchange finished; scanning resumes.
    SwapDone { i: usize, j: usize },
    /// Final pivot placement: pivot goes to `j`, low pointer ended at `i`.
    SwapPivot { pivot: usize, j: usize, i: usize },
    /// Pivot placed.
    SwapPivotDone { pivot: usize, j: usize },
    /// Merge sort copied a slot into its scratch buffer.
    SaveValue { index: usize },
    /// Merge sort compares the heads of two runs.
    Compare { left: usize, right: usize },
    /// Merge sort wrote `value` back into slot `index`.
    UpdatePartition { index: usize, value: f64 },
}

/// Events for maze generation and pathfinding. Coordinates are grid squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MazeEvent {
    /// A wall or cell was carved into a passage.
    Carve { row: usize, col: usize },
    /// The search closed a square while looking for the target.
    FindTarget { row: usize, col: usize },
    /// A square on the solution path.
    TargetFound { row: usize, col: usize },
}

/// Events for the traveling-salesman search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TourEvent {
    /// The partial path currently being extended.
    CurrentPossibility { path: Vec<usize> },
    /// A new best closed tour (starts and ends at city 0).
    CurrentSolution { path: Vec<usize> },
    /// Search exhausted; only the best tour should remain drawn.
    SolutionFound,
}

impl TraversalEvent {
    /// Whether this event enters a node or edge (as opposed to leaving one).
    pub fn is_visit(&self) -> bool {
        matches!(
            self,
            TraversalEvent::VisitNode { .. } | TraversalEvent::VisitEdge { .. }
        )
    }
}
