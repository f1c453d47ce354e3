//! One visualizer per algorithm family.

mod graph;
mod pathfinding;
mod sorting;
mod times_tables;
mod tsp;

pub use graph::{GraphTraversal, Traversal};
pub use pathfinding::{MazePhase, Pathfinding};
pub use sorting::{SortAlgorithm, Sorting, MAX_BARS};
pub use times_tables::{TimesTables, MAX_POINTS};
pub use tsp::TravelingSalesman;
