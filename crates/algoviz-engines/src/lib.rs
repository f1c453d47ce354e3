//! Algoviz Engines
//!
//! Classic algorithms instrumented to record what they do instead of drawing
//! it.
//!
//! # Contract
//!
//! Every engine is a pure function from an input structure to an ordered
//! `Vec` of events. Engines perform no I/O and read no clock; the only
//! randomness is the explicit `rng` taken by [`generate_maze`], which is the
//! structure generator for the pathfinding pair. Degenerate inputs (no nodes,
//! no cells, no bars) produce an empty log rather than an error.
//!
//! Replaying any prefix of a log gives the same intermediate state every
//! time, which is what lets a playback cursor pause, resume and vary speed
//! by indexing alone.
//!
//! | engine | input | events |
//! |--------|-------|--------|
//! | [`bfs`], [`dfs`] | [`Graph`](algoviz_structures::Graph) | [`TraversalEvent`] |
//! | [`generate_maze`], [`find_path`] | [`MazeGrid`](algoviz_structures::MazeGrid) | [`MazeEvent`] |
//! | [`quick_sort`], [`merge_sort`] | `Vec<Bar>` | [`SortEvent`] |
//! | [`traveling_salesman`] | [`DistanceMatrix`](algoviz_structures::DistanceMatrix) | [`TourEvent`] |
//!
//! The times-tables pattern is continuous rather than discrete and is exposed
//! as plain coordinate functions in [`times_tables`].

mod bfs;
mod dfs;
mod events;
mod maze;
mod merge_sort;
mod pathfinding;
mod quick_sort;
mod replay;
pub mod times_tables;
mod tsp;

pub use bfs::bfs;
pub use dfs::dfs;
pub use events::{MazeEvent, SortEvent, TourEvent, TraversalEvent};
pub use maze::generate_maze;
pub use merge_sort::merge_sort;
pub use pathfinding::find_path;
pub use quick_sort::quick_sort;
pub use replay::{replay_maze, replay_sort};
pub use tsp::{best_tour, traveling_salesman};
