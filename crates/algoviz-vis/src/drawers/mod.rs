//! Event interpreters.
//!
//! A drawer maps one event onto property changes of the handles the event
//! names. Drawers hold no state of their own, so applying a log prefix in
//! order always leaves the handles in the same place. Handles that are not
//! active (or do not exist) are skipped silently.

mod graph;
mod maze;
mod sorting;
mod times_tables;
mod tour;

pub use graph::{draw_traversal, GraphHandles};
pub use maze::{draw_maze, paint_endpoints, MazeHandles};
pub use sorting::draw_sort;
pub use times_tables::draw_pattern;
pub use tour::{draw_tour, TourHandles};
