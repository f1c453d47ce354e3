//! Algoviz Structures
//!
//! The random inputs every visualized algorithm runs against.
//!
//! # Generators
//!
//! - **Graph**: connected random graph, spanning tree first, then extra edges
//!   drawn uniformly from the unused node pairs until the density target is hit
//! - **Maze grid**: odd-sized grid of wall/carved cells, carved later by the
//!   maze engine
//! - **Bars**: sortable array of `{id, value}` with values in `[0, 100]`
//! - **Cities**: random positions plus a symmetric Euclidean distance matrix
//!
//! Structures are regenerated wholesale on every reset and treated as
//! read-only while an algorithm runs against them. Randomness always comes
//! from a caller-supplied [`rand::Rng`], so a seeded generator reproduces the
//! same structure.

mod array;
mod cities;
mod error;
mod geometry;
mod graph;
mod id;
mod maze;

pub use array::{random_array, Bar, MAX_VALUE};
pub use cities::{Cities, DistanceMatrix};
pub use error::{Error, Result};
pub use geometry::{Point, Stage, NODE_RADIUS};
pub use graph::{edge_budget, max_edges, pair_index, Edge, Graph, Node, MAX_NODES};
pub use id::Id;
pub use maze::{Cell, MazeGrid};
