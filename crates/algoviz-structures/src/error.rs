//! Error types for algoviz-structures.

use thiserror::Error;

/// Result type for structure operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when a caller addresses an element that does not exist.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A city index past the end of the map.
    #[error("city {index} out of range (map has {count} cities)")]
    CityOutOfRange { index: usize, count: usize },

    /// A node index past the end of the graph.
    #[error("node {index} out of range (graph has {count} nodes)")]
    NodeOutOfRange { index: usize, count: usize },
}
