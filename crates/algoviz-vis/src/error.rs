//! Error types for algoviz-vis.

use thiserror::Error;

/// Result type for algoviz-vis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to the layer driving a session.
#[derive(Debug, Error)]
pub enum Error {
    /// An algorithm handle that names no visualizer.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// An option outside the range the controls allow.
    #[error("option {name} = {value} outside {min}..={max}")]
    OptionOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Options could not be parsed.
    #[error("invalid options: {0}")]
    Options(#[from] serde_json::Error),

    /// A structure rejected an edit (e.g. dragging a city that does not exist).
    #[error(transparent)]
    Structure(#[from] algoviz_structures::Error),
}
