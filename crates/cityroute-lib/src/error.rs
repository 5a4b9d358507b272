use thiserror::Error;

/// Convenient result alias for the cityroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an algorithm name does not normalize to a known strategy.
    #[error("invalid search algorithm: {name} (expected one of: BFS, DFS, ID-DFS, BestFirst, A*)")]
    UnknownAlgorithm { name: String },

    /// Raised when a place referenced during distance computation has no
    /// coordinate entry. Never downgraded to a zero distance.
    #[error("missing coordinate for place: {name}")]
    MissingCoordinate { name: String },

    /// Raised when an adjacency record does not hold exactly two place tokens.
    #[error("malformed adjacency record on line {line}: {record:?}")]
    AdjacencyParse { line: usize, record: String },

    /// Raised when a coordinate record has a malformed latitude or longitude.
    #[error("malformed coordinate record on line {line}: {record:?}")]
    CoordinateParse { line: usize, record: String },

    /// Raised when no route could be found between two places.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
