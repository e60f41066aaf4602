use thiserror::Error;

/// Top-level error type for the airstrip crate.
#[derive(Debug, Error)]
pub enum AirstripError {
    #[error(transparent)]
    Island(#[from] IslandError),

    #[error(transparent)]
    Loader(#[from] LoaderError),
}

/// Errors related to island construction and queries.
#[derive(Debug, Error)]
pub enum IslandError {
    #[error("island must have at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("invalid vertex pair ({a}, {b}) for island of {len} vertices")]
    InvalidVertexPair { a: usize, b: usize, len: usize },
}

/// Errors related to loading a polygon from a file.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("missing or invalid vertex count")]
    InvalidVertexCount,

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("expected {expected} vertices but found {found}")]
    VertexCountMismatch { expected: usize, found: usize },
}

/// Convenience type alias for results using [`AirstripError`].
pub type Result<T> = std::result::Result<T, AirstripError>;
