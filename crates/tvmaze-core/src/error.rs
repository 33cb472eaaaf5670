//! Error types for the TVMaze client
//!
//! This module defines all error types used throughout the library.
//! The taxonomy is deliberately small: a request either fails to complete
//! (or is rejected by the server), or it completes with a body that does
//! not match the expected shape.

use thiserror::Error;

/// Error type for TVMaze operations
#[derive(Error, Debug)]
pub enum TvMazeError {
    /// Request failed in transit, timed out, or came back with a
    /// non-success status
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Result type alias for TVMaze operations
pub type Result<T> = std::result::Result<T, TvMazeError>;
