use thiserror::Error;

use crate::graph::NodeId;

/// Convenient result alias for the Steiner route planner library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the problem input is malformed or describes no planets.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Raised when path reconstruction cannot reach the requested target.
    ///
    /// Every node pair is connected, so this signals a broken invariant rather
    /// than a bad input.
    #[error("node {goal} is unreachable from node {start}")]
    UnreachableTarget { start: NodeId, goal: NodeId },

    /// Raised when a submitted solution violates the output constraints.
    #[error("invalid solution: {message}")]
    InvalidSolution { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON serialisation errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_solution(message: impl Into<String>) -> Self {
        Error::InvalidSolution {
            message: message.into(),
        }
    }
}
