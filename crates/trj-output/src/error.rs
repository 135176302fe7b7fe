//! Error types for trj-output.

use thiserror::Error;

use trj_agent::AgentError;

/// Errors that can occur when encoding or writing a trajectory.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("frame {frame}: unique id {unique_id} appears more than once")]
    DuplicateUniqueId {
        frame:     usize,
        unique_id: u64,
    },

    #[error("frame {frame}: type {name:?} has no type index")]
    UnmappedType {
        frame: usize,
        name:  String,
    },

    #[error("malformed agent record at offset {offset}: {reason}")]
    MalformedRecord {
        offset: usize,
        reason: &'static str,
    },

    #[error("a trajectory has already been written to this sink")]
    AlreadyWritten,

    #[error("invalid trajectory: {0}")]
    Agent(#[from] AgentError),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
