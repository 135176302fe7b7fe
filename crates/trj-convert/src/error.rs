//! Error types for trj-convert.

use thiserror::Error;

use trj_agent::AgentError;
use trj_core::TrjError;
use trj_filter::FilterError;
use trj_output::OutputError;

/// Errors that can occur while reading, filtering, or writing a trajectory.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input that parses as text but does not follow the simulator's layout.
    #[error("{format} line {line}: {reason}")]
    Format {
        format: &'static str,
        line:   u64,
        reason: String,
    },

    #[error("filter #{index} ({name}) failed: {source}")]
    Filter {
        index:  usize,
        name:   &'static str,
        #[source]
        source: FilterError,
    },

    #[error(transparent)]
    Trj(#[from] TrjError),

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

pub type ConvertResult<T> = Result<T, ConvertError>;
