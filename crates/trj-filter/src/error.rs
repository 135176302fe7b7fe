use thiserror::Error;

use trj_agent::AgentError;
use trj_core::{TypeIndex, UniqueId};

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("{filter}: {index} is not present in the trajectory")]
    UnknownTypeIndex {
        filter: &'static str,
        index:  TypeIndex,
    },

    #[error("{filter}: type {name:?} is not present in the trajectory")]
    UnknownTypeName {
        filter: &'static str,
        name:   String,
    },

    #[error("{filter}: fiber {unique_id} in frame {frame} has {count} subpoints, not a multiple of 3")]
    RaggedFiber {
        filter:    &'static str,
        frame:     usize,
        unique_id: UniqueId,
        count:     usize,
    },

    #[error("{filter}: offsetting {unique_id} overflows the id range")]
    IdOverflow {
        filter:    &'static str,
        unique_id: UniqueId,
    },

    #[error("{filter}: {reason}")]
    Config {
        filter: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Agent(#[from] AgentError),
}

pub type FilterResult<T> = Result<T, FilterError>;
