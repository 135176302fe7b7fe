use thiserror::Error;

use trj_core::TypeIndex;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("{field} has {got} frames but times has {expected}")]
    LengthMismatch {
        field:    &'static str,
        expected: usize,
        got:      usize,
    },

    #[error("frame {frame}: {expected} live agents but only {got} type names")]
    MissingTypeNames {
        frame:    usize,
        expected: usize,
        got:      usize,
    },

    #[error("frame {frame} agent {agent}: n_subpoints is {declared} but only {available} values given")]
    SubpointOverrun {
        frame:     usize,
        agent:     usize,
        declared:  usize,
        available: usize,
    },

    #[error("frame {frame} agent {agent}: {got} subpoints exceed the allocated width {width}")]
    SubpointWidth {
        frame: usize,
        agent: usize,
        got:   usize,
        width: usize,
    },

    #[error("frame {frame}: {n_agents} live agents exceed max_agents {max_agents}")]
    TooManyAgents {
        frame:      usize,
        n_agents:   usize,
        max_agents: usize,
    },

    #[error("{index} is reserved for both {first:?} and {second:?}")]
    DuplicateTypeIndex {
        index:  TypeIndex,
        first:  String,
        second: String,
    },

    #[error("invalid trajectory: {0}")]
    Core(#[from] trj_core::TrjError),
}

pub type AgentResult<T> = Result<T, AgentError>;
