//! `trj-agent` — padded time-major agent storage for the trajectory
//! conversion workspace.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                  |
//! |-------------------|-----------------------------------------------------------|
//! | [`grid`]          | `Grid<T>` (dense frame-major 2D array)                    |
//! | [`subpoints`]     | `SubpointTable` (one padded block per frame)              |
//! | [`store`]         | `AgentData`, `Agent`, `AgentView`, `Dimensions`           |
//! | [`builder`]       | `from_dimensions`, `from_frames`, two-phase subpoints     |
//! | [`lists`]         | `AgentLists`, `from_lists` (ragged input → padded arrays) |
//! | [`type_mapping`]  | `TypeMapping` (first-seen name → dense index)             |
//! | [`trajectory`]    | `TrajectoryData`, `MetaData`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Deserialize` on `AgentLists` and `MetaData`.      |

pub mod builder;
pub mod error;
pub mod grid;
pub mod lists;
pub mod store;
pub mod subpoints;
pub mod trajectory;
pub mod type_mapping;

#[cfg(test)]
mod tests;

pub use error::{AgentError, AgentResult};
pub use grid::Grid;
pub use lists::AgentLists;
pub use store::{Agent, AgentData, AgentView, Dimensions};
pub use subpoints::SubpointTable;
pub use trajectory::{DEFAULT_BOX_SIZE, MetaData, TrajectoryData};
pub use type_mapping::TypeMapping;
