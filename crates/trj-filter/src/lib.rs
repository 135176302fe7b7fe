//! `trj-filter` — post-hoc transformations over a built trajectory.
//!
//! Every filter is a pure function `&TrajectoryData -> TrajectoryData`: the
//! input is never modified and the output shares no storage with it, so a
//! pipeline stage can be edited further without touching earlier stages.
//!
//! | Filter                     | Effect                                            |
//! |----------------------------|---------------------------------------------------|
//! | [`TranslateFilter`]        | Add an offset to agents of selected types         |
//! | [`AddAgentsFilter`]        | Concatenate another `AgentData` frame by frame    |
//! | [`EveryNthTimestepFilter`] | Keep every n-th frame                             |
//! | [`MultiplyTimeFilter`]     | Rescale timestamps and the time unit              |

pub mod add_agents;
pub mod error;
pub mod filter;
pub mod time;
pub mod translate;


pub use add_agents::AddAgentsFilter;
pub use error::{FilterError, FilterResult};
pub use filter::Filter;
pub use time::{EveryNthTimestepFilter, MultiplyTimeFilter};
pub use translate::TranslateFilter;
