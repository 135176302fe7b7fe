//! The capability every converter provides.

use trj_agent::TrajectoryData;

use crate::ConvertResult;

/// Something that can produce a complete, unfiltered trajectory.
///
/// Implemented by each simulator converter and by [`CustomSource`]; the
/// orchestrator only ever sees this trait.
///
/// [`CustomSource`]: crate::CustomSource
pub trait TrajectorySource {
    /// Short label used in log events.
    fn name(&self) -> &'static str;

    /// Build the trajectory.  Calling this twice yields equal values.
    fn produce(&self) -> ConvertResult<TrajectoryData>;
}
