//! The `OutputWriter` trait implemented by output backends.

use trj_agent::TrajectoryData;

use crate::OutputResult;

/// A sink for encoded trajectories.
pub trait OutputWriter {
    /// Encode, validate, and write one trajectory.
    fn write_trajectory(&mut self, data: &TrajectoryData) -> OutputResult<()>;

    /// Flush and close the underlying handle.
    ///
    /// Idempotent: later calls return `Ok(())` without touching the handle.
    fn finish(&mut self) -> OutputResult<()>;
}
