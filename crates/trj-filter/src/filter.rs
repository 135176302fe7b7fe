//! The `Filter` trait — one stage of a conversion pipeline.

use trj_agent::TrajectoryData;

use crate::FilterResult;

/// A pure transformation of a trajectory.
///
/// # Contract
///
/// - Never mutate `data`; return a fully independent value.
/// - Rely only on what `data` itself contains (its own `total_steps`, its
///   own type mapping), never on earlier pipeline stages.
/// - Keep or recompute `n_agents`; never leave inconsistent subpoint counts.
/// - Reject configuration that names types absent from `data`.
///
/// # Example
///
/// ```rust,ignore
/// struct Identity;
///
/// impl Filter for Identity {
///     fn name(&self) -> &'static str { "Identity" }
///
///     fn apply(&self, data: &TrajectoryData) -> FilterResult<TrajectoryData> {
///         Ok(data.clone())
///     }
/// }
/// ```
pub trait Filter {
    /// Short label used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Produce the filtered trajectory.
    fn apply(&self, data: &TrajectoryData) -> FilterResult<TrajectoryData>;
}
