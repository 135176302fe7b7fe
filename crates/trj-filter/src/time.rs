//! Time-axis filters.

use trj_agent::{AgentData, TrajectoryData};

use crate::{Filter, FilterError, FilterResult};

/// Keeps frames `0, n, 2n, …`.
#[derive(Copy, Clone, Debug)]
pub struct EveryNthTimestepFilter {
    n: usize,
}

impl EveryNthTimestepFilter {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl Filter for EveryNthTimestepFilter {
    fn name(&self) -> &'static str {
        "EveryNthTimestepFilter"
    }

    fn apply(&self, data: &TrajectoryData) -> FilterResult<TrajectoryData> {
        if self.n == 0 {
            return Err(FilterError::Config {
                filter: self.name(),
                reason: "n must be at least 1".into(),
            });
        }
        let source = &data.agent_data;
        source.validate()?;
        let kept: Vec<usize> = (0..source.total_steps()).step_by(self.n).collect();
        let times = kept.iter().map(|&f| source.times[f]).collect();
        let frames: Vec<_> = kept.iter().map(|&f| source.frame_agents(f)).collect();

        let agents = AgentData::from_frames(times, &frames)?;
        tracing::debug!(filter = self.name(), kept = kept.len(), "dropped frames");
        Ok(data.with_agent_data(agents))
    }
}

/// Multiplies every timestamp by `factor`.
///
/// The time unit magnitude is divided by `factor` so the output still denotes
/// the same physical times.
#[derive(Copy, Clone, Debug)]
pub struct MultiplyTimeFilter {
    factor: f64,
}

impl MultiplyTimeFilter {
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }
}

impl Filter for MultiplyTimeFilter {
    fn name(&self) -> &'static str {
        "MultiplyTimeFilter"
    }

    fn apply(&self, data: &TrajectoryData) -> FilterResult<TrajectoryData> {
        if !self.factor.is_finite() || self.factor == 0.0 {
            return Err(FilterError::Config {
                filter: self.name(),
                reason: format!("factor must be finite and non-zero, got {}", self.factor),
            });
        }
        data.agent_data.validate()?;
        let mut agents = data.agent_data.clone();
        for t in &mut agents.times {
            *t *= self.factor;
        }
        let mut out = data.with_agent_data(agents);
        out.time_units.multiply(1.0 / self.factor);
        Ok(out)
    }
}
