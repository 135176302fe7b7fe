//! `AddAgentsFilter` — merge a second agent table into a trajectory.

use trj_agent::{AgentData, TrajectoryData};
use trj_core::{DisplayMap, UniqueId};

use crate::{Filter, FilterError, FilterResult};

const NAME: &str = "AddAgentsFilter";

/// Concatenates the live agents of `new_agent_data` after the live agents of
/// each frame.
///
/// - The result has `max(a, b)` frames; a frame missing from one source
///   contributes zero agents.  Times come from the trajectory when it has
///   the frame, else from the added data.
/// - Added agents' unique ids are offset past the largest id anywhere in the
///   trajectory, so they cannot collide within a frame and keep their
///   relative identity across frames.  An offset past `u64::MAX` is an
///   error.
/// - Type names are kept as-is; the type mapping is derived from the merged
///   result, so a name present in both sources gets one index.
#[derive(Clone, Debug)]
pub struct AddAgentsFilter {
    new_agent_data:   AgentData,
    new_display_data: DisplayMap,
}

impl AddAgentsFilter {
    pub fn new(new_agent_data: AgentData) -> Self {
        Self {
            new_agent_data,
            new_display_data: DisplayMap::new(),
        }
    }

    /// Display entries for the added types.  Existing entries win.
    pub fn with_display_data(mut self, display_data: DisplayMap) -> Self {
        self.new_display_data = display_data;
        self
    }
}

impl Filter for AddAgentsFilter {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, data: &TrajectoryData) -> FilterResult<TrajectoryData> {
        let base = &data.agent_data;
        let added = &self.new_agent_data;
        base.validate()?;
        added.validate()?;

        let id_offset = match (0..base.total_steps())
            .flat_map(move |f| base.unique_ids.row(f)[..base.n_agents[f]].iter().copied())
            .max()
        {
            Some(max) => max
                .0
                .checked_add(1)
                .ok_or(FilterError::IdOverflow { filter: NAME, unique_id: max })?,
            None => 0,
        };

        let total_steps = base.total_steps().max(added.total_steps());
        let mut times = Vec::with_capacity(total_steps);
        let mut frames = Vec::with_capacity(total_steps);

        for frame in 0..total_steps {
            times.push(
                base.times
                    .get(frame)
                    .or_else(|| added.times.get(frame))
                    .copied()
                    .unwrap_or_default(),
            );

            let mut agents = if frame < base.total_steps() {
                base.frame_agents(frame)
            } else {
                Vec::new()
            };
            if frame < added.total_steps() {
                for view in added.live(frame) {
                    let shifted = view
                        .unique_id
                        .0
                        .checked_add(id_offset)
                        .ok_or(FilterError::IdOverflow { filter: NAME, unique_id: view.unique_id })?;
                    let mut agent = view.to_agent();
                    agent.unique_id = UniqueId(shifted);
                    agents.push(agent);
                }
            }
            frames.push(agents);
        }

        let merged = AgentData::from_frames(times, &frames)?;
        tracing::debug!(
            filter = NAME,
            frames = merged.total_steps(),
            added = added.total_agents(),
            "merged agent data"
        );

        let mut out = data.with_agent_data(merged);
        out.display_data.merge(&self.new_display_data);
        Ok(out)
    }
}
