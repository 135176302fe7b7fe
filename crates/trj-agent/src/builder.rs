//! Construction of [`AgentData`] from bounds or from owned records.
//!
//! # Two-phase build (converters)
//!
//! ```rust
//! use trj_agent::{AgentData, Dimensions};
//!
//! // Pass 1: scan the input for bounds.
//! let dims = Dimensions::new(2, 3);
//! let mut data = AgentData::from_dimensions(dims);
//!
//! // Pass 2: once per-frame subpoint maxima are known, allocate them.
//! data.allocate_subpoints(&[6, 0]).unwrap();
//! data.set_subpoints(0, 0, &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]).unwrap();
//! assert_eq!(data.n_subpoints.get(0, 0), 6);
//! ```

use crate::{Agent, AgentData, AgentError, AgentResult, Dimensions, Grid, SubpointTable};

impl AgentData {
    /// Preallocate every fixed-shape array for `dims`, zero-filled.
    ///
    /// `types` starts as one empty list per frame and subpoint blocks start
    /// at width zero.  Converters write values by index afterwards.
    pub fn from_dimensions(dims: Dimensions) -> Self {
        let Dimensions { total_steps, max_agents } = dims;
        Self {
            times:       vec![0.0; total_steps],
            n_agents:    vec![0; total_steps],
            viz_types:   Grid::new(total_steps, max_agents),
            unique_ids:  Grid::new(total_steps, max_agents),
            types:       vec![Vec::new(); total_steps],
            positions:   Grid::new(total_steps, max_agents),
            rotations:   Grid::new(total_steps, max_agents),
            radii:       Grid::new(total_steps, max_agents),
            n_subpoints: Grid::new(total_steps, max_agents),
            subpoints:   SubpointTable::new(total_steps, max_agents),
        }
    }

    /// Allocate subpoint blocks once the per-frame widths are known.
    ///
    /// Discards any subpoints written before and resets `n_subpoints`.
    pub fn allocate_subpoints(&mut self, widths: &[usize]) -> AgentResult<()> {
        if widths.len() != self.total_steps() {
            return Err(AgentError::LengthMismatch {
                field:    "subpoint widths",
                expected: self.total_steps(),
                got:      widths.len(),
            });
        }
        self.subpoints = SubpointTable::with_widths(self.max_agents(), widths);
        self.n_subpoints = Grid::new(self.total_steps(), self.max_agents());
        Ok(())
    }

    /// Build padded storage from owned live records, one `Vec` per frame.
    ///
    /// `max_agents` becomes the longest frame.
    pub fn from_frames(times: Vec<f64>, frames: &[Vec<Agent>]) -> AgentResult<Self> {
        let max_agents = frames.iter().map(Vec::len).max().unwrap_or(0);
        Self::from_frames_padded(times, frames, max_agents)
    }

    /// Like [`from_frames`](Self::from_frames) with an explicit minimum
    /// agent dimension.
    pub(crate) fn from_frames_padded(
        times:      Vec<f64>,
        frames:     &[Vec<Agent>],
        max_agents: usize,
    ) -> AgentResult<Self> {
        if frames.len() != times.len() {
            return Err(AgentError::LengthMismatch {
                field:    "frames",
                expected: times.len(),
                got:      frames.len(),
            });
        }
        let max_agents = max_agents.max(frames.iter().map(Vec::len).max().unwrap_or(0));

        let mut data = Self::from_dimensions(Dimensions::new(times.len(), max_agents));
        data.times = times;

        let widths: Vec<usize> = frames
            .iter()
            .map(|agents| agents.iter().map(|a| a.subpoints.len()).max().unwrap_or(0))
            .collect();
        data.allocate_subpoints(&widths)?;

        for (f, agents) in frames.iter().enumerate() {
            data.n_agents[f] = agents.len();
            for (a, agent) in agents.iter().enumerate() {
                data.write_slot(f, a, agent)?;
            }
        }
        Ok(data)
    }

    /// Overwrite slot `(frame, agent)` with `agent` and append its type name.
    ///
    /// Slots must be written in ascending order within a frame so `types`
    /// stays aligned with slot indices.
    pub fn write_slot(&mut self, frame: usize, agent: usize, record: &Agent) -> AgentResult<()> {
        self.viz_types.set(frame, agent, record.viz_type);
        self.unique_ids.set(frame, agent, record.unique_id);
        self.positions.set(frame, agent, record.position);
        self.rotations.set(frame, agent, record.rotation);
        self.radii.set(frame, agent, record.radius);
        self.set_subpoints(frame, agent, &record.subpoints)?;
        self.types[frame].push(record.type_name.clone());
        Ok(())
    }
}
