//! Core agent storage: `AgentData` (padded arrays + live counts).
//!
//! # Layout
//!
//! Every per-slot array is `(total_steps, max_agents)` (positions and
//! rotations carry a `[f64; 3]` per cell).  For frame `f` only slots
//! `0..n_agents[f]` are live; everything after is zero padding that no
//! consumer may read or emit:
//!
//! ```ignore
//! for view in data.live(frame) {
//!     emit(view.unique_id, view.position, view.subpoints);
//! }
//! ```
//!
//! Subpoints live in a [`SubpointTable`] whose width varies per frame;
//! `n_subpoints[f][a]` records the true (unpadded) length.

use trj_core::{DEFAULT_RADIUS, UniqueId, Vec3, VizType};

use crate::{AgentError, AgentResult, Grid, SubpointTable};

// ── Dimensions ────────────────────────────────────────────────────────────────

/// Array bounds gathered by a converter's first pass over its input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Dimensions {
    pub total_steps: usize,
    pub max_agents:  usize,
}

impl Dimensions {
    pub fn new(total_steps: usize, max_agents: usize) -> Self {
        Self { total_steps, max_agents }
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// One live agent record, owned.
///
/// Filters collect these per frame, edit them, and rebuild padded storage
/// with [`AgentData::from_frames`].
#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
    pub viz_type:  VizType,
    pub unique_id: UniqueId,
    pub type_name: String,
    pub position:  Vec3,
    pub rotation:  Vec3,
    pub radius:    f64,
    pub subpoints: Vec<f64>,
}

impl Agent {
    /// A point-like agent with default radius and no subpoints.
    pub fn new(unique_id: u64, type_name: impl Into<String>, position: Vec3) -> Self {
        Self {
            viz_type: VizType::DEFAULT,
            unique_id: UniqueId(unique_id),
            type_name: type_name.into(),
            position,
            rotation: [0.0; 3],
            radius: DEFAULT_RADIUS,
            subpoints: Vec::new(),
        }
    }

    /// A fiber agent whose polyline is `points`, flattened to `x, y, z`
    /// triplets.
    pub fn fiber(unique_id: u64, type_name: impl Into<String>, points: &[Vec3]) -> Self {
        Self {
            viz_type: VizType::FIBER,
            subpoints: points.iter().flatten().copied().collect(),
            ..Self::new(unique_id, type_name, [0.0; 3])
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }
}

// ── AgentView ─────────────────────────────────────────────────────────────────

/// Borrowed view of one live slot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentView<'a> {
    pub viz_type:  VizType,
    pub unique_id: UniqueId,
    pub type_name: &'a str,
    pub position:  Vec3,
    pub rotation:  Vec3,
    pub radius:    f64,
    /// Only the true subpoints; padding is already cut off.
    pub subpoints: &'a [f64],
}

impl AgentView<'_> {
    pub fn to_agent(&self) -> Agent {
        Agent {
            viz_type:  self.viz_type,
            unique_id: self.unique_id,
            type_name: self.type_name.to_owned(),
            position:  self.position,
            rotation:  self.rotation,
            radius:    self.radius,
            subpoints: self.subpoints.to_vec(),
        }
    }
}

// ── AgentData ─────────────────────────────────────────────────────────────────

/// Time-major ragged agent table stored as dense padded arrays.
///
/// Construct with [`from_dimensions`](Self::from_dimensions) (converters),
/// [`from_lists`](Self::from_lists) (ragged nested input), or
/// [`from_frames`](Self::from_frames) (owned records).  `Clone` is a deep
/// copy; no two values ever share storage.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentData {
    /// Timestamp of each frame.  Its length is `total_steps`.
    pub times: Vec<f64>,

    /// Live agent count per frame.
    pub n_agents: Vec<usize>,

    pub viz_types: Grid<VizType>,

    /// Unique within a frame only.
    pub unique_ids: Grid<UniqueId>,

    /// One name per live agent, per frame.
    pub types: Vec<Vec<String>>,

    /// Already in output spatial units.
    pub positions: Grid<Vec3>,

    pub rotations: Grid<Vec3>,

    pub radii: Grid<f64>,

    /// True subpoint count of each slot.
    pub n_subpoints: Grid<usize>,

    pub subpoints: SubpointTable,
}

impl AgentData {
    #[inline]
    pub fn total_steps(&self) -> usize {
        self.times.len()
    }

    /// Padded agent dimension shared by every per-slot array.
    #[inline]
    pub fn max_agents(&self) -> usize {
        self.viz_types.cols()
    }

    /// Largest per-frame subpoint width.
    pub fn max_subpoints(&self) -> usize {
        self.subpoints.max_width()
    }

    /// `true` if there are no frames.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Total live agents across all frames.
    pub fn total_agents(&self) -> usize {
        self.n_agents.iter().sum()
    }

    /// View of slot `agent` in `frame`.  The caller guarantees the slot is
    /// live (`agent < n_agents[frame]`).
    pub fn agent(&self, frame: usize, agent: usize) -> AgentView<'_> {
        let n = self.n_subpoints.get(frame, agent);
        AgentView {
            viz_type:  self.viz_types.get(frame, agent),
            unique_id: self.unique_ids.get(frame, agent),
            type_name: &self.types[frame][agent],
            position:  self.positions.get(frame, agent),
            rotation:  self.rotations.get(frame, agent),
            radius:    self.radii.get(frame, agent),
            subpoints: &self.subpoints.slot(frame, agent)[..n],
        }
    }

    /// Iterator over the live slots of `frame`, in construction order.
    pub fn live(&self, frame: usize) -> impl Iterator<Item = AgentView<'_>> + '_ {
        (0..self.n_agents[frame]).map(move |a| self.agent(frame, a))
    }

    /// Owned copies of the live slots of `frame`.
    pub fn frame_agents(&self, frame: usize) -> Vec<Agent> {
        self.live(frame).map(|v| v.to_agent()).collect()
    }

    /// Write subpoints for one slot and record its true length.
    ///
    /// The frame's block must already be wide enough; see
    /// [`allocate_subpoints`](Self::allocate_subpoints).
    pub fn set_subpoints(&mut self, frame: usize, agent: usize, values: &[f64]) -> AgentResult<()> {
        let width = self.subpoints.width(frame);
        if values.len() > width {
            return Err(AgentError::SubpointWidth { frame, agent, got: values.len(), width });
        }
        let slot = self.subpoints.slot_mut(frame, agent);
        slot[..values.len()].copy_from_slice(values);
        slot[values.len()..].fill(0.0);
        self.n_subpoints.set(frame, agent, values.len());
        Ok(())
    }

    /// Check the structural invariants every stage relies on.
    ///
    /// - `n_agents[f] <= max_agents` and one type name per live agent;
    /// - live subpoint counts fit their frame's width;
    /// - every array agrees on `total_steps`.
    pub fn validate(&self) -> AgentResult<()> {
        let steps = self.total_steps();
        for (field, got) in [
            ("n_agents", self.n_agents.len()),
            ("types", self.types.len()),
            ("viz_types", self.viz_types.rows()),
            ("unique_ids", self.unique_ids.rows()),
            ("positions", self.positions.rows()),
            ("rotations", self.rotations.rows()),
            ("radii", self.radii.rows()),
            ("n_subpoints", self.n_subpoints.rows()),
            ("subpoints", self.subpoints.total_steps()),
        ] {
            if got != steps {
                return Err(AgentError::LengthMismatch { field, expected: steps, got });
            }
        }

        let max_agents = self.max_agents();
        for frame in 0..steps {
            let n = self.n_agents[frame];
            if n > max_agents {
                return Err(AgentError::TooManyAgents { frame, n_agents: n, max_agents });
            }
            if self.types[frame].len() != n {
                return Err(AgentError::MissingTypeNames {
                    frame,
                    expected: n,
                    got: self.types[frame].len(),
                });
            }
            let width = self.subpoints.width(frame);
            for agent in 0..n {
                let got = self.n_subpoints.get(frame, agent);
                if got > width {
                    return Err(AgentError::SubpointWidth { frame, agent, got, width });
                }
            }
        }
        Ok(())
    }
}
