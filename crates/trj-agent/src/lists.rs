//! Ragged nested-list input.
//!
//! `AgentLists` mirrors what a simulator script naturally produces: one list
//! per frame, each as long as that frame's agent count, with per-agent
//! subpoint lists of any length.  [`AgentData::from_lists`] normalizes it
//! into padded storage.
//!
//! # Example (JSON, with the `serde` feature)
//!
//! ```json
//! {
//!   "times": [0.0, 0.1],
//!   "type_names": [["A", "B"], ["A"]],
//!   "positions": [[[0, 0, 0], [1, 1, 1]], [[2, 2, 2]]]
//! }
//! ```
//!
//! Every field except `times` and `type_names` may be omitted (empty); an
//! omitted field takes its documented default for every live agent.

use trj_core::units::check_scale_factor;
use trj_core::{DEFAULT_RADIUS, UniqueId, Vec3, VizType, vec3};

use crate::{Agent, AgentData, AgentError, AgentResult};

/// Ragged per-frame agent lists.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentLists {
    pub times:       Vec<f64>,
    /// Live count per frame; defaults to each frame's `type_names` length.
    pub n_agents:    Option<Vec<usize>>,
    /// Default: `VizType::DEFAULT`.
    pub viz_types:   Vec<Vec<VizType>>,
    /// Default: the slot index within the frame.
    pub unique_ids:  Vec<Vec<UniqueId>>,
    pub type_names:  Vec<Vec<String>>,
    /// Default: origin.
    pub positions:   Vec<Vec<Vec3>>,
    /// Default: zero.  Not scaled.
    pub rotations:   Vec<Vec<Vec3>>,
    /// Default: [`DEFAULT_RADIUS`].
    pub radii:       Vec<Vec<f64>>,
    /// True subpoint counts; default: each subpoint list's length.
    pub n_subpoints: Vec<Vec<usize>>,
    pub subpoints:   Vec<Vec<Vec<f64>>>,
}

impl AgentLists {
    fn n_agents(&self, frame: usize) -> usize {
        match &self.n_agents {
            Some(n) => n[frame],
            None => self.type_names[frame].len(),
        }
    }

    /// Longest inner list of any field, and the largest declared count.
    fn max_inner_len(&self) -> usize {
        fn longest<T>(rows: &[Vec<T>]) -> usize {
            rows.iter().map(Vec::len).max().unwrap_or(0)
        }
        [
            self.n_agents.iter().flatten().copied().max().unwrap_or(0),
            longest(&self.viz_types),
            longest(&self.unique_ids),
            longest(&self.type_names),
            longest(&self.positions),
            longest(&self.rotations),
            longest(&self.radii),
            longest(&self.n_subpoints),
            longest(&self.subpoints),
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }

    /// Every provided field must have one entry per frame.
    fn check_outer_lengths(&self) -> AgentResult<()> {
        let expected = self.times.len();
        if self.type_names.len() != expected {
            return Err(AgentError::LengthMismatch {
                field: "type_names",
                expected,
                got: self.type_names.len(),
            });
        }
        let optional = [
            ("viz_types", self.viz_types.len()),
            ("unique_ids", self.unique_ids.len()),
            ("positions", self.positions.len()),
            ("rotations", self.rotations.len()),
            ("radii", self.radii.len()),
            ("n_subpoints", self.n_subpoints.len()),
            ("subpoints", self.subpoints.len()),
        ];
        for (field, got) in optional {
            if got != 0 && got != expected {
                return Err(AgentError::LengthMismatch { field, expected, got });
            }
        }
        // An explicit but empty `n_agents` is not "omitted".
        match &self.n_agents {
            Some(n) if n.len() != expected => {
                Err(AgentError::LengthMismatch { field: "n_agents", expected, got: n.len() })
            }
            _ => Ok(()),
        }
    }

    fn agent(&self, frame: usize, slot: usize, scale_factor: f64) -> AgentResult<Agent> {
        fn cell<T: Copy>(rows: &[Vec<T>], frame: usize, slot: usize) -> Option<T> {
            rows.get(frame).and_then(|r| r.get(slot)).copied()
        }

        let names = &self.type_names[frame];
        let type_name = names.get(slot).ok_or(AgentError::MissingTypeNames {
            frame,
            expected: self.n_agents(frame),
            got: names.len(),
        })?;

        let raw_subpoints: &[f64] = self
            .subpoints
            .get(frame)
            .and_then(|r| r.get(slot))
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let declared = cell(&self.n_subpoints, frame, slot).unwrap_or(raw_subpoints.len());
        if declared > raw_subpoints.len() {
            return Err(AgentError::SubpointOverrun {
                frame,
                agent: slot,
                declared,
                available: raw_subpoints.len(),
            });
        }

        Ok(Agent {
            viz_type:  cell(&self.viz_types, frame, slot).unwrap_or(VizType::DEFAULT),
            unique_id: cell(&self.unique_ids, frame, slot).unwrap_or(UniqueId(slot as u64)),
            type_name: type_name.clone(),
            position:  vec3::scale(cell(&self.positions, frame, slot).unwrap_or(vec3::ZERO), scale_factor),
            rotation:  cell(&self.rotations, frame, slot).unwrap_or(vec3::ZERO),
            radius:    cell(&self.radii, frame, slot).unwrap_or(DEFAULT_RADIUS) * scale_factor,
            subpoints: raw_subpoints[..declared].iter().map(|v| v * scale_factor).collect(),
        })
    }
}

impl AgentData {
    /// Normalize ragged lists into padded arrays.
    ///
    /// - The agent dimension is the longest inner list of any field.
    /// - Positions, radii, and subpoints are multiplied by `scale_factor`;
    ///   ids, viz types, rotations, times, and counts are copied verbatim.
    /// - Values listed past a frame's live count are dropped so padding
    ///   stays zero.
    /// - Subpoints are padded per frame to that frame's largest count.
    pub fn from_lists(lists: &AgentLists, scale_factor: f64) -> AgentResult<Self> {
        let scale_factor = check_scale_factor(scale_factor)?;
        lists.check_outer_lengths()?;

        let frames = (0..lists.times.len())
            .map(|f| {
                (0..lists.n_agents(f))
                    .map(|slot| lists.agent(f, slot, scale_factor))
                    .collect::<AgentResult<Vec<Agent>>>()
            })
            .collect::<AgentResult<Vec<_>>>()?;

        let data = Self::from_frames_padded(lists.times.clone(), &frames, lists.max_inner_len())?;
        tracing::debug!(
            frames = data.total_steps(),
            max_agents = data.max_agents(),
            max_subpoints = data.max_subpoints(),
            "normalized agent lists"
        );
        Ok(data)
    }
}
