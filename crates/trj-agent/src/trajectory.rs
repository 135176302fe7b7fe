//! `TrajectoryData` — agent data plus everything the viewer needs to place
//! it.

use std::collections::BTreeMap;

use trj_core::{CameraData, DisplayMap, TypeIndex, UnitData, Vec3};

use crate::{AgentData, AgentResult, TypeMapping};

/// Box edge length used when a converter does not know the simulation box.
pub const DEFAULT_BOX_SIZE: Vec3 = [100.0, 100.0, 100.0];

/// Scene-level metadata shared by all converters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MetaData {
    /// Simulation box size, in output units once built.
    pub box_size:         Vec3,
    pub camera_defaults:  CameraData,
    /// Multiplier from native simulator units to output spatial units.
    pub scale_factor:     f64,
    pub trajectory_title: String,
}

impl Default for MetaData {
    fn default() -> Self {
        Self {
            box_size:         DEFAULT_BOX_SIZE,
            camera_defaults:  CameraData::DEFAULT,
            scale_factor:     1.0,
            trajectory_title: String::new(),
        }
    }
}

/// One complete trajectory, ready to filter or encode.
///
/// A value object: built once by a converter, replaced (never mutated in
/// place) by each filter, consumed once by the encoder.
#[derive(Clone, Debug, PartialEq)]
pub struct TrajectoryData {
    pub meta_data:     MetaData,
    pub agent_data:    AgentData,
    pub time_units:    UnitData,
    pub spatial_units: UnitData,
    /// Geometry per output type name.
    pub display_data:  DisplayMap,
    /// Type indices fixed by the input; all other names get the smallest
    /// free index in first-seen order.
    pub type_indices:  BTreeMap<String, TypeIndex>,
    /// Opaque plot records, passed through to `plotData.data`.
    pub plots:         Vec<serde_json::Value>,
}

impl TrajectoryData {
    /// Wrap `agent_data` with default units (`s`, `µm`) and no display data.
    pub fn new(meta_data: MetaData, agent_data: AgentData) -> Self {
        Self {
            meta_data,
            agent_data,
            time_units:    UnitData::seconds(),
            spatial_units: UnitData::micrometers(),
            display_data:  DisplayMap::new(),
            type_indices:  BTreeMap::new(),
            plots:         Vec::new(),
        }
    }

    pub fn with_units(mut self, time_units: UnitData, spatial_units: UnitData) -> Self {
        self.time_units = time_units;
        self.spatial_units = spatial_units;
        self
    }

    pub fn with_display_data(mut self, display_data: DisplayMap) -> Self {
        self.display_data = display_data;
        self
    }

    pub fn with_plots(mut self, plots: Vec<serde_json::Value>) -> Self {
        self.plots = plots;
        self
    }

    /// Same metadata, units, display data, and plots around new agent data.
    ///
    /// Filters use this to produce their output value.
    pub fn with_agent_data(&self, agent_data: AgentData) -> Self {
        Self {
            meta_data:     self.meta_data.clone(),
            agent_data,
            time_units:    self.time_units.clone(),
            spatial_units: self.spatial_units.clone(),
            display_data:  self.display_data.clone(),
            type_indices:  self.type_indices.clone(),
            plots:         self.plots.clone(),
        }
    }

    /// The name → index table the encoder will use.
    pub fn type_mapping(&self) -> AgentResult<TypeMapping> {
        let mut mapping =
            TypeMapping::seeded(self.type_indices.iter().map(|(n, &i)| (n.as_str(), i)))?;
        mapping.extend_from(&self.agent_data);
        Ok(mapping)
    }

    /// `times[1] - times[0]`, or zero with fewer than two frames.
    pub fn time_step_size(&self) -> f64 {
        match self.agent_data.times.as_slice() {
            [t0, t1, ..] => t1 - t0,
            _ => 0.0,
        }
    }
}
