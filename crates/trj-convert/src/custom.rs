//! Trajectories supplied as ragged in-memory lists.
//!
//! Stands in for any simulator without a dedicated reader: the caller fills
//! an [`AgentLists`] (or deserializes one from JSON) and this source pads it.

use tracing::info;

use trj_agent::{AgentData, AgentLists, MetaData, TrajectoryData};
use trj_core::units::check_scale_factor;
use trj_core::{DisplayMap, UnitData, vec3};

use crate::{ConvertResult, TrajectorySource};

/// Agent lists plus the scene description around them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CustomSource {
    pub meta_data:     MetaData,
    pub agent_data:    AgentLists,
    pub time_units:    UnitData,
    pub spatial_units: UnitData,
    /// Keyed by output type name.
    pub display_data:  DisplayMap,
    pub plots:         Vec<serde_json::Value>,
}

impl Default for CustomSource {
    fn default() -> Self {
        Self::new(MetaData::default(), AgentLists::default())
    }
}

impl CustomSource {
    pub fn new(meta_data: MetaData, agent_data: AgentLists) -> Self {
        Self {
            meta_data,
            agent_data,
            time_units:    UnitData::seconds(),
            spatial_units: UnitData::micrometers(),
            display_data:  DisplayMap::new(),
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

    /// Read a JSON document with the same field names as this struct.
    #[cfg(feature = "serde")]
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> ConvertResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

impl TrajectorySource for CustomSource {
    fn name(&self) -> &'static str {
        "custom"
    }

    fn produce(&self) -> ConvertResult<TrajectoryData> {
        let scale = check_scale_factor(self.meta_data.scale_factor)?;
        let agent_data = AgentData::from_lists(&self.agent_data, scale)?;

        let mut spatial_units = self.spatial_units.clone();
        spatial_units.multiply(1.0 / scale);
        let meta_data = MetaData {
            box_size: vec3::scale(self.meta_data.box_size, scale),
            scale_factor: 1.0,
            ..self.meta_data.clone()
        };

        info!(
            frames = agent_data.total_steps(),
            agents = agent_data.total_agents(),
            "custom trajectory built"
        );
        Ok(TrajectoryData::new(meta_data, agent_data)
            .with_units(self.time_units.clone(), spatial_units)
            .with_display_data(self.display_data.by_output_name())
            .with_plots(self.plots.clone()))
    }
}
