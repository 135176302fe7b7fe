//! Smoldyn `listmols` output.
//!
//! ```text
//! 0.0 3                  <- frame header: time, molecule count
//! red(solution) 10.2 -4.1 2.5 1
//! green(front) 0.0 3.3 8.7 2
//! 0.01 2
//! ...
//! ```
//!
//! Molecule lines are `species x y [z] … serial`: with five or more columns
//! the input is 3D and the serial number is column 5; with exactly four it
//! is 2D (`z = 0`) and the serial is column 4.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use trj_agent::{Agent, AgentData, Dimensions, MetaData, TrajectoryData};
use trj_core::units::check_scale_factor;
use trj_core::{DisplayMap, UnitData, vec3};

use crate::text::{Line, read_lines};
use crate::{ConvertError, ConvertResult, TrajectorySource};

const FORMAT: &str = "Smoldyn";

/// Everything a Smoldyn conversion needs besides the text itself.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SmoldynConfig {
    pub meta_data:     MetaData,
    /// Keyed by Smoldyn species token, e.g. `"red(solution)"`.
    pub display_data:  DisplayMap,
    pub time_units:    UnitData,
    pub spatial_units: UnitData,
    pub plots:         Vec<serde_json::Value>,
}

impl Default for SmoldynConfig {
    fn default() -> Self {
        Self {
            meta_data:     MetaData::default(),
            display_data:  DisplayMap::new(),
            time_units:    UnitData::seconds(),
            spatial_units: UnitData::micrometers(),
            plots:         Vec::new(),
        }
    }
}

/// Reads one `listmols` file into a [`TrajectoryData`].
#[derive(Clone, Debug)]
pub struct SmoldynConverter {
    config: SmoldynConfig,
    lines:  Vec<Line>,
}

impl SmoldynConverter {
    pub fn from_path(path: &Path, config: SmoldynConfig) -> ConvertResult<Self> {
        debug!(path = %path.display(), "reading Smoldyn output");
        Self::from_reader(File::open(path)?, config)
    }

    /// Like [`from_path`](Self::from_path) but accepts any `Read` source.
    pub fn from_reader<R: Read>(reader: R, config: SmoldynConfig) -> ConvertResult<Self> {
        Ok(Self { config, lines: read_lines(reader)? })
    }

    /// Pass 1: frame count and the largest molecule count of any frame.
    fn dimensions(&self) -> ConvertResult<Dimensions> {
        let mut dims = Dimensions::default();
        let mut agents = 0;
        for line in &self.lines {
            if is_frame_header(line) {
                dims.max_agents = dims.max_agents.max(agents);
                agents = 0;
                dims.total_steps += 1;
            } else if dims.total_steps == 0 {
                return Err(ConvertError::Format {
                    format: FORMAT,
                    line:   line.number,
                    reason: "molecule line before the first `time count` header".into(),
                });
            } else {
                agents += 1;
            }
        }
        dims.max_agents = dims.max_agents.max(agents);
        Ok(dims)
    }

    fn molecule(&self, line: &Line, scale: f64) -> ConvertResult<Agent> {
        if line.len() < 4 {
            return Err(ConvertError::Format {
                format: FORMAT,
                line:   line.number,
                reason: "expected `species x y [z] ... serial`; \
                         write trajectories with the Smoldyn `listmols` command"
                    .into(),
            });
        }
        let is_3d = line.len() > 4;
        let unique_id: u64 = line.parse(if is_3d { 4 } else { 3 }, FORMAT)?;
        let z = if is_3d { line.parse(3, FORMAT)? } else { 0.0 };
        let position = [line.parse(1, FORMAT)?, line.parse(2, FORMAT)?, z];

        let display = self.config.display_data.resolve(&line.fields[0]);
        Ok(Agent::new(unique_id, display.name.clone(), vec3::scale(position, scale))
            .with_radius(scale * display.radius_or_default()))
    }
}

impl TrajectorySource for SmoldynConverter {
    fn name(&self) -> &'static str {
        FORMAT
    }

    fn produce(&self) -> ConvertResult<TrajectoryData> {
        let scale = check_scale_factor(self.config.meta_data.scale_factor)?;
        let dims = self.dimensions()?;
        let mut agent_data = AgentData::from_dimensions(dims);

        // Pass 2: fill slots in file order.
        let mut frame = None;
        for line in &self.lines {
            if is_frame_header(line) {
                let f = frame.map_or(0, |f| f + 1);
                agent_data.times[f] = line.parse(0, FORMAT)?;
                frame = Some(f);
                continue;
            }
            // Pass 1 rejected molecule lines before the first header.
            let Some(f) = frame else { continue };
            let slot = agent_data.n_agents[f];
            let agent = self.molecule(line, scale)?;
            agent_data.write_slot(f, slot, &agent)?;
            agent_data.n_agents[f] = slot + 1;
        }

        let mut spatial_units = self.config.spatial_units.clone();
        spatial_units.multiply(1.0 / scale);
        let meta = &self.config.meta_data;
        let meta_data = MetaData {
            box_size: vec3::scale(meta.box_size, scale),
            // Coordinates are already scaled.
            scale_factor: 1.0,
            ..meta.clone()
        };

        info!(
            frames = agent_data.total_steps(),
            max_agents = dims.max_agents,
            agents = agent_data.total_agents(),
            "Smoldyn trajectory read"
        );
        Ok(TrajectoryData::new(meta_data, agent_data)
            .with_units(self.config.time_units.clone(), spatial_units)
            .with_display_data(self.config.display_data.by_output_name())
            .with_plots(self.config.plots.clone()))
    }
}

/// `time count`: exactly two columns.
fn is_frame_header(line: &Line) -> bool {
    line.len() == 2
}
