//! MEDYAN `snapshot.traj` output.
//!
//! ```text
//! 0 0.0 2 1 0 0                  <- step time n_filaments n_linkers n_motors n_branchers
//! FILAMENT 0 0 3                 <- id type n_beads
//! 454.3 363.4 265.4 519.7 …      <- 3 · n_beads coordinates
//! LINKER 0 1                     <- id type
//! 500.1 210.0 88.3 503.9 …       <- two end points
//! ```
//!
//! Every filament, linker, and motor becomes a fiber agent whose subpoints
//! are its coordinates.  Brancher records are skipped.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use trj_agent::{Agent, AgentData, MetaData, TrajectoryData};
use trj_core::units::check_scale_factor;
use trj_core::{DisplayData, DisplayMap, DisplayType, UnitData, vec3};

use crate::text::{Line, read_lines};
use crate::{ConvertError, ConvertResult, TrajectorySource};

const FORMAT: &str = "MEDYAN";

/// Everything a MEDYAN conversion needs besides the snapshot text.
///
/// Each display map is keyed by the numeric MEDYAN type (`"0"`, `"1"`, …)
/// of its kind.  Unconfigured types are named `filament{t}`, `linker{t}`, or
/// `motor{t}`.  Display type is always `FIBER`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MedyanConfig {
    pub meta_data:             MetaData,
    pub filament_display_data: DisplayMap,
    pub linker_display_data:   DisplayMap,
    pub motor_display_data:    DisplayMap,
    pub time_units:            UnitData,
    pub spatial_units:         UnitData,
    pub plots:                 Vec<serde_json::Value>,
}

impl Default for MedyanConfig {
    fn default() -> Self {
        Self {
            meta_data:             MetaData::default(),
            filament_display_data: DisplayMap::new(),
            linker_display_data:   DisplayMap::new(),
            motor_display_data:    DisplayMap::new(),
            time_units:            UnitData::seconds(),
            spatial_units:         UnitData::new("nm", 1.0),
            plots:                 Vec::new(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Kind {
    Filament,
    Linker,
    Motor,
    Brancher,
}

impl Kind {
    fn from_keyword(word: &str) -> Option<Kind> {
        match word {
            "FILAMENT" => Some(Kind::Filament),
            "LINKER"   => Some(Kind::Linker),
            "MOTOR"    => Some(Kind::Motor),
            "BRANCHER" => Some(Kind::Brancher),
            _ => None,
        }
    }

    fn default_name(self, type_token: &str) -> String {
        match self {
            Kind::Filament => format!("filament{type_token}"),
            Kind::Linker   => format!("linker{type_token}"),
            Kind::Motor    => format!("motor{type_token}"),
            Kind::Brancher => format!("brancher{type_token}"),
        }
    }
}

/// Reads one MEDYAN snapshot file into a [`TrajectoryData`].
#[derive(Clone, Debug)]
pub struct MedyanConverter {
    config: MedyanConfig,
    lines:  Vec<Line>,
}

impl MedyanConverter {
    pub fn from_path(path: &Path, config: MedyanConfig) -> ConvertResult<Self> {
        debug!(path = %path.display(), "reading MEDYAN snapshot");
        Self::from_reader(File::open(path)?, config)
    }

    /// Like [`from_path`](Self::from_path) but accepts any `Read` source.
    pub fn from_reader<R: Read>(reader: R, config: MedyanConfig) -> ConvertResult<Self> {
        Ok(Self { config, lines: read_lines(reader)? })
    }

    fn display_map(&self, kind: Kind) -> Option<&DisplayMap> {
        match kind {
            Kind::Filament => Some(&self.config.filament_display_data),
            Kind::Linker   => Some(&self.config.linker_display_data),
            Kind::Motor    => Some(&self.config.motor_display_data),
            Kind::Brancher => None,
        }
    }

    fn resolve(&self, kind: Kind, type_token: &str) -> DisplayData {
        let mut data = self
            .display_map(kind)
            .and_then(|map| map.get(type_token))
            .cloned()
            .unwrap_or_default();
        if data.name.is_empty() {
            data.name = kind.default_name(type_token);
        }
        data.display_type = DisplayType::Fiber;
        data
    }
}

impl TrajectorySource for MedyanConverter {
    fn name(&self) -> &'static str {
        FORMAT
    }

    fn produce(&self) -> ConvertResult<TrajectoryData> {
        let scale = check_scale_factor(self.config.meta_data.scale_factor)?;

        let mut times = Vec::new();
        let mut frames: Vec<Vec<Agent>> = Vec::new();
        let mut display_data = DisplayMap::new();

        let mut lines = self.lines.iter();
        while let Some(line) = lines.next() {
            let Some(kind) = Kind::from_keyword(&line.fields[0]) else {
                if line.len() != 6 {
                    return Err(ConvertError::Format {
                        format: FORMAT,
                        line:   line.number,
                        reason: format!(
                            "expected a snapshot header or an object record, found {:?}",
                            line.fields[0]
                        ),
                    });
                }
                times.push(line.parse(1, FORMAT)?);
                frames.push(Vec::new());
                continue;
            };

            let coords = lines.next().ok_or_else(|| ConvertError::Format {
                format: FORMAT,
                line:   line.number,
                reason: "object record without a coordinate line".into(),
            })?;
            let Some(agents) = frames.last_mut() else {
                return Err(ConvertError::Format {
                    format: FORMAT,
                    line:   line.number,
                    reason: "object record before the first snapshot header".into(),
                });
            };
            if kind == Kind::Brancher {
                continue;
            }

            let values = coords.numbers(FORMAT)?;
            if values.len() % 3 != 0 {
                return Err(ConvertError::Format {
                    format: FORMAT,
                    line:   coords.number,
                    reason: format!("{} coordinates is not a whole number of points", values.len()),
                });
            }
            let points: Vec<_> = values
                .chunks_exact(3)
                .map(|p| vec3::scale([p[0], p[1], p[2]], scale))
                .collect();

            let type_token: &str = line.fields.get(2).ok_or_else(|| ConvertError::Format {
                format: FORMAT,
                line:   line.number,
                reason: "object record without a type".into(),
            })?;
            let display = self.resolve(kind, type_token);
            let unique_id = agents.len() as u64;
            agents.push(
                Agent::fiber(unique_id, display.name.clone(), &points)
                    .with_radius(scale * display.radius_or_default()),
            );
            if !display_data.contains(&display.name) {
                display_data.insert(display.name.clone(), display);
            }
        }

        let agent_data = AgentData::from_frames(times, &frames)?;

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
            max_agents = agent_data.max_agents(),
            agents = agent_data.total_agents(),
            "MEDYAN trajectory read"
        );
        Ok(TrajectoryData::new(meta_data, agent_data)
            .with_units(self.config.time_units.clone(), spatial_units)
            .with_display_data(display_data)
            .with_plots(self.config.plots.clone()))
    }
}
