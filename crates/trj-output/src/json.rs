//! JSON output backend.
//!
//! Writes one compact JSON document per trajectory.  [`JsonWriter::create`]
//! names the file `<path>.simularium`; [`encode`] and [`to_json_string`]
//! build the same document without a sink.

use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use trj_agent::TrajectoryData;
use trj_core::WireVersion;

use crate::record::encode_frame;
use crate::validate::check_unique_ids_per_frame;
use crate::writer::OutputWriter;
use crate::{
    CameraBlock, FrameData, Geometry, OutputError, OutputResult, PlotData, SpatialData,
    TrajectoryBuffer, TrajectoryInfo, TypeEntry, UnitBlock,
};

/// Extension appended to every file written by [`JsonWriter::create`].
pub const FILE_EXTENSION: &str = "simularium";

/// Serializes trajectories into any `Write` sink.
///
/// The sink holds a single JSON document, so each writer accepts one
/// trajectory.
pub struct JsonWriter<W: Write> {
    out:      W,
    written:  bool,
    finished: bool,
}

impl JsonWriter<BufWriter<File>> {
    /// Create `<path>.simularium`, truncating any existing file.
    ///
    /// A path that already ends in `.simularium` is used as is.
    pub fn create(path: &Path) -> OutputResult<Self> {
        let path = output_path(path);
        debug!(path = %path.display(), "creating trajectory file");
        Ok(Self::from_writer(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> JsonWriter<W> {
    pub fn from_writer(out: W) -> Self {
        Self { out, written: false, finished: false }
    }

    /// Give back the underlying sink.  Call [`finish`](OutputWriter::finish)
    /// first if it buffers.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_trajectory(&mut self, data: &TrajectoryData) -> OutputResult<()> {
        if self.written {
            return Err(OutputError::AlreadyWritten);
        }
        let buffer = encode(data)?;
        self.written = true;
        serde_json::to_writer(&mut self.out, &buffer)?;
        info!(
            frames = buffer.spatial_data.bundle_size,
            agents = data.agent_data.total_agents(),
            types = buffer.trajectory_info.type_mapping.len(),
            "trajectory written"
        );
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}

/// Build the output bundle for `data`.
///
/// Checks the agent table's shape but not per-frame unique ids; see
/// [`encode`].
pub fn format_trajectory_data(data: &TrajectoryData) -> OutputResult<TrajectoryBuffer> {
    let agents = &data.agent_data;
    agents.validate()?;
    let mapping = data.type_mapping()?;

    let type_mapping = mapping
        .iter()
        .map(|(index, name)| {
            let entry = TypeEntry {
                name:     name.to_owned(),
                geometry: data.display_data.get(name).map(Geometry::from),
            };
            (index.0, entry)
        })
        .collect();

    let mut bundle_data = Vec::with_capacity(agents.total_steps());
    for (frame, &time) in agents.times.iter().enumerate() {
        let mut flat = Vec::new();
        encode_frame(agents, &mapping, frame, &mut flat)?;
        bundle_data.push(FrameData { frame_number: frame, time, data: flat });
    }

    if agents.is_empty() {
        warn!("encoding a trajectory with no frames");
    }

    Ok(TrajectoryBuffer {
        trajectory_info: TrajectoryInfo {
            version:          WireVersion::TRAJECTORY_INFO,
            time_units:       UnitBlock::from(&data.time_units),
            time_step_size:   data.time_step_size(),
            total_steps:      agents.total_steps(),
            spatial_units:    UnitBlock::from(&data.spatial_units),
            size:             data.meta_data.box_size.into(),
            camera_default:   CameraBlock::from(&data.meta_data.camera_defaults),
            type_mapping,
            trajectory_title: data.meta_data.trajectory_title.clone(),
        },
        spatial_data: SpatialData {
            version:      WireVersion::SPATIAL_DATA,
            msg_type:     1,
            bundle_start: 0,
            bundle_size:  agents.total_steps(),
            bundle_data,
        },
        plot_data: PlotData {
            version: WireVersion::PLOT_DATA,
            data:    data.plots.clone(),
        },
    })
}

/// [`format_trajectory_data`] followed by the per-frame unique-id check.
pub fn encode(data: &TrajectoryData) -> OutputResult<TrajectoryBuffer> {
    let buffer = format_trajectory_data(data)?;
    check_unique_ids_per_frame(&buffer)?;
    Ok(buffer)
}

/// Encode `data` to an in-memory JSON string.
pub fn to_json_string(data: &TrajectoryData) -> OutputResult<String> {
    Ok(serde_json::to_string(&encode(data)?)?)
}

fn output_path(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == FILE_EXTENSION) {
        return path.to_path_buf();
    }
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(FILE_EXTENSION);
    PathBuf::from(name)
}
