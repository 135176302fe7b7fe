//! `trj-output` — the wire-format layer.
//!
//! Turns a [`TrajectoryData`](trj_agent::TrajectoryData) into the versioned
//! JSON bundle the viewer loads:
//!
//! ```text
//! { "trajectoryInfo": { version, units, size, cameraDefault, typeMapping, … },
//!   "spatialData":    { version, msgType: 1, bundleStart, bundleSize,
//!                       bundleData: [{ frameNumber, time, data: [f64…] }] },
//!   "plotData":       { version, data: […] } }
//! ```
//!
//! Each frame's `data` is the concatenation of one flattened record per live
//! agent (see [`record`]).
//!
//! # Usage
//!
//! ```rust,ignore
//! use trj_output::{JsonWriter, OutputWriter};
//!
//! let mut writer = JsonWriter::create(Path::new("./out/trajectory"))?;
//! writer.write_trajectory(&trajectory)?;
//! writer.finish()?;
//! ```

pub mod buffer;
pub mod error;
pub mod json;
pub mod record;
pub mod validate;
pub mod writer;


pub use buffer::{
    CameraBlock, FrameData, Geometry, PlotData, SpatialData, TrajectoryBuffer, TrajectoryInfo,
    TypeEntry, UnitBlock, Xyz,
};
pub use error::{OutputError, OutputResult};
pub use json::{FILE_EXTENSION, JsonWriter, encode, format_trajectory_data, to_json_string};
pub use record::{HEADER_LEN, UnpackedAgent, encode_frame, unpack_frame};
pub use validate::check_unique_ids_per_frame;
pub use writer::OutputWriter;
