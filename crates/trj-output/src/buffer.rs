//! Serde mirror of the output bundle.
//!
//! Field names are the wire names (`camelCase`); everything else about the
//! layout is decided in [`format_trajectory_data`].
//!
//! [`format_trajectory_data`]: crate::format_trajectory_data

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use trj_core::{CameraData, DisplayData, DisplayType, UnitData, Vec3};

/// The whole file: `trajectoryInfo`, `spatialData`, `plotData`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrajectoryBuffer {
    pub trajectory_info: TrajectoryInfo,
    pub spatial_data:    SpatialData,
    pub plot_data:       PlotData,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrajectoryInfo {
    pub version:        u32,
    pub time_units:     UnitBlock,
    pub time_step_size: f64,
    pub total_steps:    usize,
    pub spatial_units:  UnitBlock,
    pub size:           Xyz,
    pub camera_default: CameraBlock,
    /// Keyed by type index; serialized as `"0"`, `"1"`, … in ascending order.
    pub type_mapping:   BTreeMap<u32, TypeEntry>,
    /// Free-form title, omitted when empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub trajectory_title: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitBlock {
    pub magnitude: f64,
    pub name:      String,
}

impl From<&UnitData> for UnitBlock {
    fn from(unit: &UnitData) -> Self {
        Self { magnitude: unit.magnitude, name: unit.name.clone() }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<Vec3> for Xyz {
    fn from([x, y, z]: Vec3) -> Self {
        Self { x, y, z }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraBlock {
    pub position:         Xyz,
    pub look_at_position: Xyz,
    pub up_vector:        Xyz,
    pub fov_degrees:      f64,
}

impl From<&CameraData> for CameraBlock {
    fn from(camera: &CameraData) -> Self {
        Self {
            position:         camera.position.into(),
            look_at_position: camera.look_at_position.into(),
            up_vector:        camera.up_vector.into(),
            fov_degrees:      camera.fov_degrees,
        }
    }
}

/// One `typeMapping` value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeEntry {
    pub name:     String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    pub display_type: DisplayType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color:        Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url:          Option<String>,
}

impl From<&DisplayData> for Geometry {
    fn from(data: &DisplayData) -> Self {
        Self {
            display_type: data.display_type,
            color:        data.color.clone(),
            url:          data.url.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpatialData {
    pub version:     u32,
    /// Always `1` (a spatial-data bundle).
    pub msg_type:    u32,
    pub bundle_start: usize,
    pub bundle_size: usize,
    pub bundle_data: Vec<FrameData>,
}

/// One frame: the concatenated agent records of its live slots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameData {
    pub frame_number: usize,
    pub time:         f64,
    pub data:         Vec<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotData {
    pub version: u32,
    pub data:    Vec<serde_json::Value>,
}
