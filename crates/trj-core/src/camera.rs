//! Camera defaults shipped with every trajectory.

use crate::Vec3;

/// A camera view of the 3D scene.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CameraData {
    /// Position of the camera itself.
    pub position:         Vec3,
    /// Point the camera looks at.
    pub look_at_position: Vec3,
    /// Which direction is "up" in the camera's view.
    pub up_vector:        Vec3,
    /// Vertical field of view.
    pub fov_degrees:      f64,
}

impl CameraData {
    /// Process-wide constant used whenever a trajectory does not supply its
    /// own camera.
    pub const DEFAULT: CameraData = CameraData {
        position:         [0.0, 0.0, 120.0],
        look_at_position: [0.0, 0.0, 0.0],
        up_vector:        [0.0, 1.0, 0.0],
        fov_degrees:      75.0,
    };
}

impl Default for CameraData {
    fn default() -> Self {
        Self::DEFAULT
    }
}
