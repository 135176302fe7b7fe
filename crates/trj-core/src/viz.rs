//! Visualization type codes and wire-format versions.

/// Numeric tag choosing how an agent's subpoints are interpreted.
///
/// Stored as the raw wire code so padding slots can hold `VizType(0)`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VizType(pub u16);

impl VizType {
    /// Point-like agent: position + radius, no subpoints.
    pub const DEFAULT: VizType = VizType(1000);
    /// Fiber agent: polyline of subpoints, flattened `x, y, z` triplets.
    pub const FIBER: VizType = VizType(1001);

    #[inline]
    pub fn is_fiber(self) -> bool {
        self == Self::FIBER
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

/// Versions written into each block of the output bundle.
pub struct WireVersion;

impl WireVersion {
    pub const TRAJECTORY_INFO: u32 = 3;
    pub const SPATIAL_DATA: u32 = 1;
    pub const PLOT_DATA: u32 = 1;
}
