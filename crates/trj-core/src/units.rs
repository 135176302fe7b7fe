//! Physical unit descriptors.

/// A unit with a magnitude, e.g. `10 nm` is `UnitData { name: "nm",
/// magnitude: 10.0 }`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitData {
    pub name:      String,
    #[cfg_attr(feature = "serde", serde(default = "one"))]
    pub magnitude: f64,
}

#[cfg(feature = "serde")]
fn one() -> f64 {
    1.0
}

impl UnitData {
    pub fn new(name: impl Into<String>, magnitude: f64) -> Self {
        Self { name: name.into(), magnitude }
    }

    /// Default time unit: one second.
    pub fn seconds() -> Self {
        Self::new("s", 1.0)
    }

    /// Default spatial unit: one micrometre.
    pub fn micrometers() -> Self {
        Self::new("µm", 1.0)
    }

    /// Scale the magnitude in place.
    ///
    /// Converters call `spatial_units.multiply(1.0 / scale_factor)` after
    /// scaling every coordinate so the output still denotes the same
    /// physical length.
    pub fn multiply(&mut self, factor: f64) {
        self.magnitude *= factor;
    }
}

impl std::fmt::Display for UnitData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.magnitude, self.name)
    }
}

/// Reject scale factors that would collapse or blow up every coordinate.
pub fn check_scale_factor(scale_factor: f64) -> crate::TrjResult<f64> {
    if scale_factor.is_finite() && scale_factor != 0.0 {
        Ok(scale_factor)
    } else {
        Err(crate::TrjError::InvalidScaleFactor(scale_factor))
    }
}
