//! Per-type display configuration.
//!
//! Converters receive a [`DisplayMap`] keyed by the raw type token found in
//! the simulator output (a Smoldyn species name, a MEDYAN filament type, …).
//! Resolving a token yields the output type name plus the geometry the
//! viewer should use for it.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::TrjError;

/// Radius used for any agent whose type has no explicit radius.
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Geometry the viewer draws for an agent type.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum DisplayType {
    Point,
    #[default]
    Sphere,
    Fiber,
    Obj,
    Pdb,
}

impl DisplayType {
    /// Wire label, as written into `typeMapping[..].geometry.displayType`.
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayType::Point  => "POINT",
            DisplayType::Sphere => "SPHERE",
            DisplayType::Fiber  => "FIBER",
            DisplayType::Obj    => "OBJ",
            DisplayType::Pdb    => "PDB",
        }
    }
}

impl FromStr for DisplayType {
    type Err = TrjError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "POINT"  => Ok(DisplayType::Point),
            "SPHERE" => Ok(DisplayType::Sphere),
            "FIBER"  => Ok(DisplayType::Fiber),
            "OBJ"    => Ok(DisplayType::Obj),
            "PDB"    => Ok(DisplayType::Pdb),
            _ => Err(TrjError::UnknownDisplayType(s.to_owned())),
        }
    }
}

impl std::fmt::Display for DisplayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How to display one agent type.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayData {
    /// Output type name.  Several raw tokens may share one name; they then
    /// share one type index in the output.
    pub name:         String,
    pub display_type: DisplayType,
    /// Radius override in the simulator's native units (scaled on use).
    pub radius:       Option<f64>,
    /// Geometry file for `OBJ` / `PDB` types.
    pub url:          Option<String>,
    /// Hex colour, e.g. `"#0080ff"`.
    pub color:        Option<String>,
}

impl DisplayData {
    pub fn new(name: impl Into<String>, display_type: DisplayType) -> Self {
        Self {
            name: name.into(),
            display_type,
            ..Self::default()
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Radius to store for agents of this type, before scaling.
    #[inline]
    pub fn radius_or_default(&self) -> f64 {
        self.radius.unwrap_or(DEFAULT_RADIUS)
    }
}

/// Display configuration keyed by token.
///
/// Ordered so iteration (and therefore any output derived from it) is
/// deterministic.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DisplayMap {
    entries: BTreeMap<String, DisplayData>,
}

impl DisplayMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `data` for `token`, replacing any previous entry.
    pub fn insert(&mut self, token: impl Into<String>, data: DisplayData) {
        self.entries.insert(token.into(), data);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, token: impl Into<String>, data: DisplayData) -> Self {
        self.insert(token, data);
        self
    }

    pub fn get(&self, token: &str) -> Option<&DisplayData> {
        self.entries.get(token)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DisplayData)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Resolve `token`, falling back to the identity name with `SPHERE`
    /// geometry and [`DEFAULT_RADIUS`] when the token is unregistered.
    pub fn resolve(&self, token: &str) -> DisplayData {
        match self.entries.get(token) {
            Some(data) => {
                let mut data = data.clone();
                if data.name.is_empty() {
                    data.name = token.to_owned();
                }
                data
            }
            None => DisplayData::new(token, DisplayType::Sphere).with_radius(DEFAULT_RADIUS),
        }
    }

    /// Re-key the registered entries by their resolved output name.
    ///
    /// Converters hand this to `TrajectoryData` so the encoder can look up
    /// geometry by the names actually stored in `AgentData::types`.  When
    /// several tokens share a name, the first in token order wins.
    pub fn by_output_name(&self) -> DisplayMap {
        let mut out = DisplayMap::new();
        for (token, _) in self.iter() {
            let data = self.resolve(token);
            if !out.contains(&data.name) {
                out.insert(data.name.clone(), data);
            }
        }
        out
    }

    /// Merge `other` into `self`; entries already present in `self` win.
    pub fn merge(&mut self, other: &DisplayMap) {
        for (key, data) in other.iter() {
            if !self.contains(key) {
                self.insert(key, data.clone());
            }
        }
    }
}

impl FromIterator<(String, DisplayData)> for DisplayMap {
    fn from_iter<I: IntoIterator<Item = (String, DisplayData)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}
