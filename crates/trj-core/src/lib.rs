//! `trj-core` — foundational types for the trajectory conversion workspace.
//!
//! This crate is a dependency of every other `trj-*` crate.  It has no
//! `trj-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `UniqueId`, `TypeIndex`                               |
//! | [`vec3`]        | `Vec3` alias and small vector helpers                 |
//! | [`units`]       | `UnitData` (name + magnitude)                         |
//! | [`camera`]      | `CameraData`, `CameraData::DEFAULT`                   |
//! | [`display`]     | `DisplayType`, `DisplayData`, `DisplayMap`            |
//! | [`viz`]         | `VizType` codes and wire-format versions              |
//! | [`error`]       | `TrjError`, `TrjResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod camera;
pub mod display;
pub mod error;
pub mod ids;
pub mod units;
pub mod vec3;
pub mod viz;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use camera::CameraData;
pub use display::{DEFAULT_RADIUS, DisplayData, DisplayMap, DisplayType};
pub use error::{TrjError, TrjResult};
pub use ids::{TypeIndex, UniqueId};
pub use units::UnitData;
pub use vec3::Vec3;
pub use viz::{VizType, WireVersion};
