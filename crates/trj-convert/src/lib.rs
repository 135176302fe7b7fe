//! `trj-convert` — simulator outputs in, encoded trajectories out.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`source`]    | `TrajectorySource` (anything that can produce a trajectory) |
//! | [`custom`]    | `CustomSource` (ragged in-memory lists)                     |
//! | [`smoldyn`]   | `SmoldynConverter`, `SmoldynConfig` (`listmols` text)        |
//! | [`medyan`]    | `MedyanConverter`, `MedyanConfig` (snapshot text)            |
//! | [`converter`] | `TrajectoryConverter` (filter pipeline + output)             |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                      |
//! |------------|-------------------------------------------------------------|
//! | `serde`    | `Deserialize` on every config type and on `CustomSource`.   |
//! | `parallel` | [`convert_many`] runs its jobs on the rayon pool.           |
//!
//! # Pipeline
//!
//! ```rust,ignore
//! let source = SmoldynConverter::from_path(Path::new("run.txt"), SmoldynConfig::default())?;
//! let converter = TrajectoryConverter::from_source(&source)?;
//! let shifted = converter.filter_data(&[&TranslateFilter::all([10.0, 0.0, 0.0])])?;
//! TrajectoryConverter::new(shifted)?.save(Path::new("run"))?;
//! ```

pub mod converter;
pub mod custom;
pub mod error;
pub mod medyan;
pub mod smoldyn;
pub mod source;

mod text;


pub use converter::{TrajectoryConverter, convert_many};
pub use custom::CustomSource;
pub use error::{ConvertError, ConvertResult};
pub use medyan::{MedyanConfig, MedyanConverter};
pub use smoldyn::{SmoldynConfig, SmoldynConverter};
pub use source::TrajectorySource;
