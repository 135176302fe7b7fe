//! Workspace error type.
//!
//! Sub-crates define their own error enums and wrap `TrjError` as one
//! variant where they need it.

use thiserror::Error;

/// The base error type for `trj-core` and a common variant for sub-crates.
#[derive(Debug, Error)]
pub enum TrjError {
    #[error("unknown display type {0:?}: expected POINT, SPHERE, FIBER, OBJ, or PDB")]
    UnknownDisplayType(String),

    #[error("scale factor must be finite and non-zero, got {0}")]
    InvalidScaleFactor(f64),
}

/// Shorthand result type for `trj-core`.
pub type TrjResult<T> = Result<T, TrjError>;
