//! Three-component vectors.
//!
//! Positions, rotations, box sizes, and camera vectors are all plain
//! `[f64; 3]` so they copy cheaply and compare exactly.

/// A 3D vector `[x, y, z]`.
pub type Vec3 = [f64; 3];

/// The zero vector.
pub const ZERO: Vec3 = [0.0; 3];

/// Component-wise `a + b`.
#[inline]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

/// `v * k` for a scalar `k`.
#[inline]
pub fn scale(v: Vec3, k: f64) -> Vec3 {
    [v[0] * k, v[1] * k, v[2] * k]
}
