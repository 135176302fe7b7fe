//! Strongly typed identifier wrappers.
//!
//! Unlike index handles in a fixed store, both IDs here are written straight
//! into padded arrays, so `Default` is the zero value: padding slots hold
//! `UniqueId(0)` / `TypeIndex(0)` and are never read past `n_agents`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Wire representation.  Every field of a flattened agent record
            /// is an `f64`.
            #[inline(always)]
            pub fn as_f64(self) -> f64 {
                self.0 as f64
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Per-frame agent identifier.  Unique within one frame; the same value
    /// in two frames does not imply the same agent.
    pub struct UniqueId(u64);
}

typed_id! {
    /// Dense index assigned to each distinct agent type name.
    pub struct TypeIndex(u32);
}
