//! Strongly typed identifier wrappers.
//!
//! Both IDs are `Copy + Ord + Hash` and 1-based: car identities come from a
//! monotonically increasing counter, pump identities are assigned once when
//! the station is built.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The identity immediately after `self`.
            #[inline(always)]
            pub fn next(self) -> Self {
                $name(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for u64 {
            #[inline(always)]
            fn from(id: $name) -> u64 {
                id.0 as u64
            }
        }
    };
}

typed_id! {
    /// Identity of a car, assigned in arrival order starting at 1.
    pub struct CarId(u32);
}

typed_id! {
    /// Identity of a pump, unique within the station.
    pub struct PumpId(u32);
}
