//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.
//!
//! Numbering differs per kind:
//!
//! | ID            | Base | Why                                              |
//! |---------------|------|--------------------------------------------------|
//! | `AmbulanceId` | 0    | Direct index into the fleet arena                |
//! | `StationId`   | 1    | Policies are written in 1-based station numbers  |
//! | `HospitalId`  | 0    | Direct index into the hospital table             |

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
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
    /// Index of an ambulance in the fleet arena.
    pub struct AmbulanceId(u32);
}

typed_id! {
    /// 1-based station number, as written in a repositioning policy.
    pub struct StationId(u32);
}

typed_id! {
    /// Index of a receiving hospital.
    pub struct HospitalId(u32);
}

impl AmbulanceId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl HospitalId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl StationId {
    /// Slot in a 0-based station table, or `None` for station number 0.
    #[inline]
    pub fn slot(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }

    /// `true` if this number names one of `station_count` stations.
    #[inline]
    pub fn is_within(self, station_count: usize) -> bool {
        self.0 >= 1 && (self.0 as usize) <= station_count
    }
}
