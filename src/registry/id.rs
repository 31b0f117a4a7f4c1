//! Typed id handles.

use std::fmt;

use serde::Serialize;

/// Conversion between a typed handle and the raw integer stored in tables.
pub(crate) trait RawId: Copy {
    fn from_raw(raw: u32) -> Self;
    fn raw(self) -> u32;
}

macro_rules! typed_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Wraps a raw id, for example one read back from a lookup table.
            pub const fn from_raw(raw: u32) -> Self {
                Self(raw)
            }

            /// Returns the raw id.
            pub const fn raw(self) -> u32 {
                self.0
            }

            /// Returns the id as an index into a per-id array.
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl RawId for $name {
            fn from_raw(raw: u32) -> Self {
                Self(raw)
            }

            fn raw(self) -> u32 {
                self.0
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> u32 {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

typed_id!(
    /// Handle for a color registered in a [`ColorRegistry`](crate::ColorRegistry).
    ColorId
);

typed_id!(
    /// Handle for a scalar registered in a [`ValueRegistry`](crate::ValueRegistry).
    ValueId
);

typed_id!(
    /// Handle for a palette override registered in an
    /// [`OverrideRegistry`](crate::OverrideRegistry).
    OverrideId
);

impl OverrideId {
    /// The unnamed, global override context. Always registered as `"Global"`.
    pub const GLOBAL: OverrideId = OverrideId(0);

    /// Returns true for the global context.
    pub const fn is_global(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_index_matches_raw() {
        let id = ColorId::from_raw(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(id.index(), 7);
        assert_eq!(u32::from(id), 7);
    }

    #[test]
    fn test_global_override_id() {
        assert!(OverrideId::GLOBAL.is_global());
        assert!(!OverrideId::from_raw(1).is_global());
    }

    #[test]
    fn test_id_serializes_as_integer() {
        let json = serde_json::to_string(&ValueId::from_raw(3)).unwrap();
        assert_eq!(json, "3");
    }
}
