//! Strong, zero-cost handles for mesh entities.
//!
//! Vertices, faces and (in the edge-adjacency encoding) edges are referred to
//! by opaque identifiers. Each handle wraps a `NonZeroU64` so that 0 stays
//! reserved as an invalid/sentinel value and `Option<Handle>` costs nothing
//! extra. Handles display with a short prefix (`v7`, `f3`, `e12`) which keeps
//! error messages and test output easy to cross-check by hand.
//!
//! Handles are allocated by [`HandleRegistry`](super::registry::HandleRegistry)
//! and are never reused while the owning mesh is alive.

use std::fmt;
use std::num::NonZeroU64;

/// Common behaviour of the identifier newtypes, used by the registry.
pub trait Handle: Copy + Eq + std::hash::Hash + Ord + fmt::Display + fmt::Debug {
    /// Wraps a raw non-zero value.
    fn from_raw(raw: NonZeroU64) -> Self;
    /// Returns the raw non-zero value.
    fn raw(self) -> NonZeroU64;
}

macro_rules! handle_type {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[repr(transparent)]
        pub struct $name(NonZeroU64);

        impl $name {
            /// Creates a handle from a raw `u64`.
            ///
            /// # Panics
            /// Panics if `raw == 0`; zero is reserved as the invalid value.
            #[inline]
            pub fn new(raw: u64) -> Self {
                Self(NonZeroU64::new(raw).expect(concat!(
                    stringify!($name),
                    " must be non-zero"
                )))
            }

            /// Returns the inner `u64`.
            #[inline]
            pub const fn get(self) -> u64 {
                self.0.get()
            }
        }

        impl Handle for $name {
            #[inline]
            fn from_raw(raw: NonZeroU64) -> Self {
                Self(raw)
            }
            #[inline]
            fn raw(self) -> NonZeroU64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.get()).finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.get())
            }
        }
    };
}

handle_type!(
    /// Identifier of a vertex.
    VertexId,
    "v"
);
handle_type!(
    /// Identifier of a face.
    FaceId,
    "f"
);
handle_type!(
    /// Identifier of a first-class edge (edge-adjacency encoding only).
    EdgeId,
    "e"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_prefix() {
        assert_eq!(VertexId::new(7).to_string(), "v7");
        assert_eq!(FaceId::new(3).to_string(), "f3");
        assert_eq!(EdgeId::new(12).to_string(), "e12");
    }

    #[test]
    #[should_panic]
    fn zero_is_rejected() {
        let _ = VertexId::new(0);
    }
}
