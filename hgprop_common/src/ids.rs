use serde::{Deserialize, Serialize};

#[doc(hidden)]
pub use contracts::ensures as __ensures;

/// Declare a dense `u32` index newtype.
///
/// The type gets `new`, `as_usize`, a `Display` of `{prefix}{index}` and
/// conversions to and from `usize` and `u32`. Derives are supplied by the
/// caller through the leading attributes.
///
/// ```
/// hgprop_common::dense_id! {
///     /// Slot in some table.
///     #[derive(Clone, Copy, Debug, PartialEq, Eq)]
///     pub struct Slot, "s"
/// }
///
/// assert_eq!(Slot::new(3).to_string(), "s3");
/// assert_eq!(usize::from(Slot::from(7usize)), 7);
/// ```
#[macro_export]
macro_rules! dense_id {
    ($(#[$meta:meta])* $vis:vis struct $name:ident, $prefix:literal) => {
        $(#[$meta])*
        $vis struct $name {
            /// The underlying raw integer index.
            inner: u32,
        }

        impl $name {
            /// Creates an index from a raw integer.
            #[$crate::__ensures(ret.inner == id)]
            pub const fn new(id: u32) -> Self {
                Self { inner: id }
            }

            /// Returns the index as a usize for array access.
            #[$crate::__ensures(ret == self.inner as usize)]
            pub const fn as_usize(self) -> usize {
                self.inner as usize
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}{}", $prefix, self.inner)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(id: usize) -> Self {
                debug_assert!(u32::try_from(id).is_ok(), "index {id} does not fit in u32");
                Self { inner: id as u32 }
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(id: $name) -> Self {
                id.inner as Self
            }
        }

        impl From<$name> for u32 {
            #[inline]
            fn from(id: $name) -> Self {
                id.inner
            }
        }
    };
}

dense_id! {
    /// Position of a vertex inside one hypergraph's vertex set.
    ///
    /// Ids are dense and follow insertion order. They are only meaningful for
    /// the hypergraph that issued them.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    pub struct VertexId, "v"
}

dense_id! {
    /// Position of a hyperedge inside one hypergraph's edge list.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    pub struct EdgeId, "e"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_with_their_prefix() {
        assert_eq!(VertexId::new(4).to_string(), "v4");
        assert_eq!(EdgeId::from(2usize).to_string(), "e2");
        assert_eq!(VertexId::new(9).as_usize(), 9);
        assert_eq!(u32::from(EdgeId::new(5)), 5);
    }

    #[test]
    fn ids_serialize_as_their_index() {
        let json = serde_json::to_string(&VertexId::new(3)).unwrap();
        assert_eq!(json, r#"{"inner":3}"#);
        let back: VertexId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, VertexId::new(3));
    }
}
