//! Index types for the vertex table.
//!
//! Vertex indices are generic over the underlying integer type so callers can
//! emit `u16` buffers for small meshes, `u32` for typical ones and `u64` when
//! the vertex table is enormous.

use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// Trait for integer types that can back a vertex index buffer.
///
/// Implemented for `u16`, `u32`, and `u64`.
pub trait MeshIndex: Copy + Eq + Ord + Hash + Debug + Display + Send + Sync + 'static {
    /// Short type name used in diagnostics, e.g. `"u16"`.
    const NAME: &'static str;

    /// Number of distinct vertices this type can address.
    const CAPACITY: usize;

    /// Convert from usize, returning `None` if the value does not fit.
    fn try_from_usize(v: usize) -> Option<Self>;

    /// Convert to usize.
    fn to_usize(self) -> usize;
}

macro_rules! impl_mesh_index {
    ($ty:ty, $name:literal) => {
        impl MeshIndex for $ty {
            const NAME: &'static str = $name;
            const CAPACITY: usize = match (<$ty>::MAX as usize).checked_add(1) {
                Some(n) => n,
                None => usize::MAX,
            };

            #[inline]
            fn try_from_usize(v: usize) -> Option<Self> {
                <$ty>::try_from(v).ok()
            }

            #[inline]
            fn to_usize(self) -> usize {
                self as usize
            }
        }
    };
}

impl_mesh_index!(u16, "u16");
impl_mesh_index!(u32, "u32");
impl_mesh_index!(u64, "u64");

/// A type-safe index into the vertex table.
///
/// Indices are assigned in order of first appearance and never reused.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct VertexId<I: MeshIndex = u32>(I);

impl<I: MeshIndex> VertexId<I> {
    /// Create an index from a raw table position.
    ///
    /// Returns `None` if `index` is not representable by `I`.
    #[inline]
    pub fn try_new(index: usize) -> Option<Self> {
        I::try_from_usize(index).map(Self)
    }

    /// Wrap a raw value of the underlying type.
    #[inline]
    pub fn from_raw(raw: I) -> Self {
        Self(raw)
    }

    /// Get the index as a table position.
    #[inline]
    pub fn index(self) -> usize {
        self.0.to_usize()
    }

    /// Get the raw value of the underlying type.
    #[inline]
    pub fn raw(self) -> I {
        self.0
    }
}

impl<I: MeshIndex> Debug for VertexId<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V({})", self.0)
    }
}

impl<I: MeshIndex> Display for VertexId<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
