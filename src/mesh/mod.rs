//! Mesh data types.
//!
//! The pipeline reads a [`TriangleSoup`] and produces an [`IndexedMesh`]:
//!
//! - [`SoupVertex`] - one triangle corner, as read from the source
//! - [`VertexId`] - a type-safe index into the deduplicated vertex table
//! - [`IndexedMesh`] - the vertex table plus its index buffer
//!
//! Indices are generic over the underlying integer type ([`MeshIndex`] trait),
//! so the index buffer can be `u16`, `u32`, or `u64`.

mod index;
mod indexed;
mod soup;

pub use index::{MeshIndex, VertexId};
pub use indexed::IndexedMesh;
pub use soup::{SoupVertex, TriangleSoup};
