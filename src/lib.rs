//! # meshidx
//!
//! Turn a triangle soup into an indexed mesh.
//!
//! A triangle soup lists every triangle's corners in full, so corners shared
//! by neighbouring faces are repeated. meshidx collapses exact duplicates into
//! a vertex table, emits an index buffer with three indices per triangle and
//! normalizes each triangle's winding on the way.
//!
//! ## Features
//!
//! - **Exact deduplication**: vertices merge on identical bits or identical text, no epsilon
//! - **Winding normalization**: one-shot correction based on the sign of `A · (AB × AC)`
//! - **Flexible indexing**: `u16`, `u32`, or `u64` index buffers
//! - **STL input**: binary and ASCII
//!
//! ## Quick Start
//!
//! ```no_run
//! use meshidx::prelude::*;
//!
//! let soup = meshidx::io::load("model.stl").unwrap();
//! let (mesh, stats) = index_soup::<u32>(&soup, &IndexOptions::default()).unwrap();
//!
//! println!("Vertices: {}", mesh.num_vertices());
//! println!("Triangles: {}", mesh.num_triangles());
//! println!("Re-oriented: {}", stats.reoriented);
//!
//! meshidx::io::save(&mesh, "model.idx").unwrap();
//! ```
//!
//! ## Feeding Corners Incrementally
//!
//! ```
//! use meshidx::prelude::*;
//! use nalgebra::Point3;
//!
//! let mut indexer: MeshIndexer = MeshIndexer::new(IndexOptions::default());
//! for p in [
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//! ] {
//!     indexer.push_vertex(&SoupVertex::from_position(p)).unwrap();
//! }
//!
//! let (mesh, stats) = indexer.finish();
//! assert_eq!(mesh.num_triangles(), 1);
//! assert_eq!(stats.reoriented, 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod format;
pub mod index;
pub mod io;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// ```
/// use meshidx::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MeshError, Result};
    pub use crate::format::{short, Compact};
    pub use crate::index::{
        index_soup, normalize, IndexOptions, IndexStats, KeyMode, MeshIndexer, Orientation,
        VertexDeduplicator,
    };
    pub use crate::mesh::{IndexedMesh, MeshIndex, SoupVertex, TriangleSoup, VertexId};
}

// Re-export nalgebra types for convenience
pub use nalgebra;
