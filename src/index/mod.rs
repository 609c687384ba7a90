//! Triangle soup indexing.
//!
//! This module turns a [`TriangleSoup`] into an [`IndexedMesh`]. Each corner
//! is passed through a [`VertexDeduplicator`]; every three resolved indices
//! form a triangle whose winding is normalized with [`normalize`] before it is
//! appended to the index buffer.
//!
//! # Example
//!
//! ```
//! use meshidx::index::{index_soup, IndexOptions};
//! use meshidx::mesh::TriangleSoup;
//! use nalgebra::Point3;
//!
//! let tri = [
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let soup = TriangleSoup::from_triangles(&[tri, tri]);
//!
//! let (mesh, stats) = index_soup::<u32>(&soup, &IndexOptions::default()).unwrap();
//! assert_eq!(mesh.num_vertices(), 3);
//! assert_eq!(mesh.indices.len(), 6);
//! assert_eq!(stats.reoriented, 2);
//! ```

mod dedup;
mod orient;

pub use dedup::VertexDeduplicator;
pub use orient::{is_aligned, normalize, signed_volume, Orientation};

use std::fmt;

use crate::error::Result;
use crate::mesh::{IndexedMesh, MeshIndex, SoupVertex, TriangleSoup, VertexId};

/// How two corners are judged to be the same vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyMode {
    /// Exact bit patterns of the parsed coordinates.
    ///
    /// `1.0` and `1.000` merge; `0.0` and `-0.0` do not.
    #[default]
    Bits,
    /// Exact normalized coordinate text.
    ///
    /// `1.0` and `1.000` stay separate vertices.
    Text,
}

/// Options for indexing a triangle soup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOptions {
    /// How corners are compared for deduplication.
    pub key: KeyMode,

    /// Whether to normalize triangle winding (default: true).
    pub orient: bool,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            key: KeyMode::Bits,
            orient: true,
        }
    }
}

impl IndexOptions {
    /// Set the deduplication key mode.
    pub fn with_key_mode(mut self, key: KeyMode) -> Self {
        self.key = key;
        self
    }

    /// Set whether triangle winding is normalized.
    pub fn with_orientation(mut self, orient: bool) -> Self {
        self.orient = orient;
        self
    }
}

/// Counters collected while indexing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Corners read from the soup, including repeats.
    pub input_vertices: usize,
    /// Entries in the vertex table.
    pub unique_vertices: usize,
    /// Triangles appended to the index buffer.
    pub triangles: usize,
    /// Triangles whose first two corners were swapped.
    pub reoriented: usize,
    /// Trailing corners that never completed a triangle.
    pub dropped_vertices: usize,
}

impl IndexStats {
    /// Fraction of input corners that were duplicates, in `[0, 1)`.
    pub fn dedup_ratio(&self) -> f64 {
        if self.input_vertices == 0 {
            return 0.0;
        }
        1.0 - self.unique_vertices as f64 / self.input_vertices as f64
    }
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} corners -> {} vertices, {} triangles ({} re-oriented)",
            self.input_vertices, self.unique_vertices, self.triangles, self.reoriented
        )
    }
}

/// Pipeline driver that owns the vertex table and the index buffer.
///
/// Corners are fed one at a time with [`push_vertex`](Self::push_vertex);
/// once three have accumulated they are emitted as a triangle. Each indexer
/// starts from empty state.
#[derive(Debug, Clone)]
pub struct MeshIndexer<I: MeshIndex = u32> {
    options: IndexOptions,
    table: VertexDeduplicator<I>,
    indices: Vec<VertexId<I>>,
    pending: Vec<VertexId<I>>,
    stats: IndexStats,
}

impl<I: MeshIndex> Default for MeshIndexer<I> {
    fn default() -> Self {
        Self::new(IndexOptions::default())
    }
}

impl<I: MeshIndex> MeshIndexer<I> {
    /// Create an indexer with empty state.
    pub fn new(options: IndexOptions) -> Self {
        Self {
            table: VertexDeduplicator::new(options.key),
            options,
            indices: Vec::new(),
            pending: Vec::with_capacity(3),
            stats: IndexStats::default(),
        }
    }

    /// Feed one corner.
    ///
    /// Returns the finished triangle when this corner completes one.
    ///
    /// # Errors
    /// Fails only if the vertex table outgrows the index type `I`.
    pub fn push_vertex(&mut self, vertex: &SoupVertex) -> Result<Option<[VertexId<I>; 3]>> {
        let id = self.table.intern(vertex)?;
        self.stats.input_vertices += 1;
        self.pending.push(id);

        if self.pending.len() < 3 {
            return Ok(None);
        }

        let tri = [self.pending[0], self.pending[1], self.pending[2]];
        self.pending.clear();
        Ok(Some(self.emit(tri)))
    }

    fn emit(&mut self, tri: [VertexId<I>; 3]) -> [VertexId<I>; 3] {
        let number = self.stats.triangles;
        let tri = if self.options.orient {
            let (out, orientation) = normalize(tri, self.table.positions());
            if orientation.is_reoriented() {
                log::warn!(
                    "triangle {} required re-orientation: {:?} -> {:?}",
                    number,
                    tri,
                    out
                );
                self.stats.reoriented += 1;
            }
            out
        } else {
            tri
        };

        self.indices.extend_from_slice(&tri);
        self.stats.triangles += 1;
        tri
    }

    /// Feed every corner of a soup.
    pub fn extend_from_soup(&mut self, soup: &TriangleSoup) -> Result<()> {
        for vertex in soup {
            self.push_vertex(vertex)?;
        }
        Ok(())
    }

    /// Counters so far.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            unique_vertices: self.table.len(),
            ..self.stats
        }
    }

    /// Finish indexing and return the mesh.
    ///
    /// Corners of an incomplete trailing triangle are discarded.
    pub fn finish(self) -> (IndexedMesh<I>, IndexStats) {
        let mut stats = self.stats();
        if !self.pending.is_empty() {
            log::warn!(
                "discarding {} trailing vertices that do not form a triangle",
                self.pending.len()
            );
            stats.dropped_vertices = self.pending.len();
        }

        log::info!("indexed {}", stats);
        let mesh = IndexedMesh {
            positions: self.table.into_positions(),
            indices: self.indices,
        };
        (mesh, stats)
    }
}

/// Index a whole soup in one call.
///
/// # Errors
/// Fails only if the vertex table outgrows the index type `I`.
pub fn index_soup<I: MeshIndex>(
    soup: &TriangleSoup,
    options: &IndexOptions,
) -> Result<(IndexedMesh<I>, IndexStats)> {
    let mut indexer = MeshIndexer::new(options.clone());
    indexer.extend_from_soup(soup)?;
    Ok(indexer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn corner_soup() -> TriangleSoup {
        let tri = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        TriangleSoup::from_triangles(&[tri, tri])
    }

    fn raw(mesh: &IndexedMesh<u32>) -> Vec<u32> {
        mesh.flat_indices().collect()
    }

    #[test]
    fn test_repeated_triangle() {
        let (mesh, stats) = index_soup::<u32>(&corner_soup(), &IndexOptions::default()).unwrap();

        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.indices.len(), 6);
        // Zero triple product at the origin counts as misoriented.
        assert_eq!(raw(&mesh), vec![1, 0, 2, 1, 0, 2]);
        assert_eq!(stats.reoriented, 2);
        assert_eq!(stats.input_vertices, 6);
        assert_eq!(stats.unique_vertices, 3);
    }

    #[test]
    fn test_without_orientation() {
        let options = IndexOptions::default().with_orientation(false);
        let (mesh, stats) = index_soup::<u32>(&corner_soup(), &options).unwrap();
        assert_eq!(raw(&mesh), vec![0, 1, 2, 0, 1, 2]);
        assert_eq!(stats.reoriented, 0);
    }

    #[test]
    fn test_push_vertex_emits_every_third() {
        let mut indexer: MeshIndexer = MeshIndexer::default();
        let soup = corner_soup();
        let emitted: Vec<bool> = soup
            .vertices()
            .iter()
            .map(|v| indexer.push_vertex(v).unwrap().is_some())
            .collect();
        assert_eq!(emitted, vec![false, false, true, false, false, true]);
    }

    #[test]
    fn test_trailing_vertices_are_dropped() {
        let mut soup = corner_soup();
        soup.push(SoupVertex::from_position(Point3::new(5.0, 5.0, 5.0)));
        soup.push(SoupVertex::from_position(Point3::new(6.0, 5.0, 5.0)));

        let (mesh, stats) = index_soup::<u32>(&soup, &IndexOptions::default()).unwrap();
        assert_eq!(mesh.indices.len(), 6);
        assert_eq!(stats.dropped_vertices, 2);
        // Dropped corners were still interned.
        assert_eq!(mesh.num_vertices(), 5);
    }

    #[test]
    fn test_indices_are_valid_and_grouped() {
        let mut triangles = Vec::new();
        for i in 0..20 {
            let t = i as f64 * 0.37;
            triangles.push([
                Point3::new(t.sin(), t.cos(), 1.0),
                Point3::new(t.cos(), 2.0, t.sin()),
                Point3::new((t * 2.0).sin(), 1.5, (i % 3) as f64),
            ]);
        }
        let soup = TriangleSoup::from_triangles(&triangles);
        let (mesh, stats) = index_soup::<u16>(&soup, &IndexOptions::default()).unwrap();

        assert_eq!(mesh.indices.len() % 3, 0);
        assert_eq!(stats.triangles, 20);
        assert!(mesh.indices.iter().all(|v| v.index() < mesh.num_vertices()));
    }

    #[test]
    fn test_output_triangles_are_aligned_or_swapped() {
        let triangles = [
            [
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
            ],
            [
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
            ],
        ];
        let soup = TriangleSoup::from_triangles(&triangles);
        let (mesh, stats) = index_soup::<u32>(&soup, &IndexOptions::default()).unwrap();

        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(stats.reoriented, 1);
        for [a, b, c] in mesh.triangles() {
            let (pa, pb, pc) = (mesh.position(a), mesh.position(b), mesh.position(c));
            assert!(is_aligned(&pa, &pb, &pc));
        }
    }

    #[test]
    fn test_dedup_ratio() {
        let (_, stats) = index_soup::<u32>(&corner_soup(), &IndexOptions::default()).unwrap();
        assert!((stats.dedup_ratio() - 0.5).abs() < 1e-12);
        assert_eq!(IndexStats::default().dedup_ratio(), 0.0);
    }
}
