//! Vertex deduplication.
//!
//! Maps soup corners to stable indices, collapsing exact duplicates. There is
//! no epsilon: two corners merge only if their keys are identical.

use std::collections::HashMap;

use nalgebra::Point3;

use super::KeyMode;
use crate::error::{MeshError, Result};
use crate::mesh::{MeshIndex, SoupVertex, VertexId};

/// Lookup key for a vertex position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum VertexKey {
    /// Bit patterns of the three coordinates.
    Bits([u64; 3]),
    /// Normalized coordinate text.
    Text(String),
}

impl VertexKey {
    fn new(mode: KeyMode, vertex: &SoupVertex) -> Self {
        match mode {
            KeyMode::Bits => {
                let p = &vertex.position;
                VertexKey::Bits([p.x.to_bits(), p.y.to_bits(), p.z.to_bits()])
            }
            KeyMode::Text => VertexKey::Text(vertex.text.clone()),
        }
    }
}

/// Append-only table of unique vertex positions.
///
/// Indices are assigned in order of first appearance, starting at 0, and are
/// never reused or invalidated.
#[derive(Debug, Clone)]
pub struct VertexDeduplicator<I: MeshIndex = u32> {
    mode: KeyMode,
    lookup: HashMap<VertexKey, VertexId<I>>,
    positions: Vec<Point3<f64>>,
}

impl<I: MeshIndex> Default for VertexDeduplicator<I> {
    fn default() -> Self {
        Self::new(KeyMode::default())
    }
}

impl<I: MeshIndex> VertexDeduplicator<I> {
    /// Create an empty table that compares vertices according to `mode`.
    pub fn new(mode: KeyMode) -> Self {
        Self {
            mode,
            lookup: HashMap::new(),
            positions: Vec::new(),
        }
    }

    /// Return the index of `vertex`, appending it to the table if unseen.
    ///
    /// # Errors
    /// Returns [`MeshError::IndexOverflow`] if a new vertex would need an
    /// index that `I` cannot represent. The table is left unchanged.
    ///
    /// # Example
    /// ```
    /// use meshidx::index::{KeyMode, VertexDeduplicator};
    /// use meshidx::mesh::SoupVertex;
    /// use nalgebra::Point3;
    ///
    /// let mut table: VertexDeduplicator = VertexDeduplicator::new(KeyMode::Bits);
    /// let v = SoupVertex::from_position(Point3::new(1.0, 2.0, 3.0));
    /// let a = table.intern(&v).unwrap();
    /// let b = table.intern(&v).unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn intern(&mut self, vertex: &SoupVertex) -> Result<VertexId<I>> {
        let key = VertexKey::new(self.mode, vertex);
        if let Some(&id) = self.lookup.get(&key) {
            return Ok(id);
        }

        let next = self.positions.len();
        let id = VertexId::try_new(next).ok_or(MeshError::IndexOverflow {
            index_type: I::NAME,
            count: next + 1,
        })?;
        log::trace!("new vertex {} at {:?}", next, vertex.text);
        self.positions.push(vertex.position);
        self.lookup.insert(key, id);
        Ok(id)
    }

    /// Number of unique vertices.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no vertex has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The vertex table in index order.
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// Consume the table, keeping only the positions.
    pub fn into_positions(self) -> Vec<Point3<f64>> {
        self.positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(x: f64, y: f64, z: f64) -> SoupVertex {
        SoupVertex::from_position(Point3::new(x, y, z))
    }

    #[test]
    fn test_intern_is_idempotent() {
        let mut table: VertexDeduplicator = VertexDeduplicator::default();
        let v = vertex(0.25, -1.0, 3.5);
        assert!(table.is_empty());

        let first = table.intern(&v).unwrap();
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
        let second = table.intern(&v).unwrap();
        assert_eq!(first, second);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_indices_follow_first_appearance() {
        let mut table: VertexDeduplicator = VertexDeduplicator::default();
        let a = vertex(0.0, 0.0, 0.0);
        let b = vertex(1.0, 0.0, 0.0);
        let c = vertex(0.0, 1.0, 0.0);

        let ids: Vec<usize> = [&a, &b, &a, &c, &b]
            .iter()
            .map(|v| table.intern(v).unwrap().index())
            .collect();
        assert_eq!(ids, vec![0, 1, 0, 2, 1]);
        assert_eq!(
            table.positions(),
            &[a.position, b.position, c.position][..]
        );
    }

    #[test]
    fn test_bits_mode_merges_equal_values_with_different_text() {
        let mut table: VertexDeduplicator = VertexDeduplicator::new(KeyMode::Bits);
        let a = SoupVertex::new(Point3::new(1.0, 0.5, 0.0), "1 0.5 0");
        let b = SoupVertex::new(Point3::new(1.0, 0.5, 0.0), "1.000 5e-1 0.0");

        assert_eq!(table.intern(&a).unwrap(), table.intern(&b).unwrap());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_text_mode_keeps_different_spellings_apart() {
        let mut table: VertexDeduplicator = VertexDeduplicator::new(KeyMode::Text);
        let a = SoupVertex::new(Point3::new(1.0, 0.5, 0.0), "1 0.5 0");
        let b = SoupVertex::new(Point3::new(1.0, 0.5, 0.0), "1.000 5e-1 0.0");

        assert_ne!(table.intern(&a).unwrap(), table.intern(&b).unwrap());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_signed_zero_is_distinct() {
        let mut table: VertexDeduplicator = VertexDeduplicator::new(KeyMode::Bits);
        table.intern(&vertex(0.0, 0.0, 0.0)).unwrap();
        table.intern(&vertex(-0.0, 0.0, 0.0)).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_overflow_leaves_table_unchanged() {
        let mut table: VertexDeduplicator<u16> = VertexDeduplicator::default();
        for i in 0..65_536u32 {
            table.intern(&vertex(i as f64, 0.0, 0.0)).unwrap();
        }
        let existing = table.intern(&vertex(0.0, 0.0, 0.0)).unwrap();
        assert_eq!(existing.index(), 0);

        let err = table.intern(&vertex(-1.0, 0.0, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            MeshError::IndexOverflow {
                index_type: "u16",
                count: 65_537
            }
        ));
        assert_eq!(table.len(), 65_536);
    }
}
