//! Indexed mesh output.

use nalgebra::Point3;

use super::index::{MeshIndex, VertexId};

/// A deduplicated vertex table plus an index buffer.
///
/// Every three consecutive entries of `indices` form one triangle, in the
/// order the triangles appeared in the soup.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedMesh<I: MeshIndex = u32> {
    /// Unique positions in order of first appearance.
    pub positions: Vec<Point3<f64>>,
    /// Triangle corners as indices into `positions`.
    pub indices: Vec<VertexId<I>>,
}

impl<I: MeshIndex> Default for IndexedMesh<I> {
    fn default() -> Self {
        Self {
            positions: Vec::new(),
            indices: Vec::new(),
        }
    }
}

impl<I: MeshIndex> IndexedMesh<I> {
    /// Number of unique vertices.
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Position of a vertex.
    ///
    /// # Panics
    /// Panics if `v` is not in the vertex table.
    pub fn position(&self, v: VertexId<I>) -> Point3<f64> {
        self.positions[v.index()]
    }

    /// Iterate over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [VertexId<I>; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Vertex coordinates flattened as `x, y, z` per vertex.
    pub fn flat_coordinates(&self) -> impl Iterator<Item = f64> + '_ {
        self.positions.iter().flat_map(|p| [p.x, p.y, p.z])
    }

    /// Index buffer as raw integers.
    pub fn flat_indices(&self) -> impl Iterator<Item = I> + '_ {
        self.indices.iter().map(|v| v.raw())
    }

    /// Compute the axis-aligned bounding box, or `None` for an empty table.
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = *self.positions.first()?;
        let bounds = self
            .positions
            .iter()
            .fold((first, first), |(min, max), p| (min.inf(p), max.sup(p)));
        Some(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> IndexedMesh<u32> {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 2.0),
            Point3::new(0.0, 1.0, -1.0),
        ];
        let indices = [0usize, 1, 2, 0, 2, 3]
            .iter()
            .map(|&i| VertexId::try_new(i).unwrap())
            .collect();
        IndexedMesh { positions, indices }
    }

    #[test]
    fn test_triangles() {
        let mesh = quad();
        assert_eq!(mesh.num_triangles(), 2);
        let tris: Vec<[usize; 3]> = mesh
            .triangles()
            .map(|t| [t[0].index(), t[1].index(), t[2].index()])
            .collect();
        assert_eq!(tris, vec![[0, 1, 2], [0, 2, 3]]);
    }

    #[test]
    fn test_flat_buffers() {
        let mesh = quad();
        assert_eq!(mesh.flat_coordinates().count(), 12);
        assert_eq!(mesh.flat_indices().collect::<Vec<_>>(), vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_bounding_box() {
        let (min, max) = quad().bounding_box().unwrap();
        assert_eq!(min, Point3::new(0.0, 0.0, -1.0));
        assert_eq!(max, Point3::new(1.0, 1.0, 2.0));
        assert!(IndexedMesh::<u32>::default().bounding_box().is_none());
    }
}
