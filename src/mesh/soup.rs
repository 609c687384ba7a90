//! Triangle soup input.
//!
//! A soup lists every triangle's three corners in full; corners shared by
//! neighbouring faces are repeated rather than referenced.

use nalgebra::Point3;

/// One corner of a triangle as it appears in the source.
///
/// Besides the parsed position, the vertex keeps the normalized text of its
/// coordinates (tokens joined by a single space) so that deduplication can key
/// on exactly what was written in the file.
#[derive(Debug, Clone, PartialEq)]
pub struct SoupVertex {
    /// Parsed position.
    pub position: Point3<f64>,
    /// Normalized coordinate text, e.g. `"1 0.5 -2e-3"`.
    pub text: String,
}

impl SoupVertex {
    /// Create a vertex from already normalized coordinate tokens.
    pub fn new(position: Point3<f64>, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }

    /// Create a vertex from a position alone.
    ///
    /// The text key is synthesized with Rust's shortest round-trip float
    /// formatting, so distinct values always get distinct text.
    pub fn from_position(position: Point3<f64>) -> Self {
        let text = format!("{} {} {}", position.x, position.y, position.z);
        Self { position, text }
    }
}

impl From<Point3<f64>> for SoupVertex {
    fn from(position: Point3<f64>) -> Self {
        Self::from_position(position)
    }
}

/// An ordered list of triangle corners; each run of three is one face.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleSoup {
    vertices: Vec<SoupVertex>,
}

impl TriangleSoup {
    /// Create an empty soup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty soup with room for `triangles` faces.
    pub fn with_capacity(triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(triangles * 3),
        }
    }

    /// Build a soup from whole triangles given as positions.
    ///
    /// # Example
    /// ```
    /// use meshidx::mesh::TriangleSoup;
    /// use nalgebra::Point3;
    ///
    /// let soup = TriangleSoup::from_triangles(&[[
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(0.0, 1.0, 0.0),
    /// ]]);
    /// assert_eq!(soup.num_vertices(), 3);
    /// ```
    pub fn from_triangles(triangles: &[[Point3<f64>; 3]]) -> Self {
        let mut soup = Self::with_capacity(triangles.len());
        for tri in triangles {
            for &p in tri {
                soup.push(SoupVertex::from_position(p));
            }
        }
        soup
    }

    /// Append one corner.
    pub fn push(&mut self, vertex: SoupVertex) {
        self.vertices.push(vertex);
    }

    /// Number of corners, counting repeats.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of complete triangles.
    pub fn num_triangles(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Whether the soup has no corners at all.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All corners in source order.
    pub fn vertices(&self) -> &[SoupVertex] {
        &self.vertices
    }
}

impl FromIterator<SoupVertex> for TriangleSoup {
    fn from_iter<T: IntoIterator<Item = SoupVertex>>(iter: T) -> Self {
        Self {
            vertices: iter.into_iter().collect(),
        }
    }
}

impl Extend<SoupVertex> for TriangleSoup {
    fn extend<T: IntoIterator<Item = SoupVertex>>(&mut self, iter: T) {
        self.vertices.extend(iter);
    }
}

impl<'a> IntoIterator for &'a TriangleSoup {
    type Item = &'a SoupVertex;
    type IntoIter = std::slice::Iter<'a, SoupVertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesized_text() {
        let v = SoupVertex::from_position(Point3::new(1.0, 0.5, -0.0));
        assert_eq!(v.text, "1 0.5 -0");
    }

    #[test]
    fn test_counts_ignore_partial_triangle() {
        let mut soup = TriangleSoup::new();
        for i in 0..7 {
            soup.push(SoupVertex::from_position(Point3::new(i as f64, 0.0, 0.0)));
        }
        assert_eq!(soup.num_vertices(), 7);
        assert_eq!(soup.num_triangles(), 2);
        assert!(!soup.is_empty());
    }
}
