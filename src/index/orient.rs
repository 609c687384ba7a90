//! Triangle winding normalization.
//!
//! The test is the sign of the triple product `A · (AB × AC)`, where `A`,
//! `B`, `C` are the triangle's corners. A strictly negative value means the
//! triangle already follows the winding convention. Anything else, including
//! exactly zero for degenerate or origin-touching triangles, is corrected by
//! exchanging the first two corners. The correction is applied once and never
//! re-checked.

use nalgebra::Point3;

use crate::mesh::{MeshIndex, VertexId};

/// Outcome of [`normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Returned unchanged.
    Aligned,
    /// First two corners were swapped.
    Reoriented,
}

impl Orientation {
    /// Whether the corners were swapped.
    pub fn is_reoriented(self) -> bool {
        self == Orientation::Reoriented
    }
}

/// Signed triple product `a · ((b - a) × (c - a))`.
#[inline]
pub fn signed_volume(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    a.coords.dot(&ab.cross(&ac))
}

/// Whether a triangle with these corners already follows the convention.
#[inline]
pub fn is_aligned(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> bool {
    signed_volume(a, b, c) < 0.0
}

/// Normalize the winding of one triangle.
///
/// Looks up the three corners in `positions` and returns either the same
/// triple or the triple with its first two indices exchanged. This is a pure
/// function of its inputs.
///
/// # Panics
/// Panics if any index is outside `positions`.
///
/// # Example
/// ```
/// use meshidx::index::{normalize, Orientation};
/// use meshidx::mesh::VertexId;
/// use nalgebra::Point3;
///
/// let positions = [
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
///     Point3::new(0.0, 0.0, 1.0),
/// ];
/// let tri: [VertexId; 3] = [0, 1, 2].map(|i| VertexId::try_new(i).unwrap());
///
/// let (out, orientation) = normalize(tri, &positions);
/// assert_eq!(orientation, Orientation::Reoriented);
/// assert_eq!(out, [tri[1], tri[0], tri[2]]);
/// ```
pub fn normalize<I: MeshIndex>(
    tri: [VertexId<I>; 3],
    positions: &[Point3<f64>],
) -> ([VertexId<I>; 3], Orientation) {
    let [i0, i1, i2] = tri;
    let a = &positions[i0.index()];
    let b = &positions[i1.index()];
    let c = &positions[i2.index()];

    if is_aligned(a, b, c) {
        (tri, Orientation::Aligned)
    } else {
        ([i1, i0, i2], Orientation::Reoriented)
    }
}
