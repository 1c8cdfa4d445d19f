//! Vertex ring representation of a puzzle shape.
//!
//! A `Polygon` is an ordered, implicitly closed sequence of points. Edges
//! are `(v[i], v[(i + 1) % n])`. The ring is expected to be simple; the
//! split engine does not defend against self-intersecting outlines, so use
//! [`Polygon::try_new`] or `validate_cut` on untrusted input.

use crate::core::point::Point;
use crate::error::{Error, Result};
use crate::primitives;
use config::constants::MIN_POLYGON_VERTICES;
use serde::{Deserialize, Serialize};

/// A closed vertex ring.
///
/// ## Invariants
///
/// - `vertices.len() >= 3` for any polygon handed to `split`
/// - Consecutive vertices define edges; the last vertex connects to the first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// Ring vertices in winding order.
    pub vertices: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon without validating the ring.
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Creates a polygon, rejecting rings with fewer than three vertices or
    /// non-finite coordinates.
    ///
    /// # Examples
    /// ```
    /// use polyslice::{Error, Point, Polygon};
    ///
    /// let err = Polygon::try_new(vec![Point::ZERO, Point::X]).unwrap_err();
    /// assert_eq!(err, Error::TooFewVertices(2));
    /// ```
    pub fn try_new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < MIN_POLYGON_VERTICES {
            return Err(Error::TooFewVertices(vertices.len()));
        }
        if let Some(idx) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(Error::NonFiniteCoordinate(idx));
        }
        Ok(Self { vertices })
    }

    /// Number of vertices in the ring.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the ring cannot form a polygon.
    pub fn is_empty(&self) -> bool {
        self.vertices.len() < MIN_POLYGON_VERTICES
    }

    /// Signed shoelace area (positive for clockwise on screen).
    pub fn signed_area(&self) -> f64 {
        primitives::signed_area(&self.vertices)
    }

    /// Unsigned area.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Area-weighted centroid.
    pub fn centroid(&self) -> Point {
        primitives::centroid(&self.vertices)
    }

    /// Sum of edge lengths.
    pub fn perimeter(&self) -> f64 {
        primitives::perimeter(&self.vertices)
    }

    /// Returns true if `point` is strictly inside the ring.
    pub fn contains(&self, point: Point) -> bool {
        primitives::is_point_inside(point, &self.vertices)
    }

    /// Returns a copy wound clockwise on screen (positive signed area).
    pub fn to_clockwise(&self) -> Self {
        Self::new(primitives::ensure_clockwise(self.vertices.clone()))
    }

    /// Returns a copy with collinear vertices removed.
    pub fn cleaned(&self) -> Self {
        Self::new(primitives::clean_collinear_vertices(&self.vertices))
    }

    /// Returns true if no two edges of the ring cross or touch.
    pub fn is_simple(&self) -> bool {
        primitives::is_simple(&self.vertices)
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(vertices: Vec<Point>) -> Self {
        Self::new(vertices)
    }
}

impl AsRef<[Point]> for Polygon {
    fn as_ref(&self) -> &[Point] {
        &self.vertices
    }
}
