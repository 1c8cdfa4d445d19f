//! # Primitive Geometry
//!
//! Point and segment math shared by hit detection, both split paths and
//! scoring.
//!
//! ## Contents
//!
//! - **Intersection**: `intersect_segment_with_line` (finite segment vs infinite line)
//! - **Measures**: `signed_area`, `centroid`, `perimeter`
//! - **Classification**: `point_relation`, `is_point_inside`, `is_point_on_segment`
//! - **Cleanup**: `clean_collinear_vertices`, `ensure_clockwise`, `is_simple`
//!
//! ## Orientation
//!
//! Signed area is the plain shoelace sum. With screen coordinates (Y down)
//! a ring that looks clockwise has positive area; callers working Y-up see
//! the sign mirrored and must flip it consistently.

use crate::core::point::{distance_sq, Point};
use config::constants::{
    approx_zero, near_point, COLLINEAR_COSINE, DETERMINANT_EPSILON, MIN_EDGE_LENGTH,
    MIN_POLYGON_VERTICES, ON_SEGMENT_EPSILON, RAY_CAST_EPSILON, SEGMENT_PARAM_EPSILON,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// INTERSECTION
// =============================================================================

/// Intersects the finite segment `seg_start -> seg_end` with the infinite
/// line through `line_start` and `line_end`.
///
/// Returns `None` when the two are parallel (determinant below
/// `DETERMINANT_EPSILON`) or the crossing falls outside the segment. The
/// segment parameter gets `SEGMENT_PARAM_EPSILON` of slack at each end so
/// crossings exactly at an endpoint are not lost to rounding.
///
/// # Examples
/// ```
/// use polyslice::{intersect_segment_with_line, Point};
///
/// let hit = intersect_segment_with_line(
///     Point::new(-1.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(0.5, -10.0),
///     Point::new(0.5, 10.0),
/// );
/// assert_eq!(hit, Some(Point::new(0.5, 0.0)));
/// ```
pub fn intersect_segment_with_line(
    seg_start: Point,
    seg_end: Point,
    line_start: Point,
    line_end: Point,
) -> Option<Point> {
    let seg = seg_end - seg_start;
    let line = line_end - line_start;

    let denom = line.y * seg.x - line.x * seg.y;
    if denom.abs() < DETERMINANT_EPSILON {
        return None;
    }

    let offset = seg_start - line_start;
    let ua = (line.x * offset.y - line.y * offset.x) / denom;

    if (-SEGMENT_PARAM_EPSILON..=1.0 + SEGMENT_PARAM_EPSILON).contains(&ua) {
        Some(seg_start + seg * ua)
    } else {
        None
    }
}

// =============================================================================
// MEASURES
// =============================================================================

/// Shoelace signed area of a vertex ring.
///
/// Positive for rings that are clockwise on screen (Y down).
///
/// # Examples
/// ```
/// use polyslice::{signed_area, Point};
///
/// let ring = [Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(2.0, 2.0)];
/// assert_eq!(signed_area(&ring), 2.0);
/// ```
pub fn signed_area(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    let twice_area: f64 = (0..n)
        .map(|i| vertices[i].perp_dot(vertices[(i + 1) % n]))
        .sum();
    twice_area / 2.0
}

/// Area-weighted centroid of a vertex ring.
///
/// Falls back to the first vertex when the ring is degenerate (area below
/// `DEGENERATE_AREA_EPSILON`), and to the origin for an empty ring.
pub fn centroid(vertices: &[Point]) -> Point {
    let n = vertices.len();
    let mut twice_area = 0.0;
    let mut acc = Point::ZERO;

    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let cross = a.perp_dot(b);
        twice_area += cross;
        acc += (a + b) * cross;
    }

    if approx_zero(twice_area) {
        return vertices.first().copied().unwrap_or(Point::ZERO);
    }
    acc / (3.0 * twice_area)
}

/// Sum of edge lengths, including the closing edge.
pub fn perimeter(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    (0..n)
        .map(|i| vertices[i].distance(vertices[(i + 1) % n]))
        .sum()
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Position of a point relative to a vertex ring.
///
/// The discriminants match the numeric convention used by the game
/// (`-1` inside, `0` boundary, `1` outside).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i8)]
pub enum PointRelation {
    /// Strictly inside the ring.
    Inside = -1,
    /// On a vertex or an edge (within tolerance).
    Boundary = 0,
    /// Strictly outside the ring.
    Outside = 1,
}

impl PointRelation {
    /// Numeric form of the relation.
    pub fn as_i8(self) -> i8 {
        self as i8
    }
}

/// Classifies `point` against a vertex ring.
///
/// ## Algorithm
///
/// 1. Boundary short-circuit: a point within snap distance of a vertex, or on
///    an edge (cross product within `ON_SEGMENT_EPSILON`), is `Boundary`
/// 2. Otherwise even-odd ray casting towards +X decides inside vs outside
pub fn point_relation(point: Point, vertices: &[Point]) -> PointRelation {
    let n = vertices.len();
    let mut inside = false;

    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + n - 1) % n];

        if near_point(distance_sq(point, a)) || near_point(distance_sq(point, b)) {
            return PointRelation::Boundary;
        }
        if is_point_on_segment(point, a, b) {
            return PointRelation::Boundary;
        }

        if (a.y > point.y) != (b.y > point.y)
            && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x + RAY_CAST_EPSILON
        {
            inside = !inside;
        }
    }

    if inside {
        PointRelation::Inside
    } else {
        PointRelation::Outside
    }
}

/// Returns true if `point` is strictly inside the ring (not on its boundary).
pub fn is_point_inside(point: Point, vertices: &[Point]) -> bool {
    point_relation(point, vertices) == PointRelation::Inside
}

/// Returns true if `p` lies on the closed segment `a -> b`.
///
/// Uses an unnormalized cross product against `ON_SEGMENT_EPSILON` and a
/// projected-parameter range check.
pub fn is_point_on_segment(p: Point, a: Point, b: Point) -> bool {
    let ab = b - a;
    let ap = p - a;

    if ab.perp_dot(ap).abs() > ON_SEGMENT_EPSILON {
        return false;
    }

    let dp = ap.dot(ab);
    dp >= 0.0 && dp <= ab.length_squared()
}

// =============================================================================
// CLEANUP
// =============================================================================

/// Removes vertices whose incoming and outgoing edges point the same way.
///
/// A vertex is dropped when the cosine between its two incident edge
/// directions exceeds `COLLINEAR_COSINE`. Vertices next to a zero-length
/// edge are always kept. Rings with fewer than three vertices are returned
/// unchanged.
///
/// # Examples
/// ```
/// use polyslice::{clean_collinear_vertices, Point};
///
/// let ring = [
///     Point::new(0.0, 0.0),
///     Point::new(5.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
/// ];
/// assert_eq!(clean_collinear_vertices(&ring).len(), 3);
/// ```
pub fn clean_collinear_vertices(vertices: &[Point]) -> Vec<Point> {
    let n = vertices.len();
    if n < MIN_POLYGON_VERTICES {
        return vertices.to_vec();
    }

    let mut cleaned = Vec::with_capacity(n);
    for i in 0..n {
        let prev = vertices[(i + n - 1) % n];
        let curr = vertices[i];
        let next = vertices[(i + 1) % n];

        let v1 = curr - prev;
        let v2 = next - curr;
        let len1 = v1.length();
        let len2 = v2.length();

        if len1 > MIN_EDGE_LENGTH && len2 > MIN_EDGE_LENGTH {
            let cos = v1.dot(v2) / (len1 * len2);
            if cos > COLLINEAR_COSINE {
                continue;
            }
        }
        cleaned.push(curr);
    }
    cleaned
}

/// Returns the ring wound clockwise on screen (positive signed area).
///
/// Rings that already have positive area are returned as-is; everything
/// else, including degenerate zero-area rings, is reversed.
pub fn ensure_clockwise(mut vertices: Vec<Point>) -> Vec<Point> {
    if signed_area(&vertices) <= 0.0 {
        vertices.reverse();
    }
    vertices
}

/// Returns true if the ring is simple: no two non-adjacent edges cross or
/// touch, and no two adjacent edges fold back over each other.
///
/// Orientation tests use `robust::orient2d`, so the answer is exact for the
/// given floating-point coordinates.
///
/// # Examples
/// ```
/// use polyslice::{is_simple, Point};
///
/// let bowtie = [
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(10.0, 0.0),
///     Point::new(0.0, 10.0),
/// ];
/// assert!(!is_simple(&bowtie));
/// ```
pub fn is_simple(vertices: &[Point]) -> bool {
    first_self_intersection(vertices).is_none() && vertices.len() >= MIN_POLYGON_VERTICES
}

/// Finds the first pair of edges `(i, j)`, `i < j`, that violates simplicity.
pub(crate) fn first_self_intersection(vertices: &[Point]) -> Option<(usize, usize)> {
    let n = vertices.len();
    if n < MIN_POLYGON_VERTICES {
        return None;
    }

    for i in 0..n {
        let (a0, a1) = (vertices[i], vertices[(i + 1) % n]);
        for j in (i + 1)..n {
            let (b0, b1) = (vertices[j], vertices[(j + 1) % n]);

            if j == i + 1 {
                // a1 == b0 is the shared vertex
                if folds_back(a0, a1, b1) {
                    return Some((i, j));
                }
            } else if i == 0 && j == n - 1 {
                // b1 == a0 is the shared vertex
                if folds_back(b0, a0, a1) {
                    return Some((i, j));
                }
            } else if segments_touch(a0, a1, b0, b1) {
                return Some((i, j));
            }
        }
    }
    None
}

// =============================================================================
// ROBUST HELPERS
// =============================================================================

fn orient(a: Point, b: Point, c: Point) -> f64 {
    robust::orient2d(
        robust::Coord { x: a.x, y: a.y },
        robust::Coord { x: b.x, y: b.y },
        robust::Coord { x: c.x, y: c.y },
    )
}

/// Adjacent edges `prev -> shared -> next` fold back when `next` lies on the
/// ray from `shared` towards `prev`.
fn folds_back(prev: Point, shared: Point, next: Point) -> bool {
    orient(prev, shared, next) == 0.0 && (prev - shared).dot(next - shared) > 0.0
}

/// Collinear point `p` within the bounding box of `a -> b`.
fn within_box(a: Point, b: Point, p: Point) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Closed segment intersection test (shared endpoints count as touching).
fn segments_touch(a0: Point, a1: Point, b0: Point, b1: Point) -> bool {
    let d1 = orient(b0, b1, a0);
    let d2 = orient(b0, b1, a1);
    let d3 = orient(a0, a1, b0);
    let d4 = orient(a0, a1, b1);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && within_box(b0, b1, a0))
        || (d2 == 0.0 && within_box(b0, b1, a1))
        || (d3 == 0.0 && within_box(a0, a1, b0))
        || (d4 == 0.0 && within_box(a0, a1, b1))
}
