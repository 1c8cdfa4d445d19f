//! 2D point definitions for the slicing kernel.
//!
//! Provides type alias for `glam::DVec2` and the distance helpers the hit
//! detection uses for ordering and snapping.

pub use glam::DVec2 as Point;

/// Squared Euclidean distance between two points.
///
/// # Examples
/// ```
/// use polyslice::core::point::{distance_sq, Point};
///
/// assert_eq!(distance_sq(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 25.0);
/// ```
#[inline]
pub fn distance_sq(a: Point, b: Point) -> f64 {
    a.distance_squared(b)
}

/// Scalar projection of `p` onto the direction `line_start -> line_end`.
///
/// The result is the unnormalized dot product of `p - line_start` with
/// `line_end - line_start`. It is only used to order points along one
/// line, so a consistent scale is all that matters.
///
/// # Examples
/// ```
/// use polyslice::core::point::{project_dist, Point};
///
/// let d = project_dist(Point::ZERO, Point::new(2.0, 0.0), Point::new(3.0, 7.0));
/// assert_eq!(d, 6.0);
/// ```
#[inline]
pub fn project_dist(line_start: Point, line_end: Point, p: Point) -> f64 {
    (p - line_start).dot(line_end - line_start)
}

/// Midpoint of two points.
#[inline]
pub fn midpoint(a: Point, b: Point) -> Point {
    (a + b) * 0.5
}

#[cfg(test)]
mod tests;
