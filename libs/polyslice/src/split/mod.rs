//! # Split Engine
//!
//! Entry point that divides a polygon along an infinite cut line.
//!
//! ## Design Principles
//!
//! - **Pure**: the input ring is only read; every call builds its own graph
//! - **No errors on a miss**: a cut that does not divide the shape returns
//!   `None`, which the game treats as an ordinary outcome
//! - **Two paths**: one chord between two hits goes through the closed-form
//!   simple split, everything else through the face-tracing graph split
//!
//! Untrusted rings should pass [`validate_cut`] first. Outlines that cross
//! themselves are still split; [`crate::is_simple`] is the separate check
//! for callers that need a simple ring.

mod graph;
mod simple;

use crate::core::point::{distance_sq, Point};
use crate::core::polygon::Polygon;
use crate::error::{Error, Result};
use crate::hits::{find_hits, SplitPath};
use config::constants::{MIN_CUT_LENGTH_SQ, MIN_POLYGON_VERTICES};
use serde::{Deserialize, Serialize};

// =============================================================================
// SPLIT
// =============================================================================

/// Splits a polygon by the infinite line through `line_start` and `line_end`.
///
/// Returns `None` when the line misses the shape, only grazes it, or no
/// stretch of the line between boundary hits lies inside. Otherwise returns
/// at least two pieces, each a closed vertex ring of three or more points.
///
/// # Examples
/// ```
/// use polyslice::{signed_area, split, Point};
///
/// let square = [
///     Point::new(-100.0, -100.0),
///     Point::new(100.0, -100.0),
///     Point::new(100.0, 100.0),
///     Point::new(-100.0, 100.0),
/// ];
/// let pieces = split(&square, Point::new(-150.0, -150.0), Point::new(150.0, 150.0)).unwrap();
/// assert_eq!(pieces.len(), 2);
/// assert!(pieces.iter().all(|p| p.len() == 3));
/// assert_eq!(signed_area(&pieces[0]).abs(), 20000.0);
/// ```
pub fn split<P>(polygon: &P, line_start: Point, line_end: Point) -> Option<Vec<Vec<Point>>>
where
    P: AsRef<[Point]> + ?Sized,
{
    let vertices = polygon.as_ref();
    if vertices.len() < MIN_POLYGON_VERTICES {
        log::debug!("split skipped: ring has {} vertices", vertices.len());
        return None;
    }

    let analysis = find_hits(vertices, line_start, line_end)?;
    match analysis.path() {
        SplitPath::Simple => simple::split_simple(vertices, &analysis.hits),
        SplitPath::Graph => graph::split_graph(vertices, &analysis),
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Checks that a shape and a cut are fit for [`split`].
///
/// Checks run in order: shape present, at least three vertices, line
/// length, finite coordinates. Self-intersecting outlines pass.
///
/// # Errors
///
/// - [`Error::MissingShape`] if `polygon` is `None`
/// - [`Error::TooFewVertices`] for rings of fewer than three vertices
/// - [`Error::LineTooShort`] if the endpoints are (nearly) coincident or
///   not finite
/// - [`Error::NonFiniteCoordinate`] for a NaN or infinite vertex
pub fn validate_cut(polygon: Option<&Polygon>, line_start: Point, line_end: Point) -> Result<()> {
    let polygon = polygon.ok_or(Error::MissingShape)?;
    let vertices = &polygon.vertices;

    if vertices.len() < MIN_POLYGON_VERTICES {
        return Err(Error::TooFewVertices(vertices.len()));
    }

    if !line_start.is_finite()
        || !line_end.is_finite()
        || distance_sq(line_start, line_end) < MIN_CUT_LENGTH_SQ
    {
        return Err(Error::LineTooShort);
    }

    if let Some(idx) = vertices.iter().position(|v| !v.is_finite()) {
        return Err(Error::NonFiniteCoordinate(idx));
    }

    Ok(())
}

/// Serializable outcome of [`validate_cut`], as reported to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CutValidation {
    /// True if the cut may proceed.
    pub is_valid: bool,
    /// Player-facing reason when invalid.
    pub reason: Option<String>,
}

impl From<Result<()>> for CutValidation {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => Self {
                is_valid: true,
                reason: None,
            },
            Err(err) => Self {
                is_valid: false,
                reason: Some(err.to_string()),
            },
        }
    }
}
