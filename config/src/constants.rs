//! # Configuration Constants
//!
//! Centralized constants for the slicing pipeline. All intersection,
//! classification and scoring tolerances are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point tolerances used by the geometry primitives
//! - **Limits**: Structural minimums and safety bounds
//! - **Scoring**: Thresholds used to grade a finished attempt
//!
//! The values are absolute (not scaled by polygon size). Shapes are
//! expected in screen units, roughly a few hundred units across.

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Determinant magnitude below which a segment and a line are parallel.
///
/// # Example
///
/// ```rust
/// use config::constants::DETERMINANT_EPSILON;
///
/// let denom: f64 = 1e-12;
/// assert!(denom.abs() < DETERMINANT_EPSILON);
/// ```
pub const DETERMINANT_EPSILON: f64 = 1e-9;

/// Slack on the segment parameter `ua` at both ends of `[0, 1]`.
///
/// An intersection with `ua` in `[-SEGMENT_PARAM_EPSILON, 1 + SEGMENT_PARAM_EPSILON]`
/// still counts as lying on the segment.
pub const SEGMENT_PARAM_EPSILON: f64 = 1e-9;

/// Absolute area below which a polygon is treated as degenerate.
///
/// Used by the centroid computation, which falls back to the first vertex.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-9;

/// Squared distance below which two points coincide.
///
/// Used for vertex snapping during hit detection, hit deduplication and the
/// vertex short-circuit in point classification.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_SNAP_EPSILON;
///
/// let (dx, dy) = (5e-4_f64, 5e-4_f64);
/// assert!(dx * dx + dy * dy < VERTEX_SNAP_EPSILON);
/// ```
pub const VERTEX_SNAP_EPSILON: f64 = 1e-6;

/// Cross-product magnitude below which a point lies on a segment's line.
pub const ON_SEGMENT_EPSILON: f64 = 1e-3;

/// Slack added to the ray-casting crossing test.
pub const RAY_CAST_EPSILON: f64 = 1e-9;

/// Minimum signed area for a traced face to become an output piece.
///
/// Also filters the outer face, which always traces with negative area.
pub const FACE_AREA_EPSILON: f64 = 1e-3;

/// Cosine above which two consecutive edges are considered collinear.
pub const COLLINEAR_COSINE: f64 = 0.999;

/// Edge length below which collinearity is not evaluated.
pub const MIN_EDGE_LENGTH: f64 = 1e-6;

/// Squared length below which a cut line is rejected as too short.
pub const MIN_CUT_LENGTH_SQ: f64 = 1e-6;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Minimum number of vertices for a polygon ring.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Face tracing gives up after `FACE_TRACE_STEP_FACTOR * node_count` steps.
///
/// # Example
///
/// ```rust
/// use config::constants::FACE_TRACE_STEP_FACTOR;
///
/// let nodes = 12;
/// assert_eq!(nodes * FACE_TRACE_STEP_FACTOR, 48);
/// ```
pub const FACE_TRACE_STEP_FACTOR: usize = 4;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Default relative tolerance for the area/perimeter similarity heuristic.
pub const DEFAULT_SIMILARITY_TOLERANCE: f64 = 0.05;

/// Pieces whose area is at most this fraction of the total are slivers.
///
/// Slivers are left over by cuts that graze a vertex and are ignored when
/// counting pieces.
pub const SLIVER_AREA_FRACTION: f64 = 0.005;

/// Maximum fractional deviation that still earns three stars.
pub const THREE_STAR_MAX_ERROR: f64 = 0.06;

/// Maximum fractional deviation that still earns two stars.
pub const TWO_STAR_MAX_ERROR: f64 = 0.12;

/// Maximum fractional deviation that still earns one star.
pub const ONE_STAR_MAX_ERROR: f64 = 0.18;

/// Best possible rating for an attempt.
pub const MAX_STARS: u8 = 3;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a squared distance is within the vertex snap tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::near_point;
///
/// assert!(near_point(0.0));
/// assert!(!near_point(1.0));
/// ```
#[inline]
pub fn near_point(distance_sq: f64) -> bool {
    distance_sq < VERTEX_SNAP_EPSILON
}

/// Checks if an area is small enough to treat its polygon as degenerate.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < DEGENERATE_AREA_EPSILON
}
