//! Polygon slicing kernel for the cut-the-shape puzzle.
//!
//! The crate divides a simple polygon (convex or concave, including forked
//! and spiral outlines) along an infinite cut line and grades the resulting
//! pieces. Every operation is a pure function: inputs are only read, and
//! each call allocates its own working data.
//!
//! ```
//! use polyslice::{split, Point, Polygon};
//!
//! let square = Polygon::from(vec![
//!     Point::new(-100.0, -100.0),
//!     Point::new(100.0, -100.0),
//!     Point::new(100.0, 100.0),
//!     Point::new(-100.0, 100.0),
//! ]);
//! let pieces = split(&square, Point::new(0.0, -150.0), Point::new(0.0, 150.0)).unwrap();
//! assert_eq!(pieces.len(), 2);
//! ```
//!
//! Coordinates follow the screen convention (Y axis pointing down): a ring
//! that looks clockwise on screen has positive signed area.

pub mod core;
pub mod error;
pub mod hits;
pub mod primitives;
pub mod scoring;
pub mod split;

pub use crate::core::point::Point;
pub use crate::core::polygon::Polygon;
pub use error::{Error, Result};
pub use hits::{find_hits, CutSegment, Hit, HitAnalysis, HitLocation, SplitPath};
pub use primitives::{
    centroid, clean_collinear_vertices, ensure_clockwise, intersect_segment_with_line,
    is_point_inside, is_point_on_segment, is_simple, perimeter, point_relation, signed_area,
    PointRelation,
};
pub use scoring::{
    evaluate_solution, evaluate_split, filter_slivers, is_geometrically_similar, Challenge,
    Evaluation, FailureReason, ScoringConfig, SplitEvaluation,
};
pub use split::{split, validate_cut, CutValidation};
