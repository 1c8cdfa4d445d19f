//! # Error Types
//!
//! Errors surfaced by input validation. The split itself never fails with
//! an error: a cut that does not divide the shape is a normal outcome and
//! is reported as `None`.
//!
//! ## Error Policy
//!
//! - Precondition violations are reported by `validate_cut` before a split
//! - The `Display` text of each variant is the reason shown to the player
//! - Internal consistency guards reject the cut instead of erroring

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while validating a shape or a cut.
///
/// ## Example
///
/// ```rust
/// use polyslice::{validate_cut, Error, Point};
///
/// let err = validate_cut(None, Point::ZERO, Point::new(10.0, 0.0)).unwrap_err();
/// assert_eq!(err, Error::MissingShape);
/// assert_eq!(err.to_string(), "No valid shape to cut.");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// No polygon was supplied.
    #[error("No valid shape to cut.")]
    MissingShape,

    /// The polygon has fewer vertices than a triangle.
    ///
    /// Contains the actual vertex count.
    #[error("No valid shape to cut.")]
    TooFewVertices(usize),

    /// The cut line's endpoints coincide.
    #[error("Line is too short.")]
    LineTooShort,

    /// A coordinate is NaN or infinite.
    ///
    /// Contains the index of the offending vertex.
    #[error("Vertex {0} has a non-finite coordinate.")]
    NonFiniteCoordinate(usize),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for validation operations.
pub type Result<T> = std::result::Result<T, Error>;

// =============================================================================
// TESTS
// =============================================================================
