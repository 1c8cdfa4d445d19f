//! # Scoring
//!
//! Grades a finished attempt: how evenly the pieces share the area, whether
//! the piece count and cut budget were met, and how many stars that earns.
//!
//! ## Algorithm
//!
//! 1. Measure every piece (absolute shoelace area) and the raw total
//! 2. Drop slivers: pieces at or below `sliver_fraction` of the raw total
//! 3. Compare the kept pieces against the ideal share `total / target`
//! 4. Rate the worst deviation against the star thresholds, unless the cut
//!    budget was exceeded or the piece count is wrong
//! 5. Upgrade two-star attempts to three when every piece matches the first
//!    in vertex count, area and perimeter
//!
//! Percentages always use the raw total, so slivers still "use up" area.

use crate::core::point::Point;
use crate::primitives::{perimeter, signed_area};
use config::constants::{
    DEFAULT_SIMILARITY_TOLERANCE, MAX_STARS, ONE_STAR_MAX_ERROR, SLIVER_AREA_FRACTION,
    THREE_STAR_MAX_ERROR, TWO_STAR_MAX_ERROR,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Tunable scoring thresholds.
///
/// Defaults come from `config::constants`. Any field may be omitted when
/// deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringConfig {
    /// Relative area/perimeter tolerance for the symmetry bonus.
    pub similarity_tolerance: f64,
    /// Pieces at or below this fraction of the total area are ignored.
    pub sliver_fraction: f64,
    /// Worst deviation that still earns three stars.
    pub three_star_max_error: f64,
    /// Worst deviation that still earns two stars.
    pub two_star_max_error: f64,
    /// Worst deviation that still earns one star.
    pub one_star_max_error: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            similarity_tolerance: DEFAULT_SIMILARITY_TOLERANCE,
            sliver_fraction: SLIVER_AREA_FRACTION,
            three_star_max_error: THREE_STAR_MAX_ERROR,
            two_star_max_error: TWO_STAR_MAX_ERROR,
            one_star_max_error: ONE_STAR_MAX_ERROR,
        }
    }
}

impl ScoringConfig {
    /// Stars earned for a worst-case deviation of `max_error`.
    pub fn stars_for(&self, max_error: f64) -> u8 {
        if max_error <= self.three_star_max_error {
            MAX_STARS
        } else if max_error <= self.two_star_max_error {
            2
        } else if max_error <= self.one_star_max_error {
            1
        } else {
            0
        }
    }
}

// =============================================================================
// DATA STRUCTURES
// =============================================================================

/// What a level asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    /// Number of pieces the player must produce.
    pub target_pieces: usize,
    /// Cut budget.
    pub max_cuts: usize,
}

/// Area breakdown of a set of pieces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitEvaluation {
    /// Absolute area of each piece.
    pub areas: Vec<f64>,
    /// Sum of `areas`.
    pub total: f64,
    /// Each piece's share of `total`, in percent.
    pub percents: Vec<f64>,
    /// Each piece's fractional deviation from the ideal share.
    pub deviations: Vec<f64>,
    /// Largest entry of `deviations`; 1.0 when there are no pieces.
    pub max_deviation: f64,
}

/// Why an attempt earned no stars.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FailureReason {
    /// More cuts than the level allows.
    #[error("Exceeded allowed number of cuts.")]
    CutLimitExceeded,

    /// The kept piece count differs from the target.
    #[error("Needed {needed} pieces, but you created {created}.")]
    WrongPieceCount {
        /// Target piece count.
        needed: usize,
        /// Pieces left after sliver filtering.
        created: usize,
    },

    /// Right count, but the worst piece is off by more than the one-star
    /// threshold.
    #[error("Pieces are too uneven in area.")]
    TooUneven,
}

/// Full grade of an attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    /// Indices of the pieces that survived sliver filtering.
    pub kept: Vec<usize>,
    /// Share of the raw total for each kept piece, in percent.
    pub percents: Vec<f64>,
    /// Worst fractional deviation among kept pieces.
    pub max_error: f64,
    /// Stars earned, `0..=3`.
    pub stars: u8,
    /// More cuts were used than allowed.
    pub cut_limit_exceeded: bool,
    /// Kept piece count differs from the target.
    pub wrong_piece_count: bool,
    /// All kept pieces are similar and the symmetry bonus applied.
    pub perfect_symmetry: bool,
    /// Set whenever `stars == 0`.
    pub failure: Option<FailureReason>,
}

impl Evaluation {
    /// Returns true if the attempt earned at least one star.
    pub fn passed(&self) -> bool {
        self.stars > 0
    }
}

// =============================================================================
// EVALUATION
// =============================================================================

/// Measures `pieces` against an even split into `target_pieces` parts.
///
/// # Examples
/// ```
/// use polyslice::{evaluate_split, Point};
///
/// let left = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 2.0),
///     Point::new(0.0, 2.0),
/// ];
/// let right = vec![
///     Point::new(1.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(2.0, 2.0),
///     Point::new(1.0, 2.0),
/// ];
/// let eval = evaluate_split(&[left, right], 2);
/// assert_eq!(eval.percents, vec![50.0, 50.0]);
/// assert_eq!(eval.max_deviation, 0.0);
/// ```
pub fn evaluate_split<P: AsRef<[Point]>>(pieces: &[P], target_pieces: usize) -> SplitEvaluation {
    let areas: Vec<f64> = pieces.iter().map(|p| piece_area(p.as_ref())).collect();
    let total: f64 = areas.iter().sum();
    breakdown(areas, total, target_pieces)
}

/// Drops pieces whose area is not strictly greater than `fraction` of the
/// combined area.
pub fn filter_slivers<P: AsRef<[Point]> + Clone>(pieces: &[P], fraction: f64) -> Vec<P> {
    let total: f64 = pieces.iter().map(|p| piece_area(p.as_ref())).sum();
    pieces
        .iter()
        .filter(|p| piece_area(p.as_ref()) > total * fraction)
        .cloned()
        .collect()
}

/// Coarse congruence test: same vertex count, with area and perimeter each
/// within `tolerance` relative to the larger value.
///
/// Angles and vertex positions are not compared, so two different shapes
/// with matching count, area and perimeter are reported as similar.
pub fn is_geometrically_similar(a: &[Point], b: &[Point], tolerance: f64) -> bool {
    if a.len() != b.len() {
        return false;
    }
    within_tolerance(piece_area(a), piece_area(b), tolerance)
        && within_tolerance(perimeter(a), perimeter(b), tolerance)
}

/// Grades a finished attempt.
///
/// `pieces` are the shapes on the board after `cuts_used` cuts.
pub fn evaluate_solution<P: AsRef<[Point]>>(
    pieces: &[P],
    challenge: &Challenge,
    cuts_used: usize,
    config: &ScoringConfig,
) -> Evaluation {
    let areas: Vec<f64> = pieces.iter().map(|p| piece_area(p.as_ref())).collect();
    let raw_total: f64 = areas.iter().sum();

    let kept: Vec<usize> = (0..pieces.len())
        .filter(|&i| areas[i] > raw_total * config.sliver_fraction)
        .collect();
    if kept.len() < pieces.len() {
        log::debug!("ignoring {} sliver piece(s)", pieces.len() - kept.len());
    }

    let kept_areas = kept.iter().map(|&i| areas[i]).collect();
    let stats = breakdown(kept_areas, raw_total, challenge.target_pieces);

    let cut_limit_exceeded = cuts_used > challenge.max_cuts;
    let wrong_piece_count = kept.len() != challenge.target_pieces;

    let all_similar = !wrong_piece_count
        && kept.len() > 1
        && kept[1..].iter().all(|&i| {
            is_geometrically_similar(
                pieces[kept[0]].as_ref(),
                pieces[i].as_ref(),
                config.similarity_tolerance,
            )
        });

    let mut stars = 0;
    let mut perfect_symmetry = false;
    if !cut_limit_exceeded && !wrong_piece_count {
        stars = config.stars_for(stats.max_deviation);
        if all_similar && stars >= 2 {
            stars = MAX_STARS;
            perfect_symmetry = true;
        }
    }

    let failure = if cut_limit_exceeded {
        Some(FailureReason::CutLimitExceeded)
    } else if wrong_piece_count {
        Some(FailureReason::WrongPieceCount {
            needed: challenge.target_pieces,
            created: kept.len(),
        })
    } else if stars == 0 {
        Some(FailureReason::TooUneven)
    } else {
        None
    };

    log::debug!(
        "attempt graded: {} pieces, max error {:.4}, {} star(s)",
        kept.len(),
        stats.max_deviation,
        stars
    );

    Evaluation {
        kept,
        percents: stats.percents,
        max_error: stats.max_deviation,
        stars,
        cut_limit_exceeded,
        wrong_piece_count,
        perfect_symmetry,
        failure,
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn piece_area(vertices: &[Point]) -> f64 {
    signed_area(vertices).abs()
}

fn within_tolerance(a: f64, b: f64, tolerance: f64) -> bool {
    let scale = a.max(b);
    let scale = if scale == 0.0 { 1.0 } else { scale };
    (a - b).abs() / scale <= tolerance
}

/// Percentages against `total` and deviations against `total / target`.
fn breakdown(areas: Vec<f64>, total: f64, target_pieces: usize) -> SplitEvaluation {
    let ideal = if target_pieces == 0 {
        0.0
    } else {
        total / target_pieces as f64
    };

    let percents = areas
        .iter()
        .map(|&a| if total > 0.0 { a / total * 100.0 } else { 0.0 })
        .collect();
    let deviations: Vec<f64> = areas
        .iter()
        .map(|&a| if ideal > 0.0 { (a - ideal).abs() / ideal } else { 1.0 })
        .collect();
    let max_deviation = deviations.iter().copied().reduce(f64::max).unwrap_or(1.0);

    SplitEvaluation {
        areas,
        total,
        percents,
        deviations,
        max_deviation,
    }
}
