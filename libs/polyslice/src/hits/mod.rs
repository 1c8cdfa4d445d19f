//! # Hit Detection
//!
//! Finds where an infinite cut line crosses a polygon's boundary and which
//! stretches of the line between those crossings lie inside the shape.
//!
//! ## Algorithm
//!
//! 1. Intersect every edge with the cut line
//! 2. Snap crossings within `VERTEX_SNAP_EPSILON` of an edge endpoint to that
//!    vertex; everything else is an edge hit
//! 3. Order hits along the cut by scalar projection
//! 4. Merge coincident neighbours, keeping the vertex hit over an edge hit
//! 5. Keep each consecutive hit pair whose midpoint is strictly inside as
//!    an interior chord (`CutSegment`)
//!
//! The result decides the split path: one chord between exactly two hits
//! goes to Simple Split, anything else to Graph Split.

use crate::core::point::{distance_sq, midpoint, project_dist, Point};
use crate::primitives::{intersect_segment_with_line, is_point_inside};
use config::constants::{near_point, VERTEX_SNAP_EPSILON};
use serde::{Deserialize, Serialize};

// =============================================================================
// DATA STRUCTURES
// =============================================================================

/// Where on the boundary a hit landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "camelCase")]
pub enum HitLocation {
    /// Exactly on vertex `i`.
    Vertex(usize),
    /// In the interior of edge `i` (`v[i] -> v[i + 1]`).
    Edge(usize),
}

impl HitLocation {
    /// Vertex index or edge start index.
    pub fn index(self) -> usize {
        match self {
            HitLocation::Vertex(i) | HitLocation::Edge(i) => i,
        }
    }

    /// Returns true for vertex hits.
    pub fn is_vertex(self) -> bool {
        matches!(self, HitLocation::Vertex(_))
    }
}

/// A crossing between the polygon boundary and the cut line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Vertex or edge the hit belongs to.
    pub location: HitLocation,
    /// Crossing point; for vertex hits, the vertex itself.
    pub point: Point,
    /// Unnormalized projection onto the cut direction, used for ordering.
    pub dist: f64,
}

/// An interior chord: two consecutive hits whose midpoint is inside.
///
/// `start` and `end` index into [`HitAnalysis::hits`]; `end == start + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutSegment {
    /// Index of the first hit along the cut.
    pub start: usize,
    /// Index of the second hit along the cut.
    pub end: usize,
}

/// Which split algorithm a cut needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitPath {
    /// Exactly two hits and one chord.
    Simple,
    /// Several chords or extra boundary touches.
    Graph,
}

/// Unique hits in cut order plus the chords between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitAnalysis {
    /// Deduplicated hits, ascending by `dist`.
    pub hits: Vec<Hit>,
    /// Interior chords, in cut order.
    pub segments: Vec<CutSegment>,
}

impl HitAnalysis {
    /// Picks the split path for this set of hits.
    pub fn path(&self) -> SplitPath {
        if self.hits.len() == 2 && self.segments.len() == 1 {
            SplitPath::Simple
        } else {
            SplitPath::Graph
        }
    }
}

// =============================================================================
// HIT DETECTION
// =============================================================================

/// Runs hit detection for a cut through `line_start` and `line_end`.
///
/// Returns `None` when the cut cannot divide the polygon: fewer than two
/// unique hits (the line misses or only grazes the shape), or no chord
/// with an inside midpoint.
///
/// # Examples
/// ```
/// use polyslice::{find_hits, HitLocation, Point};
///
/// let square = [
///     Point::new(-100.0, -100.0),
///     Point::new(100.0, -100.0),
///     Point::new(100.0, 100.0),
///     Point::new(-100.0, 100.0),
/// ];
/// let analysis = find_hits(&square, Point::new(0.0, -150.0), Point::new(0.0, 150.0)).unwrap();
/// assert_eq!(analysis.hits.len(), 2);
/// assert_eq!(analysis.hits[0].location, HitLocation::Edge(0));
/// assert_eq!(analysis.segments.len(), 1);
/// ```
pub fn find_hits(vertices: &[Point], line_start: Point, line_end: Point) -> Option<HitAnalysis> {
    let hits = dedup_hits(raw_hits(vertices, line_start, line_end));
    if hits.len() < 2 {
        log::debug!("cut rejected: {} unique boundary hit(s)", hits.len());
        return None;
    }

    let segments = interior_segments(&hits, vertices);
    if segments.is_empty() {
        log::debug!("cut rejected: no chord of {} hits lies inside", hits.len());
        return None;
    }

    log::trace!("{} hits, {} interior chords", hits.len(), segments.len());
    Some(HitAnalysis { hits, segments })
}

/// Intersects every edge with the cut line and sorts the hits by `dist`.
pub(crate) fn raw_hits(vertices: &[Point], line_start: Point, line_end: Point) -> Vec<Hit> {
    let n = vertices.len();
    let mut hits = Vec::new();

    for i in 0..n {
        let j = (i + 1) % n;
        let (current, next) = (vertices[i], vertices[j]);

        let Some(inter) = intersect_segment_with_line(current, next, line_start, line_end) else {
            continue;
        };

        let (location, point) = if near_point(distance_sq(inter, current)) {
            (HitLocation::Vertex(i), current)
        } else if near_point(distance_sq(inter, next)) {
            (HitLocation::Vertex(j), next)
        } else {
            (HitLocation::Edge(i), inter)
        };

        hits.push(Hit {
            location,
            point,
            dist: project_dist(line_start, line_end, point),
        });
    }

    hits.sort_by(|a, b| a.dist.total_cmp(&b.dist));
    hits
}

/// Merges consecutive hits that share a location.
///
/// When an edge hit and a vertex hit coincide the vertex hit survives, so a
/// cut through a vertex never leaves a phantom edge hit behind.
pub(crate) fn dedup_hits(sorted: Vec<Hit>) -> Vec<Hit> {
    let mut unique: Vec<Hit> = Vec::with_capacity(sorted.len());

    for hit in sorted {
        if let Some(prev) = unique.last_mut() {
            if distance_sq(prev.point, hit.point) <= VERTEX_SNAP_EPSILON {
                if hit.location.is_vertex() && !prev.location.is_vertex() {
                    *prev = hit;
                }
                continue;
            }
        }
        unique.push(hit);
    }
    unique
}

/// Keeps the consecutive hit pairs whose midpoint is strictly inside.
pub(crate) fn interior_segments(hits: &[Hit], vertices: &[Point]) -> Vec<CutSegment> {
    hits.windows(2)
        .enumerate()
        .filter(|(_, pair)| is_point_inside(midpoint(pair[0].point, pair[1].point), vertices))
        .map(|(i, _)| CutSegment { start: i, end: i + 1 })
        .collect()
}

#[cfg(test)]
mod tests;
