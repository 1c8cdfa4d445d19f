//! # Simple Split
//!
//! Closed-form two-piece split for a cut with exactly two hits and one
//! interior chord.
//!
//! The polygon ring is rebuilt with both hit points in place (a vertex hit
//! replaces its vertex, an edge hit is inserted after the edge's start
//! vertex), then sliced into the two arcs between the hit positions.
//! Both pieces keep the input winding.

use crate::core::point::{distance_sq, Point};
use crate::hits::{Hit, HitLocation};

/// Splits `vertices` along the chord between `hits[0]` and `hits[1]`.
///
/// Returns `None` if `hits` does not hold exactly two hits or if a hit
/// cannot be placed in the rebuilt ring. Neither happens for hits produced
/// by `find_hits`.
pub(crate) fn split_simple(vertices: &[Point], hits: &[Hit]) -> Option<Vec<Vec<Point>>> {
    let [first, second] = hits else {
        log::warn!("simple split called with {} hits", hits.len());
        return None;
    };

    // Hits arrive in cut order; the ring needs them in perimeter order.
    let mut perimeter_hits = [(0usize, *first), (1usize, *second)];
    perimeter_hits.sort_by(|(_, a), (_, b)| {
        a.location
            .index()
            .cmp(&b.location.index())
            .then_with(|| {
                let origin_a = vertices.get(a.location.index()).copied().unwrap_or(a.point);
                let origin_b = vertices.get(b.location.index()).copied().unwrap_or(b.point);
                distance_sq(origin_a, a.point).total_cmp(&distance_sq(origin_b, b.point))
            })
    });

    let mut ring = Vec::with_capacity(vertices.len() + 2);
    let mut slots: [Option<usize>; 2] = [None, None];

    for (i, &vertex) in vertices.iter().enumerate() {
        match perimeter_hits
            .iter()
            .find(|(_, hit)| hit.location == HitLocation::Vertex(i))
        {
            Some(&(which, hit)) => {
                slots[which] = Some(ring.len());
                ring.push(hit.point);
            }
            None => ring.push(vertex),
        }

        for &(which, hit) in perimeter_hits
            .iter()
            .filter(|(_, hit)| hit.location == HitLocation::Edge(i))
        {
            slots[which] = Some(ring.len());
            ring.push(hit.point);
        }
    }

    let (Some(a), Some(b)) = (slots[0], slots[1]) else {
        log::warn!("simple split could not place both hits in the ring");
        return None;
    };

    Some(vec![arc(&ring, a, b), arc(&ring, b, a)])
}

/// Walks `ring` circularly from `from` to `to`, both inclusive.
fn arc(ring: &[Point], from: usize, to: usize) -> Vec<Point> {
    let len = ring.len();
    let count = (to + len - from) % len + 1;
    (0..count).map(|k| ring[(from + k) % len]).collect()
}
