//! # Graph Split
//!
//! General split for cuts that produce more than two pieces or touch the
//! boundary more than twice (concave shapes, cuts through vertices).
//!
//! ## Algorithm
//!
//! 1. **Nodes**: original vertices keep ids `0..n`; each edge hit becomes a
//!    new node `n..`. Vertex hits reuse the vertex node.
//! 2. **Boundary cycle**: edge-hit nodes are spliced into their edge, ordered
//!    by distance from the edge's start vertex. Every cycle step is an
//!    undirected edge.
//! 3. **Chords**: each interior `CutSegment` links its two hit nodes unless
//!    they are already adjacent.
//! 4. **Face tracing**: every unvisited directed edge starts a walk. At each
//!    node the walk takes the smallest turn from the reversed incoming
//!    direction, measured clockwise in `atan2` terms; going straight back is
//!    only allowed at a dead end. The walk closes when it returns to its
//!    start node.
//! 5. **Filter**: bounded faces come out with positive signed area, the
//!    outer face negative. Only faces above `FACE_AREA_EPSILON` are pieces.
//!
//! Pieces come out with positive signed area whatever the input winding.

use crate::core::point::{distance_sq, Point};
use crate::hits::{HitAnalysis, HitLocation};
use crate::primitives::signed_area;
use config::constants::{FACE_AREA_EPSILON, FACE_TRACE_STEP_FACTOR};
use std::collections::HashSet;
use std::f64::consts::TAU;

/// Planar graph of the boundary cycle plus the cut chords.
struct CutGraph {
    /// Node positions, indexed by node id.
    points: Vec<Point>,
    /// Boundary cycle in polygon order, hit nodes included.
    cycle: Vec<usize>,
    /// Undirected adjacency, indexed by node id.
    adjacency: Vec<Vec<usize>>,
}

impl CutGraph {
    fn build(vertices: &[Point], analysis: &HitAnalysis) -> Self {
        let n = vertices.len();
        let mut points = vertices.to_vec();
        let mut hit_nodes = Vec::with_capacity(analysis.hits.len());
        let mut on_edge: Vec<Vec<usize>> = vec![Vec::new(); n];

        for hit in &analysis.hits {
            match hit.location {
                HitLocation::Vertex(i) => hit_nodes.push(i),
                HitLocation::Edge(i) => {
                    let id = points.len();
                    points.push(hit.point);
                    on_edge[i].push(id);
                    hit_nodes.push(id);
                }
            }
        }

        let mut cycle = Vec::with_capacity(points.len());
        for (i, inserted) in on_edge.iter_mut().enumerate() {
            let origin = vertices[i];
            inserted.sort_by(|&a, &b| {
                distance_sq(origin, points[a]).total_cmp(&distance_sq(origin, points[b]))
            });
            cycle.push(i);
            cycle.extend(inserted.iter().copied());
        }

        let len = cycle.len();
        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); points.len()];
        for k in 0..len {
            let node = cycle[k];
            adjacency[node].push(cycle[(k + 1) % len]);
            adjacency[node].push(cycle[(k + len - 1) % len]);
        }

        for segment in &analysis.segments {
            let (u, v) = (hit_nodes[segment.start], hit_nodes[segment.end]);
            if !adjacency[u].contains(&v) {
                adjacency[u].push(v);
                adjacency[v].push(u);
            }
        }

        Self {
            points,
            cycle,
            adjacency,
        }
    }

    /// Next node after arriving at `at` from `from`.
    fn turn(&self, from: usize, at: usize) -> Option<usize> {
        let center = self.points[at];
        let entry = angle(self.points[from] - center);

        self.adjacency[at]
            .iter()
            .map(|&candidate| {
                let diff = if candidate == from {
                    TAU
                } else {
                    (entry - angle(self.points[candidate] - center)).rem_euclid(TAU)
                };
                (candidate, diff)
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(candidate, _)| candidate)
    }

    /// Walks one face starting with the directed edge `start -> first`.
    fn trace(
        &self,
        start: usize,
        first: usize,
        visited: &mut HashSet<(usize, usize)>,
    ) -> Option<Vec<Point>> {
        let limit = self.cycle.len() * FACE_TRACE_STEP_FACTOR;
        let mut face = Vec::new();
        let (mut curr, mut next) = (start, first);
        let mut steps = 0;

        loop {
            visited.insert((curr, next));
            face.push(self.points[curr]);

            if next == start {
                return Some(face);
            }
            if steps > limit {
                log::warn!("face walk from node {start} did not close after {limit} steps");
                return None;
            }
            steps += 1;

            let after = self.turn(curr, next)?;
            curr = next;
            next = after;
        }
    }
}

fn angle(v: Point) -> f64 {
    v.y.atan2(v.x)
}

/// Splits `vertices` by tracing the faces of the cut graph.
///
/// Returns `None` when no face survives the area filter.
pub(crate) fn split_graph(vertices: &[Point], analysis: &HitAnalysis) -> Option<Vec<Vec<Point>>> {
    let graph = CutGraph::build(vertices, analysis);
    let mut visited = HashSet::new();
    let mut pieces = Vec::new();

    for &u in &graph.cycle {
        for &v in &graph.adjacency[u] {
            if visited.contains(&(u, v)) {
                continue;
            }
            let Some(face) = graph.trace(u, v, &mut visited) else {
                continue;
            };
            if face.len() > 2 && signed_area(&face) > FACE_AREA_EPSILON {
                pieces.push(face);
            }
        }
    }

    log::debug!(
        "graph split: {} nodes, {} chords, {} pieces",
        graph.points.len(),
        analysis.segments.len(),
        pieces.len()
    );

    if pieces.is_empty() {
        None
    } else {
        Some(pieces)
    }
}
