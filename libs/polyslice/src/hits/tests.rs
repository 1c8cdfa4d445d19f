//! Unit tests for hit detection.

use super::*;

fn square() -> Vec<Point> {
    vec![
        Point::new(-100.0, -100.0),
        Point::new(100.0, -100.0),
        Point::new(100.0, 100.0),
        Point::new(-100.0, 100.0),
    ]
}

/// Three prongs pointing up from a solid base.
///
/// ```text
///   +--+  +--+  +--+
///   |  |  |  |  |  |
///   |  +--+  +--+  |
///   |              |
///   +--------------+
/// ```
fn fork() -> Vec<Point> {
    vec![
        Point::new(-100.0, -100.0),
        Point::new(-60.0, -100.0),
        Point::new(-60.0, 0.0),
        Point::new(-20.0, 0.0),
        Point::new(-20.0, -100.0),
        Point::new(20.0, -100.0),
        Point::new(20.0, 0.0),
        Point::new(60.0, 0.0),
        Point::new(60.0, -100.0),
        Point::new(100.0, -100.0),
        Point::new(100.0, 100.0),
        Point::new(-100.0, 100.0),
    ]
}

fn hit(location: HitLocation, x: f64, y: f64, dist: f64) -> Hit {
    Hit {
        location,
        point: Point::new(x, y),
        dist,
    }
}

// =============================================================================
// RAW HIT TESTS
// =============================================================================

#[test]
fn test_raw_hits_vertical_cut_through_square() {
    let hits = raw_hits(&square(), Point::new(0.0, -150.0), Point::new(0.0, 150.0));
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].location, HitLocation::Edge(0));
    assert_eq!(hits[0].point, Point::new(0.0, -100.0));
    assert_eq!(hits[1].location, HitLocation::Edge(2));
    assert_eq!(hits[1].point, Point::new(0.0, 100.0));
    assert!(hits[0].dist < hits[1].dist);
}

#[test]
fn test_raw_hits_sorted_against_line_direction() {
    // Reversing the cut direction reverses the hit order
    let hits = raw_hits(&square(), Point::new(0.0, 150.0), Point::new(0.0, -150.0));
    assert_eq!(hits[0].location, HitLocation::Edge(2));
    assert_eq!(hits[1].location, HitLocation::Edge(0));
}

#[test]
fn test_raw_hits_snap_to_vertices() {
    let hits = raw_hits(&square(), Point::new(-150.0, -150.0), Point::new(150.0, 150.0));
    // Every edge touches the diagonal at one of its endpoints
    assert_eq!(hits.len(), 4);
    assert!(hits.iter().all(|h| h.location.is_vertex()));
    assert_eq!(hits[0].location, HitLocation::Vertex(0));
    assert_eq!(hits[3].location, HitLocation::Vertex(2));
}

#[test]
fn test_raw_hits_vertex_hit_uses_vertex_point() {
    // Line passes within snap distance of (100, -100) but not exactly through it
    let hits = raw_hits(&square(), Point::new(99.9995, -150.0), Point::new(99.9995, 150.0));
    let corner = hits
        .iter()
        .find(|h| h.location == HitLocation::Vertex(1))
        .unwrap();
    assert_eq!(corner.point, Point::new(100.0, -100.0));
}

// =============================================================================
// DEDUP TESTS
// =============================================================================

#[test]
fn test_dedup_prefers_vertex_over_edge() {
    let merged = dedup_hits(vec![
        hit(HitLocation::Edge(3), 10.0, 10.0, 1.0),
        hit(HitLocation::Vertex(4), 10.0, 10.0005, 1.0),
    ]);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].location, HitLocation::Vertex(4));
}

#[test]
fn test_dedup_keeps_first_vertex() {
    let merged = dedup_hits(vec![
        hit(HitLocation::Vertex(4), 10.0, 10.0, 1.0),
        hit(HitLocation::Edge(3), 10.0, 10.0, 1.0),
    ]);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].location, HitLocation::Vertex(4));
}

#[test]
fn test_dedup_keeps_distinct_points() {
    let merged = dedup_hits(vec![
        hit(HitLocation::Edge(0), 0.0, 0.0, 0.0),
        hit(HitLocation::Edge(1), 0.0, 1.0, 1.0),
    ]);
    assert_eq!(merged.len(), 2);
}

#[test]
fn test_dedup_empty() {
    assert!(dedup_hits(Vec::new()).is_empty());
}

// =============================================================================
// FIND_HITS TESTS
// =============================================================================

#[test]
fn test_find_hits_diagonal_has_no_phantom_hits() {
    let analysis = find_hits(&square(), Point::new(-150.0, -150.0), Point::new(150.0, 150.0)).unwrap();
    assert_eq!(analysis.hits.len(), 2);
    assert_eq!(analysis.hits[0].location, HitLocation::Vertex(0));
    assert_eq!(analysis.hits[1].location, HitLocation::Vertex(2));
    assert_eq!(analysis.segments, vec![CutSegment { start: 0, end: 1 }]);
    assert_eq!(analysis.path(), SplitPath::Simple);
}

#[test]
fn test_find_hits_tangent_returns_none() {
    let triangle = [
        Point::new(0.0, -120.0),
        Point::new(120.0, 80.0),
        Point::new(-120.0, 80.0),
    ];
    // Horizontal line grazing the apex
    assert!(find_hits(&triangle, Point::new(-200.0, -120.0), Point::new(200.0, -120.0)).is_none());
}

#[test]
fn test_find_hits_corner_graze_returns_none() {
    // Touches only the (100, -100) corner
    assert!(find_hits(&square(), Point::new(50.0, -150.0), Point::new(150.0, -50.0)).is_none());
}

#[test]
fn test_find_hits_miss_returns_none() {
    assert!(find_hits(&square(), Point::new(500.0, -10.0), Point::new(500.0, 10.0)).is_none());
}

#[test]
fn test_find_hits_along_edge_returns_none() {
    // Collinear with the top edge: both hits are corners and the chord is boundary
    assert!(find_hits(&square(), Point::new(-200.0, -100.0), Point::new(200.0, -100.0)).is_none());
}

#[test]
fn test_find_hits_fork_routes_to_graph() {
    let analysis = find_hits(&fork(), Point::new(-150.0, -50.0), Point::new(150.0, -50.0)).unwrap();
    assert_eq!(analysis.hits.len(), 6);
    let xs: Vec<f64> = analysis.hits.iter().map(|h| h.point.x).collect();
    assert_eq!(xs, vec![-100.0, -60.0, -20.0, 20.0, 60.0, 100.0]);
    // Gaps between prongs are outside
    assert_eq!(
        analysis.segments,
        vec![
            CutSegment { start: 0, end: 1 },
            CutSegment { start: 2, end: 3 },
            CutSegment { start: 4, end: 5 },
        ]
    );
    assert_eq!(analysis.path(), SplitPath::Graph);
}

#[test]
fn test_find_hits_base_of_fork_is_simple() {
    let analysis = find_hits(&fork(), Point::new(-150.0, 50.0), Point::new(150.0, 50.0)).unwrap();
    assert_eq!(analysis.hits.len(), 2);
    assert_eq!(analysis.hits[0].location, HitLocation::Edge(11));
    assert_eq!(analysis.hits[1].location, HitLocation::Edge(9));
    assert_eq!(analysis.path(), SplitPath::Simple);
}

#[test]
fn test_hit_location_helpers() {
    assert_eq!(HitLocation::Vertex(3).index(), 3);
    assert_eq!(HitLocation::Edge(7).index(), 7);
    assert!(HitLocation::Vertex(0).is_vertex());
    assert!(!HitLocation::Edge(0).is_vertex());
}
