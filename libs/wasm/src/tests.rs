//! Tests for the WASM-facing helpers.

use super::*;

const SQUARE: &str = r#"[
    {"x": -100, "y": -100},
    {"x": 100, "y": -100},
    {"x": 100, "y": 100},
    {"x": -100, "y": 100}
]"#;

const FORK: &str = r#"[
    {"x": -100, "y": -100}, {"x": -60, "y": -100}, {"x": -60, "y": 0},
    {"x": -20, "y": 0}, {"x": -20, "y": -100}, {"x": 20, "y": -100},
    {"x": 20, "y": 0}, {"x": 60, "y": 0}, {"x": 60, "y": -100},
    {"x": 100, "y": -100}, {"x": 100, "y": 100}, {"x": -100, "y": 100}
]"#;

/// Confirms a vertical cut halves the square.
#[test]
fn split_square_returns_two_pieces() {
    let pieces = split_polygon_internal(SQUARE, Point::new(0.0, -150.0), Point::new(0.0, 150.0))
        .expect("valid input")
        .expect("line crosses the square");

    assert_eq!(pieces.len(), 2);
    assert_eq!(pieces[0][0], JsPoint { x: 0.0, y: -100.0 });
}

/// Ensures a missed cut serializes to JSON `null`.
#[test]
fn split_miss_is_null() {
    let pieces =
        split_polygon_internal(SQUARE, Point::new(500.0, 0.0), Point::new(500.0, 1.0)).unwrap();
    assert_eq!(pieces, None);
    assert_eq!(serde_json::to_string(&pieces).unwrap(), "null");
}

/// Pieces serialize as arrays of `{x, y}` objects.
#[test]
fn split_output_uses_js_point_shape() {
    let pieces = split_polygon_internal(SQUARE, Point::new(0.0, -150.0), Point::new(0.0, 150.0))
        .unwrap()
        .unwrap();
    let json = serde_json::to_string(&pieces[0]).unwrap();
    assert!(json.starts_with(r#"[{"x":0.0,"y":-100.0}"#), "{json}");
}

/// Tests that malformed JSON surfaces explicit errors.
#[test]
fn split_rejects_bad_json() {
    let err = split_polygon_internal("not json", Point::ZERO, Point::X).unwrap_err();
    assert!(matches!(err, BindingError::Json(_)));
    assert!(err.to_string().starts_with("invalid JSON input"));
}

/// Rings that cannot form a polygon are reported, not split.
#[test]
fn split_rejects_degenerate_ring() {
    let err = split_polygon_internal(r#"[{"x":0,"y":0},{"x":1,"y":0}]"#, Point::ZERO, Point::Y)
        .unwrap_err();
    assert!(matches!(
        err,
        BindingError::Geometry(polyslice::Error::TooFewVertices(2))
    ));
}

/// Tests that the flat-buffer split packs every piece.
#[test]
fn split_flat_packs_fork_pieces() {
    let coords = [
        -100.0, -100.0, -60.0, -100.0, -60.0, 0.0, -20.0, 0.0, -20.0, -100.0, 20.0, -100.0, 20.0,
        0.0, 60.0, 0.0, 60.0, -100.0, 100.0, -100.0, 100.0, 100.0, -100.0, 100.0,
    ];
    let set = split_polygon_flat_internal(&coords, Point::new(-150.0, -50.0), Point::new(150.0, -50.0))
        .expect("line crosses the fork");

    assert_eq!(set.piece_count(), 4);
    assert!(!set.is_empty());
    for i in 0..4 {
        let ring = set.piece(i).expect("piece in range");
        assert!(ring.len() >= 6);
        assert_eq!(ring.len() % 2, 0);
    }
    assert_eq!(set.piece(4), None);
}

/// Tests the offsets bookkeeping of an empty set.
#[test]
fn piece_set_empty() {
    let set = PieceSet::from_pieces(&[]);
    assert_eq!(set.piece_count(), 0);
    assert!(set.is_empty());
    assert_eq!(set.piece(0), None);
}

#[test]
fn validate_reports_reasons() {
    let ok = validate_cut_internal(Some(SQUARE), Point::ZERO, Point::new(1.0, 1.0)).unwrap();
    assert!(ok.is_valid);

    let missing = validate_cut_internal(None, Point::ZERO, Point::new(1.0, 1.0)).unwrap();
    assert!(!missing.is_valid);
    assert_eq!(missing.reason.as_deref(), Some("No valid shape to cut."));

    let short = validate_cut_internal(Some(SQUARE), Point::ZERO, Point::ZERO).unwrap();
    assert_eq!(short.reason.as_deref(), Some("Line is too short."));

    let json = serde_json::to_string(&short).unwrap();
    assert_eq!(json, r#"{"isValid":false,"reason":"Line is too short."}"#);
}

#[test]
fn measures_match_core() {
    assert_eq!(polygon_area_internal(SQUARE).unwrap(), 40000.0);
    assert_eq!(polygon_perimeter_internal(SQUARE).unwrap(), 800.0);

    let c = polygon_centroid_internal(SQUARE).unwrap();
    assert!(c.x.abs() < 1e-9 && c.y.abs() < 1e-9);

    assert_eq!(point_relation_internal(SQUARE, Point::ZERO).unwrap(), -1);
    assert_eq!(point_relation_internal(SQUARE, Point::new(100.0, 0.0)).unwrap(), 0);
    assert_eq!(point_relation_internal(SQUARE, Point::new(300.0, 0.0)).unwrap(), 1);
}

#[test]
fn clean_collinear_drops_midpoints() {
    let ring = r#"[{"x":0,"y":0},{"x":5,"y":0},{"x":10,"y":0},{"x":10,"y":10},{"x":0,"y":10}]"#;
    let cleaned = clean_collinear_vertices_internal(ring).unwrap();
    assert_eq!(cleaned.len(), 4);
    assert!(!cleaned.contains(&JsPoint { x: 5.0, y: 0.0 }));
}

#[test]
fn similarity_uses_default_tolerance() {
    let a = r#"[{"x":0,"y":0},{"x":10,"y":0},{"x":10,"y":10},{"x":0,"y":10}]"#;
    let b = r#"[{"x":0,"y":0},{"x":10,"y":0},{"x":10,"y":11},{"x":0,"y":11}]"#;
    assert!(!is_geometrically_similar_internal(a, b, None).unwrap());
    assert!(is_geometrically_similar_internal(a, b, Some(0.15)).unwrap());
}

/// Grades the fork split end to end.
#[test]
fn evaluate_fork_attempt() {
    let pieces = split_polygon_internal(FORK, Point::new(-150.0, -50.0), Point::new(150.0, -50.0))
        .unwrap()
        .unwrap();
    let pieces_json = serde_json::to_string(&pieces).unwrap();

    let challenge = Challenge {
        target_pieces: 4,
        max_cuts: 1,
    };
    let report = evaluate_solution_internal(&pieces_json, &challenge, 1, None).unwrap();
    assert_eq!(report.evaluation.stars, 0);
    assert_eq!(report.failure_reason, "Pieces are too uneven in area.");

    let value: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["stars"], 0);
    assert_eq!(value["wrongPieceCount"], false);
    assert_eq!(value["failureReason"], "Pieces are too uneven in area.");
}

#[test]
fn evaluate_passing_attempt_has_empty_reason() {
    let halves = r#"[
        [{"x":0,"y":0},{"x":5,"y":0},{"x":5,"y":10},{"x":0,"y":10}],
        [{"x":5,"y":0},{"x":10,"y":0},{"x":10,"y":10},{"x":5,"y":10}]
    ]"#;
    let challenge = Challenge {
        target_pieces: 2,
        max_cuts: 1,
    };
    let report = evaluate_solution_internal(halves, &challenge, 1, None).unwrap();
    assert_eq!(report.evaluation.stars, 3);
    assert!(report.evaluation.perfect_symmetry);
    assert!(report.failure_reason.is_empty());
}

#[test]
fn evaluate_accepts_config_overrides() {
    let uneven = r#"[
        [{"x":0,"y":0},{"x":6,"y":0},{"x":6,"y":10},{"x":0,"y":10}],
        [{"x":6,"y":0},{"x":10,"y":0},{"x":10,"y":10},{"x":6,"y":10}]
    ]"#;
    let challenge = Challenge {
        target_pieces: 2,
        max_cuts: 1,
    };
    let strict = evaluate_solution_internal(uneven, &challenge, 1, None).unwrap();
    assert_eq!(strict.evaluation.stars, 0);

    let lenient =
        evaluate_solution_internal(uneven, &challenge, 1, Some(r#"{"oneStarMaxError": 0.25}"#))
            .unwrap();
    assert_eq!(lenient.evaluation.stars, 1);
}
