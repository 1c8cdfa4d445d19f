//! WASM-facing entry points for the polygon slicing core.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Shapes cross the boundary as JSON arrays of `{x, y}`
//! objects, the same form the game stores its levels in. Native tests call
//! the `*_internal` helpers, which take and return Rust types and surface
//! [`BindingError`] instead of a `JsValue`.
//!
//! ```
//! use polyslice::Point;
//!
//! let square = r#"[{"x":0,"y":0},{"x":10,"y":0},{"x":10,"y":10},{"x":0,"y":10}]"#;
//! let pieces = polyslice_wasm::split_polygon_internal(
//!     square,
//!     Point::new(5.0, -5.0),
//!     Point::new(5.0, 15.0),
//! )
//! .unwrap()
//! .unwrap();
//! assert_eq!(pieces.len(), 2);
//! ```

mod pieces;

pub use pieces::PieceSet;

use config::constants::DEFAULT_SIMILARITY_TOLERANCE;
use polyslice::{Challenge, CutValidation, Evaluation, Point, Polygon, ScoringConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::prelude::*;

// =============================================================================
// ERRORS AND WIRE TYPES
// =============================================================================

/// Errors raised while decoding arguments from JavaScript.
#[derive(Error, Debug)]
pub enum BindingError {
    /// An argument was not valid JSON of the expected shape.
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// The geometry core rejected the input.
    #[error(transparent)]
    Geometry(#[from] polyslice::Error),
}

/// Result type alias for binding helpers.
pub type Result<T> = std::result::Result<T, BindingError>;

/// A point as JavaScript sees it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JsPoint {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate, growing downwards on screen.
    pub y: f64,
}

impl From<JsPoint> for Point {
    fn from(p: JsPoint) -> Self {
        Point::new(p.x, p.y)
    }
}

impl From<Point> for JsPoint {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// Evaluation as reported to the results overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    /// Full grade.
    #[serde(flatten)]
    pub evaluation: Evaluation,
    /// Player-facing failure text; empty when the attempt passed.
    pub failure_reason: String,
}

impl From<Evaluation> for EvaluationReport {
    fn from(evaluation: Evaluation) -> Self {
        let failure_reason = evaluation
            .failure
            .map(|reason| reason.to_string())
            .unwrap_or_default();
        Self {
            evaluation,
            failure_reason,
        }
    }
}

fn parse_ring(json: &str) -> Result<Vec<Point>> {
    let points: Vec<JsPoint> = serde_json::from_str(json)?;
    Ok(points.into_iter().map(Point::from).collect())
}

fn parse_rings(json: &str) -> Result<Vec<Vec<Point>>> {
    let rings: Vec<Vec<JsPoint>> = serde_json::from_str(json)?;
    Ok(rings
        .into_iter()
        .map(|ring| ring.into_iter().map(Point::from).collect())
        .collect())
}

fn to_js_points(ring: Vec<Point>) -> Vec<JsPoint> {
    ring.into_iter().map(JsPoint::from).collect()
}

fn js_error(err: BindingError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// =============================================================================
// PANIC HOOK
// =============================================================================

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "polyslice-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// =============================================================================
// SPLITTING
// =============================================================================

/// Splits a polygon along the line through `(sx, sy)` and `(ex, ey)`.
///
/// Returns a JSON array of pieces (each an array of `{x, y}`), or the
/// string `null` when the line does not divide the shape.
///
/// # Errors
/// Returns a JavaScript error value when `vertices_json` cannot be parsed
/// or does not describe a polygon.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const pieces = JSON.parse(split_polygon(JSON.stringify(shape), 0, -150, 0, 150));
/// // if (pieces === null) rejectCut();
/// ```
#[wasm_bindgen]
pub fn split_polygon(
    vertices_json: &str,
    sx: f64,
    sy: f64,
    ex: f64,
    ey: f64,
) -> std::result::Result<String, JsValue> {
    split_polygon_internal(vertices_json, Point::new(sx, sy), Point::new(ex, ey))
        .and_then(|pieces| Ok(serde_json::to_string(&pieces)?))
        .map_err(js_error)
}

/// Host-only twin of [`split_polygon`].
///
/// Rings with fewer than three vertices or non-finite coordinates are
/// rejected with [`BindingError::Geometry`].
pub fn split_polygon_internal(
    vertices_json: &str,
    line_start: Point,
    line_end: Point,
) -> Result<Option<Vec<Vec<JsPoint>>>> {
    let polygon = Polygon::try_new(parse_ring(vertices_json)?)?;
    Ok(polyslice::split(&polygon, line_start, line_end)
        .map(|pieces| pieces.into_iter().map(to_js_points).collect()))
}

/// Splits a polygon given as flat `[x, y, x, y, ...]` coordinates.
///
/// Returns `undefined` when the line does not divide the shape.
#[wasm_bindgen]
pub fn split_polygon_flat(coords: &[f64], sx: f64, sy: f64, ex: f64, ey: f64) -> Option<PieceSet> {
    split_polygon_flat_internal(coords, Point::new(sx, sy), Point::new(ex, ey))
}

/// Host-only twin of [`split_polygon_flat`]. A trailing odd coordinate is
/// ignored.
pub fn split_polygon_flat_internal(
    coords: &[f64],
    line_start: Point,
    line_end: Point,
) -> Option<PieceSet> {
    let vertices: Vec<Point> = coords
        .chunks_exact(2)
        .map(|xy| Point::new(xy[0], xy[1]))
        .collect();
    polyslice::split(&vertices, line_start, line_end).map(|pieces| PieceSet::from_pieces(&pieces))
}

/// Checks a shape and cut before splitting.
///
/// `vertices_json` may be omitted when no shape is selected. Returns JSON
/// `{"isValid": bool, "reason": string | null}`.
///
/// # Errors
/// Returns a JavaScript error value when `vertices_json` cannot be parsed.
#[wasm_bindgen]
pub fn validate_cut(
    vertices_json: Option<String>,
    sx: f64,
    sy: f64,
    ex: f64,
    ey: f64,
) -> std::result::Result<String, JsValue> {
    validate_cut_internal(
        vertices_json.as_deref(),
        Point::new(sx, sy),
        Point::new(ex, ey),
    )
    .and_then(|verdict| Ok(serde_json::to_string(&verdict)?))
    .map_err(js_error)
}

/// Host-only twin of [`validate_cut`].
pub fn validate_cut_internal(
    vertices_json: Option<&str>,
    line_start: Point,
    line_end: Point,
) -> Result<CutValidation> {
    let polygon = vertices_json.map(parse_ring).transpose()?.map(Polygon::new);
    Ok(polyslice::validate_cut(polygon.as_ref(), line_start, line_end).into())
}

// =============================================================================
// MEASURES
// =============================================================================

/// Signed shoelace area (positive for clockwise on screen).
///
/// # Errors
/// Returns a JavaScript error value when `vertices_json` cannot be parsed.
#[wasm_bindgen]
pub fn polygon_area(vertices_json: &str) -> std::result::Result<f64, JsValue> {
    polygon_area_internal(vertices_json).map_err(js_error)
}

/// Host-only twin of [`polygon_area`].
pub fn polygon_area_internal(vertices_json: &str) -> Result<f64> {
    Ok(polyslice::signed_area(&parse_ring(vertices_json)?))
}

/// Area-weighted centroid as JSON `{x, y}`.
///
/// # Errors
/// Returns a JavaScript error value when `vertices_json` cannot be parsed.
#[wasm_bindgen]
pub fn polygon_centroid(vertices_json: &str) -> std::result::Result<String, JsValue> {
    polygon_centroid_internal(vertices_json)
        .and_then(|c| Ok(serde_json::to_string(&c)?))
        .map_err(js_error)
}

/// Host-only twin of [`polygon_centroid`].
pub fn polygon_centroid_internal(vertices_json: &str) -> Result<JsPoint> {
    Ok(polyslice::centroid(&parse_ring(vertices_json)?).into())
}

/// Sum of edge lengths.
///
/// # Errors
/// Returns a JavaScript error value when `vertices_json` cannot be parsed.
#[wasm_bindgen]
pub fn polygon_perimeter(vertices_json: &str) -> std::result::Result<f64, JsValue> {
    polygon_perimeter_internal(vertices_json).map_err(js_error)
}

/// Host-only twin of [`polygon_perimeter`].
pub fn polygon_perimeter_internal(vertices_json: &str) -> Result<f64> {
    Ok(polyslice::perimeter(&parse_ring(vertices_json)?))
}

/// Returns true if `(px, py)` is strictly inside the polygon.
///
/// # Errors
/// Returns a JavaScript error value when `vertices_json` cannot be parsed.
#[wasm_bindgen]
pub fn is_point_inside(vertices_json: &str, px: f64, py: f64) -> std::result::Result<bool, JsValue> {
    point_relation_internal(vertices_json, Point::new(px, py))
        .map(|relation| relation == -1)
        .map_err(js_error)
}

/// Classifies `(px, py)`: `-1` inside, `0` boundary, `1` outside.
///
/// # Errors
/// Returns a JavaScript error value when `vertices_json` cannot be parsed.
#[wasm_bindgen]
pub fn point_relation(vertices_json: &str, px: f64, py: f64) -> std::result::Result<i8, JsValue> {
    point_relation_internal(vertices_json, Point::new(px, py)).map_err(js_error)
}

/// Host-only twin of [`point_relation`].
pub fn point_relation_internal(vertices_json: &str, point: Point) -> Result<i8> {
    Ok(polyslice::point_relation(point, &parse_ring(vertices_json)?).as_i8())
}

/// Removes collinear vertices and returns the cleaned ring as JSON.
///
/// # Errors
/// Returns a JavaScript error value when `vertices_json` cannot be parsed.
#[wasm_bindgen]
pub fn clean_collinear_vertices(vertices_json: &str) -> std::result::Result<String, JsValue> {
    clean_collinear_vertices_internal(vertices_json)
        .and_then(|ring| Ok(serde_json::to_string(&ring)?))
        .map_err(js_error)
}

/// Host-only twin of [`clean_collinear_vertices`].
pub fn clean_collinear_vertices_internal(vertices_json: &str) -> Result<Vec<JsPoint>> {
    let ring = parse_ring(vertices_json)?;
    Ok(to_js_points(polyslice::clean_collinear_vertices(&ring)))
}

// =============================================================================
// SCORING
// =============================================================================

/// Coarse congruence test between two rings.
///
/// `tolerance` defaults to 0.05 when omitted.
///
/// # Errors
/// Returns a JavaScript error value when either ring cannot be parsed.
#[wasm_bindgen]
pub fn is_geometrically_similar(
    a_json: &str,
    b_json: &str,
    tolerance: Option<f64>,
) -> std::result::Result<bool, JsValue> {
    is_geometrically_similar_internal(a_json, b_json, tolerance).map_err(js_error)
}

/// Host-only twin of [`is_geometrically_similar`].
pub fn is_geometrically_similar_internal(
    a_json: &str,
    b_json: &str,
    tolerance: Option<f64>,
) -> Result<bool> {
    let a = parse_ring(a_json)?;
    let b = parse_ring(b_json)?;
    Ok(polyslice::is_geometrically_similar(
        &a,
        &b,
        tolerance.unwrap_or(DEFAULT_SIMILARITY_TOLERANCE),
    ))
}

/// Grades the pieces on the board.
///
/// `pieces_json` is an array of rings; `config_json` optionally overrides
/// scoring thresholds (camelCase `ScoringConfig` fields). Returns the
/// [`EvaluationReport`] as JSON.
///
/// # Errors
/// Returns a JavaScript error value when an argument cannot be parsed.
#[wasm_bindgen]
pub fn evaluate_solution(
    pieces_json: &str,
    target_pieces: u32,
    max_cuts: u32,
    cuts_used: u32,
    config_json: Option<String>,
) -> std::result::Result<String, JsValue> {
    let challenge = Challenge {
        target_pieces: target_pieces as usize,
        max_cuts: max_cuts as usize,
    };
    evaluate_solution_internal(
        pieces_json,
        &challenge,
        cuts_used as usize,
        config_json.as_deref(),
    )
    .and_then(|report| Ok(serde_json::to_string(&report)?))
    .map_err(js_error)
}

/// Host-only twin of [`evaluate_solution`].
pub fn evaluate_solution_internal(
    pieces_json: &str,
    challenge: &Challenge,
    cuts_used: usize,
    config_json: Option<&str>,
) -> Result<EvaluationReport> {
    let pieces = parse_rings(pieces_json)?;
    let config = match config_json {
        Some(json) => serde_json::from_str(json)?,
        None => ScoringConfig::default(),
    };
    Ok(polyslice::evaluate_solution(&pieces, challenge, cuts_used, &config).into())
}

#[cfg(test)]
mod tests;
