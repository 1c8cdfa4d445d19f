use super::*;

#[test]
fn test_point_creation() {
    let p = Point::new(1.0, 2.0);
    assert_eq!(p.x, 1.0);
    assert_eq!(p.y, 2.0);
}

#[test]
fn test_distance_sq_symmetric() {
    let a = Point::new(-1.0, 2.0);
    let b = Point::new(2.0, -2.0);
    assert_eq!(distance_sq(a, b), 25.0);
    assert_eq!(distance_sq(b, a), 25.0);
}

#[test]
fn test_project_dist_orders_along_line() {
    let start = Point::new(0.0, -150.0);
    let end = Point::new(0.0, 150.0);
    let near = project_dist(start, end, Point::new(0.0, -100.0));
    let far = project_dist(start, end, Point::new(0.0, 100.0));
    assert!(near < far);
    // Unnormalized: 50 * 300
    assert_eq!(near, 15000.0);
}

#[test]
fn test_project_dist_negative_behind_start() {
    let d = project_dist(Point::ZERO, Point::new(1.0, 0.0), Point::new(-5.0, 3.0));
    assert_eq!(d, -5.0);
}

#[test]
fn test_midpoint() {
    assert_eq!(midpoint(Point::new(0.0, 0.0), Point::new(4.0, -2.0)), Point::new(2.0, -1.0));
}
