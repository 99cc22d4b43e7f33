use approx::assert_abs_diff_eq;
use rand::rngs::mock::StepRng;
use std::f64::consts::TAU;
use vorometric::generators::{circle, grid, random, random_seeded, regular_polygon};
use vorometric::{Canvas, Point, VoronoiError};

fn distinct(mut values: Vec<f64>) -> usize {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    values.dedup();
    values.len()
}

fn angle_between(center: Point, a: Point, b: Point) -> f64 {
    let (ax, ay) = (a.x - center.x, a.y - center.y);
    let (bx, by) = (b.x - center.x, b.y - center.y);
    let cos = (ax * bx + ay * by) / ((ax * ax + ay * ay).sqrt() * (bx * bx + by * by).sqrt());
    cos.clamp(-1.0, 1.0).acos()
}

#[test]
fn test_regular_polygon_oracle() {
    let canvas = Canvas::default();
    let center = canvas.center();
    for n in 3..=12 {
        let radius = 150.0;
        let pts = regular_polygon(n, radius, canvas);
        assert_eq!(pts.len(), n);
        for p in &pts {
            let r = ((p.x - center.x).powi(2) + (p.y - center.y).powi(2)).sqrt();
            assert_abs_diff_eq!(r, radius, epsilon = 1e-9);
        }
        for i in 0..n {
            let a = angle_between(center, pts[i], pts[(i + 1) % n]);
            assert_abs_diff_eq!(a, TAU / n as f64, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_circle_has_no_top_bias() {
    let canvas = Canvas::new(400.0, 400.0);
    let pts = circle(8, 100.0, canvas);
    assert_eq!(pts.len(), 8);
    assert_abs_diff_eq!(pts[0].x, 300.0, epsilon = 1e-9);
    assert_abs_diff_eq!(pts[0].y, 200.0, epsilon = 1e-9);
    let polygon = regular_polygon(8, 100.0, canvas);
    assert!((polygon[0].y - pts[0].y).abs() > 1.0);
}

#[test]
fn test_grid_distinct_coordinates() {
    for (rows, cols) in [(2, 2), (3, 5), (7, 4), (10, 10)] {
        let pts = grid(rows, cols, Canvas::default()).unwrap();
        assert_eq!(pts.len(), rows * cols);
        assert_eq!(distinct(pts.iter().map(|p| p.x).collect()), cols);
        assert_eq!(distinct(pts.iter().map(|p| p.y).collect()), rows);
    }
}

#[test]
fn test_grid_respects_margin() {
    let canvas = Canvas::new(1000.0, 500.0);
    let pts = grid(4, 4, canvas).unwrap();
    for p in pts {
        assert!(p.x >= 150.0 - 1e-9 && p.x <= 850.0 + 1e-9);
        assert!(p.y >= 75.0 - 1e-9 && p.y <= 425.0 + 1e-9);
    }
}

#[test]
fn test_grid_single_row_is_invalid() {
    let err = grid(1, 5, Canvas::default()).unwrap_err();
    assert!(matches!(err, VoronoiError::InvalidArgument { .. }));
    assert!(err.to_string().contains("rows"));
}

#[test]
fn test_random_inside_inset() {
    let canvas = Canvas::new(800.0, 600.0);
    let pts = random_seeded(500, canvas, 7);
    assert_eq!(pts.len(), 500);
    for p in pts {
        assert!(p.x >= 80.0 && p.x < 720.0);
        assert!(p.y >= 60.0 && p.y < 540.0);
    }
}

#[test]
fn test_random_extremes_of_source() {
    let canvas = Canvas::new(100.0, 100.0);
    let mut high = StepRng::new(u64::MAX, 0);
    let pts = random(2, canvas, &mut high);
    for p in pts {
        assert!(p.x < 90.0 && p.x > 89.99);
        assert!(p.y < 90.0 && p.y > 89.99);
    }
}
