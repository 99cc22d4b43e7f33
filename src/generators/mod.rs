//! Site layouts used to seed diagrams: regular polygon, circle, grid and uniform random.
//!
//! Every generator is a pure function of its shape parameters and the canvas; only
//! [`random`] draws from a caller supplied source.

use std::f64::consts::{FRAC_PI_2, TAU};

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::bounds::Canvas;
use crate::error::{VoronoiError, VoronoiResult};
use crate::geometry::Point;

/// Fraction of each axis kept free on both sides by [`grid`].
pub const GRID_MARGIN: f64 = 0.15;
/// Fraction of each axis kept free on both sides by [`random`].
pub const RANDOM_MARGIN: f64 = 0.1;

fn ring(count: usize, radius: f64, start_angle: f64, canvas: Canvas) -> Vec<Point> {
    let center = canvas.center();
    let angle_step = TAU / count as f64;
    (0..count)
        .map(|i| {
            let angle = start_angle + i as f64 * angle_step;
            Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}

/// Vertices of a regular polygon with `sides` corners around the canvas center.
///
/// The first vertex sits at the top (angle -π/2), the rest follow clockwise in screen
/// coordinates, each `2π / sides` apart.
pub fn regular_polygon(sides: usize, radius: f64, canvas: Canvas) -> Vec<Point> {
    ring(sides, radius, -FRAC_PI_2, canvas)
}

/// `count` points evenly spaced on a circle around the canvas center, starting at angle 0.
pub fn circle(count: usize, radius: f64, canvas: Canvas) -> Vec<Point> {
    ring(count, radius, 0.0, canvas)
}

/// A `rows x cols` lattice inset by [`GRID_MARGIN`] on each axis, emitted row by row.
///
/// # Errors
///
/// Returns [`VoronoiError::InvalidArgument`] if `rows` or `cols` is below 2, the lattice
/// spacing is undefined for a single row or column.
pub fn grid(rows: usize, cols: usize, canvas: Canvas) -> VoronoiResult<Vec<Point>> {
    if rows < 2 {
        let message = format!("need at least 2 rows, got {}", rows);
        return Err(VoronoiError::invalid_argument("rows", message));
    }
    if cols < 2 {
        let message = format!("need at least 2 columns, got {}", cols);
        return Err(VoronoiError::invalid_argument("cols", message));
    }

    let (offset, extent) = canvas.inset(GRID_MARGIN);
    let step_x = extent[0] / (cols - 1) as f64;
    let step_y = extent[1] / (rows - 1) as f64;

    let mut points = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            points.push(Point::new(offset[0] + c as f64 * step_x, offset[1] + r as f64 * step_y));
        }
    }
    Ok(points)
}

/// `count` points drawn uniformly from the canvas inset by [`RANDOM_MARGIN`].
///
/// Each coordinate consumes one uniform `[0, 1)` sample from `rng`, x before y.
pub fn random<R: Rng + ?Sized>(count: usize, canvas: Canvas, rng: &mut R) -> Vec<Point> {
    let (offset, extent) = canvas.inset(RANDOM_MARGIN);
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let x = offset[0] + rng.r#gen::<f64>() * extent[0];
        let y = offset[1] + rng.r#gen::<f64>() * extent[1];
        points.push(Point::new(x, y));
    }
    points
}

/// Same as [`random`] with a [`StdRng`] seeded from `seed`, reproducible across runs.
pub fn random_seeded(count: usize, canvas: Canvas, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    random(count, canvas, &mut rng)
}

pub(crate) fn get_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * 4294967296.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        123456789 // Fixed seed for tests
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_polygon_starts_at_top() {
        let pts = regular_polygon(4, 100.0, Canvas::default());
        assert_eq!(pts.len(), 4);
        assert!((pts[0].x - 400.0).abs() < 1e-9);
        assert!((pts[0].y - 200.0).abs() < 1e-9);
        // Next vertex is to the right of the center in screen coordinates.
        assert!((pts[1].x - 500.0).abs() < 1e-9);
        assert!((pts[1].y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_circle_starts_at_zero_angle() {
        let pts = circle(3, 50.0, Canvas::new(200.0, 200.0));
        assert!((pts[0].x - 150.0).abs() < 1e-9);
        assert!((pts[0].y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(regular_polygon(0, 10.0, Canvas::default()).is_empty());
        assert!(circle(0, 10.0, Canvas::default()).is_empty());
        assert!(random_seeded(0, Canvas::default(), 1).is_empty());
    }

    #[test]
    fn test_grid_corners() {
        let pts = grid(2, 3, Canvas::new(100.0, 100.0)).unwrap();
        assert_eq!(pts.len(), 6);
        assert!((pts[0].x - 15.0).abs() < 1e-9 && (pts[0].y - 15.0).abs() < 1e-9);
        assert!((pts[1].x - 50.0).abs() < 1e-9);
        assert!((pts[5].x - 85.0).abs() < 1e-9 && (pts[5].y - 85.0).abs() < 1e-9);
    }

    #[test]
    fn test_grid_rejects_single_row_or_column() {
        assert!(matches!(
            grid(1, 4, Canvas::default()),
            Err(VoronoiError::InvalidArgument { name: "rows", .. })
        ));
        assert!(matches!(
            grid(4, 1, Canvas::default()),
            Err(VoronoiError::InvalidArgument { name: "cols", .. })
        ));
        assert!(grid(0, 0, Canvas::default()).is_err());
    }

    #[test]
    fn test_random_uses_injected_source() {
        let mut zeros = StepRng::new(0, 0);
        let pts = random(3, Canvas::new(100.0, 50.0), &mut zeros);
        for p in pts {
            assert!((p.x - 10.0).abs() < 1e-9);
            assert!((p.y - 5.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_random_seeded_is_reproducible() {
        let a = random_seeded(20, Canvas::default(), 42);
        let b = random_seeded(20, Canvas::default(), 42);
        assert_eq!(a, b);
    }
}
