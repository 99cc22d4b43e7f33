//! Free functions exposed to JavaScript. Canvas dimensions default to 800x600.

use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::bounds::Canvas;
use crate::generators;
use crate::geometry::{self, Point};
use crate::metric::MetricConfig;
use crate::wasm::utils::{parse_js_points, points_array, to_js_error};

/// Distance between `(x1, y1)` and `(x2, y2)`; unknown metric names use euclidean.
#[wasm_bindgen]
pub fn distance(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    metric: &str,
    p_value: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
) -> f64 {
    let config = MetricConfig::from_parts(metric, p_value, width, height);
    config.distance(&Point::new(x1, y1), &Point::new(x2, y2))
}

/// Mean of a sequence of `[x, y]` pairs, returned as `[x, y]`.
#[wasm_bindgen]
pub fn centroid(points: JsValue) -> Vec<f64> {
    geometry::centroid(&parse_js_points(&points)).to_array().to_vec()
}

#[wasm_bindgen(js_name = generateRegularPolygon)]
pub fn generate_regular_polygon(
    sides: usize,
    radius: f64,
    width: Option<f64>,
    height: Option<f64>,
) -> Array {
    let canvas = Canvas::from_options(width, height);
    points_array(&generators::regular_polygon(sides, radius, canvas))
}

#[wasm_bindgen(js_name = generateCircle)]
pub fn generate_circle(
    count: usize,
    radius: f64,
    width: Option<f64>,
    height: Option<f64>,
) -> Array {
    let canvas = Canvas::from_options(width, height);
    points_array(&generators::circle(count, radius, canvas))
}

#[wasm_bindgen(js_name = generateRandom)]
pub fn generate_random(count: usize, width: Option<f64>, height: Option<f64>) -> Array {
    let canvas = Canvas::from_options(width, height);
    points_array(&generators::random_seeded(count, canvas, generators::get_seed()))
}

/// Throws if `rows` or `cols` is below 2.
#[wasm_bindgen(js_name = generateGrid)]
pub fn generate_grid(
    rows: usize,
    cols: usize,
    width: Option<f64>,
    height: Option<f64>,
) -> Result<Array, JsError> {
    generators::grid(rows, cols, Canvas::from_options(width, height))
        .map(|points| points_array(&points))
        .map_err(to_js_error)
}
