use wasm_bindgen::prelude::*;
use js_sys::{Array, Object, Reflect};

use crate::error::VoronoiError;
use crate::geometry::Point;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

#[wasm_bindgen(typescript_custom_section)]
const TS_CONSTANTS_METRICS: &'static str = r#"
export type MetricKind = "euclidean" | "manhattan" | "minkowski" | "hilbert";
export const DEFAULT_WIDTH = 800;
export const DEFAULT_HEIGHT = 600;
"#;

fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}

/// `{x, y}` object for a point.
pub fn point_object(p: &Point) -> JsValue {
    let o = Object::new();
    set_kv(&o, "x", &JsValue::from_f64(p.x));
    set_kv(&o, "y", &JsValue::from_f64(p.y));
    o.into()
}

pub fn points_array(points: &[Point]) -> Array {
    points.iter().map(point_object).collect()
}

/// Reads a point given either as `[x, y]` or as `{x, y}`.
pub fn parse_js_point(val: &JsValue) -> Option<Point> {
    if let Some(arr) = val.dyn_ref::<Array>() {
        if arr.length() < 2 {
            return None;
        }
        return Some(Point::new(arr.get(0).as_f64()?, arr.get(1).as_f64()?));
    }
    let x = Reflect::get(val, &"x".into()).ok()?.as_f64()?;
    let y = Reflect::get(val, &"y".into()).ok()?.as_f64()?;
    Some(Point::new(x, y))
}

/// Reads a sequence of points, skipping malformed entries.
pub fn parse_js_points(val: &JsValue) -> Vec<Point> {
    match val.dyn_ref::<Array>() {
        Some(arr) => arr.iter().filter_map(|item| parse_js_point(&item)).collect(),
        None => Vec::new(),
    }
}

pub fn to_js_error(e: VoronoiError) -> JsError {
    JsError::new(&e.to_string())
}
