use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::bounds::Canvas;
use crate::diagram::{Diagram, DiagramConfig};
use crate::generators;
use crate::geometry::{points_from_flat, points_to_flat, Point};
use crate::metric::MetricKind;
use crate::wasm::utils::{points_array, to_js_error};

/// An interactive diagram: the site list, the active metric and order, and the
/// regions recomputed after every change.
#[wasm_bindgen(js_name = VoronoiDiagram)]
pub struct VoronoiDiagramWASM {
    inner: Diagram,
}

#[wasm_bindgen(js_class = VoronoiDiagram)]
impl VoronoiDiagramWASM {
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: Option<f64>,
        height: Option<f64>,
        resolution: Option<f64>,
    ) -> VoronoiDiagramWASM {
        let mut config = DiagramConfig::default().with_canvas(Canvas::from_options(width, height));
        if let Some(r) = resolution {
            config = config.with_resolution(r);
        }
        VoronoiDiagramWASM { inner: Diagram::new(config) }
    }

    pub fn add_site(&mut self, x: f64, y: f64) { self.inner.add_site(Point::new(x, y)); }
    pub fn remove_site(&mut self, index: usize) -> bool { self.inner.remove_site(index).is_some() }
    pub fn set_sites(&mut self, sites: &[f64]) { self.inner.set_sites(points_from_flat(sites)); }
    pub fn clear(&mut self) { self.inner.clear(); }
    pub fn random_sites(&mut self, count: usize) { self.inner.random_sites(count); }

    pub fn apply_polygon(&mut self, sides: usize, radius: f64) {
        let canvas = self.inner.config().canvas;
        self.inner.set_sites(generators::regular_polygon(sides, radius, canvas));
    }

    pub fn apply_circle(&mut self, count: usize, radius: f64) {
        let canvas = self.inner.config().canvas;
        self.inner.set_sites(generators::circle(count, radius, canvas));
    }

    pub fn apply_grid(&mut self, rows: usize, cols: usize) -> Result<(), JsError> {
        let canvas = self.inner.config().canvas;
        let sites = generators::grid(rows, cols, canvas).map_err(to_js_error)?;
        self.inner.set_sites(sites);
        Ok(())
    }

    pub fn set_metric(&mut self, name: &str, p_value: Option<f64>) {
        let mut metric = self.inner.config().metric;
        metric.kind = MetricKind::from_name(name);
        if let Some(p) = p_value {
            metric.p_value = p;
        }
        self.inner.set_metric(metric);
    }

    pub fn set_order(&mut self, order: usize) { self.inner.set_order(order); }
    pub fn set_resolution(&mut self, resolution: f64) { self.inner.set_resolution(resolution); }
    pub fn resize(&mut self, width: f64, height: f64) { self.inner.resize(Canvas::new(width, height)); }

    #[wasm_bindgen(getter)]
    pub fn order(&self) -> usize { self.inner.order() }
    #[wasm_bindgen(getter)]
    pub fn metric(&self) -> String { self.inner.config().metric.kind.to_string() }
    #[wasm_bindgen(getter)]
    pub fn count_sites(&self) -> usize { self.inner.count_sites() }
    #[wasm_bindgen(getter)]
    pub fn count_regions(&self) -> usize { self.inner.regions().len() }
    #[wasm_bindgen(getter)]
    pub fn sites(&self) -> Vec<f64> { points_to_flat(self.inner.sites()) }

    /// One `{key, sites, hull}` object per region, ordered by key.
    /// `sites` holds the 1-based labels, `hull` the polygon as `{x, y}` objects.
    pub fn regions(&self) -> Array {
        self.inner
            .regions()
            .iter()
            .map(|region| {
                let o = Object::new();
                let labels: Array = region
                    .key
                    .labels()
                    .into_iter()
                    .map(|l| JsValue::from_f64(l as f64))
                    .collect();
                let key = JsValue::from_str(&region.key.to_string());
                let _ = Reflect::set(&o, &"key".into(), &key);
                let _ = Reflect::set(&o, &"sites".into(), &labels);
                let _ = Reflect::set(&o, &"hull".into(), &points_array(&region.hull()));
                JsValue::from(o)
            })
            .collect()
    }
}
