use crate::bounds::Canvas;
use crate::classifier::{
    classify, clamp_order, effective_resolution, Regions, DEFAULT_RESOLUTION,
};
use crate::generators;
use crate::geometry::Point;
use crate::metric::MetricConfig;

/// Everything a classification pass reads besides the sites.
///
/// A pass borrows the configuration immutably; changing it means building a new one
/// (or going through the setters on [`Diagram`], which recompute right away).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiagramConfig {
    pub metric: MetricConfig,
    pub order: usize,
    pub resolution: f64,
    pub canvas: Canvas,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            metric: MetricConfig::default(),
            order: 1,
            resolution: DEFAULT_RESOLUTION,
            canvas: Canvas::default(),
        }
    }
}

impl DiagramConfig {
    pub fn with_metric(mut self, metric: MetricConfig) -> Self {
        self.metric = metric;
        self
    }

    /// A [`Diagram`] clamps this against its site count, an empty diagram reads it as 1.
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = effective_resolution(resolution);
        self
    }

    /// Sets the canvas and keeps the Hilbert rectangle in sync with it.
    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self.metric.bounds = canvas;
        self
    }

    /// Runs a classification pass over `sites` with this configuration.
    pub fn classify(&self, sites: &[Point]) -> Regions {
        classify(sites, &self.metric, self.order, self.resolution, self.canvas)
    }
}

/// An ordered site list together with the regions derived from it.
///
/// Site `i` keeps index `i` until it is removed or the list is replaced. Every mutation
/// clamps the order to `[1, max(1, n - 1)]` and recomputes all regions from scratch.
pub struct Diagram {
    sites: Vec<Point>,
    config: DiagramConfig,
    regions: Regions,
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new(DiagramConfig::default())
    }
}

impl Diagram {
    pub fn new(config: DiagramConfig) -> Self {
        let mut diagram = Self {
            sites: Vec::new(),
            config,
            regions: Regions::default(),
        };
        diagram.calculate();
        diagram
    }

    pub fn sites(&self) -> &[Point] {
        &self.sites
    }

    pub fn count_sites(&self) -> usize {
        self.sites.len()
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    pub fn order(&self) -> usize {
        self.config.order
    }

    pub fn regions(&self) -> &Regions {
        &self.regions
    }

    /// Appends a site, it gets the next free index.
    pub fn add_site(&mut self, site: Point) {
        self.sites.push(site);
        self.calculate();
    }

    /// Removes the site at `index`; later sites shift down by one.
    pub fn remove_site(&mut self, index: usize) -> Option<Point> {
        if index >= self.sites.len() {
            return None;
        }
        let removed = self.sites.remove(index);
        self.calculate();
        Some(removed)
    }

    /// Replaces the whole site list, e.g. with the output of a generator.
    pub fn set_sites(&mut self, sites: Vec<Point>) {
        self.sites = sites;
        self.calculate();
    }

    pub fn clear(&mut self) {
        self.sites.clear();
        self.calculate();
    }

    /// Replaces the sites with `count` random points from the inset canvas.
    ///
    /// The seed comes from `Math.random` on wasm. Native builds use a fixed seed, so
    /// every call yields the same layout; use [`Diagram::random_sites_seeded`] to vary it.
    pub fn random_sites(&mut self, count: usize) {
        self.random_sites_seeded(count, generators::get_seed());
    }

    /// Like [`Diagram::random_sites`], with a caller-chosen seed.
    pub fn random_sites_seeded(&mut self, count: usize, seed: u64) {
        let sites = generators::random_seeded(count, self.config.canvas, seed);
        self.set_sites(sites);
    }

    /// Switches the metric. The Hilbert rectangle always follows the diagram canvas,
    /// whatever bounds `metric` carries.
    pub fn set_metric(&mut self, metric: MetricConfig) {
        self.config.metric = metric.with_bounds(self.config.canvas);
        self.calculate();
    }

    /// Requests an order; the stored value is clamped against the current site count.
    pub fn set_order(&mut self, order: usize) {
        self.config.order = order;
        self.calculate();
    }

    pub fn set_resolution(&mut self, resolution: f64) {
        self.config = self.config.with_resolution(resolution);
        self.calculate();
    }

    pub fn resize(&mut self, canvas: Canvas) {
        self.config = self.config.with_canvas(canvas);
        self.calculate();
    }

    /// Clamps the order and recomputes all regions.
    pub fn calculate(&mut self) {
        let clamped = clamp_order(self.config.order, self.sites.len());
        if clamped != self.config.order {
            log::trace!("order {} clamped to {}", self.config.order, clamped);
            self.config.order = clamped;
        }
        self.regions = self.config.classify(&self.sites);
    }
}
