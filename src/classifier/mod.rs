//! Order-k region classification by lattice sampling.
//!
//! The canvas is sampled on a regular lattice. Every sample is assigned to the set of
//! its `k` nearest sites under the active metric, and samples sharing a set form a region.
//! Regions approximate the cells of the order-k Voronoi diagram; their boundaries are
//! only as exact as the lattice spacing.

use std::collections::BTreeMap;
use std::fmt;

use rayon::prelude::*;

use crate::bounds::Canvas;
use crate::geometry::{centroid, convex_hull, polygon_area, Point};
use crate::metric::MetricConfig;

/// Below this many sites no regions are computed and only the sites are shown.
pub const MIN_SITES_FOR_REGIONS: usize = 3;

/// Lattice spacing used when none (or an unusable one) is given.
pub const DEFAULT_RESOLUTION: f64 = 10.0;
/// Finest lattice spacing accepted.
pub const MIN_RESOLUTION: f64 = 1.0;

/// Sanitizes a lattice spacing: non-positive or non-finite values become
/// [`DEFAULT_RESOLUTION`], anything finer than [`MIN_RESOLUTION`] is raised to it.
pub fn effective_resolution(resolution: f64) -> f64 {
    if resolution.is_finite() && resolution > 0.0 {
        resolution.max(MIN_RESOLUTION)
    } else {
        DEFAULT_RESOLUTION
    }
}

/// Clamps `order` into `[1, max(1, site_count - 1)]`.
pub fn clamp_order(order: usize, site_count: usize) -> usize {
    let max_order = site_count.saturating_sub(1).max(1);
    order.clamp(1, max_order)
}

/// Identity of a region: the ascending 0-based indices of its contributing sites.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionKey(Vec<usize>);

impl RegionKey {
    /// Builds a key from site indices in any order.
    pub fn new(mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        RegionKey(indices)
    }

    pub fn single(index: usize) -> Self {
        RegionKey(vec![index])
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Number of contributing sites, equal to the diagram order.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 1-based labels as shown next to the sites.
    pub fn labels(&self) -> Vec<usize> {
        self.0.iter().map(|i| i + 1).collect()
    }
}

/// Hyphen-joined indices, e.g. `0-2-5`. A first-order key prints as the bare index.
impl fmt::Display for RegionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, index) in self.0.iter().enumerate() {
            if n > 0 {
                f.write_str("-")?;
            }
            write!(f, "{}", index)?;
        }
        Ok(())
    }
}

/// A borrowed view of one region and its samples.
#[derive(Clone, Copy, Debug)]
pub struct Region<'a> {
    pub key: &'a RegionKey,
    pub samples: &'a [Point],
}

impl Region<'_> {
    /// Convex polygon approximating the cell, counter-clockwise.
    pub fn hull(&self) -> Vec<Point> {
        convex_hull(self.samples)
    }

    /// Area of [`Region::hull`].
    pub fn area(&self) -> f64 {
        polygon_area(&self.hull())
    }

    /// Mean position of the samples.
    pub fn centroid(&self) -> Point {
        centroid(self.samples)
    }
}

/// The outcome of one classification pass, ordered by key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Regions {
    cells: BTreeMap<RegionKey, Vec<Point>>,
}

impl Regions {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, key: &RegionKey) -> Option<Region<'_>> {
        self.cells
            .get_key_value(key)
            .map(|(key, samples)| Region { key, samples })
    }

    pub fn keys(&self) -> impl Iterator<Item = &RegionKey> {
        self.cells.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = Region<'_>> {
        self.cells.iter().map(|(key, samples)| Region { key, samples })
    }

    /// Total number of samples over all regions.
    pub fn sample_count(&self) -> usize {
        self.cells.values().map(Vec::len).sum()
    }

    /// Finds the region a given sample was assigned to.
    pub fn region_of(&self, sample: &Point) -> Option<Region<'_>> {
        self.iter().find(|r| r.samples.contains(sample))
    }

    pub fn into_map(self) -> BTreeMap<RegionKey, Vec<Point>> {
        self.cells
    }
}

/// Lattice coordinates `0, step, 2*step, ...` strictly below `extent`.
///
/// Empty unless both `step` and `extent` are positive and finite.
pub fn lattice_axis(step: f64, extent: f64) -> Vec<f64> {
    if !(step > 0.0 && step.is_finite()) || !(extent > 0.0 && extent.is_finite()) {
        return Vec::new();
    }
    let count = (extent / step).ceil() as usize;
    (0..count)
        .map(|i| i as f64 * step)
        .filter(|&v| v < extent)
        .collect()
}

/// Index of the strictly nearest site; the first of equally near sites wins.
pub fn nearest_site(sample: &Point, sites: &[Point], metric: &MetricConfig) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, site) in sites.iter().enumerate() {
        let d = metric.distance(sample, site);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

/// The `order` nearest sites of `sample` as a key.
///
/// Sites are ranked by distance with a stable sort, so equally distant sites keep their
/// insertion order. `scratch` is reused between calls.
pub fn nearest_sites(
    sample: &Point,
    sites: &[Point],
    metric: &MetricConfig,
    order: usize,
    scratch: &mut Vec<(usize, f64)>,
) -> Option<RegionKey> {
    let order = order.max(1);
    if sites.len() < order {
        return None;
    }
    if order == 1 {
        return nearest_site(sample, sites, metric).map(RegionKey::single);
    }

    scratch.clear();
    scratch.extend(sites.iter().enumerate().map(|(i, s)| (i, metric.distance(sample, s))));
    scratch.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    Some(RegionKey::new(scratch[..order].iter().map(|&(i, _)| i).collect()))
}

/// Groups lattice samples over `canvas` by their `order` nearest `sites`.
///
/// Nothing is computed for fewer than [`MIN_SITES_FOR_REGIONS`] sites, when `order`
/// exceeds the number of sites, or when `canvas` is not valid (zero, negative,
/// NaN or infinite sides). An `order` of 0 is read as 1 and `resolution` goes through
/// [`effective_resolution`]. Rows are classified in parallel and grouped afterwards, so
/// the result is identical for identical inputs and samples keep row-major order within
/// each region.
pub fn classify(
    sites: &[Point],
    metric: &MetricConfig,
    order: usize,
    resolution: f64,
    canvas: Canvas,
) -> Regions {
    let order = order.max(1);
    if sites.len() < MIN_SITES_FOR_REGIONS {
        log::trace!("{} sites, below region threshold", sites.len());
        return Regions::default();
    }
    if sites.len() < order {
        log::trace!("order {} exceeds {} sites, skipping", order, sites.len());
        return Regions::default();
    }
    if !canvas.is_valid() {
        log::trace!("canvas {}x{} is not drawable, skipping", canvas.width, canvas.height);
        return Regions::default();
    }

    let step = effective_resolution(resolution);
    let xs = lattice_axis(step, canvas.width);
    let ys = lattice_axis(step, canvas.height);

    let rows: Vec<Vec<(RegionKey, Point)>> = ys
        .par_iter()
        .map_init(
            || Vec::<(usize, f64)>::with_capacity(sites.len()),
            |scratch, &y| {
                xs.iter()
                    .filter_map(|&x| {
                        let sample = Point::new(x, y);
                        nearest_sites(&sample, sites, metric, order, scratch)
                            .map(|key| (key, sample))
                    })
                    .collect::<Vec<_>>()
            },
        )
        .collect();

    let mut cells: BTreeMap<RegionKey, Vec<Point>> = BTreeMap::new();
    for (key, sample) in rows.into_iter().flatten() {
        cells.entry(key).or_default().push(sample);
    }

    log::debug!(
        "classified {}x{} samples against {} sites (order {}, {}) into {} regions",
        xs.len(),
        ys.len(),
        sites.len(),
        order,
        metric.kind,
        cells.len()
    );

    Regions { cells }
}
