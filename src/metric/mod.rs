//! Distance functions between two sites or samples.
//!
//! The metric is picked by a closed [`MetricKind`] together with its parameters in
//! [`MetricConfig`]. Callers that only have a name (for instance from a dropdown in the
//! JavaScript UI) go through [`MetricKind::from_name`], which never fails.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::bounds::Canvas;
use crate::geometry::Point;

/// Default Minkowski exponent.
pub const DEFAULT_P_VALUE: f64 = 2.0;

/// The supported distance metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum MetricKind {
    /// L2 norm.
    #[default]
    Euclidean,
    /// L1 norm.
    Manhattan,
    /// Lp norm with exponent `p_value`.
    Minkowski,
    /// Bounded-rectangle metric: Chebyshev distance on coordinates normalized by the
    /// rectangle, rescaled by its shorter side.
    Hilbert,
}

impl MetricKind {
    pub const ALL: [MetricKind; 4] = [
        MetricKind::Euclidean,
        MetricKind::Manhattan,
        MetricKind::Minkowski,
        MetricKind::Hilbert,
    ];

    /// Resolves a metric by its name.
    ///
    /// Unrecognized names resolve to [`MetricKind::Euclidean`]; callers pass unvalidated
    /// strings and rely on this.
    pub fn from_name(name: &str) -> Self {
        match name {
            "euclidean" => MetricKind::Euclidean,
            "manhattan" => MetricKind::Manhattan,
            "minkowski" => MetricKind::Minkowski,
            "hilbert" => MetricKind::Hilbert,
            unknown => {
                log::debug!("unknown metric `{}`, using euclidean", unknown);
                MetricKind::Euclidean
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::Euclidean => "euclidean",
            MetricKind::Manhattan => "manhattan",
            MetricKind::Minkowski => "minkowski",
            MetricKind::Hilbert => "hilbert",
        }
    }
}

impl FromStr for MetricKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MetricKind::from_name(s))
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A metric together with its parameters.
///
/// `p_value` is only read by [`MetricKind::Minkowski`] and `bounds` only by
/// [`MetricKind::Hilbert`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricConfig {
    pub kind: MetricKind,
    pub p_value: f64,
    pub bounds: Canvas,
}

impl Default for MetricConfig {
    fn default() -> Self {
        Self::new(MetricKind::Euclidean)
    }
}

impl MetricConfig {
    pub fn new(kind: MetricKind) -> Self {
        Self {
            kind,
            p_value: DEFAULT_P_VALUE,
            bounds: Canvas::default(),
        }
    }

    pub fn euclidean() -> Self {
        Self::new(MetricKind::Euclidean)
    }

    pub fn manhattan() -> Self {
        Self::new(MetricKind::Manhattan)
    }

    pub fn minkowski(p_value: f64) -> Self {
        Self::new(MetricKind::Minkowski).with_p_value(p_value)
    }

    pub fn hilbert(bounds: Canvas) -> Self {
        Self::new(MetricKind::Hilbert).with_bounds(bounds)
    }

    /// Builds a configuration from loosely typed inputs, the way the JS bindings receive them.
    pub fn from_parts(
        name: &str,
        p_value: Option<f64>,
        width: Option<f64>,
        height: Option<f64>,
    ) -> Self {
        Self::new(MetricKind::from_name(name))
            .with_p_value(p_value.unwrap_or(DEFAULT_P_VALUE))
            .with_bounds(Canvas::from_options(width, height))
    }

    pub fn with_p_value(mut self, p_value: f64) -> Self {
        self.p_value = p_value;
        self
    }

    pub fn with_bounds(mut self, bounds: Canvas) -> Self {
        self.bounds = bounds;
        self
    }

    /// The exponent actually used; a non-positive or non-finite `p_value` reads as 2.
    pub fn effective_p(&self) -> f64 {
        if self.p_value.is_finite() && self.p_value > 0.0 {
            self.p_value
        } else {
            DEFAULT_P_VALUE
        }
    }

    /// The rectangle actually used by the Hilbert metric; degenerate bounds read as the
    /// default canvas.
    pub fn effective_bounds(&self) -> Canvas {
        if self.bounds.is_valid() {
            self.bounds
        } else {
            Canvas::default()
        }
    }

    /// Distance between `a` and `b` under this configuration.
    #[inline]
    pub fn distance(&self, a: &Point, b: &Point) -> f64 {
        let dx = (a.x - b.x).abs();
        let dy = (a.y - b.y).abs();
        match self.kind {
            MetricKind::Euclidean => (dx * dx + dy * dy).sqrt(),
            MetricKind::Manhattan => dx + dy,
            MetricKind::Minkowski => {
                // Scaled by the larger offset so dx^p cannot overflow for large p.
                let p = self.effective_p();
                let m = dx.max(dy);
                if m == 0.0 {
                    0.0
                } else {
                    m * ((dx / m).powf(p) + (dy / m).powf(p)).powf(1.0 / p)
                }
            }
            MetricKind::Hilbert => {
                let bounds = self.effective_bounds();
                let nx = dx / bounds.width;
                let ny = dy / bounds.height;
                nx.max(ny) * bounds.width.min(bounds.height)
            }
        }
    }
}

/// Distance between two points under `config`.
#[inline]
pub fn distance(p1: &Point, p2: &Point, config: &MetricConfig) -> f64 {
    config.distance(p1, p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for kind in MetricKind::ALL {
            assert_eq!(MetricKind::from_name(kind.name()), kind);
            assert_eq!(kind.to_string().parse::<MetricKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_name_falls_back() {
        assert_eq!(MetricKind::from_name("chebyshev"), MetricKind::Euclidean);
        assert_eq!(MetricKind::from_name(""), MetricKind::Euclidean);
        let cfg = MetricConfig::from_parts("nonsense", None, None, None);
        let d = cfg.distance(&Point::new(0.0, 0.0), &Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_sanitized_parameters() {
        assert_eq!(MetricConfig::minkowski(-1.0).effective_p(), 2.0);
        assert_eq!(MetricConfig::minkowski(f64::NAN).effective_p(), 2.0);
        assert_eq!(MetricConfig::minkowski(3.0).effective_p(), 3.0);
        let degenerate = MetricConfig::hilbert(Canvas::new(0.0, 10.0));
        assert_eq!(degenerate.effective_bounds(), Canvas::default());
    }

    #[test]
    fn test_hilbert_canonical_values() {
        let cfg = MetricConfig::hilbert(Canvas::new(800.0, 600.0));
        let o = Point::new(0.0, 0.0);
        assert!((cfg.distance(&o, &Point::new(80.0, 60.0)) - 60.0).abs() < 1e-9);
        assert!((cfg.distance(&o, &Point::new(400.0, 60.0)) - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_minkowski_p3() {
        let cfg = MetricConfig::minkowski(3.0);
        let d = cfg.distance(&Point::new(0.0, 0.0), &Point::new(1.0, 1.0));
        assert!((d - 2.0f64.powf(1.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_minkowski_extreme_p_stays_finite() {
        let o = Point::new(0.0, 0.0);
        let b = Point::new(100.0, 50.0);

        let d = MetricConfig::minkowski(200.0).distance(&o, &b);
        assert!(d.is_finite());
        assert!(d >= 100.0 && d <= 12500.0f64.sqrt());

        let d = MetricConfig::minkowski(0.001).distance(&o, &b);
        assert!(d.is_finite());
        assert!(d >= 150.0);

        assert_eq!(MetricConfig::minkowski(200.0).distance(&b, &b), 0.0);
    }
}
