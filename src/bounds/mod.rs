use crate::geometry::Point;

/// Default canvas width, matching the historical viewport.
pub const DEFAULT_WIDTH: f64 = 800.0;
/// Default canvas height, matching the historical viewport.
pub const DEFAULT_HEIGHT: f64 = 600.0;

/// The rectangle `[0, width] x [0, height]` that sites live in and samples are drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Builds a canvas from optional dimensions, falling back to the defaults per axis.
    pub fn from_options(width: Option<f64>, height: Option<f64>) -> Self {
        Self {
            width: width.unwrap_or(DEFAULT_WIDTH),
            height: height.unwrap_or(DEFAULT_HEIGHT),
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Returns `(offset, extent)` per axis after removing `margin` (a fraction) from each side.
    pub fn inset(&self, margin: f64) -> ([f64; 2], [f64; 2]) {
        let offset = [self.width * margin, self.height * margin];
        let extent = [
            self.width * (1.0 - 2.0 * margin),
            self.height * (1.0 - 2.0 * margin),
        ];
        (offset, extent)
    }

    /// Both sides strictly positive and finite.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn contains(&self, p: &Point) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
