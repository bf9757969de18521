//! Bounding box structure for continuous plane regions

use crate::errors::{KymoError, KymoResult};
use crate::extractor::Region;

/// Largest pixel coordinate a region edge may have; beyond it `f64` no
/// longer holds whole pixels exactly
pub const MAX_PIXEL_COORDINATE: f64 = 9_007_199_254_740_992.0;

/// An axis-aligned box in continuous plane coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum X coordinate
    pub min_x: f64,
    /// Minimum Y coordinate
    pub min_y: f64,
    /// Maximum X coordinate
    pub max_x: f64,
    /// Maximum Y coordinate
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Grow the box by `horizontal` on the left and right and by
    /// `vertical` on the top and bottom
    pub fn expand(&self, horizontal: f64, vertical: f64) -> Self {
        BoundingBox::new(
            self.min_x - horizontal,
            self.min_y - vertical,
            self.max_x + horizontal,
            self.max_y + vertical,
        )
    }

    /// Smallest pixel region covering the box plus `margin` whole pixels
    /// on every side
    ///
    /// The margin keeps the neighbours needed by bilinear sampling inside
    /// the region. Edges must stay within [`MAX_PIXEL_COORDINATE`] and each
    /// side must fit in `u32` pixels, otherwise the box is rejected as
    /// invalid geometry.
    pub fn to_pixel_region(&self, margin: u32) -> KymoResult<Region> {
        let margin = margin as f64;
        let edges = [
            self.min_x.floor() - margin,
            self.min_y.floor() - margin,
            self.max_x.ceil() + margin,
            self.max_y.ceil() + margin,
        ];

        if edges.iter().any(|e| !e.is_finite() || e.abs() > MAX_PIXEL_COORDINATE) {
            return Err(KymoError::InvalidGeometry(format!(
                "box ({}, {}) - ({}, {}) lies beyond the addressable pixel range",
                self.min_x, self.min_y, self.max_x, self.max_y)));
        }

        let [left, top, right, bottom] = edges.map(|e| e as i64);
        let side = |start: i64, end: i64| {
            u32::try_from((end - start).max(0)).map_err(|_| KymoError::InvalidGeometry(format!(
                "box ({}, {}) - ({}, {}) spans more than {} pixels",
                self.min_x, self.min_y, self.max_x, self.max_y, u32::MAX)))
        };

        Ok(Region::new(left, top, side(left, right)?, side(top, bottom)?))
    }
}
