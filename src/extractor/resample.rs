//! Rotated ribbon resampling
//!
//! Straightening a thick line means rotating the plane about the line's
//! midpoint until the line is horizontal with endpoint 1 on the left, then
//! cropping a `length x width` window centred on the midpoint. Both steps
//! are affine, so they are done in one pass: every output cell is mapped
//! back into the source tile and read with bilinear interpolation.

use ndarray::{Array2, ArrayView2};

use crate::coordinate::{LineSegment, Point};

/// Maps cells of a straightened ribbon back into a source tile
///
/// Output cell `(row, col)` has its centre at
/// `midpoint + t * direction + s * normal`, where
/// `t = col + 0.5 - length / 2` and `s = row + 0.5 - width / 2`.
#[derive(Debug, Clone, Copy)]
pub struct RibbonSampler {
    /// Segment midpoint in tile pixel-index coordinates
    origin: Point,
    direction: Point,
    normal: Point,
    length: usize,
    width: usize,
}

impl RibbonSampler {
    /// Build a sampler for `segment` read from a tile whose top-left pixel
    /// sits at `(tile_x, tile_y)` in the plane
    ///
    /// The segment must already be validated.
    pub fn new(segment: &LineSegment, line_width: u32, tile_x: i64, tile_y: i64) -> Self {
        let midpoint = segment.midpoint();

        // Pixel index i has its centre at i + 0.5
        let origin = Point::new(
            midpoint.x - 0.5 - tile_x as f64,
            midpoint.y - 0.5 - tile_y as f64,
        );

        RibbonSampler {
            origin,
            direction: segment.direction(),
            normal: segment.normal(),
            length: segment.pixel_length(),
            width: line_width as usize,
        }
    }

    /// Output shape as `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.length)
    }

    /// Fractional tile position read by output cell `(row, col)`
    pub fn source_position(&self, row: usize, col: usize) -> Point {
        let t = col as f64 + 0.5 - self.length as f64 / 2.0;
        let s = row as f64 + 0.5 - self.width as f64 / 2.0;

        self.origin + self.direction * t + self.normal * s
    }

    /// Resample the ribbon out of `tile`
    pub fn sample(&self, tile: ArrayView2<'_, f64>) -> Array2<f64> {
        Array2::from_shape_fn(self.shape(), |(row, col)| {
            let position = self.source_position(row, col);
            bilinear(&tile, position.x, position.y)
        })
    }
}

/// Bilinear interpolation at fractional `(x, y)` = `(column, row)`
///
/// Neighbours outside the tile count as zero. Integer positions return the
/// stored value exactly.
pub fn bilinear(tile: &ArrayView2<'_, f64>, x: f64, y: f64) -> f64 {
    let x0 = x.floor();
    let y0 = y.floor();
    let wx = x - x0;
    let wy = y - y0;
    let col = x0 as i64;
    let row = y0 as i64;

    let mut value = 0.0;
    for (dr, weight_y) in [(0, 1.0 - wy), (1, wy)] {
        if weight_y == 0.0 {
            continue;
        }
        for (dc, weight_x) in [(0, 1.0 - wx), (1, wx)] {
            if weight_x == 0.0 {
                continue;
            }
            value += weight_x * weight_y * sample_or_zero(tile, row + dr, col + dc);
        }
    }
    value
}

fn sample_or_zero(tile: &ArrayView2<'_, f64>, row: i64, col: i64) -> f64 {
    if row < 0 || col < 0 {
        return 0.0;
    }
    tile.get((row as usize, col as usize)).copied().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_bilinear_exact_on_pixels() {
        let tile = array![[1.0, 2.0], [3.0, 4.0]];
        assert_eq!(bilinear(&tile.view(), 1.0, 0.0), 2.0);
        assert_eq!(bilinear(&tile.view(), 0.0, 1.0), 3.0);
    }

    #[test]
    fn test_bilinear_between_pixels() {
        let tile = array![[1.0, 2.0], [3.0, 4.0]];
        assert!((bilinear(&tile.view(), 0.5, 0.5) - 2.5).abs() < 1e-12);
        assert!((bilinear(&tile.view(), 0.25, 0.0) - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_bilinear_outside_is_zero() {
        let tile = array![[8.0, 8.0], [8.0, 8.0]];
        assert_eq!(bilinear(&tile.view(), -3.0, 0.0), 0.0);
        assert_eq!(bilinear(&tile.view(), 0.0, 7.0), 0.0);
        assert!((bilinear(&tile.view(), 1.5, 0.0) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_horizontal_sampler_reads_pixel_centres() {
        // Line along the boundary between rows 4 and 5, width 2
        let segment = LineSegment::new(0.0, 5.0, 6.0, 5.0);
        let sampler = RibbonSampler::new(&segment, 2, 0, 0);
        assert_eq!(sampler.shape(), (2, 6));
        assert_eq!(sampler.source_position(0, 0), Point::new(0.0, 4.0));
        assert_eq!(sampler.source_position(1, 5), Point::new(5.0, 5.0));
    }

    #[test]
    fn test_sampler_accounts_for_tile_origin() {
        let segment = LineSegment::new(10.0, 5.0, 16.0, 5.0);
        let sampler = RibbonSampler::new(&segment, 2, 8, 3);
        assert_eq!(sampler.source_position(0, 0), Point::new(2.0, 1.0));
    }
}
