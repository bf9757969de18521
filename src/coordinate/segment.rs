//! Straight line segments in plane coordinates

use std::fmt;

use crate::errors::{KymoError, KymoResult};

use super::bbox::BoundingBox;
use super::point::Point;

/// A straight segment from `start` (endpoint 1) to `end` (endpoint 2)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Endpoint 1; maps to the left edge of an extracted profile
    pub start: Point,
    /// Endpoint 2; maps to the right edge of an extracted profile
    pub end: Point,
}

impl LineSegment {
    /// Create a segment from raw endpoint coordinates
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        LineSegment {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
        }
    }

    /// Create a segment between two points
    pub fn from_points(start: Point, end: Point) -> Self {
        LineSegment { start, end }
    }

    pub fn dx(&self) -> f64 {
        self.end.x - self.start.x
    }

    pub fn dy(&self) -> f64 {
        self.end.y - self.start.y
    }

    /// Euclidean length in pixels
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Number of samples along the segment: its length rounded to the
    /// nearest whole pixel
    pub fn pixel_length(&self) -> usize {
        self.length().round() as usize
    }

    pub fn midpoint(&self) -> Point {
        self.start.midpoint(&self.end)
    }

    /// Unit vector pointing from `start` to `end`
    ///
    /// Only meaningful for segments that pass [`LineSegment::validate`].
    pub fn direction(&self) -> Point {
        let length = self.length();
        Point::new(self.dx() / length, self.dy() / length)
    }

    /// Unit vector perpendicular to the direction
    ///
    /// Rotating the plane so that the direction points along +x brings
    /// the normal to +y, so it points towards increasing profile rows.
    pub fn normal(&self) -> Point {
        let direction = self.direction();
        Point::new(-direction.y, direction.x)
    }

    /// The same segment walked from `end` to `start`
    pub fn reversed(&self) -> Self {
        LineSegment::from_points(self.end, self.start)
    }

    /// Counter-clockwise rotation in degrees, in `[0, 360)`, that turns the
    /// segment horizontal with `start` on the left
    pub fn rotation_degrees(&self) -> f64 {
        self.dy().atan2(self.dx()).to_degrees().rem_euclid(360.0)
    }

    /// Check that the segment can be sampled
    ///
    /// Non-finite coordinates are rejected as invalid geometry; a segment
    /// shorter than half a pixel rounds to zero samples and is degenerate.
    pub fn validate(&self) -> KymoResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(KymoError::InvalidGeometry(format!(
                "non-finite segment coordinates {}", self)));
        }

        if self.pixel_length() == 0 {
            return Err(KymoError::DegenerateSegment {
                x: self.start.x,
                y: self.start.y,
            });
        }

        Ok(())
    }

    /// Bounding box of the two endpoints
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(
            self.start.x.min(self.end.x),
            self.start.y.min(self.end.y),
            self.start.x.max(self.end.x),
            self.start.y.max(self.end.y),
        )
    }

    /// Axis-aligned box that contains the segment drawn `line_width`
    /// pixels thick, whatever its angle
    ///
    /// The endpoint box grows by `|sin a| * w` vertically and
    /// `|cos a| * w` horizontally, `a` being the angle from vertical.
    pub fn ribbon_footprint(&self, line_width: u32) -> BoundingBox {
        let direction = self.direction();
        let width = line_width as f64;
        let extra_h = (direction.y * width).abs();
        let extra_v = (direction.x * width).abs();

        self.bounding_box().expand(extra_h, extra_v)
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) -> ({}, {})",
               self.start.x, self.start.y, self.end.x, self.end.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_rounds_to_pixels() {
        let segment = LineSegment::new(0.0, 0.0, 3.0, 4.0);
        assert_eq!(segment.length(), 5.0);
        assert_eq!(segment.pixel_length(), 5);

        let segment = LineSegment::new(0.0, 0.0, 2.6, 0.0);
        assert_eq!(segment.pixel_length(), 3);
    }

    #[test]
    fn test_rotation_keeps_start_on_left() {
        let cases = [
            (LineSegment::new(0.0, 10.0, 20.0, 10.0), 0.0),
            (LineSegment::new(20.0, 10.0, 0.0, 10.0), 180.0),
            (LineSegment::new(10.0, 0.0, 10.0, 20.0), 90.0),
            (LineSegment::new(10.0, 10.0, 0.0, 0.0), 225.0),
        ];
        for (segment, expected) in cases {
            assert!((segment.rotation_degrees() - expected).abs() < 1e-9,
                    "{} rotated by {}", segment, segment.rotation_degrees());
        }
    }

    #[test]
    fn test_normal_is_perpendicular() {
        let segment = LineSegment::new(1.0, 2.0, 7.0, -3.0);
        let d = segment.direction();
        let n = segment.normal();
        assert!((d.x * n.x + d.y * n.y).abs() < 1e-12);
        assert!((n.x.hypot(n.y) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_zero_length() {
        let segment = LineSegment::new(4.0, 4.0, 4.2, 4.1);
        match segment.validate() {
            Err(KymoError::DegenerateSegment { x, y }) => {
                assert_eq!(x, 4.0);
                assert_eq!(y, 4.0);
            }
            other => panic!("expected degenerate segment, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_nan() {
        let segment = LineSegment::new(f64::NAN, 0.0, 10.0, 0.0);
        assert!(matches!(segment.validate(), Err(KymoError::InvalidGeometry(_))));
    }

    #[test]
    fn test_horizontal_footprint_grows_vertically() {
        let footprint = LineSegment::new(0.0, 10.0, 20.0, 10.0).ribbon_footprint(3);
        assert!((footprint.min_x - 0.0).abs() < 1e-12);
        assert!((footprint.max_x - 20.0).abs() < 1e-12);
        assert!((footprint.min_y - 7.0).abs() < 1e-12);
        assert!((footprint.max_y - 13.0).abs() < 1e-12);
    }
}
