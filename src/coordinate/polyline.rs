//! Polylines: chains of straight segments

use crate::errors::{KymoError, KymoResult};

use super::point::Point;
use super::segment::LineSegment;

/// An open chain of points joined by straight segments
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    /// Create a polyline from at least two points, all finite
    pub fn new(points: Vec<Point>) -> KymoResult<Self> {
        if points.len() < 2 {
            return Err(KymoError::InvalidGeometry(format!(
                "a polyline needs at least 2 points, got {}", points.len())));
        }

        let bad = points
            .iter()
            .enumerate()
            .find(|(_, p)| !p.x.is_finite() || !p.y.is_finite());
        if let Some((i, p)) = bad {
            return Err(KymoError::InvalidGeometry(format!(
                "polyline point {} is not finite: ({}, {})", i, p.x, p.y)));
        }

        Ok(Polyline { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consecutive segments, in order
    ///
    /// Repeated points produce zero-length segments; they are skipped
    /// because they contribute no samples.
    pub fn segments(&self) -> Vec<LineSegment> {
        self.points
            .windows(2)
            .map(|pair| LineSegment::from_points(pair[0], pair[1]))
            .filter(|segment| segment.pixel_length() > 0)
            .collect()
    }

    /// Total length in pixels
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum()
    }
}
