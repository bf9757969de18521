//! Line-like ROI shapes

use crate::coordinate::{LineSegment, Polyline};
use crate::errors::KymoResult;
use crate::extractor::{LineProfileExtractor, ProfileResult};
use crate::plane::{PlaneIndex, PlaneSource};

/// Geometry of a line-like shape
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeGeometry {
    Line(LineSegment),
    Polyline(Polyline),
}

/// A labelled line or polyline, optionally pinned to one z, channel or
/// time point
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub label: String,
    pub geometry: ShapeGeometry,
    pub z: Option<u32>,
    pub c: Option<u32>,
    pub t: Option<u32>,
}

impl Shape {
    /// An unpinned straight line
    pub fn line(label: &str, segment: LineSegment) -> Self {
        Shape {
            label: label.to_string(),
            geometry: ShapeGeometry::Line(segment),
            z: None,
            c: None,
            t: None,
        }
    }

    /// An unpinned polyline
    pub fn polyline(label: &str, polyline: Polyline) -> Self {
        Shape {
            label: label.to_string(),
            geometry: ShapeGeometry::Polyline(polyline),
            z: None,
            c: None,
            t: None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self.geometry {
            ShapeGeometry::Line(_) => "line",
            ShapeGeometry::Polyline(_) => "polyline",
        }
    }

    /// Extract this shape's ribbon from one plane
    pub fn extract<S: PlaneSource + ?Sized>(&self,
                                            source: &S,
                                            line_width: u32,
                                            index: PlaneIndex) -> KymoResult<ProfileResult> {
        let extractor = LineProfileExtractor::new(source);
        match &self.geometry {
            ShapeGeometry::Line(segment) => extractor.extract_segment(segment, line_width, index),
            ShapeGeometry::Polyline(polyline) => extractor.extract_polyline(polyline, line_width, index),
        }
    }

    /// Channels to sample: the pinned channel, else `selected`, else all
    pub fn channels(&self, selected: Option<&[u32]>, size_c: u32) -> Vec<u32> {
        if let Some(c) = self.c {
            return vec![c];
        }
        match selected {
            Some(channels) => channels.to_vec(),
            None => (0..size_c).collect(),
        }
    }

    /// Time points to sample: the pinned one, else all
    pub fn time_points(&self, size_t: u32) -> Vec<u32> {
        match self.t {
            Some(t) => vec![t],
            None => (0..size_t).collect(),
        }
    }

    /// Focal plane to sample, falling back to `default_z`
    pub fn z_or(&self, default_z: u32) -> u32 {
        self.z.unwrap_or(default_z)
    }
}
