//! The plane source capability

use std::fmt;

use ndarray::Array2;

use crate::errors::KymoResult;
use crate::extractor::Region;

/// Zero-based coordinates of one 2D plane in a 5D image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlaneIndex {
    /// Focal plane
    pub z: u32,
    /// Channel
    pub c: u32,
    /// Time point
    pub t: u32,
}

impl PlaneIndex {
    pub fn new(z: u32, c: u32, t: u32) -> Self {
        PlaneIndex { z, c, t }
    }
}

impl fmt::Display for PlaneIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "z={} c={} t={}", self.z, self.c, self.t)
    }
}

/// Read access to the planes of a multi-dimensional image
///
/// Tiles come back as `(height, width)` arrays indexed `[row, column]`.
/// Callers clip their requests to the plane first; implementations may
/// reject regions that reach outside it.
pub trait PlaneSource {
    /// Plane width in pixels
    fn size_x(&self) -> u32;

    /// Plane height in pixels
    fn size_y(&self) -> u32;

    fn size_z(&self) -> u32 {
        1
    }

    fn size_c(&self) -> u32 {
        1
    }

    fn size_t(&self) -> u32 {
        1
    }

    /// Fetch one tile of the plane at `index`
    fn get_tile(&self, index: PlaneIndex, region: Region) -> KymoResult<Array2<f64>>;

    /// Fetch the whole plane at `index`
    fn get_plane(&self, index: PlaneIndex) -> KymoResult<Array2<f64>> {
        self.get_tile(index, Region::new(0, 0, self.size_x(), self.size_y()))
    }
}
