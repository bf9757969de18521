//! In-memory plane stacks

use std::collections::HashMap;

use log::debug;
use ndarray::{s, Array2};

use crate::errors::{KymoError, KymoResult};
use crate::extractor::Region;

use super::source::{PlaneIndex, PlaneSource};

/// A dense 5D image held in memory, one `Array2` per plane
///
/// Planes that were never inserted are reported as missing rather than
/// read as zeros.
#[derive(Debug, Clone)]
pub struct PlaneStack {
    size_x: u32,
    size_y: u32,
    size_z: u32,
    size_c: u32,
    size_t: u32,
    planes: HashMap<PlaneIndex, Array2<f64>>,
}

impl PlaneStack {
    /// Create an empty stack with the given dimensions
    pub fn new(size_x: u32, size_y: u32, size_z: u32, size_c: u32, size_t: u32) -> Self {
        PlaneStack {
            size_x,
            size_y,
            size_z,
            size_c,
            size_t,
            planes: HashMap::new(),
        }
    }

    /// A stack holding a single plane at `z=0 c=0 t=0`
    pub fn from_plane(plane: Array2<f64>) -> Self {
        let (rows, cols) = plane.dim();
        let mut planes = HashMap::new();
        planes.insert(PlaneIndex::default(), plane);

        PlaneStack {
            size_x: cols as u32,
            size_y: rows as u32,
            size_z: 1,
            size_c: 1,
            size_t: 1,
            planes,
        }
    }

    /// Store a plane, replacing any previous plane at the same index
    pub fn insert(&mut self, index: PlaneIndex, plane: Array2<f64>) -> KymoResult<()> {
        if index.z >= self.size_z || index.c >= self.size_c || index.t >= self.size_t {
            return Err(KymoError::PlaneNotFound(index));
        }

        let expected = (self.size_y as usize, self.size_x as usize);
        if plane.dim() != expected {
            return Err(KymoError::DimensionMismatch {
                expected,
                found: plane.dim(),
            });
        }

        self.planes.insert(index, plane);
        Ok(())
    }

    /// Number of planes actually stored
    pub fn plane_count(&self) -> usize {
        self.planes.len()
    }
}

impl PlaneSource for PlaneStack {
    fn size_x(&self) -> u32 {
        self.size_x
    }

    fn size_y(&self) -> u32 {
        self.size_y
    }

    fn size_z(&self) -> u32 {
        self.size_z
    }

    fn size_c(&self) -> u32 {
        self.size_c
    }

    fn size_t(&self) -> u32 {
        self.size_t
    }

    fn get_tile(&self, index: PlaneIndex, region: Region) -> KymoResult<Array2<f64>> {
        let plane = self.planes.get(&index).ok_or(KymoError::PlaneNotFound(index))?;

        if !region.is_within(self.size_x, self.size_y) {
            return Err(KymoError::RegionOutOfBounds {
                x: region.x,
                y: region.y,
                width: region.width,
                height: region.height,
            });
        }

        debug!("Reading tile ({}, {}) {}x{} at {}",
               region.x, region.y, region.width, region.height, index);

        let rows = region.y as usize..region.end_y() as usize;
        let cols = region.x as usize..region.end_x() as usize;
        Ok(plane.slice(s![rows, cols]).to_owned())
    }
}
