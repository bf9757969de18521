use std::cell::Cell;

use ndarray::Array2;

use crate::errors::{KymoError, KymoResult};
use crate::extractor::Region;
use crate::plane::{PlaneIndex, PlaneSource, PlaneStack};

/// Plane whose value at `[row, col]` is `100 * row + col`
pub fn ramp_plane(size: usize) -> PlaneStack {
    PlaneStack::from_plane(Array2::from_shape_fn((size, size), |(r, c)| (r * 100 + c) as f64))
}

/// Plane whose value at `[row, col]` is `col`
pub fn column_ramp_plane(size: usize) -> PlaneStack {
    PlaneStack::from_plane(Array2::from_shape_fn((size, size), |(_, c)| c as f64))
}

pub fn constant_plane(size: usize, value: f64) -> PlaneStack {
    PlaneStack::from_plane(Array2::from_elem((size, size), value))
}

/// Wraps a source and counts tile requests
pub struct CountingSource<S: PlaneSource> {
    pub inner: S,
    pub calls: Cell<usize>,
}

impl<S: PlaneSource> CountingSource<S> {
    pub fn new(inner: S) -> Self {
        CountingSource { inner, calls: Cell::new(0) }
    }
}

impl<S: PlaneSource> PlaneSource for CountingSource<S> {
    fn size_x(&self) -> u32 {
        self.inner.size_x()
    }

    fn size_y(&self) -> u32 {
        self.inner.size_y()
    }

    fn get_tile(&self, index: PlaneIndex, region: Region) -> KymoResult<Array2<f64>> {
        self.calls.set(self.calls.get() + 1);
        self.inner.get_tile(index, region)
    }
}

/// A source whose every tile request fails, like a dropped remote session
pub struct FailingSource;

impl PlaneSource for FailingSource {
    fn size_x(&self) -> u32 {
        64
    }

    fn size_y(&self) -> u32 {
        64
    }

    fn get_tile(&self, _index: PlaneIndex, _region: Region) -> KymoResult<Array2<f64>> {
        Err(KymoError::GenericError("connection reset".to_string()))
    }
}
