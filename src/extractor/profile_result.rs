//! Straightened line ribbons

use ndarray::{concatenate, s, Array1, Array2, ArrayView1, ArrayView2, Axis};

use crate::errors::{KymoError, KymoResult};
use crate::profile::Projection;

/// Samples along a thick line, straightened into a `width x length` array
///
/// Row `r` runs parallel to the line; column 0 sits at endpoint 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileResult {
    data: Array2<f64>,
}

impl ProfileResult {
    pub fn new(data: Array2<f64>) -> Self {
        ProfileResult { data }
    }

    /// Number of rows, equal to the requested line width
    pub fn line_width(&self) -> usize {
        self.data.nrows()
    }

    /// Number of samples along the line
    pub fn length(&self) -> usize {
        self.data.ncols()
    }

    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    pub fn row(&self, index: usize) -> ArrayView1<'_, f64> {
        self.data.row(index)
    }

    /// Collapse the ribbon across its width into a single profile
    pub fn project(&self, projection: Projection) -> Array1<f64> {
        projection.apply(self.data.view())
    }

    /// The ribbon turned by 180 degrees, as extracted from the reversed line
    pub fn rotated_180(&self) -> ProfileResult {
        ProfileResult::new(self.data.slice(s![..;-1, ..;-1]).to_owned())
    }

    /// Join ribbons end to end, left to right
    ///
    /// All parts must have the same width.
    pub fn concat(parts: &[ProfileResult]) -> KymoResult<ProfileResult> {
        if parts.is_empty() {
            return Err(KymoError::InvalidGeometry("nothing to concatenate".to_string()));
        }

        let views: Vec<ArrayView2<'_, f64>> = parts.iter().map(|part| part.view()).collect();
        let joined = concatenate(Axis(1), &views).map_err(|_| KymoError::DimensionMismatch {
            expected: (parts[0].line_width(), 0),
            found: (
                parts.iter().map(|part| part.line_width()).max().unwrap_or(0),
                0,
            ),
        })?;

        Ok(ProfileResult::new(joined))
    }
}
