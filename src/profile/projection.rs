//! Collapsing a ribbon across its width

use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, ArrayView2, Axis};

use crate::errors::KymoError;

/// How the rows of a ribbon are combined into one profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Average across the width
    Mean,
    /// Brightest sample across the width
    Max,
    /// Integrated intensity across the width
    Sum,
}

impl Projection {
    /// Reduce a `width x length` ribbon to `length` values
    pub fn apply(&self, ribbon: ArrayView2<'_, f64>) -> Array1<f64> {
        if ribbon.nrows() == 0 {
            return Array1::zeros(ribbon.ncols());
        }

        match self {
            Projection::Mean => ribbon.sum_axis(Axis(0)) / ribbon.nrows() as f64,
            Projection::Max => ribbon.fold_axis(Axis(0), f64::NEG_INFINITY, |&acc, &v| acc.max(v)),
            Projection::Sum => ribbon.sum_axis(Axis(0)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Projection::Mean => "mean",
            Projection::Max => "max",
            Projection::Sum => "sum",
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Projection {
    type Err = KymoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mean" | "average" | "avg" => Ok(Projection::Mean),
            "max" | "maximum" => Ok(Projection::Max),
            "sum" | "total" => Ok(Projection::Sum),
            other => Err(KymoError::UnsupportedFormat(format!("projection '{}'", other))),
        }
    }
}
