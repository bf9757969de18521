//! Intensity profiles along line shapes, one row per plane sampled

use log::{debug, info};
use ndarray::Array2;

use crate::errors::{KymoError, KymoResult};
use crate::plane::{PlaneIndex, PlaneSource};
use crate::roi::Shape;

use super::Projection;

/// One projected profile: a shape sampled on one plane
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRow {
    pub label: String,
    pub z: u32,
    pub c: u32,
    pub t: u32,
    pub line_width: u32,
    pub values: Vec<f64>,
}

/// Profiles collected over shapes, channels and time points
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileTable {
    rows: Vec<ProfileRow>,
}

impl ProfileTable {
    pub fn new() -> Self {
        ProfileTable { rows: Vec::new() }
    }

    pub fn push(&mut self, row: ProfileRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[ProfileRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Length of the longest profile in the table
    pub fn max_length(&self) -> usize {
        self.rows.iter().map(|r| r.values.len()).max().unwrap_or(0)
    }

    /// Rectangular copy of the values, shorter rows padded with zeros
    pub fn to_array(&self) -> Array2<f64> {
        let mut array = Array2::zeros((self.rows.len(), self.max_length()));
        for (i, row) in self.rows.iter().enumerate() {
            for (j, &value) in row.values.iter().enumerate() {
                array[[i, j]] = value;
            }
        }
        array
    }
}

/// Samples every shape on every selected channel and time point
pub struct PlotProfile<'a, S: PlaneSource + ?Sized> {
    source: &'a S,
    line_width: u32,
    projection: Projection,
    channels: Option<Vec<u32>>,
    default_z: u32,
}

impl<'a, S: PlaneSource + ?Sized> PlotProfile<'a, S> {
    pub fn new(source: &'a S) -> Self {
        PlotProfile {
            source,
            line_width: 1,
            projection: Projection::Mean,
            channels: None,
            default_z: 0,
        }
    }

    pub fn line_width(mut self, line_width: u32) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    /// Restrict sampling to these channels; all channels otherwise
    pub fn channels(mut self, channels: Vec<u32>) -> Self {
        self.channels = Some(channels);
        self
    }

    /// Focal plane used by shapes that do not name one
    pub fn z(mut self, z: u32) -> Self {
        self.default_z = z;
        self
    }

    pub fn run(&self, shapes: &[Shape]) -> KymoResult<ProfileTable> {
        if shapes.is_empty() {
            return Err(KymoError::InvalidGeometry("no line shapes to profile".to_string()));
        }

        let mut table = ProfileTable::new();
        for shape in shapes {
            let z = shape.z_or(self.default_z);
            for c in shape.channels(self.channels.as_deref(), self.source.size_c()) {
                for t in shape.time_points(self.source.size_t()) {
                    let index = PlaneIndex::new(z, c, t);
                    let ribbon = shape.extract(self.source, self.line_width, index)?;
                    debug!("Profile '{}' at {}: {} samples", shape.label, index, ribbon.length());

                    table.push(ProfileRow {
                        label: shape.label.clone(),
                        z,
                        c,
                        t,
                        line_width: self.line_width,
                        values: ribbon.project(self.projection).to_vec(),
                    });
                }
            }
        }

        info!("Collected {} profiles from {} shapes ({} projection, width {})",
              table.len(), shapes.len(), self.projection, self.line_width);
        Ok(table)
    }
}
