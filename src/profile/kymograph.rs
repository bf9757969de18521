//! Kymographs: one projected profile per time point, stacked top to bottom

use log::{debug, info};
use ndarray::{Array2, ArrayView2};

use crate::errors::{KymoError, KymoResult};
use crate::plane::{PlaneIndex, PlaneSource};
use crate::roi::Shape;
use crate::utils::progress::ProgressTracker;

use super::Projection;

/// A `size_t x length` image for one shape and channel
#[derive(Debug, Clone, PartialEq)]
pub struct Kymograph {
    pub label: String,
    pub channel: u32,
    pub z: u32,
    data: Array2<f64>,
}

impl Kymograph {
    pub fn new(label: &str, channel: u32, z: u32, data: Array2<f64>) -> Self {
        Kymograph { label: label.to_string(), channel, z, data }
    }

    pub fn time_points(&self) -> usize {
        self.data.nrows()
    }

    pub fn length(&self) -> usize {
        self.data.ncols()
    }

    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// Smallest and largest value, `(0, 0)` when empty
    pub fn value_range(&self) -> (f64, f64) {
        if self.data.is_empty() {
            return (0.0, 0.0);
        }
        self.data.iter().fold((f64::INFINITY, f64::NEG_INFINITY),
                              |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }
}

pub struct KymographBuilder<'a, S: PlaneSource + ?Sized> {
    source: &'a S,
    line_width: u32,
    projection: Projection,
    channels: Option<Vec<u32>>,
    default_z: u32,
    show_progress: bool,
}

impl<'a, S: PlaneSource + ?Sized> KymographBuilder<'a, S> {
    pub fn new(source: &'a S) -> Self {
        KymographBuilder {
            source,
            line_width: 4,
            projection: Projection::Max,
            channels: None,
            default_z: 0,
            show_progress: false,
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

    pub fn channels(mut self, channels: Vec<u32>) -> Self {
        self.channels = Some(channels);
        self
    }

    pub fn z(mut self, z: u32) -> Self {
        self.default_z = z;
        self
    }

    /// Draw a progress bar on the terminal while planes are read
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Builds one kymograph per shape and channel over the full time series
    pub fn build(&self, shapes: &[Shape]) -> KymoResult<Vec<Kymograph>> {
        if shapes.is_empty() {
            return Err(KymoError::InvalidGeometry("no line shapes for a kymograph".to_string()));
        }

        let size_t = self.source.size_t();
        let plan: Vec<(&Shape, Vec<u32>)> = shapes.iter()
            .map(|shape| (shape, shape.channels(self.channels.as_deref(), self.source.size_c())))
            .collect();
        let total: u64 = plan.iter().map(|(_, channels)| channels.len() as u64 * size_t as u64).sum();

        let progress = if self.show_progress {
            ProgressTracker::new(total, "Building kymographs")
        } else {
            ProgressTracker::hidden(total)
        };

        let mut kymographs = Vec::new();
        for (shape, channels) in plan {
            let z = shape.z_or(self.default_z);
            for c in channels {
                progress.set_message(&format!("{} c={}", shape.label, c));
                let kymograph = self.build_one(shape, z, c, size_t, &progress)?;
                debug!("Kymograph '{}' c={}: {} x {}",
                       shape.label, c, kymograph.time_points(), kymograph.length());
                kymographs.push(kymograph);
            }
        }

        progress.finish("Kymographs complete");
        info!("Built {} kymographs over {} time points", kymographs.len(), size_t);
        Ok(kymographs)
    }

    fn build_one(&self,
                 shape: &Shape,
                 z: u32,
                 c: u32,
                 size_t: u32,
                 progress: &ProgressTracker) -> KymoResult<Kymograph> {
        let mut rows = Vec::with_capacity(size_t as usize);
        for t in 0..size_t {
            let ribbon = shape.extract(self.source, self.line_width, PlaneIndex::new(z, c, t))?;
            rows.push(ribbon.project(self.projection));
            progress.increment(1);
        }

        let length = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut data = Array2::zeros((rows.len(), length));
        for (t, row) in rows.into_iter().enumerate() {
            data.row_mut(t).assign(&row);
        }

        Ok(Kymograph::new(&shape.label, c, z, data))
    }
}
