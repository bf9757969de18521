//! Plane source backed by image files
//!
//! Each file is one time point of a time series. Colour images contribute
//! one channel per colour component (alpha is ignored); greyscale images
//! contribute a single channel. Sample values are kept as stored, so a
//! 16-bit image yields values in `0..=65535` and an 8-bit one `0..=255`.

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageBuffer, Pixel};
use log::{debug, info};
use ndarray::Array2;

use crate::errors::{KymoError, KymoResult};
use crate::extractor::Region;

use super::source::{PlaneIndex, PlaneSource};
use super::stack::PlaneStack;

/// Time series of image files decoded into memory
#[derive(Debug, Clone)]
pub struct ImagePlaneSource {
    paths: Vec<PathBuf>,
    stack: PlaneStack,
}

impl ImagePlaneSource {
    /// Decode every file; all files must share dimensions and channel count
    ///
    /// # Arguments
    /// * `paths` - Image files, one per time point, in time order
    pub fn open<P: AsRef<Path>>(paths: &[P]) -> KymoResult<Self> {
        if paths.is_empty() {
            return Err(KymoError::GenericError("No input images given".to_string()));
        }

        let mut decoded = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            info!("Decoding {}", path.display());
            let image = image::open(path)?;
            decoded.push(split_channels(&image));
        }

        let first = &decoded[0];
        let (rows, cols) = first[0].dim();
        let size_c = first.len() as u32;
        let mut stack = PlaneStack::new(cols as u32, rows as u32, 1, size_c, decoded.len() as u32);

        for (t, channels) in decoded.into_iter().enumerate() {
            if channels.len() as u32 != size_c {
                return Err(KymoError::GenericError(format!(
                    "{} has {} channels, expected {}",
                    paths[t].as_ref().display(), channels.len(), size_c)));
            }

            for (c, plane) in channels.into_iter().enumerate() {
                stack.insert(PlaneIndex::new(0, c as u32, t as u32), plane)?;
            }
        }

        debug!("Loaded {} planes of {}x{}", stack.plane_count(), cols, rows);

        Ok(ImagePlaneSource {
            paths: paths.iter().map(|p| p.as_ref().to_path_buf()).collect(),
            stack,
        })
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// One-line description per input file
    pub fn describe(&self) -> String {
        let mut result = String::new();
        for (t, path) in self.paths.iter().enumerate() {
            result.push_str(&format!("{}: t={} {}x{} pixels, {} channel(s)\n",
                                     path.display(), t, self.size_x(), self.size_y(), self.size_c()));
        }
        result
    }
}

impl PlaneSource for ImagePlaneSource {
    fn size_x(&self) -> u32 {
        self.stack.size_x()
    }

    fn size_y(&self) -> u32 {
        self.stack.size_y()
    }

    fn size_z(&self) -> u32 {
        self.stack.size_z()
    }

    fn size_c(&self) -> u32 {
        self.stack.size_c()
    }

    fn size_t(&self) -> u32 {
        self.stack.size_t()
    }

    fn get_tile(&self, index: PlaneIndex, region: Region) -> KymoResult<Array2<f64>> {
        self.stack.get_tile(index, region)
    }
}

/// Split a decoded image into one plane per colour channel
pub(crate) fn split_channels(image: &DynamicImage) -> Vec<Array2<f64>> {
    match image {
        DynamicImage::ImageLuma8(buffer) => buffer_planes(buffer, 1),
        DynamicImage::ImageLumaA8(buffer) => buffer_planes(buffer, 1),
        DynamicImage::ImageLuma16(buffer) => buffer_planes(buffer, 1),
        DynamicImage::ImageLumaA16(buffer) => buffer_planes(buffer, 1),
        DynamicImage::ImageRgb8(buffer) => buffer_planes(buffer, 3),
        DynamicImage::ImageRgba8(buffer) => buffer_planes(buffer, 3),
        DynamicImage::ImageRgb16(buffer) => buffer_planes(buffer, 3),
        DynamicImage::ImageRgba16(buffer) => buffer_planes(buffer, 3),
        DynamicImage::ImageRgb32F(buffer) => buffer_planes(buffer, 3),
        DynamicImage::ImageRgba32F(buffer) => buffer_planes(buffer, 3),
        other => buffer_planes(&other.to_rgb32f(), 3),
    }
}

fn buffer_planes<P>(buffer: &ImageBuffer<P, Vec<P::Subpixel>>, channels: usize) -> Vec<Array2<f64>>
where
    P: Pixel,
    P::Subpixel: Into<f64>,
{
    let (width, height) = buffer.dimensions();
    (0..channels)
        .map(|c| {
            Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
                buffer.get_pixel(col as u32, row as u32).channels()[c].into()
            })
        })
        .collect()
}
