//! Kymograph files: 16-bit greyscale images or raw values

use std::io::Cursor;
use std::path::PathBuf;
use std::str::FromStr;

use image::{DynamicImage, ImageBuffer, ImageFormat, Luma};
use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

use crate::compression::CompressionHandler;
use crate::errors::{KymoError, KymoResult};
use crate::profile::Kymograph;

use super::npy::encode_npy;
use super::sink::write_output;

lazy_static! {
    static ref UNSAFE_CHARS: Regex = Regex::new(r"[^A-Za-z0-9_.-]+").expect("label pattern is valid");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KymographFormat {
    Png,
    Tiff,
    Npy,
    Csv,
}

impl KymographFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            KymographFormat::Png => "png",
            KymographFormat::Tiff => "tif",
            KymographFormat::Npy => "npy",
            KymographFormat::Csv => "csv",
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, KymographFormat::Png | KymographFormat::Tiff)
    }

    pub fn encode(&self, kymograph: &Kymograph) -> KymoResult<Vec<u8>> {
        match self {
            KymographFormat::Png => encode_image(kymograph, ImageFormat::Png),
            KymographFormat::Tiff => encode_image(kymograph, ImageFormat::Tiff),
            KymographFormat::Npy => encode_npy(kymograph.view()),
            KymographFormat::Csv => Ok(to_csv(kymograph).into_bytes()),
        }
    }
}

impl FromStr for KymographFormat {
    type Err = KymoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "png" => Ok(KymographFormat::Png),
            "tif" | "tiff" => Ok(KymographFormat::Tiff),
            "npy" | "numpy" => Ok(KymographFormat::Npy),
            "csv" => Ok(KymographFormat::Csv),
            other => Err(KymoError::UnsupportedFormat(format!("kymograph format '{}'", other))),
        }
    }
}

/// Maps the kymograph's value range linearly onto `0..=65535`
pub fn to_luma16(kymograph: &Kymograph) -> KymoResult<ImageBuffer<Luma<u16>, Vec<u16>>> {
    let (lo, hi) = kymograph.value_range();
    let scale = if hi > lo { u16::MAX as f64 / (hi - lo) } else { 0.0 };

    let pixels: Vec<u16> = kymograph.data().iter()
        .map(|&v| ((v - lo) * scale).round().clamp(0.0, u16::MAX as f64) as u16)
        .collect();

    ImageBuffer::from_raw(kymograph.length() as u32, kymograph.time_points() as u32, pixels)
        .ok_or_else(|| KymoError::GenericError(format!(
            "cannot build a {}x{} image", kymograph.length(), kymograph.time_points())))
}

fn encode_image(kymograph: &Kymograph, format: ImageFormat) -> KymoResult<Vec<u8>> {
    if kymograph.time_points() == 0 || kymograph.length() == 0 {
        return Err(KymoError::InvalidGeometry(format!("kymograph '{}' is empty", kymograph.label)));
    }

    let image = DynamicImage::ImageLuma16(to_luma16(kymograph)?);
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, format)?;
    Ok(bytes.into_inner())
}

/// Rows are time points, columns are positions along the line
pub fn to_csv(kymograph: &Kymograph) -> String {
    let mut out = String::new();
    for row in kymograph.data().rows() {
        let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

/// `{prefix}_{label}_c{channel}.{ext}` with the label made filesystem-safe
pub fn kymograph_path(prefix: &str, kymograph: &Kymograph, format: KymographFormat) -> PathBuf {
    let label = UNSAFE_CHARS.replace_all(&kymograph.label, "_");
    PathBuf::from(format!("{}_{}_c{}.{}", prefix, label.trim_matches('_'), kymograph.channel, format.extension()))
}

/// Writes each kymograph to its own file and returns the paths written
pub fn write_kymographs(kymographs: &[Kymograph],
                        prefix: &str,
                        format: KymographFormat,
                        handler: &dyn CompressionHandler) -> KymoResult<Vec<PathBuf>> {
    if format.is_image() && handler.extension().is_some() {
        warn!("Compressing {} images with {}; most viewers will not open them directly",
              format.extension(), handler.name());
    }

    kymographs.iter()
        .map(|kymograph| {
            let bytes = format.encode(kymograph)?;
            write_output(&kymograph_path(prefix, kymograph, format), &bytes, handler)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn kymograph() -> Kymograph {
        Kymograph::new("ROI:1 axon/left", 2, 0, array![[10.0, 20.0, 30.0], [30.0, 50.0, 10.0]])
    }

    #[test]
    fn test_rescale_to_full_range() {
        let image = to_luma16(&kymograph()).unwrap();
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(0, 0)[0], 0);
        assert_eq!(image.get_pixel(1, 1)[0], u16::MAX);
        assert_eq!(image.get_pixel(1, 0)[0], 16384);
    }

    #[test]
    fn test_flat_kymograph_is_black() {
        let flat = Kymograph::new("flat", 0, 0, array![[5.0, 5.0]]);
        assert!(to_luma16(&flat).unwrap().pixels().all(|p| p[0] == 0));
    }

    #[test]
    fn test_png_round_trip_dimensions() {
        let bytes = KymographFormat::Png.encode(&kymograph()).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (3, 2));
        assert!(matches!(decoded, DynamicImage::ImageLuma16(_)));
    }

    #[test]
    fn test_file_names_are_sanitised() {
        let path = kymograph_path("out/kymo", &kymograph(), KymographFormat::Tiff);
        assert_eq!(path, PathBuf::from("out/kymo_ROI_1_axon_left_c2.tif"));
    }

    #[test]
    fn test_csv_rows_are_time_points() {
        assert_eq!(to_csv(&kymograph()), "10,20,30\n30,50,10\n");
    }
}
