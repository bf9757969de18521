//! Line-like regions of interest and the formats they are read from

mod line_spec;
mod ome_xml;
mod shape;
mod toml_shapes;

use std::path::Path;

use log::info;

use crate::compression::read_text;
use crate::errors::KymoResult;

pub use line_spec::{parse_line, parse_point, parse_polyline};
pub use ome_xml::parse_ome_rois;
pub use shape::{Shape, ShapeGeometry};
pub use toml_shapes::parse_toml_shapes;

/// Loads shapes from an OME-XML or TOML ROI file, optionally `.gz`/`.zst`
/// compressed
pub fn read_roi_file(path: &Path) -> KymoResult<Vec<Shape>> {
    let text = read_text(path)?;

    let name = path.to_string_lossy().to_lowercase();
    let stem = name.trim_end_matches(".gz").trim_end_matches(".zst");

    let shapes = if stem.ends_with(".toml") {
        let value: toml::Value = toml::from_str(&text)
            .map_err(|e| crate::errors::KymoError::ConfigError(format!("{}: {}", path.display(), e)))?;
        parse_toml_shapes(&value)?
    } else {
        parse_ome_rois(&text)?
    };

    info!("Loaded {} line shapes from {}", shapes.len(), path.display());
    Ok(shapes)
}
