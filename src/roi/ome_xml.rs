//! Line and polyline shapes from OME-XML ROI documents
//!
//! Only `Line` and `Polyline` shapes are read. Other shape kinds are
//! skipped with a debug message; a kymograph has no meaning for them.

use std::borrow::Cow;
use std::collections::HashMap;

use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::coordinate::LineSegment;
use crate::errors::{KymoError, KymoResult};

use super::line_spec::parse_polyline;
use super::shape::Shape;

/// Parses every `Line` and `Polyline` in `xml`, in document order
pub fn parse_ome_rois(xml: &str) -> KymoResult<Vec<Shape>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut shapes = Vec::new();
    let mut roi_id: Option<String> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            KymoError::ParseError(format!("ROI XML error at byte {}: {}", reader.error_position(), e))
        })?;

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                match e.local_name().as_ref() {
                    b"ROI" => roi_id = attributes(e)?.remove("ID"),
                    b"Line" => shapes.push(line_shape(e, roi_id.as_deref(), shapes.len())?),
                    b"Polyline" => shapes.push(polyline_shape(e, roi_id.as_deref(), shapes.len())?),
                    b"Rectangle" | b"Ellipse" | b"Point" | b"Polygon" | b"Mask" | b"Label" => {
                        debug!("Skipping non-line ROI shape {}",
                               String::from_utf8_lossy(e.local_name().as_ref()));
                    }
                    _ => {}
                }
            }
            Event::End(ref e) if e.local_name().as_ref() == b"ROI" => roi_id = None,
            Event::Eof => break,
            _ => {}
        }
    }

    debug!("Read {} line shapes from ROI XML", shapes.len());
    Ok(shapes)
}

fn attributes(element: &BytesStart<'_>) -> KymoResult<HashMap<String, String>> {
    let mut map = HashMap::new();
    for attr in element.attributes() {
        let attr = attr.map_err(|e| KymoError::ParseError(format!("bad ROI attribute: {}", e)))?;
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value: Cow<'_, str> = attr.unescape_value()
            .map_err(|e| KymoError::ParseError(format!("bad value for '{}': {}", key, e)))?;
        map.insert(key, value.into_owned());
    }
    Ok(map)
}

fn coordinate(attrs: &HashMap<String, String>, name: &str) -> KymoResult<f64> {
    let text = attrs.get(name)
        .ok_or_else(|| KymoError::ParseError(format!("Line is missing attribute {}", name)))?;
    text.trim().parse::<f64>()
        .map_err(|_| KymoError::ParseError(format!("attribute {}='{}' is not a number", name, text)))
}

fn plane_attr(attrs: &HashMap<String, String>, name: &str) -> KymoResult<Option<u32>> {
    match attrs.get(name) {
        None => Ok(None),
        Some(text) => text.trim().parse::<u32>().map(Some)
            .map_err(|_| KymoError::ParseError(format!("attribute {}='{}' is not a plane index", name, text))),
    }
}

fn label(attrs: &HashMap<String, String>, roi_id: Option<&str>, ordinal: usize) -> String {
    if let Some(text) = attrs.get("Text").filter(|t| !t.trim().is_empty()) {
        return text.trim().to_string();
    }
    if let Some(id) = attrs.get("ID") {
        return id.clone();
    }
    match roi_id {
        Some(roi) => format!("{}:{}", roi, ordinal),
        None => format!("shape{}", ordinal),
    }
}

fn pin(shape: &mut Shape, attrs: &HashMap<String, String>) -> KymoResult<()> {
    shape.z = plane_attr(attrs, "TheZ")?;
    shape.c = plane_attr(attrs, "TheC")?;
    shape.t = plane_attr(attrs, "TheT")?;
    Ok(())
}

fn line_shape(element: &BytesStart<'_>, roi_id: Option<&str>, ordinal: usize) -> KymoResult<Shape> {
    let attrs = attributes(element)?;
    let segment = LineSegment::new(coordinate(&attrs, "X1")?, coordinate(&attrs, "Y1")?,
                                   coordinate(&attrs, "X2")?, coordinate(&attrs, "Y2")?);
    segment.validate()?;

    let mut shape = Shape::line(&label(&attrs, roi_id, ordinal), segment);
    pin(&mut shape, &attrs)?;
    Ok(shape)
}

fn polyline_shape(element: &BytesStart<'_>, roi_id: Option<&str>, ordinal: usize) -> KymoResult<Shape> {
    let attrs = attributes(element)?;
    let points = attrs.get("Points")
        .ok_or_else(|| KymoError::ParseError("Polyline is missing attribute Points".to_string()))?;

    let mut shape = Shape::polyline(&label(&attrs, roi_id, ordinal), parse_polyline(points)?);
    pin(&mut shape, &attrs)?;
    Ok(shape)
}
