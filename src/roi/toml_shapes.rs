//! `[[shape]]` tables in TOML run files
//!
//! ```toml
//! [[shape]]
//! label = "axon"
//! line = [10, 12, 80, 40]
//! z = 0
//!
//! [[shape]]
//! points = [[5, 5], [20, 8], [30, 30]]
//! ```

use toml::Value;

use crate::coordinate::{LineSegment, Point, Polyline};
use crate::errors::{KymoError, KymoResult};

use super::shape::Shape;

fn as_number(value: &Value, what: &str) -> KymoResult<f64> {
    match value {
        Value::Integer(i) => Ok(*i as f64),
        Value::Float(f) => Ok(*f),
        other => Err(KymoError::ConfigError(format!("{} must be a number, got {}", what, other))),
    }
}

fn as_index(table: &toml::value::Table, key: &str, label: &str) -> KymoResult<Option<u32>> {
    match table.get(key) {
        None => Ok(None),
        Some(Value::Integer(i)) if *i >= 0 && *i <= u32::MAX as i64 => Ok(Some(*i as u32)),
        Some(other) => Err(KymoError::ConfigError(format!(
            "shape '{}': {} must be a non-negative integer, got {}", label, key, other))),
    }
}

fn line(values: &[Value], label: &str) -> KymoResult<LineSegment> {
    if values.len() != 4 {
        return Err(KymoError::ConfigError(format!(
            "shape '{}': line needs [x1, y1, x2, y2], got {} values", label, values.len())));
    }
    let c = values.iter()
        .map(|v| as_number(v, "line coordinate"))
        .collect::<KymoResult<Vec<_>>>()?;
    let segment = LineSegment::new(c[0], c[1], c[2], c[3]);
    segment.validate()?;
    Ok(segment)
}

fn polyline(values: &[Value], label: &str) -> KymoResult<Polyline> {
    let mut points = Vec::with_capacity(values.len());
    for value in values {
        match value.as_array().map(|pair| pair.as_slice()) {
            Some([x, y]) => points.push(Point::new(as_number(x, "point x")?, as_number(y, "point y")?)),
            _ => return Err(KymoError::ConfigError(format!(
                "shape '{}': points must be [x, y] pairs", label))),
        }
    }
    Polyline::new(points)
}

/// Reads the `shape` array of tables from a parsed run file
pub fn parse_toml_shapes(root: &Value) -> KymoResult<Vec<Shape>> {
    let entries = match root.get("shape") {
        None => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(KymoError::ConfigError("'shape' must be an array of tables".to_string())),
    };

    let mut shapes = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let table = entry.as_table()
            .ok_or_else(|| KymoError::ConfigError(format!("shape #{} is not a table", i)))?;

        let label = match table.get("label") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => return Err(KymoError::ConfigError(format!("shape #{}: label must be a string, got {}", i, other))),
            None => format!("shape{}", i),
        };

        let mut shape = match (table.get("line"), table.get("points")) {
            (Some(Value::Array(values)), None) => Shape::line(&label, line(values, &label)?),
            (None, Some(Value::Array(values))) => Shape::polyline(&label, polyline(values, &label)?),
            _ => return Err(KymoError::ConfigError(format!(
                "shape '{}' needs exactly one of 'line' or 'points'", label))),
        };

        shape.z = as_index(table, "z", &label)?;
        shape.c = as_index(table, "c", &label)?;
        shape.t = as_index(table, "t", &label)?;
        shapes.push(shape);
    }

    Ok(shapes)
}
