//! Encodings for profile tables

use std::fmt::Write as _;
use std::str::FromStr;

use crate::errors::{KymoError, KymoResult};
use crate::profile::ProfileTable;

use super::npy::encode_npy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Json,
    Npy,
}

impl TableFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            TableFormat::Csv => "csv",
            TableFormat::Json => "json",
            TableFormat::Npy => "npy",
        }
    }

    pub fn encode(&self, table: &ProfileTable) -> KymoResult<Vec<u8>> {
        match self {
            TableFormat::Csv => Ok(to_csv(table).into_bytes()),
            TableFormat::Json => Ok(to_json(table).into_bytes()),
            TableFormat::Npy => encode_npy(table.to_array().view()),
        }
    }
}

impl FromStr for TableFormat {
    type Err = KymoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(TableFormat::Csv),
            "json" => Ok(TableFormat::Json),
            "npy" | "numpy" => Ok(TableFormat::Npy),
            other => Err(KymoError::UnsupportedFormat(format!("profile format '{}'", other))),
        }
    }
}

pub(crate) fn csv_field(text: &str) -> String {
    if text.contains(',') || text.contains('"') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

/// One header row, then one row per profile; short rows leave trailing
/// cells empty
pub fn to_csv(table: &ProfileTable) -> String {
    let width = table.max_length();
    let mut out = String::from("label,z,c,t,width");
    for i in 0..width {
        let _ = write!(out, ",{}", i);
    }
    out.push('\n');

    for row in table.rows() {
        let _ = write!(out, "{},{},{},{},{}", csv_field(&row.label), row.z, row.c, row.t, row.line_width);
        for value in &row.values {
            let _ = write!(out, ",{}", value);
        }
        for _ in row.values.len()..width {
            out.push(',');
        }
        out.push('\n');
    }
    out
}

fn json_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn json_number(value: f64) -> String {
    if value.is_finite() {
        format!("{}", value)
    } else {
        "null".to_string()
    }
}

pub fn to_json(table: &ProfileTable) -> String {
    let mut out = String::from("[\n");
    for (i, row) in table.rows().iter().enumerate() {
        let values: Vec<String> = row.values.iter().map(|&v| json_number(v)).collect();
        let _ = write!(out,
                       "  {{\"label\": {}, \"z\": {}, \"c\": {}, \"t\": {}, \"width\": {}, \"values\": [{}]}}",
                       json_string(&row.label), row.z, row.c, row.t, row.line_width, values.join(", "));
        out.push_str(if i + 1 < table.len() { ",\n" } else { "\n" });
    }
    out.push(']');
    out.push('\n');
    out
}
