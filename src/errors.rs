//! Custom error types for line profile extraction

use std::fmt;
use std::io;

use crate::plane::PlaneIndex;

/// Errors raised while sampling planes, reading shapes or writing results
#[derive(Debug)]
pub enum KymoError {
    /// I/O error
    IoError(io::Error),
    /// Error from the image codec layer
    ImageError(image::ImageError),
    /// Segment whose rounded length is zero
    DegenerateSegment { x: f64, y: f64 },
    /// Width of zero, non-finite coordinates and similar
    InvalidGeometry(String),
    /// The plane source has no data for this index
    PlaneNotFound(PlaneIndex),
    /// A tile request reached outside the plane
    RegionOutOfBounds { x: i64, y: i64, width: u32, height: u32 },
    /// Arrays or planes whose shapes do not line up
    DimensionMismatch { expected: (usize, usize), found: (usize, usize) },
    /// Malformed line spec, ROI document or number
    ParseError(String),
    /// Invalid run file or defaults table
    ConfigError(String),
    /// Unknown output format, projection or compression
    UnsupportedFormat(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for KymoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KymoError::IoError(e) => write!(f, "I/O error: {}", e),
            KymoError::ImageError(e) => write!(f, "Image error: {}", e),
            KymoError::DegenerateSegment { x, y } =>
                write!(f, "Degenerate segment at ({}, {}): rounds to zero samples", x, y),
            KymoError::InvalidGeometry(msg) => write!(f, "Invalid geometry: {}", msg),
            KymoError::PlaneNotFound(index) => write!(f, "No plane at {}", index),
            KymoError::RegionOutOfBounds { x, y, width, height } =>
                write!(f, "Region ({}, {}) {}x{} lies outside the plane", x, y, width, height),
            KymoError::DimensionMismatch { expected, found } =>
                write!(f, "Dimension mismatch: expected {}x{}, found {}x{}",
                       expected.0, expected.1, found.0, found.1),
            KymoError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            KymoError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            KymoError::UnsupportedFormat(name) => write!(f, "Unsupported format: {}", name),
            KymoError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for KymoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KymoError::IoError(e) => Some(e),
            KymoError::ImageError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for KymoError {
    fn from(error: io::Error) -> Self {
        KymoError::IoError(error)
    }
}

impl From<image::ImageError> for KymoError {
    fn from(error: image::ImageError) -> Self {
        KymoError::ImageError(error)
    }
}

impl From<String> for KymoError {
    fn from(msg: String) -> Self {
        KymoError::GenericError(msg)
    }
}

/// Result type for kymokit operations
pub type KymoResult<T> = Result<T, KymoError>;
