//! Compression handler trait definition

use crate::errors::KymoResult;

/// Strategy trait for compressing written results and reading compressed inputs
pub trait CompressionHandler: Send + Sync {
    /// Decompress the data
    fn decompress(&self, data: &[u8]) -> KymoResult<Vec<u8>>;

    /// Compress the data
    fn compress(&self, data: &[u8]) -> KymoResult<Vec<u8>>;

    /// Get the name of this compression method
    fn name(&self) -> &'static str;

    /// File suffix appended to compressed outputs, without the dot
    fn extension(&self) -> Option<&'static str>;
}
