//! Handler for gzip streams

use std::io::{Read, Write};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use crate::errors::{KymoError, KymoResult};
use super::handler::CompressionHandler;

/// Gzip handler, level 0-9
pub struct GzipHandler {
    level: u32,
}

impl GzipHandler {
    pub fn new() -> Self {
        GzipHandler { level: 6 }
    }

    pub fn with_level(level: u32) -> Self {
        GzipHandler { level: level.min(9) }
    }
}

impl Default for GzipHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CompressionHandler for GzipHandler {
    fn decompress(&self, data: &[u8]) -> KymoResult<Vec<u8>> {
        let mut decoder = GzDecoder::new(data);
        let mut decompressed_data = Vec::new();
        decoder.read_to_end(&mut decompressed_data)
            .map_err(|e| KymoError::GenericError(format!("gzip decompression error: {}", e)))?;
        Ok(decompressed_data)
    }

    fn compress(&self, data: &[u8]) -> KymoResult<Vec<u8>> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::new(self.level));
        encoder.write_all(data)?;
        Ok(encoder.finish()?)
    }

    fn name(&self) -> &'static str {
        "gzip"
    }

    fn extension(&self) -> Option<&'static str> {
        Some("gz")
    }
}
