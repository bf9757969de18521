//! Handler for ZSTD compressed data

use crate::errors::{KymoError, KymoResult};
use super::handler::CompressionHandler;
use log::{debug, warn};

/// ZSTD compression handler
pub struct ZstdHandler {
    /// Compression level (1-22, default 3)
    compression_level: i32,
}

impl ZstdHandler {
    pub fn new() -> Self {
        ZstdHandler { compression_level: 3 }
    }

    pub fn with_level(level: i32) -> Self {
        ZstdHandler { compression_level: level.clamp(1, 22) }
    }
}

impl Default for ZstdHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CompressionHandler for ZstdHandler {
    fn decompress(&self, data: &[u8]) -> KymoResult<Vec<u8>> {
        debug!("ZSTD decompressing {} bytes", data.len());
        zstd::decode_all(data).map_err(|e| {
            warn!("ZSTD decompression error: {}", e);
            KymoError::GenericError(format!("ZSTD decompression error: {}", e))
        })
    }

    fn compress(&self, data: &[u8]) -> KymoResult<Vec<u8>> {
        debug!("ZSTD compressing {} bytes with level {}", data.len(), self.compression_level);
        let compressed = zstd::encode_all(data, self.compression_level).map_err(|e| {
            warn!("ZSTD compression error: {}", e);
            KymoError::GenericError(format!("ZSTD compression error: {}", e))
        })?;
        debug!("ZSTD compressed to {} bytes", compressed.len());
        Ok(compressed)
    }

    fn name(&self) -> &'static str {
        "zstd"
    }

    fn extension(&self) -> Option<&'static str> {
        Some("zst")
    }
}
