//! Factory for creating compression handlers

use std::path::Path;

use crate::errors::{KymoError, KymoResult};
use super::gzip::GzipHandler;
use super::handler::CompressionHandler;
use super::uncompressed::UncompressedHandler;
use super::zstd::ZstdHandler;

pub struct CompressionFactory;

impl CompressionFactory {
    /// Get a handler by name
    pub fn get_handler_by_name(name: &str) -> KymoResult<Box<dyn CompressionHandler>> {
        match name.trim().to_lowercase().as_str() {
            "uncompressed" | "none" | "" => Ok(Box::new(UncompressedHandler)),
            "gzip" | "gz" => Ok(Box::new(GzipHandler::new())),
            "zstd" | "zst" => Ok(Box::new(ZstdHandler::new())),
            _ => Err(KymoError::UnsupportedFormat(format!("compression '{}'", name))),
        }
    }

    /// Pick a handler from a file's final extension; unknown extensions
    /// are read as-is
    pub fn handler_for_path(path: &Path) -> Box<dyn CompressionHandler> {
        let extension = path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("gz") => Box::new(GzipHandler::new()),
            Some("zst") => Box::new(ZstdHandler::new()),
            _ => Box::new(UncompressedHandler),
        }
    }

    pub fn get_available_handlers() -> Vec<Box<dyn CompressionHandler>> {
        vec![
            Box::new(UncompressedHandler),
            Box::new(GzipHandler::new()),
            Box::new(ZstdHandler::new()),
        ]
    }
}
