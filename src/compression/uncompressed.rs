//! Pass-through handler

use crate::errors::KymoResult;
use super::handler::CompressionHandler;

pub struct UncompressedHandler;

impl CompressionHandler for UncompressedHandler {
    fn decompress(&self, data: &[u8]) -> KymoResult<Vec<u8>> {
        Ok(data.to_vec())
    }

    fn compress(&self, data: &[u8]) -> KymoResult<Vec<u8>> {
        Ok(data.to_vec())
    }

    fn name(&self) -> &'static str {
        "none"
    }

    fn extension(&self) -> Option<&'static str> {
        None
    }
}
