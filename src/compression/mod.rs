//! Compression of written results and compressed ROI/config inputs
//!
//! Handlers follow a strategy pattern and are picked by name or by file
//! extension through [`CompressionFactory`].

mod handler;
mod uncompressed;
mod gzip;
mod factory;
mod zstd;

use std::fs;
use std::path::Path;

use crate::errors::KymoResult;

pub use handler::CompressionHandler;
pub use uncompressed::UncompressedHandler;
pub use gzip::GzipHandler;
pub use factory::CompressionFactory;
pub use zstd::ZstdHandler;

/// Reads a text file, decompressing `.gz` and `.zst` files on the way
pub fn read_text(path: &Path) -> KymoResult<String> {
    let raw = fs::read(path)?;
    let bytes = CompressionFactory::handler_for_path(path).decompress(&raw)?;
    String::from_utf8(bytes)
        .map_err(|e| crate::errors::KymoError::ParseError(format!("{} is not UTF-8: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &[u8] = b"label,z,c,t,width,0,1\nline,0,0,0,1,3.5,4.5\n";

    #[test]
    fn test_every_handler_restores_input() {
        for handler in CompressionFactory::get_available_handlers() {
            let packed = handler.compress(PAYLOAD).unwrap();
            assert_eq!(handler.decompress(&packed).unwrap(), PAYLOAD, "{}", handler.name());
        }
    }

    #[test]
    fn test_lookup_by_name_and_path() {
        assert_eq!(CompressionFactory::get_handler_by_name("GZIP").unwrap().extension(), Some("gz"));
        assert_eq!(CompressionFactory::get_handler_by_name("none").unwrap().extension(), None);
        assert!(CompressionFactory::get_handler_by_name("lzw").is_err());

        assert_eq!(CompressionFactory::handler_for_path(Path::new("rois.xml.zst")).name(), "zstd");
        assert_eq!(CompressionFactory::handler_for_path(Path::new("rois.xml")).name(), "none");
    }

    #[test]
    fn test_read_text_decompresses() {
        let path = std::env::temp_dir().join("kymokit_read_text.toml.gz");
        let packed = GzipHandler::new().compress(b"line_width = 3\n").unwrap();
        fs::write(&path, packed).unwrap();

        assert_eq!(read_text(&path).unwrap(), "line_width = 3\n");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_gzip_is_an_error() {
        assert!(GzipHandler::new().decompress(b"not gzip").is_err());
    }
}
