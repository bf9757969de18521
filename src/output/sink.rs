//! Writing encoded results to disk through a compression handler

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::compression::CompressionHandler;
use crate::errors::KymoResult;

/// `path` with the handler's suffix appended, e.g. `profiles.csv.gz`
pub fn compressed_path(path: &Path, handler: &dyn CompressionHandler) -> PathBuf {
    match handler.extension() {
        Some(ext) => {
            let mut name = path.as_os_str().to_owned();
            name.push(".");
            name.push(ext);
            PathBuf::from(name)
        }
        None => path.to_path_buf(),
    }
}

/// Compresses `bytes` and writes them, creating parent directories;
/// returns the path actually written
pub fn write_output(path: &Path, bytes: &[u8], handler: &dyn CompressionHandler) -> KymoResult<PathBuf> {
    let target = compressed_path(path, handler);
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let payload = handler.compress(bytes)?;
    debug!("{}: {} bytes -> {} bytes ({})", target.display(), bytes.len(), payload.len(), handler.name());
    fs::write(&target, payload)?;

    info!("Wrote {}", target.display());
    Ok(target)
}
