use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::error::{Result, RewriteError};

/// Read a whole file as UTF-8 text
pub fn read_document(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| RewriteError::from_io(e, path))?;

    debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Truncate `path` and write `content` to it.
///
/// The write happens in place: there is no temp file and no rename, so an
/// interrupted write can leave the file truncated. Parent directories are
/// not created.
pub fn write_document(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing {} bytes to {}", content.len(), path.display());

    let mut file = File::create(path).map_err(|e| RewriteError::from_io(e, path))?;
    file.write_all(content.as_bytes())
        .map_err(|e| RewriteError::from_io(e, path))?;
    file.flush().map_err(|e| RewriteError::from_io(e, path))?;

    Ok(())
}
