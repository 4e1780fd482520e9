//! Sitemap export
//!
//! Writes an encoded sitemap to its destination. The bytes are produced in
//! full before this is called, so a failed encode never leaves a partial file.

use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Write `bytes` to `path`, creating or truncating the file
///
/// I/O failures are returned unchanged as [`Error::Io`](crate::Error::Io).
pub fn write_file(path: impl AsRef<Path>, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, bytes)?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote sitemap");
    Ok(())
}
