//! Atomic document writes.
//!
//! A document file is either the previous version or the new one, never a
//! partial write: content goes to a temp file in the same directory and is
//! renamed over the target.

use std::io;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically replace `path` with `content`.
///
/// The parent directory must already exist.
pub async fn atomic_write(path: &Path, content: Vec<u8>) -> io::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no parent directory"))?
        .to_path_buf();
    let target_path = path.to_path_buf();

    tokio::task::spawn_blocking(move || -> io::Result<()> {
        use std::io::Write;

        let mut temp_file = NamedTempFile::new_in(&parent)?;
        temp_file.write_all(&content)?;
        temp_file.as_file().sync_all()?;

        // persist() consumes the temp file, so it is not removed on drop
        temp_file.persist(&target_path)?;
        Ok(())
    })
    .await
    .map_err(io::Error::other)?
}
