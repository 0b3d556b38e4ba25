use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::error::{Result, TransformError};

/// Reads an entire file into memory.
///
/// The buffer is sized from the file's metadata and filled with `read_exact`,
/// so a file that shrinks mid-read surfaces as a read error instead of a
/// silently truncated buffer. The handle closes when this returns.
pub async fn read_file_exact(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path)
        .await
        .map_err(|source| TransformError::Open { path: path.to_path_buf(), source })?;

    let metadata = file
        .metadata()
        .await
        .map_err(|source| TransformError::Stat { path: path.to_path_buf(), source })?;

    let mut data = vec![0u8; metadata.len() as usize];
    file.read_exact(&mut data)
        .await
        .map_err(|source| TransformError::Read { path: path.to_path_buf(), source })?;

    Ok(data)
}

/// Creates (or truncates) the output file and writes the whole buffer.
///
/// Flushes before returning, so a success here means every byte was handed
/// to the operating system. The handle closes when this returns.
pub async fn write_file_all(path: &Path, data: &[u8]) -> Result<()> {
    let mut file = File::create(path)
        .await
        .map_err(|source| TransformError::Create { path: path.to_path_buf(), source })?;

    file.write_all(data)
        .await
        .map_err(|source| TransformError::Write { path: path.to_path_buf(), source })?;

    file.flush()
        .await
        .map_err(|source| TransformError::Write { path: path.to_path_buf(), source })?;

    Ok(())
}
