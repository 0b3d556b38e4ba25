use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::error::{Result, TransformError};
use crate::types::FileTask;

/// Lists the regular files directly inside `input_dir` as transform tasks.
///
/// The scan is a single level deep. Subdirectories, symlinks, and other
/// non-regular entries are skipped, never descended into or followed. Each
/// task keeps the entry's file name and points its output at the same name
/// under `output_dir`.
pub async fn list_regular_files(input_dir: &Path, output_dir: &Path) -> Result<Vec<FileTask>> {
    let mut entries = fs::read_dir(input_dir)
        .await
        .map_err(|source| TransformError::OpenDir { path: input_dir.to_path_buf(), source })?;

    let mut tasks = Vec::new();

    loop {
        let entry = match entries.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(source) => {
                return Err(TransformError::OpenDir { path: input_dir.to_path_buf(), source });
            }
        };

        // file_type() does not follow symlinks, so a symlink to a file
        // still counts as non-regular here.
        let file_type = match entry.file_type().await {
            Ok(file_type) => file_type,
            Err(_) => {
                debug!("skipping unreadable entry: {}", entry.path().display());
                continue;
            }
        };

        if !file_type.is_file() {
            debug!("skipping non-regular entry: {}", entry.path().display());
            continue;
        }

        tasks.push(FileTask {
            index: tasks.len(),
            input: entry.path(),
            output: output_dir.join(entry.file_name()),
        });
    }

    Ok(tasks)
}
