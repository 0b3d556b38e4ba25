//! Whole-file transform built from the keystream and file helpers.

use std::path::Path;

use tracing::error;

use crate::cipher::Keystream;
use crate::error::Result;
use crate::file::{read_file_exact, write_file_all};
use crate::types::{Direction, FileOutcome, FileTask};

/// Applies one keystream in one direction to whole files.
///
/// A single processor is shared by every task of a run, so all files are
/// shifted with the same key and the same direction.
pub struct FileProcessor {
    keystream: Keystream,
    direction: Direction,
}

impl FileProcessor {
    #[must_use]
    pub fn new(keystream: Keystream, direction: Direction) -> Self {
        Self { keystream, direction }
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Transforms `input` into `output` and returns the byte count.
    ///
    /// Reads the whole input, shifts it in place, then writes the whole
    /// output. The input handle is already closed by the time the output
    /// is created, so transforming a file onto itself cannot interleave
    /// a truncation with the read.
    pub async fn transform(&self, input: &Path, output: &Path) -> Result<u64> {
        let mut data = read_file_exact(input).await?;
        self.keystream.apply(&mut data, self.direction);
        write_file_all(output, &data).await?;

        Ok(data.len() as u64)
    }

    /// Runs one task, reporting its result instead of propagating it.
    ///
    /// A success prints the per-file confirmation line; a failure is logged
    /// and recorded in the outcome, leaving the rest of the batch to run.
    pub async fn process(&self, task: &FileTask) -> FileOutcome {
        let result = self.transform(&task.input, &task.output).await;

        match &result {
            Ok(_) => println!("{}: {}", self.direction.done_label(), task.input.display()),
            Err(err) => error!("{err}"),
        }

        FileOutcome {
            index: task.index,
            input: task.input.clone(),
            output: task.output.clone(),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::error::ErrorKind;

    fn processor(key: &[u8], direction: Direction) -> FileProcessor {
        FileProcessor::new(Keystream::new(key).unwrap(), direction)
    }

    #[tokio::test]
    async fn test_encrypt_then_decrypt_restores_content() {
        let dir = tempdir().unwrap();
        let plain = dir.path().join("plain.txt");
        let shifted = dir.path().join("shifted.bin");
        let restored = dir.path().join("restored.txt");

        let content = b"The quick brown fox jumps over the lazy dog";
        std::fs::write(&plain, content).unwrap();

        let bytes = processor(b"secret", Direction::Encrypt).transform(&plain, &shifted).await.unwrap();
        assert_eq!(bytes, content.len() as u64);
        assert_ne!(std::fs::read(&shifted).unwrap(), content);

        processor(b"secret", Direction::Decrypt).transform(&shifted, &restored).await.unwrap();
        assert_eq!(std::fs::read(&restored).unwrap(), content);
    }

    #[tokio::test]
    async fn test_known_shift_is_applied() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("zeros.bin");
        let output = dir.path().join("zeros.out");

        std::fs::write(&input, [0u8, 0, 0]).unwrap();
        processor(b"AB", Direction::Encrypt).transform(&input, &output).await.unwrap();

        assert_eq!(std::fs::read(&output).unwrap(), vec![65, 66, 65]);
    }

    #[tokio::test]
    async fn test_missing_input_leaves_no_output() {
        let dir = tempdir().unwrap();
        let task = FileTask {
            index: 0,
            input: dir.path().join("absent.bin"),
            output: dir.path().join("never.bin"),
        };

        let outcome = processor(b"key", Direction::Encrypt).process(&task).await;

        assert!(!outcome.is_ok());
        assert_eq!(outcome.error_kind(), Some(ErrorKind::Open));
        assert!(!task.output.exists());
    }

    #[tokio::test]
    async fn test_single_byte_file_uses_first_key_byte() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("one.bin");
        let output = dir.path().join("one.out");

        std::fs::write(&input, [7u8]).unwrap();
        processor(b"longkey", Direction::Encrypt).transform(&input, &output).await.unwrap();

        assert_eq!(std::fs::read(&output).unwrap(), vec![7u8.wrapping_add(b'l')]);
    }

    #[tokio::test]
    async fn test_empty_file_transforms_to_empty_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.bin");
        let output = dir.path().join("empty.out");

        std::fs::write(&input, b"").unwrap();
        let bytes = processor(b"key", Direction::Encrypt).transform(&input, &output).await.unwrap();

        assert_eq!(bytes, 0);
        assert_eq!(std::fs::metadata(&output).unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_outcome_keeps_task_paths() {
        let dir = tempdir().unwrap();
        let task = FileTask {
            index: 7,
            input: dir.path().join("in.bin"),
            output: dir.path().join("out.bin"),
        };

        std::fs::write(&task.input, b"payload").unwrap();
        let outcome = processor(b"key", Direction::Encrypt).process(&task).await;

        assert!(outcome.is_ok());
        assert_eq!(outcome.index, 7);
        assert_eq!(outcome.input, task.input);
        assert_eq!(outcome.output, task.output);
    }
}
