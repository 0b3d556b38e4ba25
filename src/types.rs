//! Core types shared across the engine.
//!
//! - [`Direction`]: which way the keystream is applied
//! - [`FileTask`]: one file scheduled for processing
//! - [`FileOutcome`]: what happened to one task
//! - [`BatchReport`]: aggregated outcomes of a directory run

use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use crate::error::{ErrorKind, TransformError};

/// Which way the byte transform runs.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    /// Add the keystream to every byte.
    Encrypt,

    /// Subtract the keystream from every byte.
    Decrypt,
}

impl Direction {
    /// Lowercase label for logs and diagnostics.
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Encrypt => "encrypt",
            Self::Decrypt => "decrypt",
        }
    }

    /// Past-tense label used in the per-file success line.
    #[inline]
    #[must_use]
    pub fn done_label(self) -> &'static str {
        match self {
            Self::Encrypt => "Encrypted",
            Self::Decrypt => "Decrypted",
        }
    }
}

impl Display for Direction {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One file scheduled for processing.
///
/// Tasks are created per regular file when the input path is a directory
/// and are discarded once executed. The `index` records enumeration order
/// so the batch report can be re-ordered after the tasks race.
#[derive(Debug, Clone)]
pub struct FileTask {
    /// Position in the directory enumeration.
    pub index: usize,

    /// File to read.
    pub input: PathBuf,

    /// File to create or truncate.
    pub output: PathBuf,
}

/// Result of running one [`FileTask`] to completion.
#[derive(Debug)]
pub struct FileOutcome {
    /// The task's enumeration index.
    pub index: usize,

    /// The input path the task was bound to.
    pub input: PathBuf,

    /// The output path the task was bound to.
    pub output: PathBuf,

    /// Bytes transformed on success, or the per-file failure.
    pub result: Result<u64, TransformError>,
}

impl FileOutcome {
    /// Whether the file was transformed and written in full.
    #[inline]
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// The failure class, if the task failed.
    #[inline]
    #[must_use]
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.result.as_ref().err().map(TransformError::kind)
    }
}

/// Aggregated outcomes of a directory run.
///
/// Outcomes arrive in completion order while the tasks race; the report
/// sorts them back into enumeration order so callers and tests see a
/// stable view of the batch.
#[derive(Debug, Default)]
pub struct BatchReport {
    outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    /// Builds a report from outcomes in arbitrary completion order.
    #[must_use]
    pub fn from_outcomes(mut outcomes: Vec<FileOutcome>) -> Self {
        outcomes.sort_unstable_by_key(|outcome| outcome.index);
        Self { outcomes }
    }

    /// Per-file outcomes in enumeration order.
    #[must_use]
    pub fn outcomes(&self) -> &[FileOutcome] {
        &self.outcomes
    }

    /// Number of files the batch attempted.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether the batch contained no files at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Number of files transformed and written in full.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.is_ok()).count()
    }

    /// Number of files skipped because of a per-file failure.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.len() - self.succeeded()
    }

    /// Total bytes transformed across the successful files.
    #[must_use]
    pub fn bytes_processed(&self) -> u64 {
        self.outcomes.iter().filter_map(|outcome| outcome.result.as_ref().ok()).sum()
    }
}
