use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure classes for the transform engine.
///
/// Consumers branch on kinds rather than matching [`TransformError`]
/// variants, so an error message can grow context without breaking callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input file could not be opened for reading.
    Open,
    /// The input file's size could not be determined.
    Stat,
    /// The input file could not be read in full.
    Read,
    /// The output file could not be created or truncated.
    Create,
    /// The output file could not be written in full.
    Write,
    /// The input directory could not be opened for listing.
    OpenDir,
    /// A keystream was requested for an empty key.
    EmptyKey,
}

/// Error raised while transforming a file or listing a directory.
///
/// Filesystem variants carry the offending path, so a log line or a batch
/// report entry identifies the file on its own.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("failed to open input file {}: {}", path.display(), source)]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to stat input file {}: {}", path.display(), source)]
    Stat { path: PathBuf, source: io::Error },

    #[error("failed to read input file {}: {}", path.display(), source)]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to create output file {}: {}", path.display(), source)]
    Create { path: PathBuf, source: io::Error },

    #[error("failed to write output file {}: {}", path.display(), source)]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to open directory {}: {}", path.display(), source)]
    OpenDir { path: PathBuf, source: io::Error },

    #[error("key must not be empty")]
    EmptyKey,
}

impl TransformError {
    /// The failure class of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Open { .. } => ErrorKind::Open,
            Self::Stat { .. } => ErrorKind::Stat,
            Self::Read { .. } => ErrorKind::Read,
            Self::Create { .. } => ErrorKind::Create,
            Self::Write { .. } => ErrorKind::Write,
            Self::OpenDir { .. } => ErrorKind::OpenDir,
            Self::EmptyKey => ErrorKind::EmptyKey,
        }
    }

    /// The path the failing operation was addressing, when there is one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Open { path, .. }
            | Self::Stat { path, .. }
            | Self::Read { path, .. }
            | Self::Create { path, .. }
            | Self::Write { path, .. }
            | Self::OpenDir { path, .. } => Some(path),
            Self::EmptyKey => None,
        }
    }
}

/// Convenience alias for engine-level results.
pub type Result<T> = std::result::Result<T, TransformError>;
