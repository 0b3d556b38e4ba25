//! ShiftByte - Vigenère-style byte shifting for files and directories.
//!
//! Shifts every byte of a file by the matching byte of a repeating
//! passphrase key, forward to encrypt and backward to decrypt. Pointed at a
//! directory, it transforms every regular file directly inside it through a
//! bounded worker pool and reports per-file outcomes.
//!
//! The cipher is the classical Vigenère scheme over raw bytes. It is
//! reversible obfuscation, not protection against anyone who can run a
//! frequency analysis.

pub mod app;
pub mod cipher;
pub mod config;
pub mod error;
pub mod file;
pub mod processor;
pub mod secret;
pub mod types;
pub mod worker;
