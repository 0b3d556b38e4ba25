//! Additive byte cipher keyed by a repeating passphrase.
//!
//! The scheme is the classical Vigenère cipher applied to raw bytes: every
//! byte is shifted by the key byte at the same offset, with the key repeated
//! to cover the whole input. Addition wraps modulo 256, so every byte value
//! roundtrips. This is reversible obfuscation, not encryption that resists
//! analysis.

use crate::error::{Result, TransformError};
use crate::secret::Passphrase;
use crate::types::Direction;

/// Repeating-key byte shifter shared by every file in a run.
#[derive(Debug)]
pub struct Keystream {
    key: Vec<u8>,
}

impl Keystream {
    /// Creates a keystream from raw key bytes.
    ///
    /// Rejects an empty key: with no key bytes to cycle there is no
    /// well-defined shift for any position.
    pub fn new(key: &[u8]) -> Result<Self> {
        if key.is_empty() {
            return Err(TransformError::EmptyKey);
        }
        Ok(Self { key: key.to_vec() })
    }

    /// Creates a keystream from a passphrase, using its UTF-8 bytes as-is.
    pub fn from_passphrase(passphrase: &Passphrase) -> Result<Self> {
        Self::new(passphrase.expose_secret().as_bytes())
    }

    /// Shifts the buffer in place, forward or backward per `direction`.
    pub fn apply(&self, data: &mut [u8], direction: Direction) {
        match direction {
            Direction::Encrypt => self.encrypt(data),
            Direction::Decrypt => self.decrypt(data),
        }
    }

    /// Adds the repeating key to the buffer, wrapping modulo 256.
    pub fn encrypt(&self, data: &mut [u8]) {
        for (byte, key_byte) in data.iter_mut().zip(self.key.iter().cycle()) {
            *byte = byte.wrapping_add(*key_byte);
        }
    }

    /// Subtracts the repeating key from the buffer, undoing [`Self::encrypt`].
    pub fn decrypt(&self, data: &mut [u8]) {
        for (byte, key_byte) in data.iter_mut().zip(self.key.iter().cycle()) {
            *byte = byte.wrapping_sub(*key_byte);
        }
    }
}
