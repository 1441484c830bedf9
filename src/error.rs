//! # Error Types
//!
//! Every operation returns [`Result<T, SimplecryptError>`](SimplecryptError).
//! Failures are split by kind so callers can `match` instead of inspecting strings.

use thiserror::Error;

/// The error type for all encryption and decryption operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimplecryptError {
    /// A required input was missing or malformed (empty password, bad salt).
    ///
    /// This is a programming error on the caller's side and is never worth retrying.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Encryption refused the input.
    #[error("Encryption error: {0}")]
    Encryption(#[from] EncryptionError),

    /// Decryption refused the envelope.
    #[error("Decryption error: {0}")]
    Decryption(#[from] DecryptionError),

    /// The operating system random source could not supply bytes.
    #[error("Random source unavailable: {0}")]
    Entropy(String),

    /// A cryptographic primitive rejected its input.
    #[error("Crypto error: {0}")]
    Crypto(String),
}

/// Reasons [`Encryptor::encrypt`](crate::Encryptor::encrypt) can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncryptionError {
    /// Plaintext would exhaust the 64-bit CTR counter space.
    #[error("Message too long")]
    MessageTooLong,
}

/// Reasons [`Decryptor::decrypt`](crate::Decryptor::decrypt) can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecryptionError {
    /// Envelope is shorter than prefix + salt + tag.
    #[error("Missing data")]
    MissingData,

    /// Envelope does not start with the expected format prefix.
    #[error("Bad data format")]
    BadFormat,

    /// Tag verification failed.
    ///
    /// A wrong password and a modified envelope are deliberately indistinguishable.
    #[error("Bad password or corrupt / modified data")]
    BadPasswordOrCorrupt,
}
