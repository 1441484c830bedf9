// src/encryptor/mod.rs

//! High-level encryption facade.
//!
//! Core API: `encrypt(&password, plaintext)?` with the default scheme, or an
//! [`Encryptor`] built from explicit [`SchemeParams`](crate::SchemeParams).

pub(crate) mod encrypt;

pub use encrypt::{check_message_len, Encryptor};

use crate::aliases::PasswordString;
use crate::error::SimplecryptError;

/// Encrypt with the default `sc\0\0` scheme and the OS random source.
///
/// # Example
///
/// ```
/// use simplecrypt_rs::aliases::PasswordString;
/// use simplecrypt_rs::{decrypt, encrypt};
///
/// let password = PasswordString::new("correct horse battery staple".to_string());
/// let envelope = encrypt(&password, b"hello world")?;
/// assert_eq!(envelope.len(), 63);
/// assert_eq!(decrypt(&password, &envelope)?, b"hello world");
/// # Ok::<(), simplecrypt_rs::SimplecryptError>(())
/// ```
#[inline]
pub fn encrypt(password: &PasswordString, plaintext: &[u8]) -> Result<Vec<u8>, SimplecryptError> {
    Encryptor::default().encrypt(password, plaintext)
}
