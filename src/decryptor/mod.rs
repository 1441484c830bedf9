// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt(&password, envelope)?` with the default scheme, or a
//! [`Decryptor`] built from explicit [`SchemeParams`](crate::SchemeParams).

pub(crate) mod decrypt;

pub use decrypt::Decryptor;

use crate::aliases::PasswordString;
use crate::error::SimplecryptError;

/// Decrypt an envelope written with the default `sc\0\0` scheme.
#[inline]
pub fn decrypt(password: &PasswordString, envelope: &[u8]) -> Result<Vec<u8>, SimplecryptError> {
    Decryptor::default().decrypt(password, envelope)
}
