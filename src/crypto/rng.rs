// src/crypto/rng.rs
//! Secure randomness for salts
//!
//! `RandomSource` is the seam between the encryptor and the entropy pool.
//! Production code uses [`OsRandom`]; a failed read is an error, never a fallback.

use crate::aliases::Salt16;
use crate::error::SimplecryptError;
use rand::{rngs::OsRng, TryRngCore};

/// Supplier of cryptographically secure random bytes.
///
/// Implementations must be safe to share between threads: the encryptor calls
/// `fill` through a shared reference.
pub trait RandomSource: Send + Sync {
    /// Fill `dest` completely with random bytes or fail.
    fn fill(&self, dest: &mut [u8]) -> Result<(), SimplecryptError>;

    /// Draw a fresh salt.
    #[inline]
    fn salt(&self) -> Result<Salt16, SimplecryptError> {
        let mut salt = Salt16::new([0u8; 16]);
        self.fill(salt.expose_secret_mut())?;
        Ok(salt)
    }
}

/// The operating system CSPRNG (`getrandom` underneath).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    #[inline]
    fn fill(&self, dest: &mut [u8]) -> Result<(), SimplecryptError> {
        OsRng.try_fill_bytes(dest).map_err(|e| {
            tracing::error!("OS random source failed: {e}");
            SimplecryptError::Entropy(e.to_string())
        })
    }
}
