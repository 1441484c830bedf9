//! src/encryptor/encrypt.rs
//! Envelope encryption: salt, PBKDF2 key, AES-256-CTR, HMAC-SHA256

use crate::aliases::PasswordString;
use crate::consts::MAX_MESSAGE_LEN;
use crate::crypto::hmac::compute_tag;
use crate::crypto::kdf::derive_key;
use crate::crypto::keystream::{apply_keystream, initial_counter_block};
use crate::crypto::rng::{OsRandom, RandomSource};
use crate::envelope::EnvelopeCodec;
use crate::error::{EncryptionError, SimplecryptError};
use crate::params::SchemeParams;

/// Reject plaintexts whose length would overrun the 64-bit CTR counter space.
///
/// Takes the length as `u128` so the boundary at `2^64` is expressible on every
/// platform.
#[inline(always)]
pub fn check_message_len(len: u128) -> Result<(), SimplecryptError> {
    if len > MAX_MESSAGE_LEN {
        return Err(EncryptionError::MessageTooLong.into());
    }
    Ok(())
}

/// Produces envelopes for one [`SchemeParams`] set.
///
/// # Thread Safety
///
/// `Send + Sync` whenever the random source is; holds no mutable state, so a
/// single instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Encryptor<R = OsRandom> {
    params: SchemeParams,
    codec: EnvelopeCodec,
    rng: R,
}

impl Encryptor<OsRandom> {
    /// Encryptor drawing salts from the operating system CSPRNG.
    #[must_use]
    pub fn new(params: SchemeParams) -> Self {
        Self::with_rng(params, OsRandom)
    }
}

impl Default for Encryptor<OsRandom> {
    fn default() -> Self {
        Self::new(SchemeParams::default())
    }
}

impl<R: RandomSource> Encryptor<R> {
    /// Encryptor drawing salts from a caller-supplied source.
    #[must_use]
    pub fn with_rng(params: SchemeParams, rng: R) -> Self {
        Self {
            codec: EnvelopeCodec::new(*params.prefix()),
            params,
            rng,
        }
    }

    #[must_use]
    pub const fn params(&self) -> &SchemeParams {
        &self.params
    }

    /// Encrypt `plaintext` under `password`.
    ///
    /// Returns `prefix ‖ salt ‖ ciphertext ‖ tag`; the output is
    /// `plaintext.len() + 52` bytes long.
    ///
    /// # Errors
    ///
    /// - [`SimplecryptError::InvalidArgument`] for an empty password
    /// - [`EncryptionError::MessageTooLong`] if `plaintext.len() >= 2^64`
    /// - [`SimplecryptError::Entropy`] if the random source fails
    pub fn encrypt(
        &self,
        password: &PasswordString,
        plaintext: &[u8],
    ) -> Result<Vec<u8>, SimplecryptError> {
        check_message_len(plaintext.len() as u128)?;
        if password.expose_secret().is_empty() {
            return Err(SimplecryptError::InvalidArgument("missing password"));
        }

        let salt = self.rng.salt()?;
        let key = derive_key(password, salt.expose_secret(), self.params.kdf_iterations())?;

        let counter_block = initial_counter_block(&salt, self.params.counter_start());
        let mut ciphertext = plaintext.to_vec();
        apply_keystream(&key, &counter_block, &mut ciphertext);

        let tag = compute_tag(
            &key,
            &[
                &self.codec.prefix()[..],
                &salt.expose_secret()[..],
                &ciphertext[..],
            ],
        )?;

        let envelope = self.codec.encode(&salt, &ciphertext, &tag);
        tracing::debug!(
            plaintext_len = plaintext.len(),
            envelope_len = envelope.len(),
            "envelope sealed"
        );
        Ok(envelope)
    }
}
