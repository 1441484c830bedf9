//! src/decryptor/decrypt.rs
//! Envelope decryption: verify the tag, then decrypt

use crate::aliases::PasswordString;
use crate::crypto::hmac::{compute_tag, tags_match};
use crate::crypto::kdf::derive_key;
use crate::crypto::keystream::{apply_keystream, initial_counter_block};
use crate::envelope::EnvelopeCodec;
use crate::error::{DecryptionError, SimplecryptError};
use crate::params::SchemeParams;

/// Opens envelopes written under one [`SchemeParams`] set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decryptor {
    params: SchemeParams,
    codec: EnvelopeCodec,
}

impl Decryptor {
    #[must_use]
    pub const fn new(params: SchemeParams) -> Self {
        Self {
            codec: EnvelopeCodec::new(*params.prefix()),
            params,
        }
    }

    #[must_use]
    pub const fn params(&self) -> &SchemeParams {
        &self.params
    }

    /// Whether `data` carries this scheme's format prefix.
    #[inline]
    #[must_use]
    pub fn is_envelope(&self, data: &[u8]) -> bool {
        self.codec.matches_prefix(data)
    }

    /// Recover the plaintext of `envelope`.
    ///
    /// Nothing is decrypted until the tag over prefix, salt and ciphertext has
    /// been verified, so a failed call never yields partial plaintext.
    ///
    /// # Errors
    ///
    /// - [`DecryptionError::MissingData`] if the envelope is too short
    /// - [`DecryptionError::BadFormat`] if the prefix is wrong
    /// - [`DecryptionError::BadPasswordOrCorrupt`] if the tag does not verify
    /// - [`SimplecryptError::InvalidArgument`] for an empty password
    pub fn decrypt(
        &self,
        password: &PasswordString,
        envelope: &[u8],
    ) -> Result<Vec<u8>, SimplecryptError> {
        let parts = self.codec.decode(envelope).inspect_err(|e| {
            tracing::debug!(envelope_len = envelope.len(), "envelope rejected: {e}");
        })?;

        let key = derive_key(
            password,
            parts.salt.expose_secret(),
            self.params.kdf_iterations(),
        )?;

        let expected = compute_tag(&key, &[parts.authenticated])?;
        if !tags_match(parts.tag, &expected) {
            tracing::debug!(envelope_len = envelope.len(), "tag verification failed");
            return Err(SimplecryptError::from(DecryptionError::BadPasswordOrCorrupt));
        }

        let counter_block = initial_counter_block(&parts.salt, self.params.counter_start());
        let mut plaintext = parts.ciphertext.to_vec();
        apply_keystream(&key, &counter_block, &mut plaintext);

        tracing::debug!(plaintext_len = plaintext.len(), "envelope opened");
        Ok(plaintext)
    }
}

impl Default for Decryptor {
    fn default() -> Self {
        Self::new(SchemeParams::default())
    }
}
