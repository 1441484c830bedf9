//! # Envelope Codec
//!
//! Binary layout of an encrypted unit:
//!
//! ```text
//! offset        length    field
//! 0             4         format prefix (b"sc\x00\x00")
//! 4             16        salt
//! 20            n         ciphertext (same length as plaintext)
//! 20 + n        32        HMAC-SHA256 tag over bytes [0, 20 + n)
//! ```
//!
//! The codec checks length and prefix only. Authenticity is the decryptor's job.

use crate::aliases::{Salt16, Tag32};
use crate::consts::{MIN_ENVELOPE_LEN, PREFIX_LEN, SALT_LEN, TAG_LEN};
use crate::error::{DecryptionError, SimplecryptError};

/// Borrowed view of a decoded envelope.
#[derive(Debug)]
pub struct EnvelopeParts<'a> {
    /// Salt copied out of the envelope.
    pub salt: Salt16,
    /// Ciphertext, borrowed from the envelope.
    pub ciphertext: &'a [u8],
    /// Trailing tag, borrowed from the envelope.
    pub tag: &'a [u8; TAG_LEN],
    /// Every byte the tag covers: prefix ‖ salt ‖ ciphertext.
    pub authenticated: &'a [u8],
}

/// Encoder / decoder for one format prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeCodec {
    prefix: [u8; PREFIX_LEN],
}

impl EnvelopeCodec {
    #[must_use]
    pub const fn new(prefix: [u8; PREFIX_LEN]) -> Self {
        Self { prefix }
    }

    #[must_use]
    pub const fn prefix(&self) -> &[u8; PREFIX_LEN] {
        &self.prefix
    }

    /// Concatenate prefix, salt, ciphertext and tag.
    #[must_use]
    pub fn encode(&self, salt: &Salt16, ciphertext: &[u8], tag: &Tag32) -> Vec<u8> {
        let mut out = Vec::with_capacity(MIN_ENVELOPE_LEN + ciphertext.len());
        out.extend_from_slice(&self.prefix);
        out.extend_from_slice(salt.expose_secret());
        out.extend_from_slice(ciphertext);
        out.extend_from_slice(tag.expose_secret());
        out
    }

    /// Split an envelope into its fields.
    ///
    /// # Errors
    ///
    /// - [`DecryptionError::MissingData`] if shorter than prefix + salt + tag
    /// - [`DecryptionError::BadFormat`] if the prefix does not match
    ///
    /// The length check runs first, so a short buffer with a wrong prefix reports
    /// `MissingData`.
    pub fn decode<'a>(&self, data: &'a [u8]) -> Result<EnvelopeParts<'a>, SimplecryptError> {
        if data.len() < MIN_ENVELOPE_LEN {
            return Err(DecryptionError::MissingData.into());
        }
        if !self.matches_prefix(data) {
            return Err(DecryptionError::BadFormat.into());
        }

        let (authenticated, tag) = data.split_at(data.len() - TAG_LEN);
        let body = &authenticated[PREFIX_LEN..];
        let (salt_bytes, ciphertext) = body.split_at(SALT_LEN);

        let mut salt = Salt16::new([0u8; SALT_LEN]);
        salt.expose_secret_mut().copy_from_slice(salt_bytes);

        let tag: &[u8; TAG_LEN] = tag
            .try_into()
            .map_err(|_| SimplecryptError::Crypto("tag slice length".into()))?;

        Ok(EnvelopeParts {
            salt,
            ciphertext,
            tag,
            authenticated,
        })
    }

    /// Whether `data` starts with this codec's prefix.
    ///
    /// Cheap sniffing only: a `true` here says nothing about the rest of the buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use simplecrypt_rs::EnvelopeCodec;
    /// use simplecrypt_rs::consts::FORMAT_PREFIX;
    ///
    /// let codec = EnvelopeCodec::new(FORMAT_PREFIX);
    /// assert!(codec.matches_prefix(b"sc\x00\x00anything"));
    /// assert!(!codec.matches_prefix(b"AES\x03\x00"));
    /// assert!(!codec.matches_prefix(b"sc"));
    /// ```
    #[inline]
    #[must_use]
    pub fn matches_prefix(&self, data: &[u8]) -> bool {
        data.get(..PREFIX_LEN) == Some(&self.prefix[..])
    }
}
