// src/crypto/hmac.rs

//! Envelope authentication: HMAC-SHA256 tag and double-hash verification.

use crate::aliases::{Aes256Key32, HmacSha256, Tag32};
use crate::consts::TAG_LEN;
use crate::error::SimplecryptError;
use hmac::Mac;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// HMAC-SHA256 under `key` over the concatenation of `parts`.
#[inline]
pub fn compute_tag(key: &Aes256Key32, parts: &[&[u8]]) -> Result<Tag32, SimplecryptError> {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(key.expose_secret())
        .map_err(|e| SimplecryptError::Crypto(format!("HMAC key rejected: {e}")))?;
    for part in parts {
        mac.update(part);
    }

    let mut tag = Tag32::new([0u8; TAG_LEN]);
    tag.expose_secret_mut()
        .copy_from_slice(mac.finalize().into_bytes().as_slice());
    Ok(tag)
}

/// Compare two tags by hashing each with SHA-256 and comparing the digests.
///
/// The digests are compared with `subtle`, so neither the tag bytes nor the
/// position of the first differing byte leak through timing.
#[inline]
pub fn tags_match(received: &[u8; TAG_LEN], expected: &Tag32) -> bool {
    let received_digest = Sha256::digest(received);
    let expected_digest = Sha256::digest(expected.expose_secret());
    received_digest
        .as_slice()
        .ct_eq(expected_digest.as_slice())
        .into()
}
