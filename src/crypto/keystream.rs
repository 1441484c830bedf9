//! src/crypto/keystream.rs
//! AES-256-CTR setup shared by the encrypt and decrypt paths
//!
//! Counter block layout (16 bytes, big-endian):
//!
//! ```text
//! [8 bytes: nonce prefix = salt[..8]][8 bytes: block counter]
//! ```
//!
//! The counter starts at `SchemeParams::counter_start` and wraps only after
//! 2^64 blocks, which the message length limit rules out.

use crate::aliases::{Aes256Key32, CounterBlock16, Salt16};
use crate::consts::{AES_BLOCK_LEN, NONCE_PREFIX_LEN};
use aes::Aes256;
use ctr::cipher::{KeyIvInit, StreamCipher};

type Aes256Ctr64BE = ctr::Ctr64BE<Aes256>;

/// Leading half-block of the salt, used as the fixed part of every counter block.
#[inline(always)]
pub fn nonce_prefix(salt: &Salt16) -> [u8; NONCE_PREFIX_LEN] {
    let mut prefix = [0u8; NONCE_PREFIX_LEN];
    prefix.copy_from_slice(&salt.expose_secret()[..NONCE_PREFIX_LEN]);
    prefix
}

/// First counter block for an envelope with this salt.
#[inline(always)]
pub fn initial_counter_block(salt: &Salt16, counter_start: u64) -> CounterBlock16 {
    let mut block = CounterBlock16::new([0u8; AES_BLOCK_LEN]);
    let bytes = block.expose_secret_mut();
    bytes[..NONCE_PREFIX_LEN].copy_from_slice(&nonce_prefix(salt));
    bytes[NONCE_PREFIX_LEN..].copy_from_slice(&counter_start.to_be_bytes());
    block
}

/// XOR the AES-256-CTR keystream into `buf` in place.
///
/// Encryption and decryption are the same operation.
#[inline]
pub fn apply_keystream(key: &Aes256Key32, counter_block: &CounterBlock16, buf: &mut [u8]) {
    let mut cipher = Aes256Ctr64BE::new(
        key.expose_secret().into(),
        counter_block.expose_secret().into(),
    );
    cipher.apply_keystream(buf);
}
