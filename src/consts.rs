//! # Constants
//!
//! Fixed sizes of the envelope format and the parameters of the default scheme.

/// Format prefix of every envelope: scheme tag `sc` followed by version `0x00 0x00`.
pub const FORMAT_PREFIX: [u8; 4] = [b's', b'c', 0x00, 0x00];

/// Length of [`FORMAT_PREFIX`] in bytes.
pub const PREFIX_LEN: usize = 4;

/// Salt length in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Derived key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// HMAC-SHA256 tag length in bytes.
pub const TAG_LEN: usize = 32;

/// AES block size in bytes.
pub const AES_BLOCK_LEN: usize = 16;

/// Half of the AES block, in bits. The first `HALF_BLOCK_BITS / 8` salt bytes are
/// the CTR nonce prefix; the remaining bits of the counter block are the counter.
pub const HALF_BLOCK_BITS: u32 = (AES_BLOCK_LEN as u32 * 8) / 2;

/// Length of the CTR nonce prefix in bytes.
pub const NONCE_PREFIX_LEN: usize = HALF_BLOCK_BITS as usize / 8;

/// Smallest possible envelope: prefix, salt and tag around an empty ciphertext.
pub const MIN_ENVELOPE_LEN: usize = PREFIX_LEN + SALT_LEN + TAG_LEN;

/// Largest plaintext accepted by the encryptor, in bytes (`2^64 - 1`).
pub const MAX_MESSAGE_LEN: u128 = (1u128 << HALF_BLOCK_BITS) - 1;

/// PBKDF2 iteration count of the `sc\0\0` scheme. Part of the wire format.
pub const DEFAULT_KDF_ITERATIONS: u32 = 1000;

/// Initial value of the 64-bit CTR counter.
pub const DEFAULT_COUNTER_START: u64 = 0;

const _: () = assert!(NONCE_PREFIX_LEN <= SALT_LEN);
const _: () = assert!(FORMAT_PREFIX.len() == PREFIX_LEN);
