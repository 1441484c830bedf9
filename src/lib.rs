// src/lib.rs

//! Password-based authenticated encryption of byte payloads.
//!
//! An envelope is `b"sc\x00\x00" ‖ salt(16) ‖ AES-256-CTR ciphertext ‖ HMAC-SHA256(32)`,
//! keyed by PBKDF2-HMAC-SHA256 over the password and salt.
//!
//! ```
//! use simplecrypt_rs::aliases::PasswordString;
//! use simplecrypt_rs::{decrypt, encrypt, DecryptionError, SimplecryptError};
//!
//! let password = PasswordString::new("pw".to_string());
//! let envelope = encrypt(&password, b"")?;
//! assert_eq!(envelope.len(), 52);
//!
//! let wrong = PasswordString::new("not pw".to_string());
//! assert_eq!(
//!     decrypt(&wrong, &envelope).unwrap_err(),
//!     SimplecryptError::Decryption(DecryptionError::BadPasswordOrCorrupt)
//! );
//! # Ok::<(), SimplecryptError>(())
//! ```

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod envelope;
pub mod error;
pub mod params;

// High-level API
pub use decryptor::{decrypt, Decryptor};
pub use encryptor::{encrypt, Encryptor};
pub use envelope::EnvelopeCodec;
pub use error::{DecryptionError, EncryptionError, SimplecryptError};
pub use params::SchemeParams;

// Building blocks for custom flows (e.g. deterministic salts in tests)
pub use crypto::kdf::derive_key;
pub use crypto::keystream::nonce_prefix;
pub use crypto::rng::{OsRandom, RandomSource};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch};
