// src/crypto/mod.rs

//! Low-level crypto building blocks (RNG, KDF, CTR keystream, HMAC tag).
//!
//! The primitives themselves come from `aes`, `ctr`, `hmac`, `sha2` and `pbkdf2`;
//! this module only wires them to the envelope format.

pub mod hmac;
pub mod kdf;
pub mod keystream;
pub mod rng;
