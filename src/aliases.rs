//! # Secure-Gate Type Aliases
//!
//! Every buffer that holds a password, a salt, a derived key or a tag is a
//! [`secure-gate`](https://github.com/Slurp9187/secure-gate) alias, so secrets are
//! zeroized on drop and can only be read through `.expose_secret()`.
//!
//! ## Type Categories
//!
//! ### HMAC Primitives
//! - [`HmacSha256`] - PBKDF2 PRF and envelope authentication
//!
//! ### Dynamic Secrets
//! - [`PasswordString`] - user passphrase
//!
//! ### Fixed-Size Secrets
//! - [`Aes256Key32`] - 32-byte derived key (AES-256-CTR key and HMAC key)
//! - [`CounterBlock16`] - initial AES-CTR counter block
//! - [`Salt16`] - 16-byte per-envelope salt
//! - [`Tag32`] - 32-byte HMAC-SHA256 authentication tag

use secure_gate::dynamic_alias;
use secure_gate::fixed_alias;

use hmac::Hmac;
use sha2::Sha256;

pub type HmacSha256 = Hmac<Sha256>;

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
dynamic_alias!(pub PasswordString, String);

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size concrete secrets, alphabetical order
// ─────────────────────────────────────────────────────────────────────────────
fixed_alias!(pub Aes256Key32, 32); // PBKDF2 output, used for CTR and HMAC
fixed_alias!(pub CounterBlock16, 16); // nonce prefix ‖ initial counter
fixed_alias!(pub Salt16, 16); // envelope salt
fixed_alias!(pub Tag32, 32); // envelope trailer
