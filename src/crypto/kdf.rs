//! src/crypto/kdf.rs
//! PBKDF2-HMAC-SHA256 password stretching

use crate::aliases::{Aes256Key32, HmacSha256, PasswordString};
use crate::consts::SALT_LEN;
use crate::error::SimplecryptError;
use pbkdf2::pbkdf2;

/// Derive the 32-byte envelope key from a password and salt.
///
/// - Password is used as its UTF-8 bytes
/// - Salt must be exactly [`SALT_LEN`] bytes
/// - Output buffer is zeroized on drop
///
/// The same `(password, salt, iterations)` always yields the same key.
#[inline]
pub fn derive_key(
    password: &PasswordString,
    salt: &[u8],
    iterations: u32,
) -> Result<Aes256Key32, SimplecryptError> {
    if salt.is_empty() {
        return Err(SimplecryptError::InvalidArgument("missing salt"));
    }
    if salt.len() != SALT_LEN {
        return Err(SimplecryptError::InvalidArgument("salt must be 16 bytes"));
    }
    if password.expose_secret().is_empty() {
        return Err(SimplecryptError::InvalidArgument("missing password"));
    }
    if iterations == 0 {
        return Err(SimplecryptError::InvalidArgument(
            "PBKDF2 iterations must be ≥1",
        ));
    }

    let mut key = Aes256Key32::new([0u8; 32]);
    pbkdf2::<HmacSha256>(
        password.expose_secret().as_bytes(),
        salt,
        iterations,
        key.expose_secret_mut(),
    )
    .map_err(|e| SimplecryptError::Crypto(format!("PBKDF2 failed: {e}")))?;

    Ok(key)
}
