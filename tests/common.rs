//! tests/common.rs
//! Common constants and utilities shared across test files

use simplecrypt_rs::aliases::PasswordString;
use simplecrypt_rs::{RandomSource, SchemeParams, SimplecryptError};

/// Fast iteration count for tests - the real 1000-iteration cost is in benches/
#[allow(dead_code)] // Used across multiple test files
pub const TEST_ITERATIONS: u32 = 5;

/// Password from the worked examples
#[allow(dead_code)]
pub const TEST_PASSWORD: &str = "correct horse battery staple";

#[allow(dead_code)]
pub const TEST_DATA: &[u8] = b"hello world";

#[allow(dead_code)]
pub fn password(s: &str) -> PasswordString {
    PasswordString::new(s.to_string())
}

/// Default scheme with a cheap KDF; envelopes are not interchangeable with the real scheme.
#[allow(dead_code)]
pub fn fast_params() -> SchemeParams {
    SchemeParams::new().with_iterations(TEST_ITERATIONS)
}

/// Random source that always yields the same bytes, for reproducible envelopes.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub [u8; 16]);

impl RandomSource for FixedRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<(), SimplecryptError> {
        for (byte, src) in dest.iter_mut().zip(self.0.iter().cycle()) {
            *byte = *src;
        }
        Ok(())
    }
}

/// Random source whose entropy pool is gone.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub struct NoEntropy;

impl RandomSource for NoEntropy {
    fn fill(&self, _dest: &mut [u8]) -> Result<(), SimplecryptError> {
        Err(SimplecryptError::Entropy("entropy pool unavailable".into()))
    }
}
