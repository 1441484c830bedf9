//! src/params.rs
//! Scheme parameters: one immutable value handed to `Encryptor` / `Decryptor`

use crate::consts::{DEFAULT_COUNTER_START, DEFAULT_KDF_ITERATIONS, FORMAT_PREFIX, PREFIX_LEN};

/// Everything about the envelope scheme that is not fixed by a buffer size.
///
/// [`SchemeParams::default`] is the `sc\0\0` scheme: PBKDF2-HMAC-SHA256 with
/// 1000 iterations and a CTR counter starting at zero. Other parameter sets can
/// live side by side; an envelope only decrypts under the set it was written with.
///
/// # Thread Safety
///
/// `Copy` and immutable, so it can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchemeParams {
    prefix: [u8; PREFIX_LEN],
    kdf_iterations: u32,
    counter_start: u64,
}

impl SchemeParams {
    /// The `sc\0\0` scheme.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            prefix: FORMAT_PREFIX,
            kdf_iterations: DEFAULT_KDF_ITERATIONS,
            counter_start: DEFAULT_COUNTER_START,
        }
    }

    /// Use a different format prefix (a new scheme version).
    #[must_use]
    pub const fn with_prefix(mut self, prefix: [u8; PREFIX_LEN]) -> Self {
        self.prefix = prefix;
        self
    }

    /// Set a custom PBKDF2 iteration count (minimum 1)
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.kdf_iterations = iterations.max(1);
        self
    }

    /// Set the initial value of the 64-bit CTR counter.
    ///
    /// Envelopes written by PyCrypto's `Counter.new` start at 1.
    #[must_use]
    pub const fn with_counter_start(mut self, counter_start: u64) -> Self {
        self.counter_start = counter_start;
        self
    }

    #[must_use]
    pub const fn prefix(&self) -> &[u8; PREFIX_LEN] {
        &self.prefix
    }

    #[must_use]
    pub const fn kdf_iterations(&self) -> u32 {
        self.kdf_iterations
    }

    #[must_use]
    pub const fn counter_start(&self) -> u64 {
        self.counter_start
    }
}

impl Default for SchemeParams {
    fn default() -> Self {
        Self::new()
    }
}
