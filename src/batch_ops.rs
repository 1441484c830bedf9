//! src/batch_ops.rs
//! Parallel encryption / decryption of many payloads (`batch-ops` feature)

use rayon::prelude::*;

use crate::aliases::PasswordString;
use crate::crypto::rng::RandomSource;
use crate::{Decryptor, Encryptor, SimplecryptError};

/// Encrypt every payload under the same password, in parallel.
///
/// Each payload gets its own salt. Output order matches input order; the first
/// error aborts the batch.
pub fn encrypt_batch<R, P>(
    encryptor: &Encryptor<R>,
    password: &PasswordString,
    plaintexts: &[P],
) -> Result<Vec<Vec<u8>>, SimplecryptError>
where
    R: RandomSource,
    P: AsRef<[u8]> + Sync,
{
    plaintexts
        .par_iter()
        .map(|plaintext| encryptor.encrypt(password, plaintext.as_ref()))
        .collect()
}

/// Decrypt every envelope under the same password, in parallel.
pub fn decrypt_batch<E>(
    decryptor: &Decryptor,
    password: &PasswordString,
    envelopes: &[E],
) -> Result<Vec<Vec<u8>>, SimplecryptError>
where
    E: AsRef<[u8]> + Sync,
{
    envelopes
        .par_iter()
        .map(|envelope| decryptor.decrypt(password, envelope.as_ref()))
        .collect()
}
