//! tests/deterministic_encrypt_tests.rs
//! Fixed salts make the envelope reproducible, so every field can be checked
//! against the primitives directly.

mod common;

use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes256, Block};
use common::{fast_params, password, FixedRandom, NoEntropy, TEST_ITERATIONS, TEST_PASSWORD};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use simplecrypt_rs::consts::MAX_MESSAGE_LEN;
use simplecrypt_rs::encryptor::check_message_len;
use simplecrypt_rs::{
    derive_key, nonce_prefix, Decryptor, EncryptionError, Encryptor, SchemeParams,
    SimplecryptError,
};

const SALT: [u8; 16] = [
    0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff,
];

/// Keystream block `n` computed straight from the block cipher.
fn keystream_block(key: &[u8; 32], counter: u64) -> [u8; 16] {
    let cipher = Aes256::new(key.into());
    let mut block = [0u8; 16];
    block[..8].copy_from_slice(&SALT[..8]);
    block[8..].copy_from_slice(&counter.to_be_bytes());
    let mut aes_block = Block::from(block);
    cipher.encrypt_block(&mut aes_block);
    let mut out = [0u8; 16];
    out.copy_from_slice(aes_block.as_slice());
    out
}

#[test]
fn same_salt_same_envelope() {
    let encryptor = Encryptor::with_rng(fast_params(), FixedRandom(SALT));
    let a = encryptor.encrypt(&password(TEST_PASSWORD), b"hello").unwrap();
    let b = encryptor.encrypt(&password(TEST_PASSWORD), b"hello").unwrap();
    assert_eq!(a, b);
}

#[test]
fn envelope_fields_match_primitives() {
    let plaintext = b"exactly thirty-three bytes long!!";
    assert_eq!(plaintext.len(), 33);

    let envelope = Encryptor::with_rng(fast_params(), FixedRandom(SALT))
        .encrypt(&password(TEST_PASSWORD), plaintext)
        .unwrap();
    assert_eq!(envelope.len(), 4 + 16 + 33 + 32);
    assert_eq!(&envelope[..4], b"sc\x00\x00");
    assert_eq!(&envelope[4..20], &SALT);

    let key = derive_key(&password(TEST_PASSWORD), &SALT, TEST_ITERATIONS).unwrap();
    let key = *key.expose_secret();

    // Ciphertext = plaintext XOR AES(key, salt[..8] ‖ counter), counter from 0
    let ciphertext = &envelope[20..53];
    let mut expected = Vec::new();
    for (i, chunk) in plaintext.chunks(16).enumerate() {
        let ks = keystream_block(&key, i as u64);
        expected.extend(chunk.iter().zip(ks.iter()).map(|(p, k)| p ^ k));
    }
    assert_eq!(ciphertext, expected.as_slice());

    // Tag = HMAC-SHA256(key, prefix ‖ salt ‖ ciphertext)
    let mut mac = <Hmac<Sha256> as Mac>::new_from_slice(&key).unwrap();
    mac.update(&envelope[..53]);
    assert_eq!(&envelope[53..], mac.finalize().into_bytes().as_slice());
}

#[test]
fn nonce_prefix_is_salt_head() {
    let salt = simplecrypt_rs::aliases::Salt16::new(SALT);
    assert_eq!(nonce_prefix(&salt), SALT[..8]);
}

#[test]
fn counter_start_changes_ciphertext_not_framing() {
    let pw = password(TEST_PASSWORD);
    let zero = Encryptor::with_rng(fast_params(), FixedRandom(SALT))
        .encrypt(&pw, b"sixteen byte msg")
        .unwrap();
    let legacy_params = fast_params().with_counter_start(1);
    let one = Encryptor::with_rng(legacy_params, FixedRandom(SALT))
        .encrypt(&pw, b"sixteen byte msg")
        .unwrap();

    assert_eq!(zero[..20], one[..20]);
    assert_ne!(zero[20..36], one[20..36]);

    // With counter start 1 the first block uses keystream block 1
    let key = derive_key(&pw, &SALT, TEST_ITERATIONS).unwrap();
    let ks = keystream_block(key.expose_secret(), 1);
    let first: Vec<u8> = b"sixteen byte msg"
        .iter()
        .zip(ks.iter())
        .map(|(p, k)| p ^ k)
        .collect();
    assert_eq!(&one[20..36], first.as_slice());

    assert_eq!(
        Decryptor::new(legacy_params).decrypt(&pw, &one).unwrap(),
        b"sixteen byte msg"
    );
}

#[test]
fn default_scheme_uses_1000_iterations() {
    let pw = password("pw");
    let envelope = Encryptor::with_rng(SchemeParams::default(), FixedRandom(SALT))
        .encrypt(&pw, b"x")
        .unwrap();

    let key = derive_key(&pw, &SALT, 1000).unwrap();
    let mut mac = <Hmac<Sha256> as Mac>::new_from_slice(key.expose_secret()).unwrap();
    mac.update(&envelope[..envelope.len() - 32]);
    assert!(mac.verify_slice(&envelope[envelope.len() - 32..]).is_ok());
}

#[test]
fn entropy_failure_aborts_encryption() {
    let err = Encryptor::with_rng(fast_params(), NoEntropy)
        .encrypt(&password("pw"), b"data")
        .unwrap_err();
    assert!(matches!(err, SimplecryptError::Entropy(_)));
}

#[test]
fn length_boundary() {
    assert!(check_message_len(0).is_ok());
    assert!(check_message_len(MAX_MESSAGE_LEN).is_ok());
    assert_eq!(MAX_MESSAGE_LEN, u128::from(u64::MAX));
    assert_eq!(
        check_message_len(MAX_MESSAGE_LEN + 1).unwrap_err(),
        SimplecryptError::Encryption(EncryptionError::MessageTooLong)
    );
    assert_eq!(
        SimplecryptError::from(EncryptionError::MessageTooLong).to_string(),
        "Encryption error: Message too long"
    );
}
