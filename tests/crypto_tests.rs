//! Integration tests for the MemoVault crypto module.

use memovault::crypto::kdf::{KEY_LEN, SALT_LEN};
use memovault::crypto::{
    decrypt, derive_key, derive_key_with_params, encrypt, generate_nonce, generate_salt,
    ScryptParams,
};
use memovault::errors::MemovaultError;

/// Cheap scrypt parameters so KDF-heavy tests stay fast.
fn fast_params() -> ScryptParams {
    ScryptParams {
        log_n: 10,
        block_size: 8,
        parallelism: 1,
    }
}

// ---------------------------------------------------------------------------
// AEAD round-trip
// ---------------------------------------------------------------------------

#[test]
fn encrypt_decrypt_roundtrip() {
    let key = [0xABu8; 32];
    let nonce = generate_nonce().expect("nonce");
    let plaintext = b"{\"memo\":\"walked home in the rain\"}";

    let (ciphertext, tag) = encrypt(&key, &nonce, plaintext).expect("encrypt should succeed");

    // GCM is a stream construction: ciphertext matches plaintext length
    // exactly once the tag is split off.
    assert_eq!(ciphertext.len(), plaintext.len());

    let recovered = decrypt(&key, &nonce, &ciphertext, &tag).expect("decrypt should succeed");
    assert_eq!(recovered, plaintext);
}

#[test]
fn empty_plaintext_roundtrips() {
    let key = [0x0Fu8; 32];
    let nonce = generate_nonce().expect("nonce");

    let (ciphertext, tag) = encrypt(&key, &nonce, b"").expect("encrypt");
    assert!(ciphertext.is_empty());

    let recovered = decrypt(&key, &nonce, &ciphertext, &tag).expect("decrypt");
    assert!(recovered.is_empty());
}

#[test]
fn decrypt_with_wrong_key_fails() {
    let key = [0x11u8; 32];
    let wrong_key = [0x22u8; 32];
    let nonce = generate_nonce().expect("nonce");

    let (ciphertext, tag) = encrypt(&key, &nonce, b"sealed memo").expect("encrypt");
    let result = decrypt(&wrong_key, &nonce, &ciphertext, &tag);

    assert!(
        matches!(result, Err(MemovaultError::AuthenticationFailure)),
        "decryption with the wrong key must fail authentication"
    );
}

#[test]
fn decrypt_with_corrupted_ciphertext_fails() {
    let key = [0xBBu8; 32];
    let nonce = generate_nonce().expect("nonce");

    let (mut ciphertext, tag) = encrypt(&key, &nonce, b"some value").expect("encrypt");
    ciphertext[0] ^= 0x01;

    let result = decrypt(&key, &nonce, &ciphertext, &tag);
    assert!(matches!(result, Err(MemovaultError::AuthenticationFailure)));
}

#[test]
fn decrypt_with_corrupted_tag_fails() {
    let key = [0xCCu8; 32];
    let nonce = generate_nonce().expect("nonce");

    let (ciphertext, mut tag) = encrypt(&key, &nonce, b"some value").expect("encrypt");
    tag[15] ^= 0x80;

    let result = decrypt(&key, &nonce, &ciphertext, &tag);
    assert!(matches!(result, Err(MemovaultError::AuthenticationFailure)));
}

#[test]
fn decrypt_with_wrong_nonce_fails() {
    let key = [0xDDu8; 32];
    let nonce = generate_nonce().expect("nonce");

    let (ciphertext, tag) = encrypt(&key, &nonce, b"some value").expect("encrypt");

    let mut other_nonce = nonce;
    other_nonce[0] ^= 0x01;

    let result = decrypt(&key, &other_nonce, &ciphertext, &tag);
    assert!(matches!(result, Err(MemovaultError::AuthenticationFailure)));
}

#[test]
fn authentication_failure_message_does_not_leak_cause() {
    // Wrong key and tampered tag must be indistinguishable.
    let key = [0x33u8; 32];
    let wrong_key = [0x44u8; 32];
    let nonce = generate_nonce().expect("nonce");
    let (ciphertext, mut tag) = encrypt(&key, &nonce, b"payload").expect("encrypt");

    let wrong_key_err = decrypt(&wrong_key, &nonce, &ciphertext, &tag)
        .expect_err("wrong key")
        .to_string();

    tag[0] ^= 0x01;
    let tampered_err = decrypt(&key, &nonce, &ciphertext, &tag)
        .expect_err("tampered tag")
        .to_string();

    assert_eq!(wrong_key_err, tampered_err);
}

// ---------------------------------------------------------------------------
// Random material
// ---------------------------------------------------------------------------

#[test]
fn generated_salts_have_expected_length_and_differ() {
    let salt1 = generate_salt().expect("salt 1");
    let salt2 = generate_salt().expect("salt 2");

    assert_eq!(salt1.len(), SALT_LEN);
    assert_ne!(salt1, salt2, "two generated salts must differ");
}

#[test]
fn generated_nonces_have_expected_length_and_differ() {
    let n1 = generate_nonce().expect("nonce 1");
    let n2 = generate_nonce().expect("nonce 2");

    assert_eq!(n1.len(), 12);
    assert_ne!(n1, n2, "two generated nonces must differ");
}

// ---------------------------------------------------------------------------
// Key derivation (scrypt)
// ---------------------------------------------------------------------------

#[test]
fn derive_key_same_inputs_same_output() {
    let salt = generate_salt().expect("salt");

    let key1 = derive_key_with_params(b"my-secure-passphrase", &salt, &fast_params()).expect("1");
    let key2 = derive_key_with_params(b"my-secure-passphrase", &salt, &fast_params()).expect("2");

    assert_eq!(
        key1.as_bytes(),
        key2.as_bytes(),
        "same passphrase + salt must produce the same key"
    );
}

#[test]
fn derive_key_different_salts_different_keys() {
    let salt1 = generate_salt().expect("salt 1");
    let salt2 = generate_salt().expect("salt 2");

    let key1 = derive_key_with_params(b"same-passphrase", &salt1, &fast_params()).expect("1");
    let key2 = derive_key_with_params(b"same-passphrase", &salt2, &fast_params()).expect("2");

    assert_ne!(
        key1.as_bytes(),
        key2.as_bytes(),
        "different salts must produce different keys"
    );
}

#[test]
fn derive_key_different_passphrases_different_keys() {
    let salt = generate_salt().expect("salt");

    let key1 = derive_key_with_params(b"passphrase-one", &salt, &fast_params()).expect("1");
    let key2 = derive_key_with_params(b"passphrase-two", &salt, &fast_params()).expect("2");

    assert_ne!(
        key1.as_bytes(),
        key2.as_bytes(),
        "different passphrases must produce different keys"
    );
}

#[test]
fn derive_key_uses_default_params() {
    // The slow path: default parameters (N = 16 384) on both calls.
    let salt = [0x42u8; SALT_LEN];

    let via_default = derive_key(b"hunter2-hunter2", &salt).expect("default");
    let via_explicit =
        derive_key_with_params(b"hunter2-hunter2", &salt, &ScryptParams::default())
            .expect("explicit");

    assert_eq!(via_default.as_bytes(), via_explicit.as_bytes());
    assert_eq!(via_default.as_bytes().len(), KEY_LEN);
}

#[test]
fn rejects_work_factor_below_minimum() {
    let salt = generate_salt().expect("salt");
    let weak = ScryptParams {
        log_n: 9,
        block_size: 8,
        parallelism: 1,
    };

    let result = derive_key_with_params(b"passphrase", &salt, &weak);
    assert!(matches!(result, Err(MemovaultError::KeyDerivationFailed(_))));
}

#[test]
fn rejects_zero_parallelism() {
    let salt = generate_salt().expect("salt");
    let bad = ScryptParams {
        log_n: 10,
        block_size: 8,
        parallelism: 0,
    };

    let result = derive_key_with_params(b"passphrase", &salt, &bad);
    assert!(matches!(result, Err(MemovaultError::KeyDerivationFailed(_))));
}

// ---------------------------------------------------------------------------
// End-to-end: passphrase -> key -> encrypt/decrypt
// ---------------------------------------------------------------------------

#[test]
fn full_crypto_pipeline() {
    let salt = generate_salt().expect("salt");
    let nonce = generate_nonce().expect("nonce");

    let key = derive_key_with_params(b"hunter2-hunter2", &salt, &fast_params()).expect("derive");

    let plaintext = b"{\"title\":\"Trail\",\"memo\":\"it rained\"}";
    let (ciphertext, tag) = encrypt(key.as_bytes(), &nonce, plaintext).expect("encrypt");

    let recovered = decrypt(key.as_bytes(), &nonce, &ciphertext, &tag).expect("decrypt");
    assert_eq!(recovered, plaintext.to_vec());
}
