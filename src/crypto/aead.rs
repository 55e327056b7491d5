//! AES-256-GCM authenticated encryption.
//!
//! Unlike a prepended-nonce layout, the nonce and the authentication
//! tag are carried as separate values here because the container format
//! stores them in its metadata block.  `encrypt` splits the 16-byte tag
//! from the trailing bytes of the cipher output; `decrypt` joins
//! ciphertext and tag back together before verification.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::TryRngCore;

use crate::errors::{MemovaultError, Result};

/// Size of the AES-256-GCM nonce in bytes (96 bits).
pub const NONCE_LEN: usize = 12;

/// Size of the AES-256-GCM authentication tag in bytes (128 bits).
pub const TAG_LEN: usize = 16;

/// Generate a cryptographically random 12-byte nonce.
///
/// A fresh nonce per seal call is what keeps nonce reuse impossible;
/// failure of the OS random source is fatal, with no fallback.
pub fn generate_nonce() -> Result<[u8; NONCE_LEN]> {
    let mut nonce = [0u8; NONCE_LEN];
    rand::rngs::OsRng
        .try_fill_bytes(&mut nonce)
        .map_err(|e| MemovaultError::RandomSourceFailure(e.to_string()))?;
    Ok(nonce)
}

/// Encrypt `plaintext` with a 32-byte `key` under `nonce`.
///
/// Returns the ciphertext (same length as the plaintext) and the
/// 16-byte authentication tag as separate values.
pub fn encrypt(
    key: &[u8],
    nonce: &[u8; NONCE_LEN],
    plaintext: &[u8],
) -> Result<(Vec<u8>, [u8; TAG_LEN])> {
    // Build the cipher from the raw key bytes.
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| MemovaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    // Encrypt and authenticate; the output is ciphertext || tag.
    let mut combined = cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|e| MemovaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    // Split the trailing 16 bytes off as the tag.
    let split_at = combined.len() - TAG_LEN;
    let tag_bytes = combined.split_off(split_at);
    let mut tag = [0u8; TAG_LEN];
    tag.copy_from_slice(&tag_bytes);

    Ok((combined, tag))
}

/// Decrypt data that was produced by `encrypt`.
///
/// Verification is all-or-nothing: a single wrong bit in key, nonce,
/// ciphertext, or tag fails the whole call, and the error never says
/// which input was wrong.
pub fn decrypt(
    key: &[u8],
    nonce: &[u8; NONCE_LEN],
    ciphertext: &[u8],
    tag: &[u8],
) -> Result<Vec<u8>> {
    let cipher =
        Aes256Gcm::new_from_slice(key).map_err(|_| MemovaultError::AuthenticationFailure)?;

    // Rejoin ciphertext || tag for the AEAD call.
    let mut combined = Vec::with_capacity(ciphertext.len() + tag.len());
    combined.extend_from_slice(ciphertext);
    combined.extend_from_slice(tag);

    cipher
        .decrypt(Nonce::from_slice(nonce), combined.as_ref())
        .map_err(|_| MemovaultError::AuthenticationFailure)
}
