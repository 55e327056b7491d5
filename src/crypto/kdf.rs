//! Passphrase-based key derivation using scrypt.
//!
//! scrypt is a memory-hard KDF that protects low-entropy passphrases
//! against brute-force and GPU-based attacks.  Parameters are
//! configurable via `ScryptParams` (loaded from `.memovault.toml` or
//! sensible defaults).  The same derivation runs on both the seal and
//! the open path; the container stores only the salt, so sealer and
//! opener must agree on the parameters.

use rand::TryRngCore;
use scrypt::{scrypt, Params};
use zeroize::Zeroize;

use crate::errors::{MemovaultError, Result};

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Configurable scrypt parameters.
///
/// These map 1:1 to the fields in `Settings` so the CLI can pass
/// whatever the user configured in `.memovault.toml`.
#[derive(Debug, Clone, Copy)]
pub struct ScryptParams {
    /// Work factor exponent: the cost parameter N is 2^log_n
    /// (default: 14, i.e. N = 16 384).
    pub log_n: u8,
    /// Block size r (default: 8).
    pub block_size: u32,
    /// Parallelism p (default: 1).
    pub parallelism: u32,
}

impl Default for ScryptParams {
    fn default() -> Self {
        Self {
            log_n: 14,
            block_size: 8,
            parallelism: 1,
        }
    }
}

/// Minimum safe work factor exponent (N = 1024).
const MIN_LOG_N: u8 = 10;

/// Derive a 32-byte key from a passphrase and salt using scrypt.
///
/// Uses the default parameters (N = 16 384, r = 8, p = 1).  Prefer
/// `derive_key_with_params` when you have a `Settings`.
pub fn derive_key(passphrase: &[u8], salt: &[u8]) -> Result<DerivedKey> {
    derive_key_with_params(passphrase, salt, &ScryptParams::default())
}

/// Derive a 32-byte key with explicit scrypt parameters.
///
/// The same passphrase + salt + params will always produce the same key.
/// Enforces minimum parameters to prevent dangerously weak KDF settings.
/// The passphrase is used verbatim: no truncation, no padding.
pub fn derive_key_with_params(
    passphrase: &[u8],
    salt: &[u8],
    scrypt_params: &ScryptParams,
) -> Result<DerivedKey> {
    if scrypt_params.log_n < MIN_LOG_N {
        return Err(MemovaultError::KeyDerivationFailed(format!(
            "scrypt log_n must be at least {MIN_LOG_N} (got {})",
            scrypt_params.log_n
        )));
    }
    if scrypt_params.block_size < 1 {
        return Err(MemovaultError::KeyDerivationFailed(
            "scrypt block_size must be at least 1".into(),
        ));
    }
    if scrypt_params.parallelism < 1 {
        return Err(MemovaultError::KeyDerivationFailed(
            "scrypt parallelism must be at least 1".into(),
        ));
    }

    let params = Params::new(
        scrypt_params.log_n,
        scrypt_params.block_size,
        scrypt_params.parallelism,
        KEY_LEN,
    )
    .map_err(|e| MemovaultError::KeyDerivationFailed(format!("invalid scrypt params: {e}")))?;

    let mut key = [0u8; KEY_LEN];
    scrypt(passphrase, salt, &params, &mut key)
        .map_err(|e| MemovaultError::KeyDerivationFailed(format!("scrypt hashing failed: {e}")))?;

    let derived = DerivedKey::new(key);
    key.zeroize();
    Ok(derived)
}

/// Generate a cryptographically random 16-byte salt.
///
/// Failure of the OS random source is fatal for the seal operation;
/// there is no fallback generator.
pub fn generate_salt() -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    rand::rngs::OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| MemovaultError::RandomSourceFailure(e.to_string()))?;
    Ok(salt)
}

/// A wrapper around a 32-byte derived key that automatically zeroes
/// its memory when dropped.
///
/// Use this to hold the key between derivation and the cipher call so
/// it cannot linger after it is no longer needed.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct DerivedKey {
    bytes: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Create a new `DerivedKey` from raw bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to pass to the cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}
