//! Cryptographic primitives for MemoVault.
//!
//! - `aead`: AES-256-GCM encryption and decryption with a detached tag
//! - `kdf`: scrypt passphrase-based key derivation

pub mod aead;
pub mod kdf;

pub use aead::{decrypt, encrypt, generate_nonce};
pub use kdf::{derive_key, derive_key_with_params, generate_salt, DerivedKey, ScryptParams};
