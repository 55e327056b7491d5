//! Sealing and opening: the two core operations on a container.
//!
//! `seal` signs an entry, derives a key from the passphrase, and
//! encrypts the canonical entry JSON into a fresh [`Container`].
//! `open` reverses it, climbing a strict failure ladder:
//!
//! 1. structural checks on the container (`MalformedContainer`),
//! 2. key derivation and AEAD decryption (`AuthenticationFailure`,
//!    with no distinction between wrong passphrase and tampered
//!    ciphertext),
//! 3. payload parsing and self-signature verification
//!    (`IntegrityMismatch`).
//!
//! Later rungs only run once the earlier ones pass, so an
//! `IntegrityMismatch` always means the passphrase was right.

use crate::crypto::aead::{self, NONCE_LEN};
use crate::crypto::kdf::{derive_key_with_params, generate_salt, ScryptParams};
use crate::errors::{MemovaultError, Result};

use super::container::{Container, ContainerMetadata};
use super::entry::VaultEntry;

/// Seal an entry with the default scrypt parameters.
pub fn seal(entry: &VaultEntry, passphrase: &str) -> Result<Container> {
    seal_with_params(entry, passphrase, &ScryptParams::default())
}

/// Seal an entry into a container.
///
/// The entry is signed first (an already-present signature is kept
/// verbatim), then serialized canonically and encrypted under a key
/// derived from the passphrase and a fresh random salt.  Every call
/// draws a new salt and nonce, so sealing the same entry twice yields
/// two entirely different containers.
pub fn seal_with_params(
    entry: &VaultEntry,
    passphrase: &str,
    params: &ScryptParams,
) -> Result<Container> {
    let mut entry = entry.clone();
    entry.ensure_signed()?;
    let plaintext = entry.canonical_bytes()?;

    let salt = generate_salt()?;
    let nonce = aead::generate_nonce()?;

    let key = derive_key_with_params(passphrase.as_bytes(), &salt, params)?;
    let (ciphertext, tag) = aead::encrypt(key.as_bytes(), &nonce, &plaintext)?;

    Ok(Container {
        metadata: ContainerMetadata {
            salt: salt.to_vec(),
            iv: nonce.to_vec(),
            tag: tag.to_vec(),
        },
        data: ciphertext,
    })
}

/// Open a container with the default scrypt parameters.
pub fn open(container: &Container, passphrase: &str) -> Result<VaultEntry> {
    open_with_params(container, passphrase, &ScryptParams::default())
}

/// Open a container and recover the entry.
///
/// The scrypt parameters must match the ones used to seal; a mismatch
/// derives a different key and surfaces as `AuthenticationFailure`,
/// exactly like a wrong passphrase.
pub fn open_with_params(
    container: &Container,
    passphrase: &str,
    params: &ScryptParams,
) -> Result<VaultEntry> {
    container.validate()?;

    let nonce: [u8; NONCE_LEN] = container
        .metadata
        .iv
        .as_slice()
        .try_into()
        .map_err(|_| MemovaultError::MalformedContainer("bad iv length".into()))?;

    let key = derive_key_with_params(passphrase.as_bytes(), &container.metadata.salt, params)?;
    let plaintext = aead::decrypt(
        key.as_bytes(),
        &nonce,
        &container.data,
        &container.metadata.tag,
    )?;

    // The tag has verified at this point: the payload is authentic
    // ciphertext for this passphrase.  If it is not a parseable entry,
    // the sealed content itself is inconsistent.
    let entry =
        VaultEntry::from_canonical_bytes(&plaintext).map_err(|_| MemovaultError::IntegrityMismatch)?;
    entry.verify_signature()?;

    Ok(entry)
}
