//! The plaintext vault entry and its self-signature.
//!
//! A `VaultEntry` is an open mapping of named string fields.  The
//! conventional entry carries `title`, `location`, `memo`, `reflection`,
//! `notes`, `tone`, `intent`, `reem_code`, `source`, and `timestamp`,
//! but nothing in this type restricts the field set.  One field name is
//! reserved: `signature` holds the SHA-256 hex digest of the canonical
//! serialization of all *other* fields, so the stored value can be
//! recomputed and checked after decryption.
//!
//! Fields live in a `BTreeMap`, which makes the canonical serialization
//! (sorted keys, compact separators) fall out of plain `serde_json`
//! encoding: insertion order can never leak into the digest.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::errors::{MemovaultError, Result};

/// Reserved field name holding the entry's self-signature.
pub const SIGNATURE_FIELD: &str = "signature";

/// A single vault entry: named string fields plus an optional
/// self-signature under [`SIGNATURE_FIELD`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VaultEntry {
    fields: BTreeMap<String, String>,
}

impl VaultEntry {
    /// Create an empty entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value under the same name.
    pub fn set(&mut self, name: &str, value: &str) {
        self.fields.insert(name.to_string(), value.to_string());
    }

    /// Get a field's value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Returns `true` if the entry has a field with the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields, including the signature once attached.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the entry has no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over all fields in canonical (sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The stored self-signature, if one has been attached.
    pub fn signature(&self) -> Option<&str> {
        self.get(SIGNATURE_FIELD)
    }

    // ------------------------------------------------------------------
    // Canonical serialization
    // ------------------------------------------------------------------

    /// Serialize the full entry (signature included, if present) to the
    /// canonical byte form used as the encryption payload.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.fields)
            .map_err(|e| MemovaultError::SerializationError(format!("entry: {e}")))
    }

    /// Parse an entry back from its canonical byte form.
    pub fn from_canonical_bytes(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| MemovaultError::SerializationError(format!("entry: {e}")))
    }

    // ------------------------------------------------------------------
    // Self-signature
    // ------------------------------------------------------------------

    /// Compute the self-signature: the lowercase-hex SHA-256 digest of
    /// the canonical serialization of every field *except*
    /// [`SIGNATURE_FIELD`].
    pub fn compute_signature(&self) -> Result<String> {
        let unsigned: BTreeMap<&str, &str> = self
            .fields
            .iter()
            .filter(|(name, _)| name.as_str() != SIGNATURE_FIELD)
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();

        let bytes = serde_json::to_vec(&unsigned)
            .map_err(|e| MemovaultError::SerializationError(format!("entry digest: {e}")))?;

        Ok(hex::encode(Sha256::digest(&bytes)))
    }

    /// Attach the self-signature if the entry does not already carry
    /// one.  An existing signature is kept verbatim, even if stale; a
    /// stale value surfaces later as an integrity mismatch on open.
    pub fn ensure_signed(&mut self) -> Result<()> {
        if self.signature().is_none() {
            let sig = self.compute_signature()?;
            self.fields.insert(SIGNATURE_FIELD.to_string(), sig);
        }
        Ok(())
    }

    /// Recompute the signature over the non-signature fields and compare
    /// it to the stored value in constant time.
    ///
    /// A missing or mismatching signature is an `IntegrityMismatch`:
    /// with the AEAD tag already verified, disagreement here means the
    /// payload drifted from the sealed format, not that the passphrase
    /// was wrong.
    pub fn verify_signature(&self) -> Result<()> {
        let stored = self
            .signature()
            .ok_or(MemovaultError::IntegrityMismatch)?;
        let computed = self.compute_signature()?;

        if computed.as_bytes().ct_eq(stored.as_bytes()).into() {
            Ok(())
        } else {
            Err(MemovaultError::IntegrityMismatch)
        }
    }
}
