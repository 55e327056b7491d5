//! The sealed container format.
//!
//! A `.vault` file is a JSON document with this exact shape:
//!
//! ```json
//! {
//!   "metadata": {
//!     "salt": "<base64>",
//!     "iv": "<base64>",
//!     "tag": "<base64>"
//!   },
//!   "data": "<base64>"
//! }
//! ```
//!
//! - **salt**: 16 random bytes fed to the KDF.
//! - **iv**: the 12-byte AES-GCM nonce.
//! - **tag**: the 16-byte GCM authentication tag, stored separately
//!   from the ciphertext.
//! - **data**: the ciphertext of the canonical entry JSON, without the
//!   tag.
//!
//! All four binary fields are standard base64 with padding.  Every
//! field is required; a container missing any of them is malformed, as
//! is one whose decoded salt, iv, or tag has the wrong length.

use serde::{Deserialize, Serialize};

use crate::crypto::aead::{NONCE_LEN, TAG_LEN};
use crate::crypto::kdf::SALT_LEN;
use crate::errors::{MemovaultError, Result};

/// Key material parameters stored alongside the ciphertext.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerMetadata {
    /// KDF salt (base64 in JSON).
    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    pub salt: Vec<u8>,

    /// AES-GCM nonce (base64 in JSON).
    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    pub iv: Vec<u8>,

    /// GCM authentication tag (base64 in JSON).
    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    pub tag: Vec<u8>,
}

/// A sealed vault entry as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Container {
    /// Salt, nonce, and tag needed to open the container.
    pub metadata: ContainerMetadata,

    /// Ciphertext without the tag (base64 in JSON).
    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    pub data: Vec<u8>,
}

impl Container {
    /// Serialize to the on-disk JSON form (pretty-printed, two-space
    /// indent).
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self)
            .map_err(|e| MemovaultError::SerializationError(format!("container: {e}")))
    }

    /// Parse a container from its JSON form.
    ///
    /// Any structural defect — invalid JSON, a missing field, bad
    /// base64 — is a `MalformedContainer`.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| MemovaultError::MalformedContainer(e.to_string()))
    }

    /// Check that the decoded binary fields have the lengths the
    /// sealing algorithm produces.
    pub fn validate(&self) -> Result<()> {
        if self.metadata.salt.len() != SALT_LEN {
            return Err(MemovaultError::MalformedContainer(format!(
                "salt is {} bytes, expected {SALT_LEN}",
                self.metadata.salt.len()
            )));
        }
        if self.metadata.iv.len() != NONCE_LEN {
            return Err(MemovaultError::MalformedContainer(format!(
                "iv is {} bytes, expected {NONCE_LEN}",
                self.metadata.iv.len()
            )));
        }
        if self.metadata.tag.len() != TAG_LEN {
            return Err(MemovaultError::MalformedContainer(format!(
                "tag is {} bytes, expected {TAG_LEN}",
                self.metadata.tag.len()
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Serde helpers for base64-encoded Vec<u8> fields
// ---------------------------------------------------------------------------

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

pub(crate) fn base64_encode<S>(data: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let encoded = BASE64.encode(data);
    serializer.serialize_str(&encoded)
}

pub(crate) fn base64_decode<'de, D>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    BASE64.decode(&s).map_err(serde::de::Error::custom)
}
