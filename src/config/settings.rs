//! Project-level configuration.
//!
//! Settings live in an optional `.memovault.toml` at the project root.
//! An absent file means defaults; an unparseable file is a hard error.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::crypto::kdf::ScryptParams;
use crate::errors::{MemovaultError, Result};

/// Contents of `.memovault.toml`. Missing fields fall back to the
/// values in `Settings::default()`, so a config file may set only the
/// fields it wants to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory (relative to the project root) holding container files.
    pub vault_dir: String,

    /// scrypt work factor exponent, N = 2^log_n.
    pub scrypt_log_n: u8,

    /// scrypt block size r.
    pub scrypt_block_size: u32,

    /// scrypt parallelism p.
    pub scrypt_parallelism: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_dir: ".memovault".to_string(),
            scrypt_log_n: 14, // N = 16 384
            scrypt_block_size: 8,
            scrypt_parallelism: 1,
        }
    }
}

impl Settings {
    /// Config file name looked up in the project root.
    pub const FILE_NAME: &'static str = ".memovault.toml";

    /// Read `<project_dir>/.memovault.toml`, or fall back to defaults
    /// when no such file exists.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(Self::FILE_NAME);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        toml::from_str(&raw)
            .map_err(|e| MemovaultError::ConfigError(format!("{}: {e}", path.display())))
    }

    /// The configured KDF cost, in crypto-layer form.
    pub fn scrypt_params(&self) -> ScryptParams {
        ScryptParams {
            log_n: self.scrypt_log_n,
            block_size: self.scrypt_block_size,
            parallelism: self.scrypt_parallelism,
        }
    }
}
