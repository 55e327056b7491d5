//! The on-disk arena of sealed containers.
//!
//! A `ContainerStore` maps entry ids to `.vault` files inside a single
//! directory, so the rest of the application can work with simple
//! method calls like `store.read("vault001")`.  Every container is
//! independent: its own salt, its own nonce, its own passphrase.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::errors::{MemovaultError, Result};

use super::container::Container;

/// File extension for sealed containers.
pub const CONTAINER_EXT: &str = "vault";

/// Directory-listing metadata for one container.  No decryption is
/// performed to produce this.
#[derive(Debug, Clone)]
pub struct ContainerInfo {
    /// Entry id (file stem).
    pub id: String,
    /// File size in bytes.
    pub size: u64,
    /// Last modification time.
    pub modified: DateTime<Utc>,
}

/// Handle to a directory of sealed containers.
pub struct ContainerStore {
    /// Directory holding the `.vault` files.
    root: PathBuf,
}

impl ContainerStore {
    /// Create a handle for the given directory.  The directory is not
    /// created until the first write.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Returns the directory this store reads and writes.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path where the container for `id` lives (or would live).
    pub fn container_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.{CONTAINER_EXT}"))
    }

    /// Returns `true` if a container with this id exists on disk.
    pub fn exists(&self, id: &str) -> bool {
        self.container_path(id).exists()
    }

    // ------------------------------------------------------------------
    // Read / write
    // ------------------------------------------------------------------

    /// Write a sealed container to disk **atomically**.
    ///
    /// Refuses to overwrite: each id is sealed once.  The JSON is
    /// written to a temp file in the same directory and renamed over
    /// the target path, so readers never see a half-written container.
    pub fn write(&self, id: &str, container: &Container) -> Result<PathBuf> {
        validate_container_id(id)?;

        let path = self.container_path(id);
        if path.exists() {
            return Err(MemovaultError::ContainerExists(path));
        }

        fs::create_dir_all(&self.root)?;

        let json = container.to_json()?;
        let tmp_path = self.root.join(format!(".{id}.{CONTAINER_EXT}.tmp"));
        fs::write(&tmp_path, &json)?;
        fs::rename(&tmp_path, &path)?;

        Ok(path)
    }

    /// Read and parse the container for `id`.
    ///
    /// This is a pure file read: the container comes back still
    /// sealed.  Call [`super::seal::open`] to decrypt it.
    pub fn read(&self, id: &str) -> Result<Container> {
        validate_container_id(id)?;

        let path = self.container_path(id);
        if !path.exists() {
            return Err(MemovaultError::MissingContainer(path));
        }

        let bytes = fs::read(&path)?;
        Container::from_json(&bytes)
    }

    /// List all containers in the store, sorted by id.
    ///
    /// A missing store directory is an empty store, not an error.
    pub fn list(&self) -> Result<Vec<ContainerInfo>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut infos = Vec::new();
        for dir_entry in fs::read_dir(&self.root)? {
            let dir_entry = dir_entry?;
            let path = dir_entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(CONTAINER_EXT) {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let meta = dir_entry.metadata()?;
            infos.push(ContainerInfo {
                id: id.to_string(),
                size: meta.len(),
                modified: meta.modified()?.into(),
            });
        }

        infos.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(infos)
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that an entry id is safe to use as a file stem.
///
/// Allowed: lowercase ASCII letters, digits, and hyphens; non-empty,
/// at most 64 characters, no leading or trailing hyphen.
pub fn validate_container_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(MemovaultError::InvalidContainerId(
            "entry id cannot be empty".into(),
        ));
    }

    if id.len() > 64 {
        return Err(MemovaultError::InvalidContainerId(
            "entry id cannot exceed 64 characters".into(),
        ));
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(MemovaultError::InvalidContainerId(format!(
            "entry id '{id}' is invalid — only lowercase letters, digits, and hyphens are allowed"
        )));
    }

    if id.starts_with('-') || id.ends_with('-') {
        return Err(MemovaultError::InvalidContainerId(format!(
            "entry id '{id}' cannot start or end with a hyphen"
        )));
    }

    Ok(())
}
