use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in MemoVault.
#[derive(Debug, Error)]
pub enum MemovaultError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// AEAD verification failed. One variant and one message no matter
    /// which of passphrase, salt, nonce, tag, or ciphertext was wrong.
    #[error("Decryption failed — wrong passphrase or tampered container")]
    AuthenticationFailure,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    #[error("Random source failure: {0}")]
    RandomSourceFailure(String),

    // --- Container errors ---
    #[error("Container not found at {0}")]
    MissingContainer(PathBuf),

    #[error("Container already exists at {0}")]
    ContainerExists(PathBuf),

    #[error("Malformed container: {0}")]
    MalformedContainer(String),

    /// The AEAD tag verified but the recovered record failed its own
    /// consistency check. Format drift, not a credential error.
    #[error("Record signature mismatch — the container decrypted but its payload failed the internal consistency check")]
    IntegrityMismatch,

    #[error("Invalid container id: {0}")]
    InvalidContainerId(String),

    // --- Classifier errors ---
    #[error("Classification failed: {0}")]
    ClassificationFailed(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

impl MemovaultError {
    /// Process exit code for the CLI. Callers must be able to tell a
    /// missing container from a wrong passphrase from a malformed file.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingContainer(_) => 2,
            Self::AuthenticationFailure => 3,
            Self::MalformedContainer(_) => 4,
            Self::IntegrityMismatch => 5,
            _ => 1,
        }
    }
}

/// Convenience type alias for MemoVault results.
pub type Result<T> = std::result::Result<T, MemovaultError>;
