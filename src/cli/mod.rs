//! Command-line surface: argument parsing, passphrase prompts, and the
//! subcommand implementations.

pub mod commands;
pub mod output;
pub mod presenter;

use std::path::PathBuf;

use clap::Parser;

use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{MemovaultError, Result};

/// Minimum passphrase length to prevent trivially weak passphrases.
const MIN_PASSPHRASE_LEN: usize = 8;

/// MemoVault CLI: passphrase-sealed personal memo vault.
#[derive(Parser)]
#[command(
    name = "memovault",
    about = "Passphrase-sealed vault for personal memo entries",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault directory (default: from .memovault.toml, else .memovault)
    #[arg(long, global = true)]
    pub vault_dir: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Seal a new entry into its own container
    Seal(SealArgs),

    /// Open a sealed container and print the entry as JSON
    Open {
        /// Entry id
        id: String,

        /// Write the entry JSON to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Suppress progress narration
        #[arg(short, long)]
        quiet: bool,
    },

    /// List sealed containers in the vault directory
    List,

    /// Generate shell completion scripts
    Completions {
        /// Target shell (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
}

/// Arguments for `memovault seal`.
///
/// Every entry field can be given as a flag; fields left out are
/// prompted for interactively (when stdin is a terminal) or stored as
/// empty strings.
#[derive(clap::Args)]
pub struct SealArgs {
    /// Entry id, used as the container file stem (e.g. vault001)
    pub id: String,

    /// Entry title
    #[arg(long)]
    pub title: Option<String>,

    /// Where this happened
    #[arg(long)]
    pub location: Option<String>,

    /// The memo text itself
    #[arg(long)]
    pub memo: Option<String>,

    /// A longer reflection on the memo
    #[arg(long)]
    pub reflection: Option<String>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Tone label (classified from the text when omitted)
    #[arg(long)]
    pub tone: Option<String>,

    /// Intent label (classified from the text when omitted)
    #[arg(long)]
    pub intent: Option<String>,

    /// REEM code (derived from tone and intent when omitted)
    #[arg(long)]
    pub reem_code: Option<String>,

    /// Label provenance (set by the classifier when omitted)
    #[arg(long)]
    pub source: Option<String>,
}

// ---------------------------------------------------------------------------
// Helpers shared across subcommands
// ---------------------------------------------------------------------------

/// Obtain the vault passphrase: `MEMOVAULT_PASSPHRASE` when set (for
/// scripted use), an interactive hidden prompt otherwise.
///
/// Returned as `Zeroizing<String>` so it is wiped on drop.
pub fn prompt_passphrase() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("MEMOVAULT_PASSPHRASE") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter vault passphrase")
        .interact()
        .map_err(|e| MemovaultError::CommandFailed(format!("passphrase prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Choose a passphrase for a new container: prompted twice for
/// confirmation and held to the minimum length. `MEMOVAULT_PASSPHRASE`
/// short-circuits the prompt but is length-checked all the same.
pub fn prompt_new_passphrase() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("MEMOVAULT_PASSPHRASE") {
        if !pw.is_empty() {
            if pw.len() < MIN_PASSPHRASE_LEN {
                return Err(MemovaultError::CommandFailed(format!(
                    "passphrase must be at least {MIN_PASSPHRASE_LEN} characters"
                )));
            }
            return Ok(Zeroizing::new(pw));
        }
    }

    loop {
        let passphrase = dialoguer::Password::new()
            .with_prompt("Choose vault passphrase")
            .with_confirmation(
                "Confirm vault passphrase",
                "Passphrases do not match, try again",
            )
            .interact()
            .map_err(|e| MemovaultError::CommandFailed(format!("passphrase prompt: {e}")))?;

        if passphrase.len() < MIN_PASSPHRASE_LEN {
            output::warning(&format!(
                "Passphrase must be at least {MIN_PASSPHRASE_LEN} characters. Try again."
            ));
            continue;
        }

        return Ok(Zeroizing::new(passphrase));
    }
}

/// Resolve the vault directory: the `--vault-dir` flag wins, then the
/// config file, then the built-in default.
///
/// Example: `<cwd>/.memovault`
pub fn vault_root(cli: &Cli, settings: &Settings) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    let dir = cli.vault_dir.as_deref().unwrap_or(&settings.vault_dir);
    Ok(cwd.join(dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vault_root_prefers_flag_over_settings() {
        let cli = Cli {
            command: Commands::List,
            vault_dir: Some("from-flag".to_string()),
        };
        let settings = Settings {
            vault_dir: "from-config".to_string(),
            ..Settings::default()
        };

        let root = vault_root(&cli, &settings).unwrap();
        assert!(root.ends_with("from-flag"));
    }

    #[test]
    fn vault_root_falls_back_to_settings() {
        let cli = Cli {
            command: Commands::List,
            vault_dir: None,
        };
        let settings = Settings {
            vault_dir: "from-config".to_string(),
            ..Settings::default()
        };

        let root = vault_root(&cli, &settings).unwrap();
        assert!(root.ends_with("from-config"));
    }
}
