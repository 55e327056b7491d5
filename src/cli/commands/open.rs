//! `memovault open` — decrypt a sealed container and print the entry.

use std::fs;

use crate::cli::presenter::{ConsolePresenter, Presenter, QuietPresenter};
use crate::cli::{prompt_passphrase, vault_root, Cli};
use crate::config::Settings;
use crate::errors::{MemovaultError, Result};
use crate::vault::{open_with_params, ContainerStore};

/// Execute the `open` command.
pub fn execute(cli: &Cli, id: &str, output_path: Option<&str>, quiet: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    let store = ContainerStore::new(&vault_root(cli, &settings)?);

    let presenter: Box<dyn Presenter> = if quiet {
        Box::new(QuietPresenter)
    } else {
        Box::new(ConsolePresenter)
    };

    // Read the container before asking for a passphrase: a missing id
    // must never cost the user a prompt.
    presenter.stage(&format!(
        "Reading sealed container {}",
        store.container_path(id).display()
    ));
    let container = store.read(id)?;

    let passphrase = prompt_passphrase()?;

    presenter.stage("Deriving key and opening container");
    let entry = open_with_params(&container, &passphrase, &settings.scrypt_params())?;

    let json = serde_json::to_string_pretty(&entry)
        .map_err(|e| MemovaultError::SerializationError(format!("entry: {e}")))?;

    if let Some(path) = output_path {
        fs::write(path, format!("{json}\n"))?;
        presenter.stage(&format!("Wrote entry JSON to {path}"));
    }

    presenter.done(&format!("Entry '{id}' opened and verified"));

    // The entry itself goes to stdout, unstyled, so it can be piped.
    println!("{json}");

    Ok(())
}
