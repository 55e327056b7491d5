//! `memovault seal` — collect an entry's fields and seal them into a
//! new container.

use std::io::{self, IsTerminal};

use chrono::{SecondsFormat, Utc};

use crate::classify::{reem_code, HeuristicClassifier, ToneClassifier};
use crate::cli::output;
use crate::cli::{prompt_new_passphrase, vault_root, Cli, SealArgs};
use crate::config::Settings;
use crate::errors::{MemovaultError, Result};
use crate::vault::{seal_with_params, validate_container_id, ContainerStore, VaultEntry};

/// Execute the `seal` command.
pub fn execute(cli: &Cli, args: &SealArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    let store = ContainerStore::new(&vault_root(cli, &settings)?);

    // Fail on a bad or taken id before asking the user for anything.
    validate_container_id(&args.id)?;
    if store.exists(&args.id) {
        output::tip("Each id is sealed once — pick a new id for a new entry.");
        return Err(MemovaultError::ContainerExists(
            store.container_path(&args.id),
        ));
    }

    // Collect the text fields: flag, else interactive prompt, else "".
    let interactive = io::stdin().is_terminal();
    let title = resolve_field(args.title.as_deref(), "Title", interactive)?;
    let location = resolve_field(args.location.as_deref(), "Location", interactive)?;
    let memo = resolve_field(args.memo.as_deref(), "Memo", interactive)?;
    let reflection = resolve_field(args.reflection.as_deref(), "Reflection", interactive)?;
    let notes = resolve_field(args.notes.as_deref(), "Notes", interactive)?;

    let (tone, intent, code, source) = resolve_labels(args, &memo, &reflection)?;

    let mut entry = VaultEntry::new();
    entry.set("title", &title);
    entry.set("location", &location);
    entry.set("memo", &memo);
    entry.set("reflection", &reflection);
    entry.set("notes", &notes);
    entry.set("tone", &tone);
    entry.set("intent", &intent);
    entry.set("reem_code", &code);
    entry.set("source", &source);
    entry.set(
        "timestamp",
        &Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    );

    // Passphrase comes last so nothing sensitive is typed for an entry
    // that would fail validation anyway.
    let passphrase = prompt_new_passphrase()?;

    let container = seal_with_params(&entry, &passphrase, &settings.scrypt_params())?;
    let path = store.write(&args.id, &container)?;

    output::success(&format!(
        "Sealed entry '{}' at {}",
        args.id,
        path.display()
    ));
    output::tip(&format!("Run `memovault open {}` to read it back.", args.id));

    Ok(())
}

/// Resolve one text field: an explicit flag wins, then an interactive
/// prompt, then the empty string.
fn resolve_field(flag: Option<&str>, prompt: &str, interactive: bool) -> Result<String> {
    if let Some(v) = flag {
        return Ok(v.to_string());
    }
    if !interactive {
        return Ok(String::new());
    }

    dialoguer::Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| MemovaultError::CommandFailed(format!("input prompt: {e}")))
}

/// Resolve tone, intent, REEM code, and source.
///
/// With neither label given, the heuristic classifier labels the memo
/// and reflection text and supplies all four values (flags still
/// override the code and source).  With at least one label given, the
/// labels are taken as-is, the code is derived from them unless
/// provided, and the source defaults to `"manual"`.
fn resolve_labels(
    args: &SealArgs,
    memo: &str,
    reflection: &str,
) -> Result<(String, String, String, String)> {
    match (&args.tone, &args.intent) {
        (None, None) => {
            let c = HeuristicClassifier::new().classify(&format!("{memo} {reflection}"))?;
            let code = args.reem_code.clone().unwrap_or(c.reem_code);
            let source = args.source.clone().unwrap_or(c.source);
            Ok((c.tone, c.intent, code, source))
        }
        (tone, intent) => {
            let tone = tone.clone().unwrap_or_default();
            let intent = intent.clone().unwrap_or_default();
            let code = match &args.reem_code {
                Some(c) => c.clone(),
                None => reem_code(&tone, &intent),
            };
            let source = args
                .source
                .clone()
                .unwrap_or_else(|| "manual".to_string());
            Ok((tone, intent, code, source))
        }
    }
}
