//! `memovault completions` — emit a completion script for the given shell.
//!
//! The script goes to stdout, ready to be sourced or dropped into the
//! shell's completion directory:
//!   memovault completions bash > ~/.bash_completion.d/memovault

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::{MemovaultError, Result};

/// Accepted shell names and the generator each resolves to.
const SHELLS: &[(&str, Shell)] = &[
    ("bash", Shell::Bash),
    ("zsh", Shell::Zsh),
    ("fish", Shell::Fish),
    ("powershell", Shell::PowerShell),
    ("ps", Shell::PowerShell),
    ("elvish", Shell::Elvish),
];

pub fn execute(shell: &str) -> Result<()> {
    let shell = shell_from_name(shell)?;
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "memovault", &mut io::stdout().lock());
    Ok(())
}

/// Case-insensitive lookup in the accepted-shell table.
fn shell_from_name(name: &str) -> Result<Shell> {
    let wanted = name.to_lowercase();
    SHELLS
        .iter()
        .find(|(candidate, _)| *candidate == wanted)
        .map(|&(_, shell)| shell)
        .ok_or_else(|| {
            MemovaultError::CommandFailed(format!(
                "unrecognized shell '{name}' — expected one of: bash, zsh, fish, powershell, elvish"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_shell_resolves() {
        for (name, expected) in SHELLS {
            assert_eq!(shell_from_name(name).unwrap(), *expected);
        }
    }

    #[test]
    fn shell_names_ignore_case() {
        assert_eq!(shell_from_name("BASH").unwrap(), Shell::Bash);
        assert_eq!(shell_from_name("Zsh").unwrap(), Shell::Zsh);
    }

    #[test]
    fn ps_is_an_alias_for_powershell() {
        assert_eq!(shell_from_name("ps").unwrap(), Shell::PowerShell);
    }

    #[test]
    fn unrecognized_shells_are_rejected() {
        let err = shell_from_name("csh").unwrap_err();
        assert!(err.to_string().contains("bash"));
        assert!(shell_from_name("").is_err());
    }
}
