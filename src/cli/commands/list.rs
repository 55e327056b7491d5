//! `memovault list` — display all sealed containers in a table.
//!
//! Listing is metadata-only: no container is opened and no passphrase
//! is asked for.

use comfy_table::{ContentArrangement, Table};

use crate::cli::output;
use crate::cli::{vault_root, Cli};
use crate::config::Settings;
use crate::errors::Result;
use crate::vault::ContainerStore;

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;

pub fn execute(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    let store = ContainerStore::new(&vault_root(cli, &settings)?);

    let containers = store.list()?;

    if containers.is_empty() {
        output::info("No sealed containers found.");
        output::tip("Run `memovault seal <id>` to seal your first entry.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Entry", "Size", "Modified"]);
    for c in &containers {
        table.add_row(vec![
            c.id.clone(),
            human_size(c.size),
            c.modified.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]);
    }

    output::info(&format!("{} sealed container(s):", containers.len()));
    println!("{table}");

    Ok(())
}

/// Render a byte count with the largest unit that keeps it readable.
#[allow(clippy::cast_precision_loss)] // container files are tiny
fn human_size(bytes: u64) -> String {
    match bytes {
        b if b < KIB => format!("{b} B"),
        b if b < MIB => format!("{:.1} KB", b as f64 / KIB as f64),
        b => format!("{:.1} MB", b as f64 / MIB as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_pick_the_right_unit() {
        assert_eq!(human_size(0), "0 B");
        assert_eq!(human_size(512), "512 B");
        assert_eq!(human_size(2048), "2.0 KB");
        assert_eq!(human_size(2 * MIB), "2.0 MB");
    }

    #[test]
    fn sizes_round_to_one_decimal() {
        assert_eq!(human_size(1536), "1.5 KB");
        assert_eq!(human_size(KIB + 100), "1.1 KB");
    }
}
