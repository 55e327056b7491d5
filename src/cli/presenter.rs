//! Presentation hooks around the open operation.
//!
//! Opening sits on a deliberately slow KDF, so the command narrates its
//! progress.  The narration goes through a `Presenter` so it can be
//! swapped out: the default console presenter writes styled lines to
//! stderr (stdout stays clean for piped entry JSON), and `--quiet`
//! swaps in a presenter that says nothing at all.

use console::style;

/// Hooks invoked at each stage of an open.
pub trait Presenter {
    /// A stage has started (reading, key derivation, ...).
    fn stage(&self, msg: &str);

    /// The operation finished successfully.
    fn done(&self, msg: &str);
}

/// Styled stderr narration, the default for interactive use.
pub struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn stage(&self, msg: &str) {
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    fn done(&self, msg: &str) {
        eprintln!("{} {msg}", style("✓").green().bold());
    }
}

/// Suppresses all narration (`--quiet`).
pub struct QuietPresenter;

impl Presenter for QuietPresenter {
    fn stage(&self, _msg: &str) {}

    fn done(&self, _msg: &str) {}
}
