//! One module per subcommand.

pub mod completions;
pub mod list;
pub mod open;
pub mod seal;
