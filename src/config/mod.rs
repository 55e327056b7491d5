//! Project configuration loaded from `.memovault.toml`.

pub mod settings;

pub use settings::Settings;
