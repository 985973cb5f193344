//! Config module — user-level settings loaded from a TOML file.

pub mod settings;

pub use settings::Settings;
