//! Storage infrastructure: bottle settings file persistence.
//!
//! - `store`  – [`SettingsStore`], the load/save cycle and typed setters.
//! - `format` – XML plist and TOML encodings of the settings record.
//! - `error`  – [`SettingsError`] returned by load and save.
//!
//! Keeping the file format behind [`SettingsFormat`] means the store logic
//! does not care which encoding a bottle uses.

pub mod error;
pub mod format;
pub mod store;

pub use error::SettingsError;
pub use format::SettingsFormat;
pub use store::{settings_file_path, SettingsStore};
