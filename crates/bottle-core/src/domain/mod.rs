//! Domain entities for bottle settings.
//!
//! Everything in here is plain data plus pure functions.  Nothing touches the
//! file system or the process environment, so the whole module can be tested
//! without any setup.

/// The persisted settings record and its nested toggles.
pub mod settings;

/// Translation of toggles into environment variables.
pub mod environment;
