//! # bottle-core
//!
//! Domain types for per-bottle settings: the persisted [`SettingsRecord`],
//! its nested [`BaseSettings`] toggles, the closed set of target Windows
//! versions ([`WinVersion`]), and the pure derivation from toggles to
//! environment variables.
//!
//! This crate does no file I/O.  Loading and saving live in
//! `bottle-settings`, which depends on this crate.
//!
//! # What is a bottle? (for beginners)
//!
//! A bottle is an isolated compatibility environment (its own prefix
//! directory) in which Windows programs are run.  Each bottle carries a small
//! settings file that records which Windows version to report and which
//! optional graphics/synchronisation features to switch on.  Those features
//! are ultimately expressed as environment variables handed to the launched
//! process.

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `bottle_core::BaseSettings` instead of `bottle_core::domain::settings::BaseSettings`.
pub use domain::environment::derive_environment;
pub use domain::settings::{
    BaseSettings, ParseWinVersionError, SettingsRecord, WinVersion, DEFAULT_RUNTIME_VERSION,
};
