//! `bottle-settings` — inspect and edit a bottle's settings file.
//!
//! # Usage
//!
//! ```text
//! bottle-settings [OPTIONS] <COMMAND>
//!
//! Commands:
//!   show      Print the settings record as JSON
//!   set       Change one setting and save it
//!   env       Print the environment variables derived from the toggles
//!   versions  List the supported Windows versions
//!
//! Options:
//!   --dir <DIR>         Bottle directory [env: BOTTLE_DIR] [default: .]
//!   --name <NAME>       Settings file stem [default: Metadata]
//!   --format <FORMAT>   plist | toml [default: plist]
//! ```
//!
//! Opening the store creates the settings file with defaults if it is
//! missing or unreadable, so every command leaves a valid file behind.
//! Log verbosity is controlled with `RUST_LOG` (default `info`).

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bottle_core::WinVersion;
use bottle_settings::{SettingsFormat, SettingsStore};

/// Inspect and edit per-bottle settings.
#[derive(Debug, Parser)]
#[command(name = "bottle-settings", version)]
struct Cli {
    /// Directory of the bottle that owns the settings file.
    #[arg(long, default_value = ".", env = "BOTTLE_DIR")]
    dir: PathBuf,

    /// File stem of the settings file (the extension comes from --format).
    #[arg(long, default_value = "Metadata")]
    name: String,

    /// Encoding of the settings file.
    #[arg(long, value_enum, default_value_t = FormatArg::Plist)]
    format: FormatArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Plist,
    Toml,
}

impl From<FormatArg> for SettingsFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Plist => SettingsFormat::Plist,
            FormatArg::Toml => SettingsFormat::Toml,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the settings record as JSON.
    Show,
    /// Change one setting and save it.
    Set {
        key: SettingKey,
        /// `true`/`false` for toggles, a tag such as `win10` for windows-version.
        value: String,
    },
    /// Print the derived environment variables as KEY=VALUE lines.
    Env,
    /// List the supported Windows versions.
    Versions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SettingKey {
    RuntimeVersion,
    WindowsVersion,
    Dxvk,
    DxvkHud,
    MetalHud,
    MetalTrace,
    Esync,
}

fn parse_toggle(key: SettingKey, value: &str) -> anyhow::Result<bool> {
    value
        .trim()
        .parse()
        .with_context(|| format!("{key:?} expects true or false, got '{value}'"))
}

/// Applies `key = value` to the store; the setter saves immediately.
fn apply(store: &mut SettingsStore, key: SettingKey, value: &str) -> anyhow::Result<()> {
    let saved = match key {
        SettingKey::RuntimeVersion => store.set_runtime_version(value),
        SettingKey::WindowsVersion => store.set_windows_version(value.parse::<WinVersion>()?),
        SettingKey::Dxvk => store.set_dxvk(parse_toggle(key, value)?),
        SettingKey::DxvkHud => store.set_dxvk_hud(parse_toggle(key, value)?),
        SettingKey::MetalHud => store.set_metal_hud(parse_toggle(key, value)?),
        SettingKey::MetalTrace => store.set_metal_trace(parse_toggle(key, value)?),
        SettingKey::Esync => store.set_esync(parse_toggle(key, value)?),
    };
    saved.with_context(|| format!("failed to save {}", store.path().display()))
}

/// Renders the derived environment as sorted `KEY=VALUE` lines.
fn render_environment(store: &SettingsStore) -> String {
    let mut env = HashMap::new();
    store.environment_variables(&mut env);
    let sorted: BTreeMap<_, _> = env.into_iter().collect();
    sorted
        .into_iter()
        .map(|(k, v)| format!("{k}={v}\n"))
        .collect()
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays parseable.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut store = SettingsStore::open_with_format(&cli.dir, &cli.name, cli.format.into());

    match cli.command {
        Command::Show => {
            let json = serde_json::to_string_pretty(store.record())
                .context("failed to render settings as JSON")?;
            println!("{json}");
        }
        Command::Set { key, value } => {
            apply(&mut store, key, &value)?;
            info!("{key:?} set to {value} in {}", store.path().display());
        }
        Command::Env => print!("{}", render_environment(&store)),
        Command::Versions => {
            for version in WinVersion::ALL {
                println!("{}\t{version}", version.tag());
            }
        }
    }

    Ok(())
}
