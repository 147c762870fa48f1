//! Persisted bottle settings.
//!
//! The on-disk shape is:
//!
//! ```text
//! runtimeVersion = "8.5"
//! baseSettings:
//!     windowsVersion = "win7"
//!     dxvk, dxvkHud, metalHud, metalTrace, esync = bool
//! ```
//!
//! Both structs carry `#[serde(default)]`, so a file that is missing a field
//! decodes with that field's default instead of failing.  Fields that are
//! present but malformed (wrong type, unknown Windows version tag) are still
//! rejected by the decoder.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Runtime version every record is normalised to on load.
pub const DEFAULT_RUNTIME_VERSION: &str = "8.5";

/// Error returned when a string is not a known [`WinVersion`] tag.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown windows version `{0}` (expected one of: win7, win8, win81, win10)")]
pub struct ParseWinVersionError(pub String);

/// Windows version reported to programs running inside the bottle.
///
/// Serialised as its short tag (`"win7"`, `"win10"`, ...).  Unknown tags are
/// a decode error rather than being coerced to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WinVersion {
    #[default]
    Win7,
    Win8,
    Win81,
    Win10,
}

impl WinVersion {
    /// Every supported version, oldest first.
    pub const ALL: [WinVersion; 4] = [
        WinVersion::Win7,
        WinVersion::Win8,
        WinVersion::Win81,
        WinVersion::Win10,
    ];

    /// The tag used in the settings file and on the command line.
    pub fn tag(self) -> &'static str {
        match self {
            WinVersion::Win7 => "win7",
            WinVersion::Win8 => "win8",
            WinVersion::Win81 => "win81",
            WinVersion::Win10 => "win10",
        }
    }

    /// Human-readable name, e.g. `"Windows 8.1"`.
    pub fn pretty_name(self) -> &'static str {
        match self {
            WinVersion::Win7 => "Windows 7",
            WinVersion::Win8 => "Windows 8",
            WinVersion::Win81 => "Windows 8.1",
            WinVersion::Win10 => "Windows 10",
        }
    }
}

impl fmt::Display for WinVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pretty_name())
    }
}

/// Lenient parsing for command-line input: ignores case and surrounding
/// whitespace.
impl FromStr for WinVersion {
    type Err = ParseWinVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        WinVersion::ALL
            .into_iter()
            .find(|v| v.tag().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseWinVersionError(s.to_string()))
    }
}

/// Exact-tag conversion used when decoding a settings file.  Unlike
/// [`FromStr`], case and surrounding whitespace must match.
impl TryFrom<String> for WinVersion {
    type Error = ParseWinVersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        WinVersion::ALL
            .into_iter()
            .find(|v| v.tag() == value)
            .ok_or(ParseWinVersionError(value))
    }
}

impl From<WinVersion> for String {
    fn from(value: WinVersion) -> Self {
        value.tag().to_string()
    }
}

/// Top-level settings record stored in the bottle's settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsRecord {
    /// Compatibility-layer version label.  Reset to
    /// [`DEFAULT_RUNTIME_VERSION`] whenever a record is loaded.
    #[serde(rename = "runtimeVersion")]
    pub runtime_version: String,
    /// Per-bottle toggles.
    #[serde(rename = "baseSettings")]
    pub base: BaseSettings,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            runtime_version: DEFAULT_RUNTIME_VERSION.to_string(),
            base: BaseSettings::default(),
        }
    }
}

impl SettingsRecord {
    /// Resets `runtime_version` to [`DEFAULT_RUNTIME_VERSION`].
    ///
    /// Returns `true` when the stored value differed and was replaced.
    pub fn normalize_runtime_version(&mut self) -> bool {
        if self.runtime_version == DEFAULT_RUNTIME_VERSION {
            return false;
        }
        self.runtime_version = DEFAULT_RUNTIME_VERSION.to_string();
        true
    }
}

/// Feature toggles and the target Windows version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BaseSettings {
    /// Windows version reported to programs in the bottle.
    pub windows_version: WinVersion,
    /// Route Direct3D 10/11 through DXVK.
    pub dxvk: bool,
    /// Show the DXVK HUD.  Only has an effect when `dxvk` is on.
    pub dxvk_hud: bool,
    /// Show the Metal performance HUD.
    pub metal_hud: bool,
    /// Enable Metal GPU frame capture.
    pub metal_trace: bool,
    /// Use eventfd-based synchronisation (esync).
    pub esync: bool,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
