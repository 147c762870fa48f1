//! Error type for settings file operations.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading or saving a bottle settings file.
///
/// Variants fall into two groups, see [`SettingsError::is_decode`]:
///
/// - **decode**: the file is missing, unreadable, or does not match the
///   expected schema.
/// - **encode/write**: the record could not be serialised or written.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read (missing, permissions, ...).
    #[error("I/O error reading settings at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings directory or file could not be written.
    #[error("I/O error writing settings at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The property list content could not be parsed into a settings record.
    #[error("failed to decode settings plist: {0}")]
    PlistDecode(#[source] plist::Error),

    /// The settings record could not be serialised as a property list.
    #[error("failed to encode settings plist: {0}")]
    PlistEncode(#[source] plist::Error),

    /// The TOML file is not valid UTF-8.
    #[error("settings file is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The TOML content could not be parsed into a settings record.
    #[error("failed to decode settings TOML: {0}")]
    TomlDecode(#[from] toml::de::Error),

    /// The settings record could not be serialised as TOML.
    #[error("failed to encode settings TOML: {0}")]
    TomlEncode(#[from] toml::ser::Error),
}

impl SettingsError {
    /// `true` for failures reading or decoding a file, `false` for failures
    /// encoding or writing one.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            SettingsError::Read { .. }
                | SettingsError::PlistDecode(_)
                | SettingsError::Utf8(_)
                | SettingsError::TomlDecode(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_is_decode() {
        let err = SettingsError::Read {
            path: PathBuf::from("/missing/Metadata.plist"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.is_decode());
        assert!(err.to_string().contains("/missing/Metadata.plist"));
    }

    #[test]
    fn test_write_error_is_not_decode() {
        let err = SettingsError::Write {
            path: PathBuf::from("/ro/Metadata.plist"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        };
        assert!(!err.is_decode());
    }

    #[test]
    fn test_toml_parse_error_is_decode() {
        let parse = toml::from_str::<toml::Value>("[[[ not toml").unwrap_err();
        assert!(SettingsError::from(parse).is_decode());
    }
}
