//! On-disk encodings for a [`SettingsRecord`].
//!
//! The default is an XML property list (`Metadata.plist` style), which keeps
//! the file readable and diffable.  TOML is available for setups that prefer
//! it; both encode exactly the same field names.

use bottle_core::SettingsRecord;

use super::error::SettingsError;

/// File format used by a settings store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsFormat {
    /// XML property list, extension `plist`.
    #[default]
    Plist,
    /// Pretty-printed TOML, extension `toml`.
    Toml,
}

impl SettingsFormat {
    /// File extension (without the dot).
    pub fn extension(self) -> &'static str {
        match self {
            SettingsFormat::Plist => "plist",
            SettingsFormat::Toml => "toml",
        }
    }

    /// Serialises `record` into the bytes written to disk.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::PlistEncode`] or [`SettingsError::TomlEncode`]
    /// if serialisation fails.
    pub fn encode(self, record: &SettingsRecord) -> Result<Vec<u8>, SettingsError> {
        match self {
            SettingsFormat::Plist => {
                let mut buf = Vec::new();
                plist::to_writer_xml(&mut buf, record).map_err(SettingsError::PlistEncode)?;
                Ok(buf)
            }
            SettingsFormat::Toml => Ok(toml::to_string_pretty(record)?.into_bytes()),
        }
    }

    /// Parses file content into a record.
    ///
    /// # Errors
    ///
    /// Returns a decode-class [`SettingsError`] if the content is malformed,
    /// has a value of the wrong type, or names an unknown Windows version.
    pub fn decode(self, bytes: &[u8]) -> Result<SettingsRecord, SettingsError> {
        match self {
            SettingsFormat::Plist => plist::from_bytes(bytes).map_err(SettingsError::PlistDecode),
            SettingsFormat::Toml => Ok(toml::from_str(std::str::from_utf8(bytes)?)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bottle_core::{BaseSettings, WinVersion};

    fn sample() -> SettingsRecord {
        SettingsRecord {
            runtime_version: "8.5".to_string(),
            base: BaseSettings {
                windows_version: WinVersion::Win81,
                dxvk: true,
                dxvk_hud: false,
                metal_hud: true,
                metal_trace: false,
                esync: true,
            },
        }
    }

    #[test]
    fn test_extensions() {
        assert_eq!(SettingsFormat::Plist.extension(), "plist");
        assert_eq!(SettingsFormat::Toml.extension(), "toml");
        assert_eq!(SettingsFormat::default(), SettingsFormat::Plist);
    }

    #[test]
    fn test_plist_output_is_xml_with_file_keys() {
        // Act
        let bytes = SettingsFormat::Plist.encode(&sample()).expect("encode");
        let text = String::from_utf8(bytes).expect("xml is utf-8");

        // Assert
        assert!(text.starts_with("<?xml"), "got:\n{text}");
        assert!(text.contains("<key>runtimeVersion</key>"), "got:\n{text}");
        assert!(text.contains("<key>baseSettings</key>"), "got:\n{text}");
        assert!(text.contains("<string>win81</string>"), "got:\n{text}");
        assert!(text.contains("<key>metalHud</key>"), "got:\n{text}");
    }

    #[test]
    fn test_plist_decodes_what_it_encodes() {
        let bytes = SettingsFormat::Plist.encode(&sample()).expect("encode");
        let decoded = SettingsFormat::Plist.decode(&bytes).expect("decode");
        assert_eq!(decoded, sample());
    }

    #[test]
    fn test_toml_decodes_what_it_encodes() {
        let bytes = SettingsFormat::Toml.encode(&sample()).expect("encode");
        let decoded = SettingsFormat::Toml.decode(&bytes).expect("decode");
        assert_eq!(decoded, sample());
    }

    #[test]
    fn test_plist_garbage_is_decode_error() {
        let err = SettingsFormat::Plist
            .decode(b"this is not a property list")
            .unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_toml_invalid_utf8_is_decode_error() {
        let err = SettingsFormat::Toml.decode(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, SettingsError::Utf8(_)));
        assert!(err.is_decode());
    }

    #[test]
    fn test_toml_windows_version_tag_must_match_case_and_whitespace() {
        for tag in ["WIN10", " win10 "] {
            let text = format!(
                "runtimeVersion = \"8.5\"\n[baseSettings]\nwindowsVersion = \"{tag}\"\n"
            );
            let err = SettingsFormat::Toml.decode(text.as_bytes()).unwrap_err();
            assert!(err.is_decode(), "'{tag}' must not be coerced");
        }
    }

    #[test]
    fn test_plist_windows_version_tag_must_match_case() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<dict>
	<key>baseSettings</key>
	<dict>
		<key>windowsVersion</key>
		<string>WIN10</string>
	</dict>
</dict>
</plist>
"#;
        let result = SettingsFormat::Plist.decode(xml.as_bytes());
        assert!(matches!(result, Err(SettingsError::PlistDecode(_))));
    }

    #[test]
    fn test_plist_unknown_windows_version_is_decode_error() {
        // Arrange: a hand-written plist naming a version outside the closed set
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>runtimeVersion</key>
	<string>8.5</string>
	<key>baseSettings</key>
	<dict>
		<key>windowsVersion</key>
		<string>winxp64</string>
	</dict>
</dict>
</plist>
"#;

        // Act
        let result = SettingsFormat::Plist.decode(xml.as_bytes());

        // Assert
        assert!(matches!(result, Err(SettingsError::PlistDecode(_))));
    }
}
