//! File-backed settings store for a single bottle.
//!
//! A [`SettingsStore`] owns one settings file at `<bottle dir>/<name>.<ext>`
//! and the in-memory [`SettingsRecord`] mirrored from it.
//!
//! - **Reads never touch disk.**  Getters return the in-memory value.
//! - **Every setter persists.**  `set_*` methods update the field and then
//!   call [`SettingsStore::save`] in the same call.  The in-memory value is
//!   updated even when the save fails; the returned `Result` reports whether
//!   the file now matches.
//! - **Opening never fails.**  If the file is absent or cannot be decoded the
//!   store starts from defaults and writes them out.
//!
//! The store assumes it is the only writer of its file.  Two stores pointed
//! at the same path will silently overwrite each other.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use bottle_core::{BaseSettings, SettingsRecord, WinVersion};
use tempfile::NamedTempFile;
use tracing::{debug, error, warn};

use super::error::SettingsError;
use super::format::SettingsFormat;

/// Returns the settings file path for bottle directory `base_dir` and file
/// stem `name`.
pub fn settings_file_path(base_dir: &Path, name: &str, format: SettingsFormat) -> PathBuf {
    base_dir.join(format!("{name}.{}", format.extension()))
}

/// Persistent settings for one bottle.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    format: SettingsFormat,
    record: SettingsRecord,
}

impl SettingsStore {
    /// Opens (or creates) the XML plist settings file `<base_dir>/<name>.plist`.
    pub fn open(base_dir: impl AsRef<Path>, name: &str) -> Self {
        Self::open_with_format(base_dir, name, SettingsFormat::Plist)
    }

    /// Opens (or creates) `<base_dir>/<name>.<ext>` in the given format.
    ///
    /// Load and save failures are logged and otherwise ignored; the returned
    /// store always holds a valid record.
    pub fn open_with_format(
        base_dir: impl AsRef<Path>,
        name: &str,
        format: SettingsFormat,
    ) -> Self {
        let mut store = Self {
            path: settings_file_path(base_dir.as_ref(), name, format),
            format,
            record: SettingsRecord::default(),
        };

        if store.load().is_err() {
            // Both calls log their own failures.
            store.save().ok();
        }
        store
    }

    /// Re-reads the settings file into memory.
    ///
    /// A stored runtime version different from
    /// [`bottle_core::DEFAULT_RUNTIME_VERSION`] is replaced by the default;
    /// everything else is taken from the file as-is.
    ///
    /// # Errors
    ///
    /// Returns a decode-class [`SettingsError`] if the file cannot be read or
    /// parsed.  The in-memory record is left untouched in that case.
    pub fn load(&mut self) -> Result<(), SettingsError> {
        match self.read_record() {
            Ok(mut record) => {
                let stored_version = record.runtime_version.clone();
                if record.normalize_runtime_version() {
                    warn!(
                        "bottle settings at {} have runtime version {stored_version}, resetting to {}",
                        self.path.display(),
                        record.runtime_version
                    );
                }
                self.record = record;
                debug!("loaded bottle settings from {}", self.path.display());
                Ok(())
            }
            Err(e) => {
                warn!("failed to load bottle settings: {e}");
                Err(e)
            }
        }
    }

    /// Writes the in-memory record to the settings file, replacing it.
    ///
    /// Creates the bottle directory if it does not exist.  Never modifies the
    /// in-memory record.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Write`] for file-system failures or an encode
    /// variant if serialisation fails.
    pub fn save(&self) -> Result<(), SettingsError> {
        match self.write_record() {
            Ok(()) => {
                debug!("saved bottle settings to {}", self.path.display());
                Ok(())
            }
            Err(e) => {
                error!("failed to save bottle settings: {e}");
                Err(e)
            }
        }
    }

    fn read_record(&self) -> Result<SettingsRecord, SettingsError> {
        let bytes = std::fs::read(&self.path).map_err(|source| SettingsError::Read {
            path: self.path.clone(),
            source,
        })?;
        self.format.decode(&bytes)
    }

    /// Writes to a temp file next to the target and renames it into place,
    /// so an interrupted save never leaves a truncated settings file.
    fn write_record(&self) -> Result<(), SettingsError> {
        let bytes = self.format.encode(&self.record)?;

        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(|source| SettingsError::Write {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|source| SettingsError::Write {
            path: dir.to_path_buf(),
            source,
        })?;
        tmp.write_all(&bytes)
            .and_then(|()| tmp.flush())
            .map_err(|source| SettingsError::Write {
                path: self.path.clone(),
                source,
            })?;
        // On failure the temp file is dropped with the error and removed.
        tmp.persist(&self.path).map_err(|e| SettingsError::Write {
            path: self.path.clone(),
            source: e.error,
        })?;
        Ok(())
    }

    /// Applies `mutate` to the record, then saves.
    fn update(&mut self, mutate: impl FnOnce(&mut SettingsRecord)) -> Result<(), SettingsError> {
        mutate(&mut self.record);
        self.save()
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> SettingsFormat {
        self.format
    }

    pub fn record(&self) -> &SettingsRecord {
        &self.record
    }

    pub fn base(&self) -> &BaseSettings {
        &self.record.base
    }

    pub fn runtime_version(&self) -> &str {
        &self.record.runtime_version
    }

    pub fn set_runtime_version(&mut self, version: impl Into<String>) -> Result<(), SettingsError> {
        let version = version.into();
        self.update(|r| r.runtime_version = version)
    }

    pub fn windows_version(&self) -> WinVersion {
        self.record.base.windows_version
    }

    pub fn set_windows_version(&mut self, version: WinVersion) -> Result<(), SettingsError> {
        self.update(|r| r.base.windows_version = version)
    }

    pub fn dxvk(&self) -> bool {
        self.record.base.dxvk
    }

    pub fn set_dxvk(&mut self, enabled: bool) -> Result<(), SettingsError> {
        self.update(|r| r.base.dxvk = enabled)
    }

    pub fn dxvk_hud(&self) -> bool {
        self.record.base.dxvk_hud
    }

    pub fn set_dxvk_hud(&mut self, enabled: bool) -> Result<(), SettingsError> {
        self.update(|r| r.base.dxvk_hud = enabled)
    }

    pub fn metal_hud(&self) -> bool {
        self.record.base.metal_hud
    }

    pub fn set_metal_hud(&mut self, enabled: bool) -> Result<(), SettingsError> {
        self.update(|r| r.base.metal_hud = enabled)
    }

    pub fn metal_trace(&self) -> bool {
        self.record.base.metal_trace
    }

    pub fn set_metal_trace(&mut self, enabled: bool) -> Result<(), SettingsError> {
        self.update(|r| r.base.metal_trace = enabled)
    }

    pub fn esync(&self) -> bool {
        self.record.base.esync
    }

    pub fn set_esync(&mut self, enabled: bool) -> Result<(), SettingsError> {
        self.update(|r| r.base.esync = enabled)
    }

    /// Adds the variables implied by the current toggles to `environment`.
    pub fn environment_variables(&self, environment: &mut HashMap<String, String>) {
        self.record.base.environment_variables(environment);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
