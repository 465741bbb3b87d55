#![forbid(unsafe_code)]

//! JSON configuration documents on disk.
//!
//! | Document              | File                 |
//! |-----------------------|----------------------|
//! | [`Settings`]          | `tint.json`          |
//! | [`DestinationPolicy`] | `tint_servers.json`  |
//!
//! A missing file loads as the document's default and the default is written
//! back, so the user gets an editable file on first run. Saves go through a
//! temporary file and a rename so a crash never leaves a half-written
//! document.
//!
//! [`Settings`]: crate::settings::Settings
//! [`DestinationPolicy`]: crate::policy::DestinationPolicy

use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// File name of the settings document.
pub const SETTINGS_FILE: &str = "tint.json";

/// File name of the destination policy document.
pub const POLICY_FILE: &str = "tint_servers.json";

// ─────────────────────────────────────────────────────────────────────────────
// Error Types
// ─────────────────────────────────────────────────────────────────────────────

/// Errors from loading or saving a configuration document.
#[derive(Debug)]
pub enum ConfigError {
    /// File I/O failure.
    Io(std::io::Error),
    /// JSON encode/decode failure.
    Serialization(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error: {e}"),
            ConfigError::Serialization(msg) => write!(f, "serialization error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Serialization(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

// ─────────────────────────────────────────────────────────────────────────────
// Store
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration directory: `$XDG_CONFIG_HOME`, then `$HOME/.config`, then `.`.
#[must_use]
pub fn default_dir() -> PathBuf {
    if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(config_home);
    }
    if let Some(home) = std::env::var_os("HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(home).join(".config");
    }
    PathBuf::from(".")
}

/// One JSON document of type `T` at a fixed path.
pub struct JsonStore<T> {
    path: PathBuf,
    _doc: PhantomData<fn() -> T>,
}

impl<T> JsonStore<T> {
    /// Store at `path`. The file need not exist.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            _doc: PhantomData,
        }
    }

    /// Store named `file_name` inside `dir`.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>, file_name: &str) -> Self {
        Self::new(dir.as_ref().join(file_name))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone();
        tmp.set_extension("json.tmp");
        tmp
    }
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    /// Load the document, creating it with defaults if absent.
    pub fn load(&self) -> ConfigResult<T> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "config file missing, writing defaults");
            let doc = T::default();
            self.save(&doc)?;
            return Ok(doc);
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let doc = serde_json::from_reader(reader).map_err(|e| {
            ConfigError::Serialization(format!(
                "failed to parse {}: {e}",
                self.path.display()
            ))
        })?;
        tracing::debug!(path = %self.path.display(), "loaded config");
        Ok(doc)
    }

    /// Load the document, falling back to defaults on any error.
    ///
    /// The error is logged at warn level and the file is left untouched.
    pub fn load_or_default(&self) -> T {
        match self.load() {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to load config, using defaults");
                T::default()
            }
        }
    }

    /// Write the document atomically.
    pub fn save(&self, doc: &T) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.temp_path();
        {
            let file = File::create(&tmp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, doc).map_err(|e| {
                ConfigError::Serialization(format!("failed to serialize config: {e}"))
            })?;
            writer.flush()?;
            writer.get_ref().sync_all()?;
        }

        fs::rename(&tmp_path, &self.path)?;

        tracing::debug!(path = %self.path.display(), "saved config");
        Ok(())
    }
}

impl<T> fmt::Debug for JsonStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonStore")
            .field("path", &self.path)
            .finish()
    }
}

impl<T> Clone for JsonStore<T> {
    fn clone(&self) -> Self {
        Self::new(&self.path)
    }
}
