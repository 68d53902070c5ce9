//! Registry configuration, read from an optional TOML file.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name the binary looks for in its working directory.
pub const CONFIG_FILENAME: &str = "agenda.toml";

/// How `cancel_participation` picks the records to drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelMode {
    /// Drop every participation whose event name or user name matches.
    ///
    /// Historical behavior of the data files; also removes other users'
    /// participations in the same event and the user's other events.
    #[default]
    AnyField,
    /// Drop only participations matching both names.
    ExactPair,
}

/// Where the data files live and how the registry behaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Directory holding the three data files.
    pub data_dir: PathBuf,
    /// User file name inside `data_dir`.
    pub users_file: String,
    /// Event file name inside `data_dir`.
    pub events_file: String,
    /// Participation file name inside `data_dir`.
    pub participations_file: String,
    /// Cancellation filter.
    pub cancel_mode: CancelMode,
    /// `tracing` filter directive, such as `info` or `agenda=debug`.
    pub log_level: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            users_file: "usuarios.data".to_string(),
            events_file: "events.data".to_string(),
            participations_file: "participacao.data".to_string(),
            cancel_mode: CancelMode::AnyField,
            log_level: "info".to_string(),
        }
    }
}

/// Failure to read or parse a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The file is not valid TOML for [`RegistryConfig`].
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        /// Config file path.
        path: PathBuf,
        /// Underlying TOML failure.
        #[source]
        source: toml::de::Error,
    },
}

impl RegistryConfig {
    /// Default configuration rooted at `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: dir.into(),
            ..Self::default()
        }
    }

    /// Reads `path`; a missing file yields [`RegistryConfig::default`].
    ///
    /// Keys left out of the file keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Full path of the user file.
    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join(&self.users_file)
    }

    /// Full path of the event file.
    pub fn events_path(&self) -> PathBuf {
        self.data_dir.join(&self.events_file)
    }

    /// Full path of the participation file.
    pub fn participations_path(&self) -> PathBuf {
        self.data_dir.join(&self.participations_file)
    }
}
