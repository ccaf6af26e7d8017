//! Settings and storage errors.

use std::io;
use thiserror::Error;

/// Failure to read, write or validate the config file.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    LoadError(String),

    #[error("Failed to save settings: {0}")]
    SaveError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    /// The file parsed but a value is unusable.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// A config value rejected by `Config::validate` or path resolution.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Only `.toml` and `.json` are understood.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("Value out of range for '{key}': {value}")]
    ValueOutOfRange { key: String, value: String },

    #[error("Empty configuration value: {0}")]
    Empty(String),

    /// No platform config directory (e.g. no `$HOME`).
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),
}

/// Failure of a durable store backend.
///
/// The session treats read failures as "nothing stored" and retries write
/// failures, so callers rarely see these directly.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The store file exists but is not a store.
    #[error("Corrupted store: {0}")]
    Corrupted(String),

    /// The backing location cannot be written at all.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

pub type PersistenceResult<T> = Result<T, PersistenceError>;
