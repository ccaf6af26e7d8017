//! Configuration and settings management for PlotKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Storage (where the durable state lives)
//! - Render (pixels per meter and the mobile breakpoint)
//! - Share (base location and query parameter of shareable links)
//! - Sync (commit retry policy)

use crate::error::{ConfigError, SettingsError, SettingsResult};
use crate::persistence::STATE_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "plotkit";

/// Durable storage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// File backing the durable store
    pub state_file: PathBuf,
    /// Slot holding the serialized state
    pub key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            state_file: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
                .join("state.json"),
            key: STATE_STORAGE_KEY.to_string(),
        }
    }
}

/// Rendering settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Pixels per meter on wide viewports
    pub desktop_scale: f64,
    /// Pixels per meter on narrow viewports
    pub mobile_scale: f64,
    /// Viewports at most this wide use the mobile scale
    pub mobile_breakpoint_px: u32,
    /// Viewport width assumed when rendering off-screen
    pub viewport_width_px: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            desktop_scale: 5.0,
            mobile_scale: 3.0,
            mobile_breakpoint_px: 768,
            viewport_width_px: 1280,
        }
    }
}

/// Shareable link settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareSettings {
    /// Location the application is served from
    pub base_url: String,
    /// Query parameter carrying the encoded state
    pub param: String,
}

impl Default for ShareSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/".to_string(),
            param: "state".to_string(),
        }
    }
}

/// Commit settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncSettings {
    /// Extra attempts after a failed durable write
    pub commit_retries: u32,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self { commit_retries: 2 }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageSettings,
    pub render: RenderSettings,
    pub share: ShareSettings,
    pub sync: SyncSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config file location, e.g. `~/.config/plotkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join("config.toml"))
            .ok_or_else(|| {
                ConfigError::UnsupportedPlatform("no config directory".to_string()).into()
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from `path` when it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.storage.key.trim().is_empty() {
            return Err(ConfigError::Empty("storage.key".to_string()).into());
        }

        for (key, value) in [
            ("render.desktop_scale", self.render.desktop_scale),
            ("render.mobile_scale", self.render.mobile_scale),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValueOutOfRange {
                    key: key.to_string(),
                    value: value.to_string(),
                }
                .into());
            }
        }

        if self.share.param.trim().is_empty() {
            return Err(ConfigError::Empty("share.param".to_string()).into());
        }

        if self.share.base_url.trim().is_empty() {
            return Err(ConfigError::Empty("share.base_url".to_string()).into());
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )
            .into()),
        }
    }
}
