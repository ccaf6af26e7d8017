//! PlotKit Settings Crate
//!
//! Handles application configuration and the durable store that keeps the
//! layout state between sessions.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{Config, RenderSettings, ShareSettings, StorageSettings, SyncSettings};
pub use error::{ConfigError, PersistenceError, PersistenceResult, SettingsError, SettingsResult};
pub use persistence::{DurableStore, FileStore, MemoryStore, STATE_STORAGE_KEY};
