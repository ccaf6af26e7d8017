//! Durable state storage
//!
//! A durable store is a set of named slots holding serialized blobs, the
//! desktop counterpart of a browser's local storage. The session writes the
//! whole layout state into a single slot after every transition.
//!
//! Backends:
//! - `MemoryStore` keeps slots in memory (tests, ephemeral sessions)
//! - `FileStore` keeps slots in one JSON file, written atomically

use crate::error::{PersistenceError, PersistenceResult};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Slot holding the layout state.
pub const STATE_STORAGE_KEY: &str = "landVisualizerState";

/// Pluggable durable storage.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait DurableStore: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Read the blob stored under `key`; `None` if the slot is empty.
    fn read(&self, key: &str) -> PersistenceResult<Option<String>>;

    /// Replace the blob stored under `key`.
    fn write(&self, key: &str, blob: &str) -> PersistenceResult<()>;

    /// Empty the slot `key`.
    fn remove(&self, key: &str) -> PersistenceResult<()>;
}

/// In-memory storage backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory store with one pre-filled slot.
    pub fn with_entry(key: impl Into<String>, blob: impl Into<String>) -> Self {
        let store = Self::new();
        store.slots.write().insert(key.into(), blob.into());
        store
    }

    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.read().is_empty()
    }
}

impl DurableStore for MemoryStore {
    fn name(&self) -> &str {
        "MemoryStore"
    }

    fn read(&self, key: &str) -> PersistenceResult<Option<String>> {
        Ok(self.slots.read().get(key).cloned())
    }

    fn write(&self, key: &str, blob: &str) -> PersistenceResult<()> {
        self.slots.write().insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> PersistenceResult<()> {
        self.slots.write().remove(key);
        Ok(())
    }
}

/// File format of the store.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    /// Format version for future migrations.
    format_version: u32,
    entries: BTreeMap<String, String>,
}

impl StoreFile {
    const FORMAT_VERSION: u32 = 1;

    fn new() -> Self {
        Self {
            format_version: Self::FORMAT_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

/// File-based storage backend.
///
/// # File Format
///
/// ```json
/// {
///   "format_version": 1,
///   "entries": {
///     "landVisualizerState": "{\"landWidth\":100,...}"
///   }
/// }
/// ```
///
/// Writes go to `{path}.tmp` first and are renamed over `{path}`, so a
/// crash mid-write never leaves a half-written store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a file store at the given path. The file is created on first
    /// write.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone();
        tmp.set_extension("json.tmp");
        tmp
    }

    fn load(&self) -> PersistenceResult<StoreFile> {
        if !self.path.exists() {
            return Ok(StoreFile::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let file: StoreFile = serde_json::from_str(&content)
            .map_err(|e| PersistenceError::Corrupted(format!("{}: {}", self.path.display(), e)))?;

        if file.format_version != StoreFile::FORMAT_VERSION {
            tracing::warn!(
                "Store format version {} (expected {}), ignoring stored state",
                file.format_version,
                StoreFile::FORMAT_VERSION
            );
            return Ok(StoreFile::new());
        }

        Ok(file)
    }

    /// Like `load`, but a corrupted file is replaced instead of blocking
    /// every future write.
    fn load_for_update(&self) -> PersistenceResult<StoreFile> {
        match self.load() {
            Err(PersistenceError::Corrupted(reason)) => {
                tracing::warn!("Overwriting corrupted store: {}", reason);
                Ok(StoreFile::new())
            }
            other => other,
        }
    }

    fn save(&self, file: &StoreFile) -> PersistenceResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| unavailable(parent, e))?;
            }
        }

        let tmp_path = self.temp_path();
        {
            let out = File::create(&tmp_path).map_err(|e| unavailable(&tmp_path, e))?;
            let mut writer = BufWriter::new(out);
            serde_json::to_writer_pretty(&mut writer, file)?;
            writer.flush()?;
            writer.get_ref().sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;

        tracing::debug!(
            "Saved {} store entries to {}",
            file.entries.len(),
            self.path.display()
        );
        Ok(())
    }
}

fn unavailable(path: &Path, err: std::io::Error) -> PersistenceError {
    PersistenceError::Unavailable(format!("{}: {}", path.display(), err))
}

impl DurableStore for FileStore {
    fn name(&self) -> &str {
        "FileStore"
    }

    fn read(&self, key: &str) -> PersistenceResult<Option<String>> {
        Ok(self.load()?.entries.remove(key))
    }

    fn write(&self, key: &str, blob: &str) -> PersistenceResult<()> {
        let mut file = self.load_for_update()?;
        file.entries.insert(key.to_string(), blob.to_string());
        self.save(&file)
    }

    fn remove(&self, key: &str) -> PersistenceResult<()> {
        let mut file = self.load_for_update()?;
        if file.entries.remove(key).is_some() {
            self.save(&file)?;
        }
        Ok(())
    }
}
