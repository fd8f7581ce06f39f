// crates/travelmap-core/src/prefs.rs

//! # Durable Preference Storage
//!
//! The store persists two named entries: the continent list expand/collapse
//! preference and the serialized id → status mapping. [`PrefStore`] is the
//! seam; [`FilePrefs`] keeps everything in one JSON document on disk and
//! [`MemoryPrefs`] backs tests and ephemeral runs.
//!
//! Failure policy: reads degrade to defaults, writes are best-effort. The
//! in-memory copy stays authoritative for the session either way.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Entry name for the continent list expand/collapse preference.
pub const KEY_CONTINENTS_EXPANDED: &str = "continents_expanded";

/// Entry name for the serialized id → status mapping.
pub const KEY_COUNTRY_STATUSES: &str = "country_statuses";

/// Named-entry key-value storage.
pub trait PrefStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<Value>;

    /// Stores `value` under `key`, overwriting unconditionally.
    fn set(&mut self, key: &str, value: Value);

    fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| v.as_bool())
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.set(key, Value::Bool(value));
    }
}

/// Preference storage backed by a single JSON document on disk.
///
/// The whole document is read once at open and rewritten on every set.
pub struct FilePrefs {
    path: PathBuf,
    entries: BTreeMap<String, Value>,
}

impl FilePrefs {
    /// Opens the store at `path`. A missing or unreadable document yields
    /// empty storage, never an error.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(entries) => entries,
                Err(err) => {
                    debug!(path = %path.display(), %err, "discarding unreadable preference file");
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) {
        let encoded = match serde_json::to_vec_pretty(&self.entries) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(%err, "failed to encode preferences");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, encoded) {
            warn!(path = %self.path.display(), %err, "failed to write preferences");
        }
    }
}

impl PrefStore for FilePrefs {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_string(), value);
        self.persist();
    }
}

/// In-process preference storage. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    entries: BTreeMap<String, Value>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_string(), value);
    }
}
