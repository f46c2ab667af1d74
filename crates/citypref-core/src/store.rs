// crates/citypref-core/src/store.rs

//! # Persisted Preference Gateway
//!
//! A tiny string key/value contract. Reads collapse every failure into
//! `None`; writes are best-effort and never report errors. One attempt per
//! call, no retries.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use log::debug;

use crate::error::{PrefError, Result};
use crate::text::non_empty;

/// Default key the city preference is stored under.
pub const CITY_KEY: &str = "city";

/// Client-scoped string storage.
pub trait PreferenceStore: Send + Sync {
    /// Returns the stored value, or `None` if it is absent, unreadable or
    /// blank.
    fn read(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, silently giving up on failure.
    fn write(&self, key: &str, value: &str);

    /// Drops `key`. Best-effort like [`PreferenceStore::write`].
    fn remove(&self, key: &str);
}

/// In-process store. Lives as long as the value does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with one entry.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.write(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        let values = self.values.read().ok()?;
        values.get(key).and_then(|v| non_empty(v)).map(str::to_owned)
    }

    fn write(&self, key: &str, value: &str) {
        match self.values.write() {
            Ok(mut values) => {
                values.insert(key.to_owned(), value.to_owned());
            }
            Err(_) => debug!("memory store poisoned, dropping write for `{key}`"),
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.write() {
            values.remove(key);
        }
    }
}

/// One plain-text file per key inside a directory.
///
/// Values are written as bare strings, not JSON, so the files stay readable
/// and interchangeable with what a browser keeps in `localStorage`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<platform data dir>/citypref`, falling back to the working directory.
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("citypref")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            && key != "."
            && key != "..";
        if !valid {
            return Err(PrefError::Storage(format!("unsupported key `{key}`")));
        }
        Ok(self.dir.join(key))
    }

    fn try_read(&self, key: &str) -> Result<String> {
        let path = self.path_for(key)?;
        Ok(fs::read_to_string(path)?)
    }

    fn try_write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(path, value)?;
        Ok(())
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(Self::default_dir())
    }
}

impl PreferenceStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        match self.try_read(key) {
            Ok(raw) => non_empty(&raw).map(str::to_owned),
            Err(e) => {
                debug!("no stored value for `{key}`: {e}");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.try_write(key, value) {
            debug!("ignoring failed write for `{key}`: {e}");
        }
    }

    fn remove(&self, key: &str) {
        let removed = self
            .path_for(key)
            .and_then(|p| fs::remove_file(p).map_err(PrefError::from));
        if let Err(e) = removed {
            debug!("ignoring failed remove for `{key}`: {e}");
        }
    }
}
