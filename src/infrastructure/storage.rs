//! Key-value storage and the news storage adapter

use crate::domain::{NewsItem, RawRecord};
use crate::error::{NewsboardError, Result};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

/// Key under which the news collection is stored
pub const STORAGE_KEY: &str = "news";

/// A synchronous string key-value store
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// Disk-backed store: one `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: PathBuf) -> Self {
        FileKeyValueStore { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(NewsboardError::Io(e)),
        }
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let path = self.path_for(key);
        let tmp_path = self
            .dir
            .join(format!("{}.json.tmp-{}", key, std::process::id()));

        fs::write(&tmp_path, value)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

/// Process-local store. Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Persistence capability the news store depends on
pub trait NewsStorage {
    /// Load the stored collection. Absent or unreadable data yields an empty list.
    fn load(&self) -> Vec<RawRecord>;

    /// Replace the stored collection
    fn save(&self, items: &[NewsItem]);
}

/// Stores the whole collection as one JSON array under [`STORAGE_KEY`].
///
/// A detached adapter has no backing store: loads are empty and saves do
/// nothing. Storage failures are logged and never reach the caller.
pub struct StorageAdapter {
    store: Option<Box<dyn KeyValueStore>>,
}

impl StorageAdapter {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        StorageAdapter {
            store: Some(Box::new(store)),
        }
    }

    /// Adapter without a backing store
    pub fn detached() -> Self {
        StorageAdapter { store: None }
    }

    /// Raw stored value, if one exists and can be read
    pub fn load_raw(&self) -> Option<String> {
        let store = self.store.as_ref()?;
        match store.get_item(STORAGE_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored news, starting empty");
                None
            }
        }
    }
}

impl NewsStorage for StorageAdapter {
    fn load(&self) -> Vec<RawRecord> {
        self.load_raw()
            .map(|raw| decode_collection(&raw))
            .unwrap_or_default()
    }

    fn save(&self, items: &[NewsItem]) {
        let Some(store) = self.store.as_ref() else {
            return;
        };

        let encoded = match serde_json::to_string(items) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize news");
                return;
            }
        };

        match store.set_item(STORAGE_KEY, &encoded) {
            Ok(()) => tracing::debug!(count = items.len(), "News saved"),
            Err(e) => tracing::warn!(error = %e, "Failed to save news, changes are kept in memory only"),
        }
    }
}

/// Decode a stored collection.
///
/// Anything other than a JSON array counts as corrupt and yields nothing.
/// Array elements that are not objects are skipped.
pub fn decode_collection(raw: &str) -> Vec<RawRecord> {
    let elements = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(elements)) => elements,
        Ok(_) => {
            tracing::warn!("Stored news is not a list, ignoring it");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(error = %e, "Stored news is not valid JSON, ignoring it");
            return Vec::new();
        }
    };

    elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| {
            if !element.is_object() {
                tracing::warn!(index, "Skipping stored news entry that is not an object");
                return None;
            }
            serde_json::from_value(element).ok()
        })
        .collect()
}
