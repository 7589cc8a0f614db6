//! News store: the in-memory collection and its synchronization with storage.
//!
//! Every mutation updates memory first and then persists the full collection.
//! Missing targets on edit/delete are silent no-ops.

use crate::domain::{migrate_all, ImageUpdate, NewsItem};
use crate::error::{NewsboardError, Result};
use crate::infrastructure::NewsStorage;

pub struct NewsStore<S: NewsStorage> {
    storage: S,
    items: Vec<NewsItem>,
}

impl<S: NewsStorage> NewsStore<S> {
    /// Load and migrate the stored collection. Nothing is written back until
    /// the first mutation.
    pub fn initialize(storage: S) -> Self {
        let items = migrate_all(storage.load());
        tracing::debug!(count = items.len(), "News loaded");
        NewsStore { storage, items }
    }

    /// Like [`NewsStore::initialize`], but immediately persists the migrated form.
    pub fn initialize_normalized(storage: S) -> Self {
        let store = Self::initialize(storage);
        store.persist();
        store
    }

    /// Items in insertion order
    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&NewsItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items whose id starts with `prefix`
    pub fn find_by_prefix(&self, prefix: &str) -> Vec<&NewsItem> {
        self.items
            .iter()
            .filter(|item| item.id.starts_with(prefix))
            .collect()
    }

    /// Resolve a full id or a unique id prefix
    pub fn resolve_id(&self, id_or_prefix: &str) -> Result<&NewsItem> {
        if let Some(item) = self.get(id_or_prefix) {
            return Ok(item);
        }

        if id_or_prefix.is_empty() {
            return Err(NewsboardError::NewsNotFound(id_or_prefix.to_string()));
        }

        let matches = self.find_by_prefix(id_or_prefix);
        match matches.as_slice() {
            [item] => Ok(*item),
            [] => Err(NewsboardError::NewsNotFound(id_or_prefix.to_string())),
            _ => Err(NewsboardError::AmbiguousId {
                prefix: id_or_prefix.to_string(),
                matches: matches.len(),
            }),
        }
    }

    /// Append a new item and persist. Returns the created item.
    pub fn add(&mut self, title: &str, content: &str, image: Option<String>) -> NewsItem {
        let item = NewsItem::new(title, content, image);
        tracing::debug!(id = %item.id, "Adding news item");
        self.items.push(item.clone());
        self.persist();
        item
    }

    /// Update title, content and image of an item. Returns false if no item has `id`.
    pub fn edit(&mut self, id: &str, title: &str, content: &str, image: ImageUpdate) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            tracing::debug!(id, "Edit target not found");
            return false;
        };

        item.apply_edit(title, content, image);
        tracing::debug!(id, "Edited news item");
        self.persist();
        true
    }

    /// Remove an item. Returns false if no item has `id`.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);

        if self.items.len() == before {
            tracing::debug!(id, "Delete target not found");
            return false;
        }

        tracing::debug!(id, "Deleted news item");
        self.persist();
        true
    }

    /// Write the full collection to storage
    pub fn persist(&self) {
        self.storage.save(&self.items);
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
