//! Migrate stored news to the current record shape in place

use crate::application::NewsStore;
use crate::error::Result;
use crate::infrastructure::{BoardRepository, FileSystemRepository};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationSummary {
    /// Items in the migrated collection
    pub items: usize,
    /// Whether the stored value changed
    pub rewritten: bool,
}

/// Load, migrate and write back the stored collection.
///
/// Storage is only touched when the normalized form differs from what is stored.
pub fn migrate_storage(repository: &FileSystemRepository) -> Result<MigrationSummary> {
    // Fail early on a directory that isn't a board
    repository.load_config()?;

    let storage = repository.storage();
    let before = storage.load_raw();
    let store = NewsStore::initialize(storage);

    let normalized = serde_json::to_string(store.items())?;
    let rewritten = match before {
        Some(raw) => raw != normalized,
        None => !store.is_empty(),
    };

    if rewritten {
        store.persist();
    }

    tracing::info!(items = store.len(), rewritten, "Stored news migrated");

    Ok(MigrationSummary {
        items: store.len(),
        rewritten,
    })
}
