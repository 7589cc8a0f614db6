//! Open a board for reading and editing news

use crate::application::NewsStore;
use crate::error::Result;
use crate::infrastructure::{BoardRepository, Config, FileSystemRepository, StorageAdapter};

/// A loaded board: its configuration and news store
pub struct BoardSession {
    pub config: Config,
    pub store: NewsStore<StorageAdapter>,
}

/// Load config and news from a board.
///
/// With `normalize_on_load` set, the migrated collection is written back right away.
pub fn open(repository: &FileSystemRepository) -> Result<BoardSession> {
    let config = repository.load_config()?;
    let storage = repository.storage();

    let store = if config.normalize_on_load {
        NewsStore::initialize_normalized(storage)
    } else {
        NewsStore::initialize(storage)
    };

    Ok(BoardSession { config, store })
}
