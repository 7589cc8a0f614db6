//! File system repository for boards

use crate::error::{NewsboardError, Result};
use crate::infrastructure::config::BOARD_DIR;
use crate::infrastructure::storage::{FileKeyValueStore, StorageAdapter};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for board operations
pub trait BoardRepository {
    /// Load configuration from .newsboard/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .newsboard/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .newsboard directory exists
    fn is_initialized(&self) -> bool;

    /// Create .newsboard directory structure
    fn initialize(&self) -> Result<()>;

    /// Storage adapter over this board's key-value store
    fn storage(&self) -> StorageAdapter;
}

/// File system implementation of BoardRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover board root by walking up from current directory
    /// First checks NEWSBOARD_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("NEWSBOARD_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_board_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(NewsboardError::Config(format!(
                    "NEWSBOARD_ROOT is set to '{}' but no .newsboard directory found. \
                    Run 'newsboard init' in that directory or unset NEWSBOARD_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover board root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_board_dir(dir))
            .map(|dir| FileSystemRepository::new(dir.to_path_buf()))
            .ok_or_else(|| NewsboardError::NotBoardDirectory(start.to_path_buf()))
    }

    /// Directory holding the key-value store files
    pub fn storage_dir(&self) -> PathBuf {
        self.root.join(BOARD_DIR).join("storage")
    }

    fn has_board_dir(path: &Path) -> bool {
        path.join(BOARD_DIR).is_dir()
    }
}

impl BoardRepository for FileSystemRepository {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_board_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let board_dir = self.root.join(BOARD_DIR);

        if board_dir.exists() {
            return Err(NewsboardError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&board_dir)?;
        fs::create_dir(self.storage_dir())?;
        Ok(())
    }

    fn storage(&self) -> StorageAdapter {
        StorageAdapter::new(FileKeyValueStore::new(self.storage_dir()))
    }
}
