//! Initialize board use case

use crate::error::Result;
use crate::infrastructure::{BoardRepository, Config, FileSystemRepository};
use std::fs;
use std::path::Path;

/// Initialize a new board at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    // Initialize .newsboard directory
    repo.initialize()?;

    repo.save_config(&Config::new())?;

    tracing::info!(path = %path.display(), "Board initialized");
    println!("Initialized newsboard at {}", path.display());

    Ok(())
}
