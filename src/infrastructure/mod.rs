//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod image_file;
pub mod repository;
pub mod storage;

pub use config::Config;
pub use image_file::read_image_as_data_url;
pub use repository::{BoardRepository, FileSystemRepository};
pub use storage::{
    FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, NewsStorage, StorageAdapter,
    STORAGE_KEY,
};
