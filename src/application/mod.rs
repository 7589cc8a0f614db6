//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod migrate_storage;
pub mod news_store;
pub mod session;

pub use migrate_storage::MigrationSummary;
pub use news_store::NewsStore;
pub use session::BoardSession;
