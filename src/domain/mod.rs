//! Domain layer - News model, legacy migration and display rules

pub mod image;
pub mod migration;
pub mod news_item;
pub mod order;

pub use migration::{migrate_all, migrate_record, RawRecord};
pub use news_item::{ImageUpdate, NewsItem};
pub use order::DisplayOrder;
