//! CLI layer - Command-line interface

pub mod commands;
pub mod input;
pub mod output;

pub use commands::{Cli, Commands};
pub use input::require_post_text;
pub use output::{format_news_item, format_news_list};
