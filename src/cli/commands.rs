//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "newsboard")]
#[command(about = "Local news board", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new board
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Publish a news item
    Add {
        title: String,

        content: String,

        /// Attach an image file
        #[arg(long, value_name = "FILE")]
        image: Option<PathBuf>,
    },

    /// Change the title, content or image of a news item
    Edit {
        /// Item id or unique id prefix
        id: String,

        title: String,

        content: String,

        /// Replace the image with this file
        #[arg(long, value_name = "FILE", conflicts_with = "clear_image")]
        image: Option<PathBuf>,

        /// Remove the attached image
        #[arg(long)]
        clear_image: bool,
    },

    /// Delete a news item
    Delete {
        /// Item id or unique id prefix
        id: String,
    },

    /// List news items
    List {
        /// Show oldest items first
        #[arg(long, conflicts_with = "newest_first")]
        oldest_first: bool,

        /// Show newest items first
        #[arg(long)]
        newest_first: bool,

        /// Show full content instead of a preview
        #[arg(short, long)]
        full: bool,
    },

    /// Show one news item in full
    Show {
        /// Item id or unique id prefix
        id: String,
    },

    /// Rewrite stored news in the current format
    Migrate,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
