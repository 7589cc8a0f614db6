//! Error types for newsboard

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the newsboard front-end and board layer.
///
/// The news store itself never fails; these errors come from locating the
/// board, reading configuration, and resolving user input.
#[derive(Debug, Error)]
pub enum NewsboardError {
    #[error("Not a newsboard directory: {0}")]
    NotBoardDirectory(PathBuf),

    #[error("News item not found: {0}")]
    NewsNotFound(String),

    #[error("Ambiguous id prefix '{prefix}' matches {matches} items")]
    AmbiguousId { prefix: String, matches: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Image error: {0}")]
    Image(String),

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NewsboardError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NewsboardError::NotBoardDirectory(_) => 2,
            NewsboardError::NewsNotFound(_) => 3,
            NewsboardError::AmbiguousId { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            NewsboardError::NotBoardDirectory(path) => {
                format!(
                    "Not a newsboard directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'newsboard init' in this directory to create a new board\n\
                    • Navigate to an existing board directory\n\
                    • Set NEWSBOARD_ROOT environment variable to your board path",
                    path.display()
                )
            }
            NewsboardError::NewsNotFound(id) => {
                format!(
                    "No news item with id '{}'\n\n\
                    Suggestions:\n\
                    • Use 'newsboard list' to see item ids\n\
                    • Any unique prefix of an id is accepted",
                    id
                )
            }
            NewsboardError::AmbiguousId { prefix, matches } => {
                format!(
                    "Id prefix '{}' matches {} items\n\n\
                    Suggestions:\n\
                    • Type more characters of the id\n\
                    • Use 'newsboard list' to see full ids",
                    prefix, matches
                )
            }
            NewsboardError::Image(msg) => {
                format!(
                    "{}\n\n\
                    Supported image types: png, jpg, jpeg, gif, webp, svg, bmp, ico, avif",
                    msg
                )
            }
            NewsboardError::Config(msg) => {
                if msg.contains("Invalid order") {
                    format!(
                        "{}\n\n\
                        Valid orders: newest, oldest\n\
                        Example: newsboard config order oldest",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using NewsboardError
pub type Result<T> = std::result::Result<T, NewsboardError>;
