//! Checks on text typed at the command line

use crate::error::{NewsboardError, Result};

/// Reject a title or content that is empty once trimmed.
///
/// The store accepts any text; a blank post from the command line is a typo.
pub fn require_post_text(title: &str, content: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(NewsboardError::EmptyField("title"));
    }
    if content.trim().is_empty() {
        return Err(NewsboardError::EmptyField("content"));
    }
    Ok(())
}
