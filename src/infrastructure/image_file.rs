//! Reading image files into data URLs

use crate::domain::image::{encode_data_url, mime_for_path};
use crate::error::{NewsboardError, Result};
use std::fs;
use std::path::Path;

/// Read an image file and encode it as a `data:` URL
pub fn read_image_as_data_url(path: &Path) -> Result<String> {
    let mime = mime_for_path(path).ok_or_else(|| {
        NewsboardError::Image(format!("Unsupported image type: {}", path.display()))
    })?;

    let bytes = fs::read(path).map_err(|e| {
        NewsboardError::Image(format!("Failed to read image {}: {}", path.display(), e))
    })?;

    if bytes.is_empty() {
        return Err(NewsboardError::Image(format!(
            "Image file is empty: {}",
            path.display()
        )));
    }

    Ok(encode_data_url(mime, &bytes))
}
