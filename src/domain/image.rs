//! Data URL helpers for attached images

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

fn header_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^data:(?P<mime>[\w.+-]+/[\w.+-]+)?(?P<params>(?:;[^;,]+)*?)(?P<base64>;base64)?,")
            .unwrap()
    })
}

/// Summary of a data URL's header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrlInfo {
    pub mime: String,
    pub base64: bool,
    /// Size of the payload after decoding, in bytes
    pub payload_len: usize,
}

/// Encode raw bytes as a `data:<mime>;base64,` URL
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Guess a mime type from a file extension
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "ico" => "image/x-icon",
        "avif" => "image/avif",
        _ => return None,
    };
    Some(mime)
}

/// Inspect a data URL. Returns `None` if the value doesn't look like one.
pub fn inspect_data_url(url: &str) -> Option<DataUrlInfo> {
    let caps = header_regex().captures(url)?;
    let header_len = caps.get(0)?.end();
    let payload = &url[header_len..];
    let base64 = caps.name("base64").is_some();

    let payload_len = if base64 {
        // Padding-aware decoded size; avoids decoding large payloads
        let trimmed = payload.trim_end_matches('=');
        trimmed.len() * 3 / 4
    } else {
        payload.len()
    };

    Some(DataUrlInfo {
        mime: caps
            .name("mime")
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| "text/plain".to_string()),
        base64,
        payload_len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_data_url() {
        assert_eq!(
            encode_data_url("image/png", b"abc"),
            "data:image/png;base64,YWJj"
        );
    }

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("a/cat.PNG")), Some("image/png"));
        assert_eq!(mime_for_path(Path::new("photo.jpeg")), Some("image/jpeg"));
        assert_eq!(mime_for_path(Path::new("icon.svg")), Some("image/svg+xml"));
        assert_eq!(mime_for_path(Path::new("notes.txt")), None);
        assert_eq!(mime_for_path(Path::new("no_extension")), None);
    }

    #[test]
    fn test_inspect_base64_url() {
        let info = inspect_data_url("data:image/png;base64,YWJj").unwrap();
        assert_eq!(info.mime, "image/png");
        assert!(info.base64);
        assert_eq!(info.payload_len, 3);
    }

    #[test]
    fn test_inspect_padded_payload() {
        let url = encode_data_url("image/gif", b"abcd");
        let info = inspect_data_url(&url).unwrap();
        assert_eq!(info.payload_len, 4);
    }

    #[test]
    fn test_inspect_with_params() {
        let info = inspect_data_url("data:image/svg+xml;charset=utf-8,<svg/>").unwrap();
        assert_eq!(info.mime, "image/svg+xml");
        assert!(!info.base64);
        assert_eq!(info.payload_len, 6);
    }

    #[test]
    fn test_inspect_default_mime() {
        let info = inspect_data_url("data:,hello").unwrap();
        assert_eq!(info.mime, "text/plain");
    }

    #[test]
    fn test_inspect_rejects_non_data_url() {
        assert!(inspect_data_url("https://example.com/cat.png").is_none());
        assert!(inspect_data_url("data:image/png;base64").is_none());
    }
}
