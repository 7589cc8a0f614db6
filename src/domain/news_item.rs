//! News item model

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Format used for stored timestamps (millisecond precision, UTC, `Z` suffix)
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// One news post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(with = "iso_date")]
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl NewsItem {
    /// Create a new item with a fresh id and the current time as its date.
    ///
    /// Title and content are trimmed; an empty image counts as no image.
    pub fn new(title: &str, content: &str, image: Option<String>) -> Self {
        NewsItem {
            id: new_id(),
            title: title.trim().to_string(),
            content: content.trim().to_string(),
            date: now(),
            image: image.filter(|s| !s.is_empty()),
        }
    }

    /// Replace title and content and apply an image update.
    /// `id` and `date` are never touched.
    pub fn apply_edit(&mut self, title: &str, content: &str, image: ImageUpdate) {
        self.title = title.trim().to_string();
        self.content = content.trim().to_string();
        image.apply(&mut self.image);
    }

    /// Stored representation of the date
    pub fn date_string(&self) -> String {
        format_date(&self.date)
    }
}

/// How an edit treats the image field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageUpdate {
    /// Leave the current image as it is
    #[default]
    Keep,
    /// Remove the image
    Clear,
    /// Replace the image. An empty string behaves like `Clear`.
    Set(String),
}

impl ImageUpdate {
    /// Interpret an explicitly passed nullable image: `None` clears, `Some` sets.
    pub fn from_nullable(image: Option<String>) -> Self {
        match image {
            Some(s) => ImageUpdate::Set(s),
            None => ImageUpdate::Clear,
        }
    }

    pub fn apply(self, image: &mut Option<String>) {
        match self {
            ImageUpdate::Keep => {}
            ImageUpdate::Clear => *image = None,
            ImageUpdate::Set(s) if s.is_empty() => *image = None,
            ImageUpdate::Set(s) => *image = Some(s),
        }
    }
}

/// Generate a collision-free identifier
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current time at the precision dates are stored with
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}

mod iso_date {
    use super::format_date;
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date(date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|d| d.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}
