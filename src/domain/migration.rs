//! Legacy record migration.
//!
//! Stored collections have changed shape over time: ids used to be numbers,
//! dates were sometimes missing or malformed. Records are read as loosely typed
//! `RawRecord`s and converted into `NewsItem`s by a total function.
//!
//! This module is I/O-free.

use super::news_item::{new_id, now, NewsItem};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// A persisted record of unknown vintage. Every field may be absent, null, or
/// of an unexpected type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Value>,
}

impl From<&NewsItem> for RawRecord {
    fn from(item: &NewsItem) -> Self {
        RawRecord {
            id: Some(Value::String(item.id.clone())),
            title: Some(Value::String(item.title.clone())),
            content: Some(Value::String(item.content.clone())),
            date: Some(Value::String(item.date_string())),
            image: item.image.clone().map(Value::String),
        }
    }
}

/// Migrate a single record. Never fails.
pub fn migrate_record(raw: RawRecord) -> NewsItem {
    let id = raw
        .id
        .as_ref()
        .and_then(coerce_to_string)
        .filter(|id| !id.is_empty())
        .unwrap_or_else(new_id);

    let date = raw
        .date
        .as_ref()
        .and_then(parse_timestamp)
        .unwrap_or_else(now);

    let text = |value: Option<&Value>| {
        value
            .and_then(coerce_to_string)
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    };

    let image = match raw.image {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    };

    NewsItem {
        id,
        title: text(raw.title.as_ref()),
        content: text(raw.content.as_ref()),
        date,
        image,
    }
}

/// Migrate a whole collection, preserving order.
///
/// A record whose id was already claimed by an earlier record gets a fresh id.
pub fn migrate_all(records: Vec<RawRecord>) -> Vec<NewsItem> {
    let mut seen = HashSet::with_capacity(records.len());

    records
        .into_iter()
        .map(|raw| {
            let mut item = migrate_record(raw);
            while !seen.insert(item.id.clone()) {
                tracing::debug!(id = %item.id, "Duplicate id in stored news, assigning a new one");
                item.id = new_id();
            }
            item
        })
        .collect()
}

/// String form of a loosely typed value; `None` for null.
pub fn coerce_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Parse a stored timestamp.
///
/// Accepts RFC 3339, naive date-times and bare dates (read as UTC), RFC 2822,
/// and numbers as epoch milliseconds. Years outside 0000-9999 are rejected;
/// they have no four-digit ISO-8601 form.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    let parsed = match value {
        Value::String(s) => parse_timestamp_str(s.trim()),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .and_then(DateTime::from_timestamp_millis),
        _ => None,
    };

    parsed
        .filter(|d| (0..=9999).contains(&d.year()))
        .map(|d| d.trunc_subsecs(3))
}

fn parse_timestamp_str(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }

    if let Ok(d) = DateTime::parse_from_rfc3339(s) {
        return Some(d.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    DateTime::parse_from_rfc2822(s)
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn raw(value: Value) -> RawRecord {
        serde_json::from_value(value).unwrap()
    }

    fn is_recent(date: DateTime<Utc>) -> bool {
        let delta = Utc::now() - date;
        delta.num_seconds().abs() < 5
    }

    #[test]
    fn test_legacy_numeric_id_and_bad_date() {
        let item = migrate_record(raw(json!({
            "id": 42,
            "title": "Hi",
            "content": "Bye",
            "date": "not-a-date"
        })));

        assert_eq!(item.id, "42");
        assert_eq!(item.title, "Hi");
        assert_eq!(item.content, "Bye");
        assert!(is_recent(item.date));
        assert_eq!(item.image, None);
    }

    #[test]
    fn test_missing_fields_default() {
        let item = migrate_record(raw(json!({})));
        assert!(!item.id.is_empty());
        assert_eq!(item.title, "");
        assert_eq!(item.content, "");
        assert!(is_recent(item.date));
        assert_eq!(item.image, None);
    }

    #[test]
    fn test_null_fields_default() {
        let item = migrate_record(raw(json!({
            "id": null,
            "title": null,
            "content": null,
            "date": null,
            "image": null
        })));
        assert!(!item.id.is_empty());
        assert_eq!(item.title, "");
        assert_eq!(item.content, "");
        assert_eq!(item.image, None);
    }

    #[test]
    fn test_string_id_kept() {
        let item = migrate_record(raw(json!({ "id": "abc-123" })));
        assert_eq!(item.id, "abc-123");
    }

    #[test]
    fn test_empty_string_id_replaced() {
        let item = migrate_record(raw(json!({ "id": "" })));
        assert!(!item.id.is_empty());
    }

    #[test]
    fn test_non_string_title_coerced() {
        let item = migrate_record(raw(json!({ "title": 7, "content": true })));
        assert_eq!(item.title, "7");
        assert_eq!(item.content, "true");
    }

    #[test]
    fn test_legacy_text_trimmed() {
        let item = migrate_record(raw(json!({ "title": "  Hi ", "content": "\nBye\n" })));
        assert_eq!(item.title, "Hi");
        assert_eq!(item.content, "Bye");
    }

    #[test]
    fn test_image_kept_only_when_non_empty_string() {
        let kept = migrate_record(raw(json!({ "image": "data:image/png;base64,AAAA" })));
        assert_eq!(kept.image.as_deref(), Some("data:image/png;base64,AAAA"));

        let empty = migrate_record(raw(json!({ "image": "" })));
        assert_eq!(empty.image, None);

        let number = migrate_record(raw(json!({ "image": 5 })));
        assert_eq!(number.image, None);
    }

    #[test]
    fn test_browser_iso_date_preserved() {
        let item = migrate_record(raw(json!({ "date": "2025-01-17T09:30:12.345Z" })));
        assert_eq!(item.date_string(), "2025-01-17T09:30:12.345Z");
    }

    #[test]
    fn test_offset_date_normalized_to_utc() {
        let item = migrate_record(raw(json!({ "date": "2025-01-17T12:00:00+03:00" })));
        assert_eq!(item.date_string(), "2025-01-17T09:00:00.000Z");
    }

    #[test]
    fn test_date_only_is_midnight_utc() {
        let date = parse_timestamp(&json!("2024-12-31")).unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_naive_datetime_parsed() {
        let date = parse_timestamp(&json!("2024-12-31T23:59:59")).unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap());
    }

    #[test]
    fn test_rfc2822_parsed() {
        let date = parse_timestamp(&json!("Fri, 17 Jan 2025 09:30:00 +0000")).unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2025, 1, 17, 9, 30, 0).unwrap());
    }

    #[test]
    fn test_epoch_millis_parsed() {
        let date = parse_timestamp(&json!(1_737_106_200_000_i64)).unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2025, 1, 17, 9, 30, 0).unwrap());
    }

    #[test]
    fn test_unparsable_dates_rejected() {
        assert!(parse_timestamp(&json!("")).is_none());
        assert!(parse_timestamp(&json!("yesterday-ish")).is_none());
        assert!(parse_timestamp(&json!("2025-13-45")).is_none());
        assert!(parse_timestamp(&json!({ "y": 2025 })).is_none());
        assert!(parse_timestamp(&json!(false)).is_none());
    }

    #[test]
    fn test_years_beyond_four_digits_rejected() {
        assert!(parse_timestamp(&json!(1_000_000_000_000_000_i64)).is_none());
        assert!(parse_timestamp(&json!(-62_198_755_200_000_i64)).is_none());
        assert!(parse_timestamp(&json!("+033658-09-27T01:46:40Z")).is_none());
    }

    #[test]
    fn test_year_bounds_accepted() {
        let first = parse_timestamp(&json!("0000-01-01T00:00:00Z")).unwrap();
        assert_eq!(first.year(), 0);
        let last = parse_timestamp(&json!("9999-12-31T23:59:59.999Z")).unwrap();
        assert_eq!(last.year(), 9999);
    }

    #[test]
    fn test_far_future_date_migrates_stably() {
        let first = migrate_record(raw(json!({ "date": 1_000_000_000_000_000_i64 })));
        assert!(is_recent(first.date));
        assert!(DateTime::parse_from_rfc3339(&first.date_string()).is_ok());

        let second = migrate_record(RawRecord::from(&first));
        assert_eq!(second, first);
    }

    #[test]
    fn test_negative_year_migrates_stably() {
        let first = migrate_record(raw(json!({ "date": -62_198_755_200_000_i64 })));
        assert!(is_recent(first.date));

        let second = migrate_record(RawRecord::from(&first));
        assert_eq!(second, first);
    }

    #[test]
    fn test_migration_is_idempotent() {
        let first = migrate_record(raw(json!({
            "id": 7,
            "title": " Old ",
            "content": "post",
            "date": "2023-05-01",
            "image": "data:image/gif;base64,R0lG"
        })));
        let second = migrate_record(RawRecord::from(&first));
        assert_eq!(second, first);
    }

    #[test]
    fn test_current_item_migrates_unchanged() {
        let item = NewsItem::new("Title", "Body", None);
        assert_eq!(migrate_record(RawRecord::from(&item)), item);
    }

    #[test]
    fn test_migrate_all_keeps_order() {
        let items = migrate_all(vec![
            raw(json!({ "id": "a" })),
            raw(json!({ "id": "b" })),
            raw(json!({ "id": "c" })),
        ]);
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_migrate_all_rekeys_duplicates() {
        let items = migrate_all(vec![
            raw(json!({ "id": 42, "title": "first" })),
            raw(json!({ "id": "42", "title": "second" })),
        ]);
        assert_eq!(items[0].id, "42");
        assert_ne!(items[1].id, "42");
        assert_eq!(items[1].title, "second");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let item = migrate_record(raw(json!({ "id": "x", "author": "someone" })));
        assert_eq!(item.id, "x");
    }
}
