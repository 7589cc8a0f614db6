//! Output formatting utilities

use crate::domain::image::inspect_data_url;
use crate::domain::NewsItem;
use chrono::Local;

/// Characters of an id shown in listings
pub const SHORT_ID_LEN: usize = 8;

/// Shorten content to `max_chars` characters, appending "..." when cut
pub fn truncate_preview(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}

pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((cut, _)) => &id[..cut],
        None => id,
    }
}

/// Describe an attached image in one line
pub fn image_summary(image: &str) -> String {
    match inspect_data_url(image) {
        Some(info) => format!("[image: {}, {} bytes]", info.mime, info.payload_len),
        None => "[image]".to_string(),
    }
}

fn local_date(item: &NewsItem) -> String {
    item.date
        .with_timezone(&Local)
        .format("%d.%m.%Y %H:%M")
        .to_string()
}

/// Format news items as cards, in the order given
pub fn format_news_list(items: &[&NewsItem], preview_length: usize, full: bool) -> String {
    if items.is_empty() {
        return "No news yet".to_string();
    }

    let mut output = String::new();
    for item in items {
        output.push_str(&format!("{}  {}\n", short_id(&item.id), local_date(item)));
        output.push_str(&format!("{}\n", item.title));

        if full {
            output.push_str(&format!("{}\n", item.content));
        } else {
            output.push_str(&format!("{}\n", truncate_preview(&item.content, preview_length)));
        }

        if let Some(image) = &item.image {
            output.push_str(&format!("{}\n", image_summary(image)));
        }
        output.push('\n');
    }
    output
}

/// Format a single item with all of its fields
pub fn format_news_item(item: &NewsItem) -> String {
    let mut output = String::new();
    output.push_str(&format!("id:      {}\n", item.id));
    output.push_str(&format!("date:    {} ({})\n", item.date_string(), local_date(item)));
    if let Some(image) = &item.image {
        output.push_str(&format!("image:   {}\n", image_summary(image)));
    }
    output.push_str(&format!("\n{}\n\n{}\n", item.title, item.content));
    output
}
