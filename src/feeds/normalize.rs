//! Mapping raw feed entries onto [`FeedItem`].
//!
//! Feeds do not share a schema. Each normalized field is looked up through
//! an ordered list of candidate keys and takes the first non-empty value.

use crate::models::FeedItem;
use serde_json::{Map, Value};
use tracing::debug;

/// Candidate keys for the summary, in priority order.
pub const SUMMARY_KEYS: &[&str] = &["summary", "desc", "excerpt"];
/// Candidate keys for the article link.
pub const LINK_KEYS: &[&str] = &["link", "url"];
/// Candidate keys for the publish timestamp.
pub const PUBLISH_TIME_KEYS: &[&str] = &["publish_time", "pubDate", "date"];

/// Parse a feed body into normalized items.
///
/// Two shapes are accepted: a top-level array of entries, or an object with
/// an `items` array. Anything else yields no items. Entries that are not
/// JSON objects are skipped.
///
/// # Errors
///
/// Returns the `serde_json` error if the body is not JSON at all.
pub fn parse_feed(source_name: Option<&str>, body: &str) -> Result<Vec<FeedItem>, serde_json::Error> {
    let data: Value = serde_json::from_str(body)?;
    let entries = match data {
        Value::Array(entries) => entries,
        Value::Object(mut obj) => match obj.remove("items") {
            Some(Value::Array(entries)) => entries,
            _ => {
                debug!("Feed object has no `items` array");
                Vec::new()
            }
        },
        _ => {
            debug!("Feed body is neither an array nor an object");
            Vec::new()
        }
    };

    Ok(entries
        .iter()
        .filter_map(Value::as_object)
        .map(|entry| normalize_entry(source_name, entry))
        .collect())
}

/// Build a [`FeedItem`] from one raw entry.
///
/// `source_name` is the configured feed name; when it is missing or empty
/// the entry's own `source` field is used.
pub fn normalize_entry(source_name: Option<&str>, entry: &Map<String, Value>) -> FeedItem {
    let source = source_name
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| first_non_empty(entry, &["source"]));

    FeedItem {
        source,
        title: first_non_empty(entry, &["title"]).trim().to_string(),
        summary: first_non_empty(entry, SUMMARY_KEYS),
        link: first_non_empty(entry, LINK_KEYS),
        publish_time: first_non_empty(entry, PUBLISH_TIME_KEYS),
        ..Default::default()
    }
}

/// First value among `keys` that is a non-empty string (or a number).
///
/// Returns an empty string when no candidate matches.
pub fn first_non_empty(entry: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| match entry.get(*key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
        .unwrap_or_default()
}
