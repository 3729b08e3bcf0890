//! Content fingerprints and per-run deduplication.
//!
//! Two items are the same story when their `source`, `title` and the date
//! part of `publish_time` (first 10 characters) match exactly. Nothing is
//! normalized: case, whitespace and punctuation all count.

use crate::models::FeedItem;
use crate::utils::prefix_chars;
use itertools::Itertools;
use tracing::info;

/// Hex digest identifying an item's logical story.
///
/// MD5 over `source|title|date`. Only accidental duplicates need to be
/// caught here, so collision resistance is not a concern.
pub fn fingerprint(item: &FeedItem) -> String {
    let day = prefix_chars(&item.publish_time, 10);
    let key = format!("{}|{}|{}", item.source, item.title, day);
    format!("{:x}", md5::compute(key.as_bytes()))
}

/// Keep the first item per fingerprint, preserving input order.
pub fn dedup(items: Vec<FeedItem>) -> Vec<FeedItem> {
    let before = items.len();
    let unique: Vec<FeedItem> = items.into_iter().unique_by(fingerprint).collect();
    info!(before, after = unique.len(), dropped = before - unique.len(), "Deduplicated items");
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(source: &str, title: &str, publish_time: &str) -> FeedItem {
        FeedItem {
            source: source.to_string(),
            title: title.to_string(),
            publish_time: publish_time.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_fingerprint_known_value() {
        // md5("Wire|Hello|2024-01-01")
        let fp = fingerprint(&item("Wire", "Hello", "2024-01-01T09:30:00Z"));
        assert_eq!(fp.len(), 32);
        assert_eq!(fp, format!("{:x}", md5::compute(b"Wire|Hello|2024-01-01")));
    }

    #[test]
    fn test_fingerprint_ignores_time_of_day_and_other_fields() {
        let mut a = item("Wire", "Hello", "2024-01-01T09:30:00Z");
        let mut b = item("Wire", "Hello", "2024-01-01 23:59");
        a.link = "https://a".to_string();
        b.summary = "different summary".to_string();
        assert_eq!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn test_fingerprint_sensitive_to_triple() {
        let base = fingerprint(&item("Wire", "Hello", "2024-01-01"));
        assert_ne!(base, fingerprint(&item("Other", "Hello", "2024-01-01")));
        assert_ne!(base, fingerprint(&item("Wire", "hello", "2024-01-01")));
        assert_ne!(base, fingerprint(&item("Wire", "Hello ", "2024-01-01")));
        assert_ne!(base, fingerprint(&item("Wire", "Hello", "2024-01-02")));
    }

    #[test]
    fn test_fingerprint_short_or_missing_time() {
        let empty = fingerprint(&item("Wire", "Hello", ""));
        assert_eq!(empty, format!("{:x}", md5::compute(b"Wire|Hello|")));
        let short = fingerprint(&item("Wire", "Hello", "2024"));
        assert_eq!(short, format!("{:x}", md5::compute(b"Wire|Hello|2024")));
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_in_order() {
        let a = item("Wire", "A", "2024-01-01T08:00:00");
        let b = item("Wire", "B", "2024-01-01T08:00:00");
        let mut a_again = item("Wire", "A", "2024-01-01T20:00:00");
        a_again.summary = "later copy".to_string();

        let out = dedup(vec![a.clone(), b.clone(), a_again]);
        assert_eq!(out, vec![a, b]);
    }

    #[test]
    fn test_dedup_same_title_different_sources_kept() {
        let out = dedup(vec![
            item("Wire", "Same", "2024-01-01"),
            item("Blog", "Same", "2024-01-01"),
        ]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_dedup_empty() {
        assert!(dedup(Vec::new()).is_empty());
    }
}
