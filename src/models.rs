//! Data models for feed sources and digest items.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Source`]: A configured feed endpoint (name + URL)
//! - [`FeedItem`]: A normalized item as produced by the fetcher or the sample file
//! - [`DigestItem`]: A fully populated item, ready for rendering and export
//!
//! The split between [`FeedItem`] and [`DigestItem`] keeps the "optional until
//! filled" fields explicit: nothing downstream of [`FeedItem::fill_defaults`]
//! has to check for absence.

use serde::{Deserialize, Deserializer, Serialize};

/// Tag given to items that arrive without any.
pub const DEFAULT_TAG: &str = "行业观察";

/// Outline skeleton given to items that arrive without one.
///
/// Five slots: quick read, fit points, landing checklist, risk & compliance, ROI.
pub const DEFAULT_OUTLINE: [&str; 5] = ["要点速读", "适配点", "落地清单", "风控与合规", "ROI"];

/// A configured feed endpoint.
///
/// Both fields are optional in the sources file; a missing URL is treated
/// the same as a placeholder and skipped.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Source {
    /// Display name, used as the `source` of every item fetched from it.
    #[serde(default)]
    pub name: Option<String>,
    /// Endpoint returning a JSON array or an object with an `items` array.
    #[serde(default)]
    pub url: Option<String>,
}

impl Source {
    /// URLs starting with `<` mark a source that is not configured yet.
    pub fn is_placeholder(&self) -> bool {
        match self.url.as_deref() {
            None => true,
            Some(url) => url.is_empty() || url.starts_with('<'),
        }
    }
}

/// Read a string field where `null` means the same as a missing key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A normalized item before presentation defaults are applied.
///
/// Items built by the fetcher always leave the three trailing fields as
/// `None`. Items from the sample file may already carry some of them.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct FeedItem {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub source: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub link: String,
    /// Timestamp string as the source provided it; never parsed.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub publish_time: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub idea_title: Option<String>,
    #[serde(default)]
    pub idea_outline: Option<Vec<String>>,
}

impl FeedItem {
    /// Produce a [`DigestItem`], supplying defaults for absent fields.
    ///
    /// Only absent (missing or `null`) values are replaced. A present but
    /// empty tag list stays empty.
    pub fn fill_defaults(self) -> DigestItem {
        let idea_title = self
            .idea_title
            .unwrap_or_else(|| format!("从《{}》看落地路径", self.title));
        DigestItem {
            tags: self.tags.unwrap_or_else(|| vec![DEFAULT_TAG.to_string()]),
            idea_outline: self
                .idea_outline
                .unwrap_or_else(|| DEFAULT_OUTLINE.iter().map(|s| s.to_string()).collect()),
            idea_title,
            source: self.source,
            title: self.title,
            summary: self.summary,
            link: self.link,
            publish_time: self.publish_time,
        }
    }
}

/// A digest entry with every presentation field populated.
///
/// Field order here is the key order of the JSON export.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DigestItem {
    pub source: String,
    pub title: String,
    pub summary: String,
    pub link: String,
    pub publish_time: String,
    pub tags: Vec<String>,
    pub idea_title: String,
    pub idea_outline: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_item(title: &str) -> FeedItem {
        FeedItem {
            source: "Wire".to_string(),
            title: title.to_string(),
            summary: "s".to_string(),
            link: "https://example.com/a".to_string(),
            publish_time: "2024-01-01T00:00:00".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_placeholder_detection() {
        let placeholder = Source {
            name: Some("A".to_string()),
            url: Some("<fill me in>".to_string()),
        };
        let empty = Source {
            name: Some("B".to_string()),
            url: Some(String::new()),
        };
        let missing = Source {
            name: Some("C".to_string()),
            url: None,
        };
        let real = Source {
            name: Some("D".to_string()),
            url: Some("https://example.com/feed.json".to_string()),
        };

        assert!(placeholder.is_placeholder());
        assert!(empty.is_placeholder());
        assert!(missing.is_placeholder());
        assert!(!real.is_placeholder());
    }

    #[test]
    fn test_fill_defaults_on_bare_item() {
        let item = bare_item("AI regulation update").fill_defaults();

        assert_eq!(item.tags, vec!["行业观察".to_string()]);
        assert_eq!(item.idea_title, "从《AI regulation update》看落地路径");
        assert_eq!(item.idea_outline.len(), 5);
        assert!(item.idea_outline.iter().all(|s| !s.is_empty()));
        assert_eq!(item.idea_outline[4], "ROI");
    }

    #[test]
    fn test_fill_defaults_keeps_present_values() {
        let mut raw = bare_item("Chips");
        raw.tags = Some(vec!["hardware".to_string(), "supply".to_string()]);
        raw.idea_title = Some("Custom angle".to_string());
        raw.idea_outline = Some(vec!["one".to_string()]);

        let item = raw.fill_defaults();
        assert_eq!(item.tags, vec!["hardware".to_string(), "supply".to_string()]);
        assert_eq!(item.idea_title, "Custom angle");
        assert_eq!(item.idea_outline, vec!["one".to_string()]);
    }

    #[test]
    fn test_fill_defaults_keeps_empty_tag_list() {
        let mut raw = bare_item("Quiet");
        raw.tags = Some(vec![]);
        assert!(raw.fill_defaults().tags.is_empty());
    }

    #[test]
    fn test_feed_item_deserialization_with_missing_fields() {
        let json = r#"{"title": "Only a title", "tags": null}"#;
        let item: FeedItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.title, "Only a title");
        assert_eq!(item.source, "");
        assert_eq!(item.tags, None);
        assert_eq!(item.idea_outline, None);
    }

    #[test]
    fn test_feed_item_null_strings_become_empty() {
        let json = r#"{"source": null, "title": "t", "summary": null, "link": null, "publish_time": null}"#;
        let item: FeedItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.source, "");
        assert_eq!(item.title, "t");
        assert_eq!(item.summary, "");
        assert_eq!(item.link, "");
        assert_eq!(item.publish_time, "");
    }

    #[test]
    fn test_digest_item_serialization_key_order() {
        let item = bare_item("Order").fill_defaults();
        let json = serde_json::to_string(&item).unwrap();
        let source_at = json.find("\"source\"").unwrap();
        let link_at = json.find("\"link\"").unwrap();
        let outline_at = json.find("\"idea_outline\"").unwrap();
        assert!(source_at < link_at && link_at < outline_at);
    }

    #[test]
    fn test_source_deserialization() {
        let json = r#"[{"name": "Wire", "url": "https://x"}, {"url": "<todo>"}]"#;
        let sources: Vec<Source> = serde_json::from_str(json).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].name.as_deref(), Some("Wire"));
        assert_eq!(sources[1].name, None);
    }
}
