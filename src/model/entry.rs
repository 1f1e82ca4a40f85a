use crate::codec::Timestamp;
use crate::model::Priority;
use serde::{Deserialize, Serialize};

/// Article body or summary. `content` holds sanitized HTML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub content: String,
    /// `ltr` or `rtl`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    /// Media type of the linked resource.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

/// The feed an entry was crawled from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Origin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

/// Lead image of an entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visual {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// A tag the user put on an entry. `global.read` marks explicit reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A category the user associated with the entry's feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A single article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Unique, immutable id of the article.
    pub id: String,
    /// Plain text, no HTML markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// When the article was processed by Feedly. Immutable.
    pub crawled: Timestamp,
    /// When the article was re-processed and updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recrawled: Option<Timestamp>,
    /// Publication time as reported by the feed (often inaccurate).
    pub published: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<Timestamp>,
    /// Alternate links; usually one pointing at the original page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate: Option<Vec<Link>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual: Option<Visual>,
    /// Always false for unauthenticated requests.
    #[serde(default)]
    pub unread: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
    /// Popularity indicator; higher means more reads, saves and shares.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement: Option<u64>,
    /// For tagged entries returned by the streams API: when the tag was added.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_timestamp: Option<Timestamp>,
    /// Media links (video, images, sound) provided by the feed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enclosure: Option<Vec<Link>>,
    /// Changes when the article is updated.
    #[serde(default)]
    pub fingerprint: String,
    /// Id of the post in the source feed; not necessarily a URL.
    #[serde(default)]
    pub origin_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    /// Priority filters matching this entry (pro+ and team only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priorities: Option<Vec<Priority>>,
}

impl Entry {
    /// Canonical link to the original page, if the feed provided one.
    pub fn canonical_url(&self) -> Option<&str> {
        self.alternate
            .as_ref()
            .and_then(|links| links.first())
            .map(|l| l.href.as_str())
    }

    /// True if the user explicitly marked this entry as read.
    pub fn is_marked_read(&self) -> bool {
        self.tags
            .as_ref()
            .is_some_and(|tags| tags.iter().any(|t| t.id.ends_with("/tag/global.read")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ENTRY_JSON: &str = r#"{
        "id": "gRtwnDeqCDpZ42bXE9Sp7dNhm4R6NsipqFVbXn2XpDA=_13fb9d6f274:2ac9c5:f5718180",
        "title": "NBC's reviled sitcom 'Animal Practice' is a smash",
        "author": "Nathan Ingraham",
        "crawled": 1367539068016,
        "published": 1367539068000,
        "recrawled": 1367539200500,
        "content": {"direction": "ltr", "content": "<p>Hello</p>"},
        "alternate": [{"href": "http://www.theverge.com/1/2/3", "type": "text/html"}],
        "origin": {
            "htmlUrl": "http://www.theverge.com/",
            "streamId": "feed/http://www.theverge.com/rss/full.xml",
            "title": "The Verge"
        },
        "keywords": ["Culture", "TV"],
        "visual": {"url": "https://cdn.example.com/a.jpg", "width": 640, "height": 480, "contentType": "image/jpeg"},
        "unread": true,
        "tags": [{"id": "user/c805fcbf/tag/global.read"}],
        "categories": [{"id": "user/c805fcbf/category/tech", "label": "tech"}],
        "engagement": 15,
        "actionTimestamp": null,
        "fingerprint": "a1b2c3",
        "originId": "http://www.theverge.com/1/2/3"
    }"#;

    #[test]
    fn test_decode_entry() {
        let entry: Entry = serde_json::from_str(ENTRY_JSON).unwrap();

        assert_eq!(entry.crawled.unix_seconds(), 1_367_539_068);
        assert_eq!(entry.published.unix_seconds(), 1_367_539_068);
        assert_eq!(entry.recrawled.map(|t| t.unix_seconds()), Some(1_367_539_200));
        assert_eq!(entry.updated, None);
        assert_eq!(entry.action_timestamp, None);
        assert_eq!(entry.canonical_url(), Some("http://www.theverge.com/1/2/3"));
        assert_eq!(entry.visual.as_ref().and_then(|v| v.width), Some(640));
        assert!(entry.unread);
        assert!(entry.is_marked_read());
        assert_eq!(entry.engagement, Some(15));
    }

    #[test]
    fn test_encode_entry_timestamps_as_whole_seconds() {
        let entry: Entry = serde_json::from_str(ENTRY_JSON).unwrap();
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["crawled"], 1_367_539_068_000i64);
        assert_eq!(value["recrawled"], 1_367_539_200_000i64);
        assert!(value.get("updated").is_none());
        assert_eq!(value["alternate"][0]["type"], "text/html");
    }

    #[test]
    fn test_bad_timestamp_rejected() {
        let json = r#"{"id": "x", "crawled": "yesterday", "published": 0}"#;
        let err = serde_json::from_str::<Entry>(json).unwrap_err();
        assert!(err.to_string().contains("millisecond timestamp"));
    }
}
