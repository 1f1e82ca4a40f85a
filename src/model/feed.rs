use serde::{Deserialize, Serialize};
use url::Url;

/// A feed as returned inside collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    /// Unique, immutable feed id, e.g. `feed/http://example.com/rss`.
    pub id: String,
    /// Same as `id`; kept by the API for backward compatibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed_id: Option<String>,
    /// Number of Feedly subscribers following this feed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscribers: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Average number of articles published weekly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
    /// Only present when the feed cannot be polled: `dead`, `dead.flooded`,
    /// `dead.dropped` or `dormant`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl Feed {
    /// True when the API reports the feed as no longer polled.
    pub fn is_dead(&self) -> bool {
        self.state.as_deref().is_some_and(|s| s.starts_with("dead"))
    }
}
