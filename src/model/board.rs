use crate::codec::Timestamp;
use serde::{Deserialize, Serialize};
use url::Url;

/// A board (formerly "tag") the user saves entries to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: String,
    #[serde(default)]
    pub created: Timestamp,
    pub label: String,
    /// If false, the label, description and cover cannot be changed.
    #[serde(default)]
    pub customizable: bool,
    /// True for enterprise boards, false for personal ones.
    #[serde(default)]
    pub enterprise: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URL of the uploaded cover image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    /// Public boards only: notes are visible to followers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_notes: Option<bool>,
    /// Public boards only: highlights are visible to followers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_highlights: Option<bool>,
    /// Public boards only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<Url>,
    /// Public boards only: the public feed id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_id: Option<String>,
}

/// Payload for [`FeedlyClient::update_board`](crate::FeedlyClient::update_board).
///
/// Changing `is_public`, `show_notes` or `show_highlights` requires a Feedly
/// Pro subscription.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBoardRequest {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_notes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_highlights: Option<bool>,
}

impl UpdateBoardRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}
