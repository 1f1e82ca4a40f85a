use crate::codec::Timestamp;
use crate::model::Feed;
use serde::{Deserialize, Serialize};
use url::Url;

/// A personal collection (category) of feeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    /// Null for the built-in collections.
    #[serde(default)]
    pub created: Timestamp,
    /// Defaults to the collection name.
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<Url>,
    #[serde(default)]
    pub feeds: Vec<Feed>,
}

/// Payload for creating or updating a collection.
///
/// `label` is required when creating; when `id` is missing the server
/// generates one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Feeds to add to the collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feeds: Option<Vec<AddFeedRequest>>,
    /// Remove the existing cover image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_cover: Option<bool>,
}

impl CollectionRequest {
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }
}

/// A feed to add to a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddFeedRequest {
    pub id: String,
    /// Falls back to the feed's own title when missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl AddFeedRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
        }
    }
}

/// A feed to remove from a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteFeedRequest {
    pub id: String,
}

impl DeleteFeedRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
