use crate::codec::Timestamp;
use serde::{Deserialize, Serialize};

/// One layer of a priority filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// `matches`, `likeBoard` or `security`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Ids of the relevant type: entities/topics for `matches`, boards for
    /// `likeBoard`, severities for `security`.
    #[serde(default)]
    pub parts: Vec<String>,
    /// Entity filters only: `about` or `mention`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salience: Option<String>,
}

/// A priority (importance) filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Priority {
    pub id: String,
    pub label: String,
    #[serde(rename = "filters", default)]
    pub layers: Vec<Filter>,
    /// The personal category this filter applies to. Only one is allowed.
    #[serde(default)]
    pub stream_ids: Vec<String>,
    /// Defaults to true on the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// The filter is not refreshed after this time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_until: Option<Timestamp>,
    /// Last time the search query ran.
    #[serde(default)]
    pub last_updated: Timestamp,
    /// Newest entry that matched the query.
    #[serde(default)]
    pub last_entry_match: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_run: Option<Timestamp>,
    /// Entries processed over the past week.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_entries_processed: Option<u64>,
    /// Entries prioritized over the past week.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_entries_matching: Option<u64>,
}

impl Priority {
    pub fn is_active(&self) -> bool {
        self.active.unwrap_or(true)
    }
}
