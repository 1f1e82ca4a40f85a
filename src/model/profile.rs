use crate::codec::Timestamp;
use serde::{Deserialize, Serialize};

/// The authenticated user's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Unique, immutable user id.
    pub id: String,
    /// Extracted from the OAuth profile; not always available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Google user id, for accounts created through Google OAuth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google: Option<String>,
    /// Google Reader user id; present for users who migrated from Reader.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reader: Option<String>,
    /// Legacy Twitter handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_press_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows_live_id: Option<String>,
    /// Analytics cohort, formatted `yyyy.ww`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wave: Option<String>,
    /// Client application used to create the account.
    #[serde(default)]
    pub client: String,
    /// Client name/version used to create the account.
    #[serde(default)]
    pub source: String,
    /// Not set for accounts created before October 2013.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
    /// Pro subscription, e.g. `FeedlyProMonthly`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_expiration: Option<Timestamp>,
    /// One of Active, PastDue, Canceled, Unpaid, Deleted, Expired.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_evernote_connected: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pocket_connected: Option<bool>,
}

/// Payload for [`FeedlyClient::update_profile`](crate::FeedlyClient::update_profile).
///
/// Only the fields that are `Some` are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Twitter handle, e.g. `edwk`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    /// Facebook user id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
}
