use super::client::{decode, encode, with_flags, FeedlyClient};
use crate::codec::CoverImage;
use crate::error::FeedlyError;
use crate::model::{AddFeedRequest, Collection, CollectionRequest, DeleteFeedRequest, Feed};
use reqwest::Method;
use std::io::Read;

const COLLECTIONS: &str = "collections";
const FEEDS: &str = "feeds";
const MULTI_PUT: &str = ".mput";
const MULTI_DELETE: &str = ".mdelete";

impl FeedlyClient {
    /// List personal collections.
    ///
    /// `with_stats` adds reading and tag stats for the past 31 days;
    /// `with_enterprise` includes enterprise collections the user follows.
    pub async fn list_collections(
        &self,
        with_stats: bool,
        with_enterprise: bool,
    ) -> Result<Vec<Collection>, FeedlyError> {
        let url = with_flags(
            self.endpoint(&[COLLECTIONS])?,
            &[("withStats", with_stats), ("withEnterprise", with_enterprise)],
        );
        let body = self.fetch(Method::GET, url, None).await?;
        decode(&body)
    }

    pub async fn get_collection(&self, id: &str) -> Result<Collection, FeedlyError> {
        let url = self.endpoint(&[COLLECTIONS, id])?;
        let body = self.fetch(Method::GET, url, None).await?;
        decode(&body)
    }

    pub async fn create_collection(
        &self,
        request: &CollectionRequest,
    ) -> Result<Collection, FeedlyError> {
        let url = self.endpoint(&[COLLECTIONS])?;
        self.post_collection(url, request).await
    }

    pub async fn update_collection(
        &self,
        id: &str,
        request: &CollectionRequest,
    ) -> Result<Collection, FeedlyError> {
        let url = self.endpoint(&[COLLECTIONS, id])?;
        self.post_collection(url, request).await
    }

    async fn post_collection(
        &self,
        url: url::Url,
        request: &CollectionRequest,
    ) -> Result<Collection, FeedlyError> {
        let body = self.fetch(Method::POST, url, Some(encode(request)?)).await?;
        decode_collection(&body)
    }

    /// Upload a new cover image for an existing personal collection.
    pub async fn upload_collection_cover<R: Read>(
        &self,
        id: &str,
        image: R,
    ) -> Result<Collection, FeedlyError> {
        let url = self.endpoint(&[COLLECTIONS, id])?;
        let (body, content_type) = CoverImage::encode(image)?.into_parts();
        tracing::debug!(collection = %id, bytes = body.len(), "Uploading collection cover");
        let body = self.upload(url, body, content_type).await?;
        decode_collection(&body)
    }

    /// Add one feed to a personal collection. Returns the collection's feeds.
    pub async fn add_feed_to_collection(
        &self,
        collection_id: &str,
        feed: &AddFeedRequest,
    ) -> Result<Vec<Feed>, FeedlyError> {
        let url = self.endpoint(&[COLLECTIONS, collection_id, FEEDS])?;
        let body = self.fetch(Method::PUT, url, Some(encode(feed)?)).await?;
        decode(&body)
    }

    /// Add several feeds to a personal collection in one call.
    pub async fn add_feeds_to_collection(
        &self,
        collection_id: &str,
        feeds: &[AddFeedRequest],
    ) -> Result<Vec<Feed>, FeedlyError> {
        let url = self.endpoint(&[COLLECTIONS, collection_id, FEEDS, MULTI_PUT])?;
        let body = self.fetch(Method::PUT, url, Some(encode(feeds)?)).await?;
        decode(&body)
    }

    /// Remove one feed from a personal collection. Returns the remaining feeds.
    pub async fn delete_feed_from_collection(
        &self,
        collection_id: &str,
        feed_id: &str,
    ) -> Result<Vec<Feed>, FeedlyError> {
        let url = self.endpoint(&[COLLECTIONS, collection_id, FEEDS, feed_id])?;
        let body = self.fetch(Method::DELETE, url, None).await?;
        decode(&body)
    }

    /// Remove several feeds from a personal collection in one call.
    pub async fn delete_feeds_from_collection(
        &self,
        collection_id: &str,
        feeds: &[DeleteFeedRequest],
    ) -> Result<Vec<Feed>, FeedlyError> {
        let url = self.endpoint(&[COLLECTIONS, collection_id, FEEDS, MULTI_DELETE])?;
        let body = self.fetch(Method::DELETE, url, Some(encode(feeds)?)).await?;
        decode(&body)
    }
}

/// Collection writes answer with either the collection itself or a
/// one-element array holding it.
fn decode_collection(body: &[u8]) -> Result<Collection, FeedlyError> {
    let value: serde_json::Value = decode(body)?;
    let value = match value {
        serde_json::Value::Array(mut items) if !items.is_empty() => items.swap_remove(0),
        other => other,
    };
    serde_json::from_value(value).map_err(FeedlyError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_collection_object_or_array() {
        let object = br#"{"id": "c", "label": "tech", "created": 1000}"#;
        assert_eq!(decode_collection(object).unwrap().label, "tech");

        let array = br#"[{"id": "c", "label": "tech", "created": 1000}]"#;
        assert_eq!(decode_collection(array).unwrap().created.unix_seconds(), 1);
    }

    #[test]
    fn test_decode_collection_empty_array_fails() {
        let err = decode_collection(b"[]").unwrap_err();
        assert!(matches!(err, FeedlyError::Decode(_)));
    }
}
