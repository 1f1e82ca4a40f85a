use super::client::{decode, encode, FeedlyClient};
use crate::error::FeedlyError;
use crate::model::{Profile, UpdateProfileRequest};
use reqwest::Method;

const PROFILE: &str = "profile";

impl FeedlyClient {
    /// Profile of the user owning the access token.
    pub async fn get_profile(&self) -> Result<Profile, FeedlyError> {
        let url = self.endpoint(&[PROFILE])?;
        let body = self.fetch(Method::GET, url, None).await?;
        decode(&body)
    }

    /// Update the profile with the fields set in `update`.
    pub async fn update_profile(
        &self,
        update: &UpdateProfileRequest,
    ) -> Result<Profile, FeedlyError> {
        let url = self.endpoint(&[PROFILE])?;
        let body = self.fetch(Method::POST, url, Some(encode(update)?)).await?;
        decode(&body)
    }
}
