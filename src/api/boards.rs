use super::client::{decode, encode, with_flags, FeedlyClient};
use crate::codec::CoverImage;
use crate::error::FeedlyError;
use crate::model::{Board, UpdateBoardRequest};
use reqwest::Method;
use std::io::Read;

const BOARDS: &str = "boards";

impl FeedlyClient {
    /// List the user's boards. With `with_enterprise`, enterprise boards the
    /// user follows are included alongside personal ones.
    pub async fn list_boards(&self, with_enterprise: bool) -> Result<Vec<Board>, FeedlyError> {
        let url = with_flags(
            self.endpoint(&[BOARDS])?,
            &[("withEnterprise", with_enterprise)],
        );
        let body = self.fetch(Method::GET, url, None).await?;
        decode(&body)
    }

    /// Update a board's label, description or sharing settings.
    pub async fn update_board(&self, update: &UpdateBoardRequest) -> Result<(), FeedlyError> {
        let url = self.endpoint(&[BOARDS])?;
        self.fetch(Method::POST, url, Some(encode(update)?)).await?;
        Ok(())
    }

    /// Upload a new cover image for an existing board.
    ///
    /// `image` is read to the end before the request is sent.
    pub async fn upload_board_cover<R: Read>(&self, id: &str, image: R) -> Result<(), FeedlyError> {
        let url = self.endpoint(&[BOARDS, id])?;
        let (body, content_type) = CoverImage::encode(image)?.into_parts();
        tracing::debug!(board = %id, bytes = body.len(), "Uploading board cover");
        self.upload(url, body, content_type).await?;
        Ok(())
    }
}
