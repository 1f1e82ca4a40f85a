//! Typed async client for the Feedly Cloud REST API.
//!
//! ```no_run
//! use feedly::{ClientConfig, FeedlyClient};
//!
//! # async fn run() -> Result<(), feedly::FeedlyError> {
//! let config = ClientConfig::new("access-token").with_base_url("https://sandbox7.feedly.com")?;
//! let client = FeedlyClient::new(config)?;
//!
//! let profile = client.get_profile().await?;
//! println!("{}", profile.id);
//!
//! let cover = std::fs::File::open("cover.png")?;
//! client.upload_board_cover("user/123/tag/tech", cover).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod codec;
pub mod config;
pub mod error;
pub mod model;

pub use api::FeedlyClient;
pub use codec::{CoverImage, Timestamp};
pub use config::{ClientConfig, ConfigError, ConfigFile};
pub use error::FeedlyError;
