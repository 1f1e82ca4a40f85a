//! Typed Feedly Cloud resources.
//!
//! Field names follow the API's camelCase JSON. Fields the API documents as
//! optional are `Option<T>` and are left out of request bodies when `None`,
//! so an explicit `Some(false)` or `Some(0)` is always sent. Every timestamp
//! goes through [`Timestamp`](crate::codec::Timestamp).

mod board;
mod collection;
mod entry;
mod feed;
mod priority;
mod profile;

pub use board::{Board, UpdateBoardRequest};
pub use collection::{AddFeedRequest, Collection, CollectionRequest, DeleteFeedRequest};
pub use entry::{Category, Content, Entry, Link, Origin, Tag, Visual};
pub use feed::Feed;
pub use priority::{Filter, Priority};
pub use profile::{Profile, UpdateProfileRequest};
