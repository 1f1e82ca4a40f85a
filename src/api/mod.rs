//! REST operations against the Feedly Cloud API.
//!
//! Every call follows the same path: build the endpoint URL from the
//! configured base URL and version, attach the bearer token, send an
//! optional JSON (or multipart) body, check the status, read the body under
//! a size cap, and decode it into the [`model`](crate::model) types.
//!
//! - `profile` - `GET`/`POST /profile`
//! - `boards` - board listing, updates and cover uploads
//! - `collections` - collection CRUD, covers and feed membership

mod boards;
mod client;
mod collections;
mod profile;

pub use client::FeedlyClient;
