//! Wire encodings shared by every resource.
//!
//! - [`timestamp`] - millisecond-epoch integers to and from [`Timestamp`]
//! - [`multipart`] - single-part `multipart/form-data` bodies for cover uploads

mod multipart;
mod timestamp;

pub use multipart::CoverImage;
pub use timestamp::Timestamp;
