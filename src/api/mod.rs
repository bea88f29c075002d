//! Read-only access to the Kanji Alive REST API.
//!
//! Two calls, no retry, no caching:
//! - `GET /api/public/kanji/all`
//! - `GET /api/public/kanji/{id}`

mod client;
mod error;

pub use client::{KanjiClient, KanjiSource};
pub use error::ApiError;
