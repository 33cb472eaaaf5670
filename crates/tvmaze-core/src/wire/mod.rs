//! Wire payloads and normalization for TVMaze responses
//!
//! This module mirrors the JSON shapes the API actually returns and maps
//! them into the display records of [`crate::types`]:
//! - `search`: search endpoint wrappers (`{ show: { … } }`)
//! - `episodes`: episode list items

pub mod episodes;
pub mod search;

// Re-export main normalization entry points
pub use episodes::{normalize_episodes, EpisodePayload};
pub use search::{normalize_search, SearchHit, DEFAULT_IMAGE_URL, DEFAULT_SUMMARY};
