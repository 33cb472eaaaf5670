//! Search response payloads for the TVMaze search endpoint
//!
//! The search endpoint returns a sequence of wrapper objects, each with a
//! nested `show` object. Summary and image may be null or missing; the
//! normalized [`Show`] always carries a value for both.

use serde::Deserialize;

use crate::types::Show;

/// Substituted when the API provides no summary (or an empty one)
pub const DEFAULT_SUMMARY: &str = "No show description provided";

/// Substituted when the API provides no image
pub const DEFAULT_IMAGE_URL: &str = "http://tinyurl.com/missing-tv";

/// One wrapper object from the search response
#[derive(Debug, Deserialize)]
pub struct SearchHit {
    /// The nested show object
    pub show: ShowPayload,
}

/// The show object as the API sends it
#[derive(Debug, Deserialize)]
pub struct ShowPayload {
    /// Unique TVMaze identifier
    pub id: u32,
    /// Display name of the show
    pub name: String,
    /// Summary in HTML format (may be null)
    #[serde(default)]
    pub summary: Option<String>,
    /// Image URLs (may be null)
    #[serde(default)]
    pub image: Option<ImagePayload>,
}

/// Image URL pair as the API sends it
#[derive(Debug, Deserialize)]
pub struct ImagePayload {
    /// Full-resolution image URL
    pub original: String,
}

/// Map search wrappers into fully populated [`Show`] records.
///
/// Applies [`DEFAULT_SUMMARY`] when the summary is absent or empty and
/// [`DEFAULT_IMAGE_URL`] when no image is given, so every returned record
/// has all four fields set.
///
/// # Arguments
/// * `hits` - Decoded wrapper objects from the search response
pub fn normalize_search(hits: Vec<SearchHit>) -> Vec<Show> {
    hits.into_iter().map(|hit| normalize_show(hit.show)).collect()
}

/// Map a single show payload into a [`Show`], applying defaults.
fn normalize_show(payload: ShowPayload) -> Show {
    let summary = payload
        .summary
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SUMMARY.to_string());

    let image = payload
        .image
        .map(|img| img.original)
        .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string());

    Show {
        id: payload.id,
        name: payload.name,
        summary,
        image,
    }
}
