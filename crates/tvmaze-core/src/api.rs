//! Main TVMaze API surface
//!
//! This module provides the high-level API the widget calls. It combines
//! the HTTP client with the wire normalizers to turn raw responses into
//! fully populated display records.

use crate::client::TvMazeClient;
use crate::error::Result;
use crate::types::{Episode, Show};
use crate::wire::{normalize_episodes, normalize_search, EpisodePayload, SearchHit};

/// High-level TVMaze API
///
/// Provides the two operations the widget needs: searching shows by
/// title and fetching the episode list of a show. All operations are
/// asynchronous and issue exactly one request each.
///
/// # Example
/// ```no_run
/// use tvmaze_core::TvMazeApi;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = TvMazeApi::new()?;
///
///     let shows = api.search_shows("Girls").await?;
///     println!("Found {} shows", shows.len());
///
///     Ok(())
/// }
/// ```
pub struct TvMazeApi {
    client: TvMazeClient,
}

impl TvMazeApi {
    /// Create a new API handle with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        let client = TvMazeClient::new()?;
        Ok(Self { client })
    }

    /// Create a new API handle with a custom client.
    ///
    /// This is useful for testing or when you need custom client
    /// configuration.
    ///
    /// # Arguments
    /// * `client` - Pre-configured TvMazeClient instance
    pub fn with_client(client: TvMazeClient) -> Self {
        Self { client }
    }

    /// Search for shows matching a free-text title.
    ///
    /// The term is sent exactly as entered, URL-encoded. Empty and
    /// whitespace-only terms are valid queries and go to the API
    /// unchanged. Every returned [`Show`] has its summary and image
    /// populated, with defaults substituted where the API omitted them.
    ///
    /// # Arguments
    /// * `term` - Raw search text from the user
    ///
    /// # Returns
    /// * `Ok(Vec<Show>)` with matching shows (possibly empty)
    /// * `Err(TvMazeError)` if the request or decoding fails
    ///
    /// # Example
    /// ```no_run
    /// use tvmaze_core::TvMazeApi;
    ///
    /// # async fn example() -> Result<(), tvmaze_core::TvMazeError> {
    /// let api = TvMazeApi::new()?;
    /// for show in api.search_shows("Breaking Bad").await? {
    ///     println!("{} ({})", show.name, show.id);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_shows(&self, term: &str) -> Result<Vec<Show>> {
        let encoded = urlencoding::encode(term);
        let path = format!("/search/shows?q={}", encoded);

        let hits: Vec<SearchHit> = self.client.get_json(&path).await?;
        Ok(normalize_search(hits))
    }

    /// Fetch all episodes of a show.
    ///
    /// # Arguments
    /// * `show_id` - TVMaze ID of the show
    ///
    /// # Returns
    /// * `Ok(Vec<Episode>)` with the show's episodes in API order
    /// * `Err(TvMazeError)` if the request or decoding fails
    ///
    /// # Example
    /// ```no_run
    /// use tvmaze_core::TvMazeApi;
    ///
    /// # async fn example() -> Result<(), tvmaze_core::TvMazeError> {
    /// let api = TvMazeApi::new()?;
    /// for ep in api.episodes_of_show(139).await? {
    ///     println!("S{:02}E{:02} {}", ep.season, ep.number, ep.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn episodes_of_show(&self, show_id: u32) -> Result<Vec<Episode>> {
        let path = format!("/shows/{}/episodes", show_id);

        let items: Vec<EpisodePayload> = self.client.get_json(&path).await?;
        Ok(normalize_episodes(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;
    use crate::error::TvMazeError;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn api_against(server: &MockServer) -> TvMazeApi {
        let client = TvMazeClient::with_config(ClientConfig {
            base_url: server.uri(),
            timeout_secs: 5,
        })
        .unwrap();
        TvMazeApi::with_client(client)
    }

    #[tokio::test]
    async fn test_search_shows_sends_url_encoded_term() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/shows"))
            .and(query_param("q", "breaking bad"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let api = api_against(&server).await;
        let shows = api.search_shows("breaking bad").await.unwrap();
        assert!(shows.is_empty());
    }

    #[tokio::test]
    async fn test_search_shows_empty_term_is_sent_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/shows"))
            .and(query_param("q", ""))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let api = api_against(&server).await;
        let shows = api.search_shows("").await.unwrap();
        assert!(shows.is_empty());
    }

    #[tokio::test]
    async fn test_search_shows_applies_defaults() {
        let server = MockServer::start().await;
        let body = serde_json::json!([
            { "show": { "id": 139, "name": "Girls", "summary": null, "image": null } }
        ]);
        Mock::given(method("GET"))
            .and(path("/search/shows"))
            .and(query_param("q", "Girls"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let api = api_against(&server).await;
        let shows = api.search_shows("Girls").await.unwrap();

        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].id, 139);
        assert_eq!(shows[0].summary, "No show description provided");
        assert_eq!(shows[0].image, "http://tinyurl.com/missing-tv");
    }

    #[tokio::test]
    async fn test_episodes_of_show_hits_show_path() {
        let server = MockServer::start().await;
        let body = serde_json::json!([
            { "id": 1, "name": "Pilot", "season": 1, "number": 1 }
        ]);
        Mock::given(method("GET"))
            .and(path("/shows/139/episodes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;

        let api = api_against(&server).await;
        let episodes = api.episodes_of_show(139).await.unwrap();

        assert_eq!(episodes.len(), 1);
        assert_eq!(episodes[0].name, "Pilot");
        assert_eq!(episodes[0].season, 1);
        assert_eq!(episodes[0].number, 1);
    }

    #[tokio::test]
    async fn test_search_shows_propagates_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/shows"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let api = api_against(&server).await;
        let result = api.search_shows("anything").await;
        assert!(matches!(result, Err(TvMazeError::Network(_))));
    }

    #[tokio::test]
    async fn test_episodes_of_show_propagates_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shows/7/episodes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(
                [{ "id": 1, "name": "Pilot" }]
            )))
            .mount(&server)
            .await;

        let api = api_against(&server).await;
        let result = api.episodes_of_show(7).await;
        assert!(matches!(result, Err(TvMazeError::MalformedResponse(_))));
    }
}
