//! HTTP client for the TVMaze API
//!
//! This module provides a thin JSON-over-GET client. There is no retry,
//! no backoff and no rate limiting: the widget issues one request per
//! user action and surfaces any failure to its caller unchanged.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::{Result, TvMazeError};

/// Base URL for the TVMaze API
const TVMAZE_BASE_URL: &str = "http://api.tvmaze.com";

/// Configuration for the TVMaze HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (default: `http://api.tvmaze.com`).
    /// Overridden in tests to point at a local mock server.
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: TVMAZE_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client for the TVMaze API
///
/// Issues GET requests against a fixed base URL and decodes JSON bodies.
/// A non-success status or a transport failure maps to
/// [`TvMazeError::Network`]; an undecodable body maps to
/// [`TvMazeError::MalformedResponse`].
pub struct TvMazeClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Base URL all request paths are appended to
    base_url: String,
}

impl TvMazeClient {
    /// Create a new client with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    ///
    /// # Arguments
    /// * `config` - Client configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Fetch a JSON document from an API path and decode it.
    ///
    /// # Arguments
    /// * `path` - Relative path on the API (e.g., "/search/shows?q=girls")
    ///
    /// # Returns
    /// The decoded response body
    ///
    /// # Errors
    /// - `TvMazeError::Network` - Transport failure or non-success status
    /// - `TvMazeError::MalformedResponse` - Body is not valid JSON of the
    ///   expected shape
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "issuing GET request");

        let response = self.client.get(&url).send().await?;
        let response = response.error_for_status()?;

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| TvMazeError::MalformedResponse(e.to_string()))
    }

    /// Get the configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://api.tvmaze.com");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_client_creation() {
        let client = TvMazeClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_custom_config() {
        let config = ClientConfig {
            base_url: "http://localhost:1234".to_string(),
            timeout_secs: 60,
        };
        let client = TvMazeClient::with_config(config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:1234");
    }

    #[tokio::test]
    async fn test_get_json_decodes_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([1, 2, 3])))
            .mount(&server)
            .await;

        let client = TvMazeClient::with_config(ClientConfig {
            base_url: server.uri(),
            timeout_secs: 5,
        })
        .unwrap();

        let body: Vec<u32> = client.get_json("/ping").await.unwrap();
        assert_eq!(body, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_get_json_non_success_status_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = TvMazeClient::with_config(ClientConfig {
            base_url: server.uri(),
            timeout_secs: 5,
        })
        .unwrap();

        let result: Result<Vec<u32>> = client.get_json("/missing").await;
        match result {
            Err(TvMazeError::Network(_)) => {}
            other => panic!("expected Network error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_get_json_garbage_body_is_malformed_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/garbage"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
            .mount(&server)
            .await;

        let client = TvMazeClient::with_config(ClientConfig {
            base_url: server.uri(),
            timeout_secs: 5,
        })
        .unwrap();

        let result: Result<Vec<u32>> = client.get_json("/garbage").await;
        match result {
            Err(TvMazeError::MalformedResponse(msg)) => assert!(!msg.is_empty()),
            other => panic!("expected MalformedResponse error, got {:?}", other.map(|_| ())),
        }
    }
}
