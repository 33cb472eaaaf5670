//! TVMaze Widget Core Library
//!
//! This crate provides the API-client half of the show search widget:
//! it talks to the TVMaze API and normalizes responses into fully
//! populated display records.
//!
//! # Features
//! - Search shows by free-text title
//! - Fetch the episode list of a show
//! - Defaults for missing summary/image so no partial record is rendered

pub mod api;
pub mod client;
pub mod error;
pub mod types;
pub mod wire;

// Re-export main types for convenience
pub use api::TvMazeApi;
pub use client::{ClientConfig, TvMazeClient};
pub use error::{Result, TvMazeError};
pub use types::{Episode, Show};
