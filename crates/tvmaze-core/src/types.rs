//! Data types for the TVMaze widget
//!
//! This module contains the two display records the widget renders.
//! Both are fully populated at construction time: normalization fills in
//! defaults, so no partial record ever reaches a render target.

use serde::{Deserialize, Serialize};

/// A television series as displayed in search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// Unique TVMaze identifier
    pub id: u32,
    /// Display name of the show
    pub name: String,
    /// Show description, HTML-bearing. Defaulted when the API omits it.
    pub summary: String,
    /// Poster image URL. Defaulted when the API omits it.
    pub image: String,
}

/// A single episode belonging to a show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Unique TVMaze identifier
    pub id: u32,
    /// Display name of the episode
    pub name: String,
    /// Season number, as reported by the API
    pub season: u32,
    /// Episode number within the season, as reported by the API
    pub number: u32,
}
