//! Episode response payloads for the TVMaze episodes endpoint
//!
//! The episodes endpoint already returns the four fields the widget
//! displays; normalization is a straight field-for-field mapping with no
//! transformation of season or episode numbers.

use serde::Deserialize;

use crate::types::Episode;

/// One episode item from the episodes response
#[derive(Debug, Deserialize)]
pub struct EpisodePayload {
    /// Unique TVMaze identifier
    pub id: u32,
    /// Display name of the episode
    pub name: String,
    /// Season number
    pub season: u32,
    /// Episode number within the season
    pub number: u32,
}

/// Map episode payloads into [`Episode`] records.
///
/// # Arguments
/// * `items` - Decoded episode items from the episodes response
pub fn normalize_episodes(items: Vec<EpisodePayload>) -> Vec<Episode> {
    items
        .into_iter()
        .map(|item| Episode {
            id: item.id,
            name: item.name,
            season: item.season,
            number: item.number,
        })
        .collect()
}
