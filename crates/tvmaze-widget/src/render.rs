//! HTML rendering for show cards and episode entries
//!
//! Reproduces the markup of the original widget: one card per show with a
//! `data-show-id` attribute and an Episodes button, one `<li>` per
//! episode. Name and summary are interpolated verbatim; the summary is
//! HTML-bearing by contract and is meant to be injected as markup.

use tvmaze_core::{Episode, Show};

use crate::page::Container;

/// CSS class carried by the Episodes button on every card.
///
/// The delegated click handler of the hosting page matches on this class.
pub const EPISODES_BUTTON_CLASS: &str = "Show-getEpisodes";

/// Replace the contents of a container with one card per show.
///
/// Always clears first, so a zero-result search leaves the container
/// empty rather than keeping stale cards.
///
/// # Arguments
/// * `container` - Render target for the show list
/// * `shows` - Normalized shows to render
pub fn render_shows(container: &mut Container, shows: &[Show]) {
    container.clear();

    for show in shows {
        container.append(show_card(show));
    }
}

/// Build the card markup for a single show.
fn show_card(show: &Show) -> String {
    format!(
        r#"<div data-show-id="{id}" class="Show col-md-12 col-lg-6 mb-4">
  <div class="media">
    <img src="{image}" alt="{name}" class="w-25 mr-3">
    <div class="media-body">
      <h5 class="text-primary">{name}</h5>
      <div><small>{summary}</small></div>
      <button class="btn btn-outline-light btn-sm {button_class}">Episodes</button>
    </div>
  </div>
</div>"#,
        id = show.id,
        image = show.image,
        name = show.name,
        summary = show.summary,
        button_class = EPISODES_BUTTON_CLASS,
    )
}

/// Replace the contents of a container with one entry per episode.
///
/// # Arguments
/// * `container` - Render target for the episode list
/// * `episodes` - Normalized episodes to render
pub fn render_episodes(container: &mut Container, episodes: &[Episode]) {
    container.clear();

    for episode in episodes {
        container.append(episode_entry(episode));
    }
}

/// Build the list-item markup for a single episode.
fn episode_entry(episode: &Episode) -> String {
    format!(
        "<li>{} (season {}, episode {})</li>",
        episode.name, episode.season, episode.number
    )
}

/// Read the show ID back out of a rendered card's `data-show-id`
/// attribute.
///
/// # Arguments
/// * `card_html` - Markup of a single rendered card
///
/// # Returns
/// * `Some(id)` if the attribute is present with a numeric value
/// * `None` otherwise
///
/// # Examples
/// ```
/// use tvmaze_widget::render::extract_show_id;
///
/// assert_eq!(extract_show_id(r#"<div data-show-id="139" class="Show">"#), Some(139));
/// assert_eq!(extract_show_id("<div class=\"Show\">"), None);
/// ```
pub fn extract_show_id(card_html: &str) -> Option<u32> {
    const ATTRIBUTE: &str = "data-show-id=\"";

    let start = card_html.find(ATTRIBUTE)? + ATTRIBUTE.len();
    let rest = &card_html[start..];
    let end = rest.find('"')?;

    rest[..end].parse().ok()
}
