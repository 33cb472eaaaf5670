//! Typed commands and UI-event translation
//!
//! DOM events become typed commands at one seam: the hosting page
//! registers its form-submit and delegated-click handlers once at
//! startup, turns each event into a [`UiEvent`], and translation resolves
//! that into the [`Command`] the widget dispatches.

use crate::page::Page;
use crate::render::extract_show_id;

/// A command the widget knows how to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Search shows by the raw text the user entered
    Search(String),
    /// Fetch and display the episodes of a show
    FetchEpisodes(u32),
}

/// A raw interaction on the hosting page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The search form was submitted with the given query text
    SearchSubmitted(String),
    /// The Episodes button of the card at `card_index` was clicked
    EpisodesClicked {
        /// Position of the clicked card in the rendered show list
        card_index: usize,
    },
}

/// Translate a page interaction into a widget command.
///
/// An Episodes click resolves to the `data-show-id` of the clicked card
/// itself, read back from the rendered markup, so two cards with distinct
/// ids can never be confused.
///
/// # Arguments
/// * `page` - The page whose rendered show list the event refers to
/// * `event` - The interaction to translate
///
/// # Returns
/// * `Some(Command)` if the event maps to an operation
/// * `None` if the click does not land on a rendered card
pub fn command_for_event(page: &Page, event: UiEvent) -> Option<Command> {
    match event {
        UiEvent::SearchSubmitted(term) => Some(Command::Search(term)),
        UiEvent::EpisodesClicked { card_index } => {
            let card = page.shows_list.fragments().get(card_index)?;
            let show_id = extract_show_id(card)?;
            Some(Command::FetchEpisodes(show_id))
        }
    }
}
