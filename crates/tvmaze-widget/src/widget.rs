//! The search widget itself
//!
//! Combines the TVMaze API with the page's render targets. Each command
//! runs one fetch-then-render sequence; a failed fetch propagates to the
//! caller and leaves the page exactly as it was.
//!
//! Known race, kept on purpose: there is no cancellation token, so an
//! episode fetch that resolves after a newer search still overwrites the
//! episode container. The original behaves the same way.

use tvmaze_core::{Result, TvMazeApi};

use crate::command::Command;
use crate::page::Page;
use crate::render::{render_episodes, render_shows};

/// Where the widget is in its interaction cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing requested yet
    Idle,
    /// A search request is in flight
    Searching,
    /// Show cards are on the page
    ShowsDisplayed,
    /// An episode request is in flight
    FetchingEpisodes,
    /// The episode panel is visible with entries
    EpisodesDisplayed,
}

/// The show search widget
///
/// Owns the page regions it renders into and the API handle it fetches
/// through. Drive it by dispatching [`Command`]s translated from page
/// events.
///
/// # Example
/// ```no_run
/// use tvmaze_core::TvMazeApi;
/// use tvmaze_widget::{Command, Page, SearchWidget};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut widget = SearchWidget::new(TvMazeApi::new()?, Page::new());
///
///     widget.dispatch(Command::Search("Girls".to_string())).await?;
///     println!("{} cards rendered", widget.page().shows_list.len());
///
///     Ok(())
/// }
/// ```
pub struct SearchWidget {
    api: TvMazeApi,
    page: Page,
    phase: Phase,
}

impl SearchWidget {
    /// Create a widget rendering into the given page.
    ///
    /// # Arguments
    /// * `api` - API handle used for all fetches
    /// * `page` - Pre-existing page regions to render into
    pub fn new(api: TvMazeApi, page: Page) -> Self {
        Self {
            api,
            page,
            phase: Phase::Idle,
        }
    }

    /// The page the widget renders into
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Current interaction phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Execute a command, logging any failure before propagating it.
    ///
    /// Phase legality is enforced at the event-translation seam, not
    /// here: [`crate::command::command_for_event`] only yields
    /// `FetchEpisodes` for a click on a rendered card, so episodes can
    /// only follow a search. A directly dispatched `FetchEpisodes` is
    /// accepted from any phase on purpose — callers bypassing the event
    /// seam take on that guarantee themselves.
    ///
    /// # Arguments
    /// * `command` - The command to execute
    ///
    /// # Errors
    /// Returns the underlying fetch error; the page keeps its prior
    /// content and visibility in that case.
    pub async fn dispatch(&mut self, command: Command) -> Result<()> {
        let result = match command {
            Command::Search(ref term) => self.search_and_display(term).await,
            Command::FetchEpisodes(show_id) => self.episodes_and_display(show_id).await,
        };

        if let Err(ref error) = result {
            tracing::warn!(?command, %error, "widget command failed");
        }

        result
    }

    /// Search shows and replace the show list with the results.
    ///
    /// Hides the episode panel before rendering; it only reappears once
    /// episodes are requested again. On failure the list, the panel and
    /// the phase are all left untouched.
    ///
    /// # Arguments
    /// * `term` - Raw query text, sent as-is (may be empty)
    pub async fn search_and_display(&mut self, term: &str) -> Result<()> {
        let previous = self.phase;
        self.phase = Phase::Searching;

        let shows = match self.api.search_shows(term).await {
            Ok(shows) => shows,
            Err(error) => {
                self.phase = previous;
                return Err(error);
            }
        };

        self.page.episodes_panel.hide();
        render_shows(&mut self.page.shows_list, &shows);
        self.phase = Phase::ShowsDisplayed;

        Ok(())
    }

    /// Fetch a show's episodes, replace the episode list and show the
    /// panel.
    ///
    /// # Arguments
    /// * `show_id` - TVMaze ID of the show, as read from its card
    pub async fn episodes_and_display(&mut self, show_id: u32) -> Result<()> {
        let previous = self.phase;
        self.phase = Phase::FetchingEpisodes;

        let episodes = match self.api.episodes_of_show(show_id).await {
            Ok(episodes) => episodes,
            Err(error) => {
                self.phase = previous;
                return Err(error);
            }
        };

        render_episodes(&mut self.page.episodes_list, &episodes);
        self.page.episodes_panel.show();
        self.phase = Phase::EpisodesDisplayed;

        Ok(())
    }
}
