//! TVMaze Show Search Widget
//!
//! The UI half of the show search widget: render targets, HTML markup,
//! typed commands and the interaction state machine, all over the
//! fetch/normalize operations of `tvmaze-core`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tvmaze_core::TvMazeApi;
//! use tvmaze_widget::{command_for_event, Page, SearchWidget, UiEvent};
//!
//! let mut widget = SearchWidget::new(TvMazeApi::new()?, Page::new());
//!
//! // The hosting page registers its handlers once at startup and feeds
//! // every interaction through the same seam:
//! let event = UiEvent::SearchSubmitted("Girls".to_string());
//! if let Some(command) = command_for_event(widget.page(), event) {
//!     widget.dispatch(command).await?;
//! }
//! ```
//!
//! # Operations
//! - `Command::Search` - fetch matching shows, replace the card list,
//!   hide the episode panel
//! - `Command::FetchEpisodes` - fetch a show's episodes, replace the
//!   episode list, show the panel

pub mod command;
pub mod page;
pub mod render;
pub mod widget;

// Re-export main types for convenience
pub use command::{command_for_event, Command, UiEvent};
pub use page::{Container, Page, Panel};
pub use widget::{Phase, SearchWidget};
