//! Injected render targets
//!
//! The original widget wrote through process-wide DOM handles. Here the
//! three collaborators of the hosting page are explicit values owned by
//! whoever drives the widget: two replaceable fragment containers and a
//! visibility-bearing panel. Each container is written to by exactly one
//! operation; "last write wins" is the only ordering guarantee.

/// A container element that holds a list of rendered HTML fragments.
///
/// Fragments are appended one per rendered record, matching how the
/// original appended one card/list item per show/episode. Replacing the
/// contents always clears first; stale children never survive a render.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Container {
    fragments: Vec<String>,
}

impl Container {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove all fragments
    pub fn clear(&mut self) {
        self.fragments.clear();
    }

    /// Append a single fragment
    pub fn append(&mut self, fragment: String) {
        self.fragments.push(fragment);
    }

    /// The fragments currently in the container, in render order
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Number of fragments currently rendered
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether the container holds no fragments
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The container's full inner HTML
    pub fn html(&self) -> String {
        self.fragments.concat()
    }
}

/// The episode panel: a region that is hidden until episodes render into it
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Panel {
    visible: bool,
}

impl Panel {
    /// Create a hidden panel
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the panel visible
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the panel
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Whether the panel is currently visible
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// The pre-existing page regions the widget renders into.
///
/// Mirrors the hosting page of the original: a show-card list, an episode
/// list, and the panel wrapping the episode list.
#[derive(Debug, Default, Clone)]
pub struct Page {
    /// Container for show cards
    pub shows_list: Container,
    /// Container for episode entries
    pub episodes_list: Container,
    /// Visibility of the episode region
    pub episodes_panel: Panel,
}

impl Page {
    /// Create an empty page with a hidden episode panel
    pub fn new() -> Self {
        Self::default()
    }
}
