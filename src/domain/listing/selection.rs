//! Selection state shared by the card list and the map.
//!
//! Both views report hovers and clicks here and read back a single
//! [`SelectionState::effective_highlight_id`], so they never disagree about
//! which resource is emphasized. A click always wins over a hover.

use serde::Serialize;

/// Where the active selection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionOrigin {
    Hover,
    Click,
}

/// The selection phase as seen by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase<'a> {
    Idle,
    Hovered(&'a str),
    Clicked(&'a str),
}

/// How a scroll into view should be animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Smooth,
}

/// Which edge of the scroll container the target aligns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBlock {
    Nearest,
}

/// Observable effects requested by a selection transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewEffect {
    /// Scroll the list card of `id` into view.
    ScrollIntoView {
        id: String,
        behavior: ScrollBehavior,
        block: ScrollBlock,
    },
}

impl ViewEffect {
    fn scroll_to(id: &str) -> Self {
        Self::ScrollIntoView {
            id: id.to_owned(),
            behavior: ScrollBehavior::Smooth,
            block: ScrollBlock::Nearest,
        }
    }
}

/// Hover and click selections of one listing view.
///
/// Hover is tracked even while a click is active; it only becomes visible
/// once the click is cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    hovered_id: Option<String>,
    clicked_id: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered_id(&self) -> Option<&str> {
        self.hovered_id.as_deref()
    }

    pub fn clicked_id(&self) -> Option<&str> {
        self.clicked_id.as_deref()
    }

    /// The id both views highlight: clicked, else hovered.
    pub fn effective_highlight_id(&self) -> Option<&str> {
        self.clicked_id().or_else(|| self.hovered_id())
    }

    /// Alias of [`Self::effective_highlight_id`].
    pub fn active_id(&self) -> Option<&str> {
        self.effective_highlight_id()
    }

    pub fn origin(&self) -> Option<SelectionOrigin> {
        match self.phase() {
            SelectionPhase::Idle => None,
            SelectionPhase::Hovered(_) => Some(SelectionOrigin::Hover),
            SelectionPhase::Clicked(_) => Some(SelectionOrigin::Click),
        }
    }

    pub fn phase(&self) -> SelectionPhase<'_> {
        match (self.clicked_id(), self.hovered_id()) {
            (Some(id), _) => SelectionPhase::Clicked(id),
            (None, Some(id)) => SelectionPhase::Hovered(id),
            (None, None) => SelectionPhase::Idle,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.phase() == SelectionPhase::Idle
    }

    pub fn is_highlighted(&self, id: &str) -> bool {
        self.effective_highlight_id() == Some(id)
    }

    /// A list card gained the pointer.
    pub fn hover_enter(&mut self, id: &str) {
        self.hovered_id = Some(id.to_owned());
    }

    /// A list card lost the pointer. Only the card that owns the hover can
    /// clear it, and a click is never cleared here.
    pub fn hover_leave(&mut self, id: &str) {
        if self.hovered_id() == Some(id) {
            self.hovered_id = None;
        }
    }

    /// A map marker was clicked.
    ///
    /// Returns a scroll effect only when the clicked id actually changed.
    pub fn click(&mut self, id: &str) -> Option<ViewEffect> {
        if self.clicked_id() == Some(id) {
            return None;
        }
        self.clicked_id = Some(id.to_owned());
        Some(ViewEffect::scroll_to(id))
    }

    /// Drops references to resources that are no longer visible.
    ///
    /// A vanished click resets the whole selection to idle; a vanished hover
    /// clears just the hover.
    pub fn retain_visible<F>(&mut self, is_visible: F)
    where
        F: Fn(&str) -> bool,
    {
        if self.clicked_id().is_some_and(|id| !is_visible(id)) {
            self.clear();
            return;
        }
        if self.hovered_id().is_some_and(|id| !is_visible(id)) {
            self.hovered_id = None;
        }
    }

    pub fn clear(&mut self) {
        self.hovered_id = None;
        self.clicked_id = None;
    }
}
