//! One listing page view: filters, selection, mobile toggle and the derived
//! list and map projections.
//!
//! Every user event goes through [`ListingView::dispatch`], which updates the
//! state synchronously, recomputes the filtered set and the markers, and drops
//! selections that no longer point at a visible resource.

use serde::Serialize;

use super::filter::{FilterCriteria, filter_resources};
use super::markers::{MapMarker, project_markers};
use super::selection::{SelectionState, ViewEffect};
use crate::domain::entities::{Category, Region, Resource};

/// Collections loaded from the store once per page view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectorySnapshot {
    pub resources: Vec<Resource>,
    pub categories: Vec<Category>,
    pub regions: Vec<Region>,
}

/// User input events of the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingEvent {
    SearchChanged(String),
    CategoryChanged(String),
    RegionChanged(String),
    ClearFilters,
    CardHoverStart(String),
    CardHoverEnd(String),
    MarkerClicked(String),
    ToggleMap,
}

/// Handle for one in-flight load; stale handles are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    Idle,
    Pending(u64),
    Ready,
    TornDown,
}

/// Which panes are shown on a narrow viewport. Wide layouts show both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaneVisibility {
    pub list: bool,
    pub map: bool,
}

#[derive(Debug, Clone)]
pub struct ListingView {
    snapshot: DirectorySnapshot,
    criteria: FilterCriteria,
    selection: SelectionState,
    show_map: bool,
    filtered: Vec<Resource>,
    markers: Vec<MapMarker>,
    load: LoadState,
    generation: u64,
}

impl ListingView {
    /// Creates an empty view with optional initial criteria from the URL.
    pub fn new(criteria: FilterCriteria) -> Self {
        Self {
            snapshot: DirectorySnapshot::default(),
            criteria,
            selection: SelectionState::new(),
            show_map: false,
            filtered: Vec::new(),
            markers: Vec::new(),
            load: LoadState::Idle,
            generation: 0,
        }
    }

    /// Creates a view over data that is already loaded.
    pub fn with_snapshot(snapshot: DirectorySnapshot, criteria: FilterCriteria) -> Self {
        let mut view = Self::new(criteria);
        view.snapshot = snapshot;
        view.load = LoadState::Ready;
        view.recompute();
        view
    }

    /// Starts a load and returns the ticket its result must present.
    ///
    /// A newer call invalidates tickets handed out earlier.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        if self.load != LoadState::TornDown {
            self.load = LoadState::Pending(self.generation);
        }
        LoadTicket(self.generation)
    }

    /// Applies a finished load. Returns `false` when the result is stale or
    /// the view has been torn down; the view is then left untouched.
    pub fn apply_load(&mut self, ticket: LoadTicket, snapshot: DirectorySnapshot) -> bool {
        if self.load != LoadState::Pending(ticket.0) {
            tracing::debug!(ticket = ticket.0, "Discarding stale listing load");
            return false;
        }
        self.snapshot = snapshot;
        self.load = LoadState::Ready;
        self.recompute();
        true
    }

    /// Marks the view as gone; late loads are ignored from now on.
    pub fn teardown(&mut self) {
        self.load = LoadState::TornDown;
    }

    pub fn is_loaded(&self) -> bool {
        self.load == LoadState::Ready
    }

    /// Applies one user event and returns the effects it requested.
    pub fn dispatch(&mut self, event: ListingEvent) -> Vec<ViewEffect> {
        let mut effects = Vec::new();

        match event {
            ListingEvent::SearchChanged(text) => {
                self.criteria.search_text = text;
                self.recompute();
            }
            ListingEvent::CategoryChanged(slug) => {
                self.criteria.category_slug = slug;
                self.recompute();
            }
            ListingEvent::RegionChanged(id) => {
                self.criteria.region_id = id;
                self.recompute();
            }
            ListingEvent::ClearFilters => {
                self.criteria.clear();
                self.recompute();
            }
            ListingEvent::CardHoverStart(id) => self.selection.hover_enter(&id),
            ListingEvent::CardHoverEnd(id) => self.selection.hover_leave(&id),
            ListingEvent::MarkerClicked(id) => {
                // unlocated or filtered-out resources have no marker to click
                if self.has_marker(&id) {
                    effects.extend(self.selection.click(&id));
                    self.show_map = false;
                }
            }
            ListingEvent::ToggleMap => self.show_map = !self.show_map,
        }

        effects
    }

    fn recompute(&mut self) {
        self.filtered = filter_resources(&self.snapshot.resources, &self.criteria);
        self.markers = project_markers(&self.filtered);

        let filtered = &self.filtered;
        self.selection
            .retain_visible(|id| filtered.iter().any(|r| r.id == id));
    }

    fn has_marker(&self, id: &str) -> bool {
        self.markers.iter().any(|m| m.id == id)
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn categories(&self) -> &[Category] {
        &self.snapshot.categories
    }

    pub fn regions(&self) -> &[Region] {
        &self.snapshot.regions
    }

    pub fn filtered(&self) -> &[Resource] {
        &self.filtered
    }

    pub fn markers(&self) -> &[MapMarker] {
        &self.markers
    }

    pub fn effective_highlight_id(&self) -> Option<&str> {
        self.selection.effective_highlight_id()
    }

    pub fn is_highlighted(&self, id: &str) -> bool {
        self.selection.is_highlighted(id)
    }

    pub fn show_map(&self) -> bool {
        self.show_map
    }

    pub fn panes(&self) -> PaneVisibility {
        PaneVisibility {
            list: !self.show_map,
            map: self.show_map,
        }
    }

    pub fn has_filters(&self) -> bool {
        self.criteria.has_filters()
    }

    /// `"1 result"` or `"N results"`.
    pub fn result_label(&self) -> String {
        result_label(self.filtered.len())
    }

    /// True when resources are listed but none of them can be mapped.
    pub fn lacks_location_data(&self) -> bool {
        self.markers.is_empty() && !self.filtered.is_empty()
    }
}

pub fn result_label(count: usize) -> String {
    if count == 1 {
        "1 result".to_string()
    } else {
        format!("{count} results")
    }
}
