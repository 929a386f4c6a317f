//! Route-scoped list + map state: pager and selection bundled together.
//!
//! SYSTEM CONTEXT
//! ==============
//! List pages own one `BrowseState` in an `RwSignal`. Bundling the two keeps
//! the filter-change rule (back to page one, selection cleared) in one place.

#[cfg(test)]
#[path = "browse_test.rs"]
mod browse_test;

use super::catalog::{CategoryFilter, Pager};
use super::map_view::{MarkerSpec, marker_specs};
use super::selection::SelectionState;
use crate::data::types::{Event, ItemId, Location};

#[derive(Clone, Debug, PartialEq)]
pub struct BrowseState {
    pub pager: Pager,
    pub selection: SelectionState,
}

impl BrowseState {
    pub fn new(page_size: usize) -> Self {
        Self { pager: Pager::new(page_size), selection: SelectionState::default() }
    }

    /// Apply a new category filter: first page, nothing selected.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.pager.set_filter(filter);
        self.selection.clear();
    }

    pub fn load_more(&mut self) {
        self.pager.load_more();
    }

    /// Select among the events currently shown (the visible prefix of the
    /// filtered list) and every location. The map draws the same events, so
    /// the camera target and the emphasized marker always agree.
    pub fn select_shown(&mut self, id: Option<ItemId>, events: &[Event], locations: &[Location]) -> bool {
        let shown = self.pager.visible(events);
        self.selection.select(id, shown, locations)
    }

    /// Markers for the shown events plus every location.
    pub fn shown_markers(&self, events: &[Event], locations: &[Location]) -> Vec<MarkerSpec> {
        let shown = self.pager.visible(events);
        let locations: Vec<&Location> = locations.iter().collect();
        marker_specs(&shown, &locations, self.selection.selected())
    }
}
