//! Single-item selection shared by a list and its map.
//!
//! DESIGN
//! ======
//! One `SelectionState` is the only source of truth for which row is
//! highlighted and which marker is emphasized. Every change recomputes the
//! camera target in the same call, so the two can never disagree.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use super::map_view::{GeoBounds, MapViewState};
use crate::data::dataset::locate;
use crate::data::types::{Event, ItemId, Location};

/// Selected item id plus the camera target derived from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionState {
    selected: Option<ItemId>,
    view: MapViewState,
    bounds: GeoBounds,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(GeoBounds::campus())
    }
}

impl SelectionState {
    pub fn new(bounds: GeoBounds) -> Self {
        Self { selected: None, view: MapViewState::overview(), bounds }
    }

    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected == Some(id)
    }

    pub fn view(&self) -> MapViewState {
        self.view
    }

    /// Select `id` (or nothing) among the given events and locations.
    ///
    /// Coordinates are looked up in `events` first, then `locations`. An id
    /// found in neither leaves the selection untouched and returns `false`.
    pub fn select<'a>(
        &mut self,
        id: Option<ItemId>,
        events: impl IntoIterator<Item = &'a Event>,
        locations: impl IntoIterator<Item = &'a Location>,
    ) -> bool {
        let Some(id) = id else {
            self.clear();
            return true;
        };
        let Some(coordinates) = locate(id, events, locations) else {
            leptos::logging::warn!("ignoring selection of unknown item {id}");
            return false;
        };
        self.selected = Some(id);
        self.view = MapViewState::focused_on(coordinates, &self.bounds);
        true
    }

    /// Drop the selection and return the camera to the overview.
    pub fn clear(&mut self) {
        self.selected = None;
        self.view = MapViewState::overview();
    }
}
