use super::*;
use crate::consts::{DEFAULT_CENTER, DEFAULT_ZOOM, FOCUSED_ZOOM};
use crate::data::dataset::campus;
use crate::data::types::LatLng;

// =============================================================
// Defaults
// =============================================================

#[test]
fn starts_with_nothing_selected_at_overview() {
    let state = SelectionState::default();
    assert_eq!(state.selected(), None);
    assert_eq!(state.view(), MapViewState::overview());
}

// =============================================================
// select
// =============================================================

#[test]
fn selecting_event_focuses_its_coordinates() {
    let dataset = campus();
    let event = &dataset.events[2];
    let mut state = SelectionState::default();

    assert!(state.select(Some(event.id), &dataset.events, &dataset.locations));
    assert_eq!(state.selected(), Some(event.id));
    assert!(state.is_selected(event.id));
    assert_eq!(state.view().center, event.coordinates);
    assert_eq!(state.view().zoom, FOCUSED_ZOOM);
}

#[test]
fn selecting_location_focuses_its_coordinates() {
    let dataset = campus();
    let location = &dataset.locations[1];
    let mut state = SelectionState::default();

    assert!(state.select(Some(location.id), &dataset.events, &dataset.locations));
    assert_eq!(state.view().center, location.coordinates);
}

#[test]
fn selecting_same_id_twice_is_idempotent() {
    let dataset = campus();
    let id = dataset.events[0].id;
    let mut state = SelectionState::default();

    state.select(Some(id), &dataset.events, &dataset.locations);
    let first = state;
    state.select(Some(id), &dataset.events, &dataset.locations);
    assert_eq!(state, first);
}

#[test]
fn selecting_none_restores_default_view_exactly() {
    let dataset = campus();
    let mut state = SelectionState::default();
    state.select(Some(dataset.events[4].id), &dataset.events, &dataset.locations);

    assert!(state.select(None, &dataset.events, &dataset.locations));
    assert_eq!(state.selected(), None);
    assert_eq!(state.view().center, DEFAULT_CENTER);
    assert_eq!(state.view().zoom, DEFAULT_ZOOM);
}

#[test]
fn unknown_id_leaves_selection_untouched() {
    let dataset = campus();
    let mut state = SelectionState::default();
    let id = dataset.events[0].id;
    state.select(Some(id), &dataset.events, &dataset.locations);
    let before = state;

    assert!(!state.select(Some(9_999), &dataset.events, &dataset.locations));
    assert_eq!(state, before);
}

#[test]
fn id_missing_from_visible_subset_is_rejected() {
    let dataset = campus();
    let visible: Vec<&Event> = dataset.events.iter().take(1).collect();
    let hidden = dataset.events[1].id;
    let mut state = SelectionState::default();

    assert!(!state.select(Some(hidden), visible.iter().copied(), &dataset.locations));
    assert_eq!(state.selected(), None);
}

#[test]
fn colliding_id_resolves_to_event_first() {
    let dataset = campus();
    let event = dataset.events[0].clone();
    let mut location = dataset.locations[0].clone();
    location.id = event.id;
    let events = vec![event.clone()];
    let locations = vec![location];

    let mut state = SelectionState::default();
    state.select(Some(event.id), &events, &locations);
    assert_eq!(state.view().center, event.coordinates);
}

#[test]
fn out_of_bounds_target_is_clamped() {
    let dataset = campus();
    let mut event = dataset.events[0].clone();
    event.coordinates = LatLng { lat: 40.0, lng: 40.0 };
    let events = vec![event];
    let bounds = GeoBounds::campus();

    let mut state = SelectionState::new(bounds);
    state.select(Some(events[0].id), &events, std::iter::empty::<&Location>());
    assert_eq!(state.view().center, bounds.north_east);
}
