use super::*;
use crate::consts::EVENTS_PAGE_SIZE;
use crate::data::dataset::campus;
use crate::state::map_view::{MapViewState, MarkerKind};

#[test]
fn new_state_is_first_page_without_selection() {
    let state = BrowseState::new(EVENTS_PAGE_SIZE);
    assert_eq!(state.pager.page(), 1);
    assert_eq!(state.pager.filter(), &CategoryFilter::All);
    assert_eq!(state.selection.selected(), None);
}

#[test]
fn filter_change_resets_page_and_clears_selection() {
    let dataset = campus();
    let mut state = BrowseState::new(2);
    state.load_more();
    state.selection.select(Some(dataset.events[0].id), &dataset.events, &dataset.locations);
    assert_eq!(state.pager.page(), 2);

    state.set_filter(CategoryFilter::Key("sports".to_owned()));

    assert_eq!(state.pager.page(), 1);
    assert_eq!(state.selection.selected(), None);
    assert_eq!(state.selection.view(), MapViewState::overview());
    let visible = state.pager.visible(&dataset.events);
    assert!(visible.len() <= 2);
    assert!(visible.iter().all(|e| e.category == "sports"));
}

#[test]
fn filter_back_to_all_shows_first_page_of_everything() {
    let dataset = campus();
    let mut state = BrowseState::new(EVENTS_PAGE_SIZE);
    state.set_filter(CategoryFilter::Key("arts".to_owned()));
    state.set_filter(CategoryFilter::All);

    let visible = state.pager.visible(&dataset.events);
    assert_eq!(visible.len(), EVENTS_PAGE_SIZE.min(dataset.events.len()));
    assert_eq!(visible[0].id, dataset.events[0].id);
}

// =============================================================
// Shown-item selection
// =============================================================

#[test]
fn id_collision_with_hidden_event_resolves_to_location() {
    let dataset = campus();
    let location = dataset.locations[0].clone();
    let mut hidden = dataset.events[1].clone();
    hidden.id = location.id;
    let events = vec![dataset.events[0].clone(), hidden];
    let locations = vec![location.clone()];

    let mut state = BrowseState::new(1);
    assert!(state.select_shown(Some(location.id), &events, &locations));

    assert_eq!(state.selection.view().center, location.coordinates);
    let emphasized: Vec<_> = state.shown_markers(&events, &locations).into_iter().filter(|m| m.selected).collect();
    assert_eq!(emphasized.len(), 1);
    assert_eq!(emphasized[0].kind, MarkerKind::Location);
}

#[test]
fn shown_event_wins_a_collision() {
    let dataset = campus();
    let event = dataset.events[0].clone();
    let mut location = dataset.locations[0].clone();
    location.id = event.id;
    let events = vec![event.clone()];
    let locations = vec![location];

    let mut state = BrowseState::new(EVENTS_PAGE_SIZE);
    state.select_shown(Some(event.id), &events, &locations);

    assert_eq!(state.selection.view().center, event.coordinates);
    let emphasized: Vec<_> = state.shown_markers(&events, &locations).into_iter().filter(|m| m.selected).collect();
    assert_eq!(emphasized.len(), 1);
    assert_eq!(emphasized[0].kind, MarkerKind::Event);
}

#[test]
fn hidden_event_cannot_be_selected() {
    let dataset = campus();
    let mut state = BrowseState::new(1);
    let hidden = dataset.events[1].id;
    assert!(!state.select_shown(Some(hidden), &dataset.events, &[]));
    assert_eq!(state.selection.selected(), None);

    state.load_more();
    assert!(state.select_shown(Some(hidden), &dataset.events, &[]));
    assert_eq!(state.selection.selected(), Some(hidden));
}
