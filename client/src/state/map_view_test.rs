use super::*;
use crate::data::dataset::campus;

fn at(lat: f64, lng: f64) -> LatLng {
    LatLng { lat, lng }
}

// =============================================================
// MapViewState
// =============================================================

#[test]
fn default_view_is_overview_constants() {
    let view = MapViewState::default();
    assert_eq!(view.center, DEFAULT_CENTER);
    assert_eq!(view.zoom, DEFAULT_ZOOM);
}

#[test]
fn focused_view_uses_focused_zoom() {
    let view = MapViewState::focused_on(at(34.77, 32.43), &GeoBounds::campus());
    assert_eq!(view.center, at(34.77, 32.43));
    assert_eq!(view.zoom, FOCUSED_ZOOM);
    assert!(FOCUSED_ZOOM > DEFAULT_ZOOM);
}

#[test]
fn focused_view_clamps_targets_outside_bounds() {
    let bounds = GeoBounds::campus();
    let view = MapViewState::focused_on(at(35.5, 31.0), &bounds);
    assert_eq!(view.center, at(bounds.north_east.lat, bounds.south_west.lng));
}

// =============================================================
// GeoBounds
// =============================================================

#[test]
fn bounds_contain_default_center() {
    assert!(GeoBounds::campus().contains(DEFAULT_CENTER));
}

#[test]
fn bounds_reject_points_outside() {
    let bounds = GeoBounds::campus();
    assert!(!bounds.contains(at(34.0, 32.4)));
    assert!(!bounds.contains(at(34.77, 33.0)));
}

// =============================================================
// Easing
// =============================================================

#[test]
fn easing_hits_endpoints_and_midpoint() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert_eq!(ease_in_out_cubic(1.0), 1.0);
    assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-9);
    assert_eq!(ease_in_out_cubic(-1.0), 0.0);
    assert_eq!(ease_in_out_cubic(2.0), 1.0);
}

// =============================================================
// FlyTransition
// =============================================================

#[test]
fn settled_transition_is_at_rest() {
    let fly = FlyTransition::settled(MapViewState::overview());
    assert!(fly.is_settled(0.0));
    assert_eq!(fly.position_at(123.0), MapViewState::overview());
}

#[test]
fn retarget_to_same_view_is_a_no_op() {
    let mut fly = FlyTransition::settled(MapViewState::overview());
    assert!(!fly.retarget(MapViewState::overview(), 10.0));
    assert!(fly.is_settled(10.0));
}

#[test]
fn retarget_runs_for_fixed_duration() {
    let target = MapViewState::focused_on(at(34.76, 32.41), &GeoBounds::campus());
    let mut fly = FlyTransition::settled(MapViewState::overview());
    assert!(fly.retarget(target, 1000.0));
    assert_eq!(fly.duration_ms(), FLY_DURATION_MS);
    assert!(!fly.is_settled(1000.0 + FLY_DURATION_MS / 2.0));
    assert!(fly.is_settled(1000.0 + FLY_DURATION_MS));
    assert_eq!(fly.position_at(1000.0 + FLY_DURATION_MS), target);
}

#[test]
fn mid_flight_retarget_starts_from_current_position() {
    let bounds = GeoBounds::campus();
    let first = MapViewState::focused_on(at(34.76, 32.41), &bounds);
    let second = MapViewState::focused_on(at(34.78, 32.43), &bounds);
    let mut fly = FlyTransition::settled(MapViewState::overview());
    fly.retarget(first, 0.0);

    let halfway = fly.position_at(FLY_DURATION_MS / 2.0);
    assert!(fly.retarget(second, FLY_DURATION_MS / 2.0));
    assert_eq!(fly.target(), second);
    assert_eq!(fly.position_at(FLY_DURATION_MS / 2.0), halfway);
    assert_eq!(fly.position_at(FLY_DURATION_MS * 1.5), second);
}

// =============================================================
// Markers
// =============================================================

#[test]
fn marker_variant_follows_category() {
    assert_eq!(MarkerVariant::from_category("sports"), MarkerVariant::Sports);
    assert_eq!(MarkerVariant::from_category("food"), MarkerVariant::Food);
    assert_eq!(MarkerVariant::from_category("karaoke"), MarkerVariant::Other);
    assert_eq!(MarkerVariant::Arts.css_modifier(), "arts");
}

#[test]
fn marker_specs_emit_one_marker_per_item() {
    let dataset = campus();
    let events: Vec<&Event> = dataset.events.iter().collect();
    let locations: Vec<&Location> = dataset.locations.iter().collect();
    let specs = marker_specs(&events, &locations, None);
    assert_eq!(specs.len(), events.len() + locations.len());
    assert!(specs.iter().all(|m| !m.selected));
}

#[test]
fn marker_specs_allow_empty_map() {
    assert!(marker_specs(&[], &[], Some(1)).is_empty());
}

#[test]
fn marker_specs_emphasize_only_selected_item() {
    let dataset = campus();
    let events: Vec<&Event> = dataset.events.iter().collect();
    let locations: Vec<&Location> = dataset.locations.iter().collect();
    let target = dataset.locations[0].id;
    let specs = marker_specs(&events, &locations, Some(target));
    let selected: Vec<_> = specs.iter().filter(|m| m.selected).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].id, target);
    assert_eq!(selected[0].kind, MarkerKind::Location);
}

#[test]
fn marker_class_list_includes_kind_variant_and_selection() {
    let spec = MarkerSpec {
        id: 1,
        kind: MarkerKind::Event,
        name: "Mixer".to_owned(),
        coordinates: DEFAULT_CENTER,
        variant: MarkerVariant::Social,
        selected: true,
    };
    assert_eq!(spec.class_list(), "map-marker map-marker--event map-marker--social map-marker--selected");
}
