//! Map camera model: view targets, geographic bounds, fly-to transitions,
//! and marker descriptors.
//!
//! ARCHITECTURE
//! ============
//! `SelectionState` produces a `MapViewState`; the `MapHost` component owns a
//! `FlyTransition` and forwards retargets to Leaflet. Keeping this model free
//! of browser types lets the camera rules run under plain `cargo test`.

#[cfg(test)]
#[path = "map_view_test.rs"]
mod map_view_test;

use crate::consts::{
    DEFAULT_CENTER, DEFAULT_ZOOM, FLY_DURATION_MS, FOCUSED_ZOOM, MAP_BOUNDS_NORTH_EAST, MAP_BOUNDS_SOUTH_WEST,
};
use crate::data::types::{CatalogItem, Event, ItemId, LatLng, Location};

/// Camera target: center coordinate plus zoom level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapViewState {
    pub center: LatLng,
    pub zoom: f64,
}

impl Default for MapViewState {
    fn default() -> Self {
        Self::overview()
    }
}

impl MapViewState {
    /// Campus overview shown when nothing is selected.
    pub const fn overview() -> Self {
        Self { center: DEFAULT_CENTER, zoom: DEFAULT_ZOOM }
    }

    /// Close-up on `target`, pulled inside `bounds` when it falls outside.
    pub fn focused_on(target: LatLng, bounds: &GeoBounds) -> Self {
        Self { center: bounds.clamp(target), zoom: FOCUSED_ZOOM }
    }

    fn lerp(self, to: Self, t: f64) -> Self {
        Self {
            center: LatLng {
                lat: self.center.lat + (to.center.lat - self.center.lat) * t,
                lng: self.center.lng + (to.center.lng - self.center.lng) * t,
            },
            zoom: self.zoom + (to.zoom - self.zoom) * t,
        }
    }
}

/// Axis-aligned lat/lng box the camera may not leave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl GeoBounds {
    pub const fn campus() -> Self {
        Self { south_west: MAP_BOUNDS_SOUTH_WEST, north_east: MAP_BOUNDS_NORTH_EAST }
    }

    pub fn contains(&self, point: LatLng) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&point.lat)
            && (self.south_west.lng..=self.north_east.lng).contains(&point.lng)
    }

    pub fn clamp(&self, point: LatLng) -> LatLng {
        LatLng {
            lat: point.lat.clamp(self.south_west.lat, self.north_east.lat),
            lng: point.lng.clamp(self.south_west.lng, self.north_east.lng),
        }
    }
}

/// Cubic ease-in-out on `t` in `[0, 1]`.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 { 4.0 * t * t * t } else { 1.0 - (-2.0 * t + 2.0).powi(3) / 2.0 }
}

/// An in-flight (or finished) camera flight.
///
/// There is no cancel: a new target restarts the flight from wherever the
/// camera currently is, abandoning the previous target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlyTransition {
    from: MapViewState,
    to: MapViewState,
    started_at_ms: f64,
    duration_ms: f64,
}

impl FlyTransition {
    /// A transition that is already at rest on `view`.
    pub fn settled(view: MapViewState) -> Self {
        Self { from: view, to: view, started_at_ms: 0.0, duration_ms: 0.0 }
    }

    pub fn target(&self) -> MapViewState {
        self.to
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.started_at_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_settled(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Eased camera position at `now_ms`.
    pub fn position_at(&self, now_ms: f64) -> MapViewState {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, ease_in_out_cubic(t))
    }

    /// Head toward `to`. Returns `false` when `to` is already the target, so
    /// re-selecting the same item does not restart the flight.
    pub fn retarget(&mut self, to: MapViewState, now_ms: f64) -> bool {
        if to == self.to {
            return false;
        }
        *self = Self { from: self.position_at(now_ms), to, started_at_ms: now_ms, duration_ms: FLY_DURATION_MS };
        true
    }
}

/// Whether a marker stands for an event or a location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerKind {
    Event,
    Location,
}

/// Icon variant derived from the record's category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerVariant {
    Academic,
    Social,
    Sports,
    Arts,
    Career,
    Food,
    Study,
    Landmark,
    Outdoors,
    Other,
}

impl MarkerVariant {
    pub fn from_category(category: &str) -> Self {
        match category {
            "academic" => Self::Academic,
            "social" => Self::Social,
            "sports" => Self::Sports,
            "arts" => Self::Arts,
            "career" => Self::Career,
            "food" => Self::Food,
            "study" => Self::Study,
            "landmark" => Self::Landmark,
            "outdoors" => Self::Outdoors,
            _ => Self::Other,
        }
    }

    /// BEM modifier used by the marker's `divIcon` class list.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Academic => "academic",
            Self::Social => "social",
            Self::Sports => "sports",
            Self::Arts => "arts",
            Self::Career => "career",
            Self::Food => "food",
            Self::Study => "study",
            Self::Landmark => "landmark",
            Self::Outdoors => "outdoors",
            Self::Other => "other",
        }
    }
}

/// Everything the Leaflet glue needs to draw one marker.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerSpec {
    pub id: ItemId,
    pub kind: MarkerKind,
    pub name: String,
    pub coordinates: LatLng,
    pub variant: MarkerVariant,
    pub selected: bool,
}

impl MarkerSpec {
    fn from_item<T: CatalogItem>(item: &T, kind: MarkerKind, selected: bool) -> Self {
        Self {
            id: item.id(),
            kind,
            name: item.name().to_owned(),
            coordinates: item.coordinates(),
            variant: MarkerVariant::from_category(item.category()),
            selected,
        }
    }

    /// Space-separated CSS classes for the marker icon.
    pub fn class_list(&self) -> String {
        let kind = match self.kind {
            MarkerKind::Event => "event",
            MarkerKind::Location => "location",
        };
        let mut classes = format!("map-marker map-marker--{kind} map-marker--{}", self.variant.css_modifier());
        if self.selected {
            classes.push_str(" map-marker--selected");
        }
        classes
    }
}

/// Build one marker per visible item. Emphasis follows the same events-first
/// rule as coordinate lookup, so a colliding id highlights only the event.
pub fn marker_specs(events: &[&Event], locations: &[&Location], selected: Option<ItemId>) -> Vec<MarkerSpec> {
    let event_selected = selected.is_some_and(|id| events.iter().any(|e| e.id == id));
    let events_iter = events
        .iter()
        .map(|e| MarkerSpec::from_item(*e, MarkerKind::Event, selected == Some(e.id)));
    let locations_iter = locations.iter().map(|l| {
        let emphasized = !event_selected && selected == Some(l.id);
        MarkerSpec::from_item(*l, MarkerKind::Location, emphasized)
    });
    events_iter.chain(locations_iter).collect()
}
