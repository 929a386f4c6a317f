//! Typed records for the static campus dataset.
//!
//! DESIGN
//! ======
//! Records are deserialized with a strict schema (`deny_unknown_fields`) so a
//! typo in the bundled JSON surfaces as a load error instead of a silently
//! missing field.

use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

/// Identifier shared by events and locations. The two id spaces are disjoint
/// by convention only.
pub type ItemId = u32;

time::serde::format_description!(event_time, PrimitiveDateTime, "[year]-[month]-[day]T[hour]:[minute]:[second]");

/// Geographic coordinate, serialized as a `[lat, lng]` pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(value: LatLng) -> Self {
        [value.lat, value.lng]
    }
}

impl LatLng {
    /// Whether the pair is a valid WGS84 coordinate.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite() && (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// A `(value, label)` pair used by category dropdowns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    pub value: String,
    pub label: String,
}

/// A scheduled campus event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Event {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    /// Free-text venue label.
    pub location: String,
    pub coordinates: LatLng,
    #[serde(rename = "date", with = "event_time")]
    pub starts_at: PrimitiveDateTime,
    pub description: Option<String>,
    /// Leaderboard user id of the host, if any.
    pub host_id: Option<String>,
    #[serde(default)]
    pub participant_ids: Vec<String>,
    pub capacity: Option<u32>,
}

/// A point of interest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Location {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    /// Free-text address label.
    pub location: String,
    pub coordinates: LatLng,
    pub description: String,
    /// Star rating in `0.0..=5.0`.
    pub rating: Option<f64>,
}

/// Common view over events and locations for the list/map pipeline.
pub trait CatalogItem {
    fn id(&self) -> ItemId;
    fn name(&self) -> &str;
    fn category(&self) -> &str;
    fn coordinates(&self) -> LatLng;
}

impl CatalogItem for Event {
    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn coordinates(&self) -> LatLng {
        self.coordinates
    }
}

impl CatalogItem for Location {
    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn coordinates(&self) -> LatLng {
        self.coordinates
    }
}
