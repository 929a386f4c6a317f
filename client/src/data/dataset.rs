//! Bundled campus dataset: load, validate, and query.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dataset is compiled into the binary from `data/campus.json`, parsed
//! once on first access, and shared read-only by every page. There is no
//! write path.
//!
//! ERROR HANDLING
//! ==============
//! `Dataset::from_json` reports every schema or consistency problem as a
//! typed `DatasetError`. The embedded copy is checked by unit tests; if it
//! still fails at runtime the app logs a warning and renders empty states.

#[cfg(test)]
#[path = "dataset_test.rs"]
mod dataset_test;

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::Deserialize;

use super::types::{CatalogItem, Category, Event, ItemId, LatLng, Location};
use crate::consts::ALL_CATEGORIES;

const CAMPUS_JSON: &str = include_str!("../../data/campus.json");

static CAMPUS: LazyLock<Dataset> = LazyLock::new(Dataset::embedded);

/// Shared handle to the bundled dataset.
pub fn campus() -> &'static Dataset {
    &CAMPUS
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("malformed dataset: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("duplicate {collection} id {id}")]
    DuplicateId { collection: &'static str, id: ItemId },
    #[error("duplicate category value {0:?}")]
    DuplicateCategory(String),
    #[error("category value {0:?} is reserved for the all-categories filter")]
    ReservedCategory(String),
    #[error("{collection} {id} references unknown category {category:?}")]
    UnknownCategory {
        collection: &'static str,
        id: ItemId,
        category: String,
    },
    #[error("{collection} {id} has an empty name")]
    EmptyName { collection: &'static str, id: ItemId },
    #[error("{collection} {id} has out-of-range coordinates ({lat}, {lng})")]
    InvalidCoordinates {
        collection: &'static str,
        id: ItemId,
        lat: f64,
        lng: f64,
    },
    #[error("location {id} rating {rating} is outside 0..=5")]
    InvalidRating { id: ItemId, rating: f64 },
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDataset {
    categories: Vec<Category>,
    events: Vec<Event>,
    locations: Vec<Location>,
}

/// Validated, read-only collections of events, locations, and categories.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    pub categories: Vec<Category>,
    pub events: Vec<Event>,
    pub locations: Vec<Location>,
}

impl Dataset {
    /// Parse and validate a dataset document.
    ///
    /// # Errors
    ///
    /// Returns the first schema or consistency violation found.
    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let RawDataset { categories, events, locations } = serde_json::from_str(raw)?;
        let dataset = Self { categories, events, locations };
        dataset.validate()?;
        Ok(dataset)
    }

    /// Load the copy compiled into the binary, degrading to an empty dataset.
    pub fn embedded() -> Self {
        match Self::from_json(CAMPUS_JSON) {
            Ok(dataset) => dataset,
            Err(e) => {
                leptos::logging::warn!("campus dataset rejected: {e}");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), DatasetError> {
        let mut values = HashSet::new();
        for category in &self.categories {
            if category.value == ALL_CATEGORIES {
                return Err(DatasetError::ReservedCategory(category.value.clone()));
            }
            if !values.insert(category.value.as_str()) {
                return Err(DatasetError::DuplicateCategory(category.value.clone()));
            }
        }

        validate_items("event", &self.events, &values)?;
        validate_items("location", &self.locations, &values)?;

        for location in &self.locations {
            if let Some(rating) = location.rating {
                if !(0.0..=5.0).contains(&rating) {
                    return Err(DatasetError::InvalidRating { id: location.id, rating });
                }
            }
        }
        Ok(())
    }

    pub fn event(&self, id: ItemId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn location(&self, id: ItemId) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    /// Events whose host is leaderboard user `user_id`.
    pub fn hosted_by(&self, user_id: &str) -> Vec<&Event> {
        self.events.iter().filter(|e| e.host_id.as_deref() == Some(user_id)).collect()
    }

    /// Events that list leaderboard user `user_id` as a participant.
    pub fn joined_by(&self, user_id: &str) -> Vec<&Event> {
        self.events.iter().filter(|e| e.participant_ids.iter().any(|p| p == user_id)).collect()
    }

    /// Display label for a category key, falling back to the key itself.
    pub fn category_label<'a>(&'a self, value: &'a str) -> &'a str {
        self.categories
            .iter()
            .find(|c| c.value == value)
            .map_or(value, |c| c.label.as_str())
    }

    /// Categories referenced by at least one of `items`, in dataset order.
    pub fn categories_in<T: CatalogItem>(&self, items: &[T]) -> Vec<Category> {
        self.categories
            .iter()
            .filter(|c| items.iter().any(|item| item.category() == c.value))
            .cloned()
            .collect()
    }
}

fn validate_items<T: CatalogItem>(
    collection: &'static str,
    items: &[T],
    categories: &HashSet<&str>,
) -> Result<(), DatasetError> {
    let mut seen = HashSet::new();
    for item in items {
        let id = item.id();
        if !seen.insert(id) {
            return Err(DatasetError::DuplicateId { collection, id });
        }
        if item.name().trim().is_empty() {
            return Err(DatasetError::EmptyName { collection, id });
        }
        if !categories.contains(item.category()) {
            return Err(DatasetError::UnknownCategory {
                collection,
                id,
                category: item.category().to_owned(),
            });
        }
        let LatLng { lat, lng } = item.coordinates();
        if !item.coordinates().is_valid() {
            return Err(DatasetError::InvalidCoordinates { collection, id, lat, lng });
        }
    }
    Ok(())
}

/// Resolve the coordinate for `id`, checking events before locations.
///
/// Ids are expected to be disjoint across the two collections, but when they
/// collide the event wins.
pub fn locate<'a>(
    id: ItemId,
    events: impl IntoIterator<Item = &'a Event>,
    locations: impl IntoIterator<Item = &'a Location>,
) -> Option<LatLng> {
    events
        .into_iter()
        .find(|e| e.id == id)
        .map(|e| e.coordinates)
        .or_else(|| locations.into_iter().find(|l| l.id == id).map(|l| l.coordinates))
}
