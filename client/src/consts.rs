//! Shared constants for the nearU client.

use crate::data::types::LatLng;

// ── Map ─────────────────────────────────────────────────────────

/// Overview center: Pafos, around the AUB Mediterraneo campus.
pub const DEFAULT_CENTER: LatLng = LatLng { lat: 34.7715, lng: 32.4295 };

/// Zoom used when nothing is selected.
pub const DEFAULT_ZOOM: f64 = 13.0;

/// Zoom used when an event or location is selected.
pub const FOCUSED_ZOOM: f64 = 16.0;

/// South-west corner of the pannable area.
pub const MAP_BOUNDS_SOUTH_WEST: LatLng = LatLng { lat: 34.70, lng: 32.35 };

/// North-east corner of the pannable area.
pub const MAP_BOUNDS_NORTH_EAST: LatLng = LatLng { lat: 34.86, lng: 32.52 };

/// Duration of the fly-to transition between view targets.
pub const FLY_DURATION_MS: f64 = 1500.0;

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

// ── Lists ───────────────────────────────────────────────────────

/// Category filter value that matches every record.
pub const ALL_CATEGORIES: &str = "all";

pub const EVENTS_PAGE_SIZE: usize = 6;
pub const LOCATIONS_PAGE_SIZE: usize = 6;
pub const RANKS_PER_PAGE: usize = 5;

// ── Leaderboard ─────────────────────────────────────────────────

/// localStorage slot holding the serialized leaderboard users.
pub const LEADERBOARD_STORAGE_KEY: &str = "leaderboardUsers";

pub const XP_ANIMATION_MS: f64 = 3000.0;
pub const NOTIFICATION_MS: f64 = 4000.0;

pub const XP_JOIN_EVENT: u32 = 10;
pub const XP_HOST_EVENT: u32 = 30;
