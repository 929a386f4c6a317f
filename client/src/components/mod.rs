//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards, chrome and the map while reading/writing shared
//! state from Leptos context providers. Route-level orchestration stays in
//! `pages`.

pub mod banners;
pub mod category_select;
pub mod event_card;
pub mod leaderboard_host;
pub mod location_card;
pub mod map_host;
pub mod navbar;
pub mod podium;
pub mod ranking;
