//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (its `BrowseState` or form
//! signals) and delegates rendering details to `components`.

pub mod event_detail;
pub mod events;
pub mod home;
pub mod leaderboard;
pub mod locations;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod signup;
