//! Client-side state holders.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each holder is a plain struct with mutation methods. `App` wraps the shared
//! ones in `RwSignal`s and provides them as context; pages own route-scoped
//! ones. Nothing here touches the DOM, so all of it is testable natively.

pub mod banner;
pub mod browse;
pub mod catalog;
pub mod leaderboard;
pub mod map_view;
pub mod selection;
pub mod ui;
