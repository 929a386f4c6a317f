//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. Each browser-facing helper has an SSR/native fallback so state and
//! pages stay testable without a DOM.

pub mod clock;
pub mod format;
#[cfg(feature = "hydrate")]
pub mod leaflet;
pub mod storage;
pub mod timer;
