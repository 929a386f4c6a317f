//! Static campus data: typed records and the bundled dataset.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything downstream (list pipeline, selection, map markers) reads these
//! records; nothing writes them.

pub mod dataset;
pub mod types;
