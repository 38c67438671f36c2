//! Test fixtures for zone-planner.
//!
//! Provides:
//! - Real neighbourhood coordinates grouped by area
//! - Small builders for points and deterministic scattered inputs

pub mod delivery_stops;

pub use delivery_stops::*;
