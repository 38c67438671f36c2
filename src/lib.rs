//! zone-planner core
//!
//! Splits delivery stops into zones and orders each zone into a route.

pub mod traits;
pub mod error;
pub mod point;
pub mod haversine;
pub mod clustering;
pub mod sequencer;
pub mod planner;
pub mod input;
pub mod links;

pub use error::PlannerError;
pub use haversine::Haversine;
pub use planner::{optimize, Planner, PlannerOptions, PlannerState};
pub use point::{Point, Route};
