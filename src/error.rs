//! Error taxonomy for planner input.

use std::fmt;

/// Reasons the planner refuses to run.
#[derive(Debug, Clone, PartialEq)]
pub enum PlannerError {
    /// Clustering was asked to partition zero points.
    EmptyInput,
    /// Zone count must be at least one.
    InvalidZoneCount(usize),
    /// Latitude/longitude not finite or outside the valid range.
    InvalidCoordinate { id: String, lat: f64, lon: f64 },
    /// Two points share an id.
    DuplicateId(String),
    /// A route whose stops disagree with its zone or numbering.
    InvalidRoute { cluster: usize, reason: String },
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::EmptyInput => write!(f, "no points to plan"),
            PlannerError::InvalidZoneCount(k) => {
                write!(f, "zone count must be at least 1, got {}", k)
            }
            PlannerError::InvalidCoordinate { id, lat, lon } => {
                write!(f, "point {} has invalid coordinates ({}, {})", id, lat, lon)
            }
            PlannerError::DuplicateId(id) => write!(f, "duplicate point id {}", id),
            PlannerError::InvalidRoute { cluster, reason } => {
                write!(f, "route for zone {} is invalid: {}", cluster, reason)
            }
        }
    }
}

impl std::error::Error for PlannerError {}
