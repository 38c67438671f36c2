//! Stops and routes.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::traits::{DistanceMetric, Located};

/// A geographic stop.
///
/// `cluster` and `order` are filled in by the planner; ingestion leaves them
/// unset. Nothing else is ever changed after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Zone index assigned by clustering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<usize>,
    /// 1-based position within the zone's route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<usize>,
}

impl Point {
    pub fn new(id: impl Into<String>, name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lat,
            lon,
            address: None,
            cluster: None,
            order: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// True when both coordinates are finite and inside the lat/lon ranges.
    pub fn has_valid_coordinates(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

impl Located for Point {
    fn location(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

/// Check coordinates and id uniqueness for a batch of points.
///
/// Returns the first problem found, in input order.
pub fn validate(points: &[Point]) -> Result<(), PlannerError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(points.len());
    for point in points {
        if !point.has_valid_coordinates() {
            return Err(PlannerError::InvalidCoordinate {
                id: point.id.clone(),
                lat: point.lat,
                lon: point.lon,
            });
        }
        if !seen.insert(point.id.as_str()) {
            return Err(PlannerError::DuplicateId(point.id.clone()));
        }
    }
    Ok(())
}

/// One zone's stops in visiting order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RouteRecord")]
pub struct Route {
    pub cluster: usize,
    stops: Vec<Point>,
}

impl Route {
    /// Stops must already carry `cluster` and `order`; the planner is the
    /// only producer.
    pub(crate) fn new(cluster: usize, stops: Vec<Point>) -> Self {
        Self { cluster, stops }
    }

    pub fn stops(&self) -> &[Point] {
        &self.stops
    }

    pub fn into_stops(self) -> Vec<Point> {
        self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Sum of leg distances from the first stop to the last (no return leg).
    pub fn total_distance<M: DistanceMetric>(&self, metric: &M) -> f64 {
        self.stops
            .windows(2)
            .map(|leg| metric.between(&leg[0], &leg[1]))
            .sum()
    }
}

/// Wire shape of a route, checked before it becomes a `Route`.
#[derive(Deserialize)]
struct RouteRecord {
    cluster: usize,
    stops: Vec<Point>,
}

impl TryFrom<RouteRecord> for Route {
    type Error = PlannerError;

    fn try_from(record: RouteRecord) -> Result<Self, Self::Error> {
        let RouteRecord { cluster, stops } = record;
        let invalid = |reason: String| PlannerError::InvalidRoute { cluster, reason };

        if stops.is_empty() {
            return Err(invalid("no stops".to_string()));
        }

        for (position, stop) in stops.iter().enumerate() {
            if stop.cluster != Some(cluster) {
                return Err(invalid(format!("stop {} has zone {:?}", stop.id, stop.cluster)));
            }
            if stop.order != Some(position + 1) {
                return Err(invalid(format!(
                    "stop {} has order {:?}, expected {}",
                    stop.id,
                    stop.order,
                    position + 1
                )));
            }
        }

        Ok(Route::new(cluster, stops))
    }
}
