//! Core seams for the zone planner.
//!
//! Kept minimal so callers can plug in their own stop types or distance
//! functions without touching the clustering or sequencing code.

/// Anything with a geographic position.
pub trait Located {
    /// Location coordinates (lat, lon) in degrees.
    fn location(&self) -> (f64, f64);
}

impl Located for (f64, f64) {
    fn location(&self) -> (f64, f64) {
        *self
    }
}

/// Distance between two coordinates, in meters.
///
/// Implementations must be symmetric and return zero for identical inputs;
/// both clustering and sequencing rely on it.
pub trait DistanceMetric {
    fn distance(&self, from: (f64, f64), to: (f64, f64)) -> f64;

    /// Distance between two located items.
    fn between<A: Located, B: Located>(&self, from: &A, to: &B) -> f64
    where
        Self: Sized,
    {
        self.distance(from.location(), to.location())
    }
}
