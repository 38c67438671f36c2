//! Haversine great-circle distance.
//!
//! Straight-line distance over the sphere; ignores roads entirely, which is
//! all zoning and stop ordering need.

use crate::traits::DistanceMetric;

/// Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two (lat, lon) points in meters.
///
/// Uses the `atan2` form so antipodal points stay inside the function's domain.
pub fn haversine_m(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1.0 near the antipode.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Haversine distance metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Haversine;

impl DistanceMetric for Haversine {
    fn distance(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        haversine_m(from, to)
    }
}
