//! Zone clustering: Lloyd's k-means over geographic coordinates.
//!
//! Centroids are plain lat/lon means; distances to them go through the
//! supplied metric so zones follow great-circle proximity.

use tracing::{debug, trace};

use crate::error::PlannerError;
use crate::point::Point;
use crate::traits::DistanceMetric;

/// Default number of assign/update passes.
pub const DEFAULT_MAX_ITERATIONS: usize = 15;

/// How the initial centroids are picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CentroidSeeding {
    /// Coordinates of the first k points in input order. Deterministic, and
    /// therefore sensitive to input ordering.
    #[default]
    FirstPoints,
}

#[derive(Debug, Clone)]
pub struct ClusterOptions {
    /// Upper bound on assign/update passes.
    pub max_iterations: usize,
    /// Stop once an assignment pass moves no point. Assignments are at a fixed
    /// point then, so the result matches running the full bound.
    pub stop_on_convergence: bool,
    pub seeding: CentroidSeeding,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            stop_on_convergence: true,
            seeding: CentroidSeeding::FirstPoints,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Centroid {
    lat: f64,
    lon: f64,
}

impl Centroid {
    fn location(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

/// Assign every point a zone index in `[0, k)`.
///
/// Points come back in input order with only `cluster` changed. When there
/// are no more points than zones each point gets its own zone.
pub fn cluster<M: DistanceMetric>(
    mut points: Vec<Point>,
    k: usize,
    metric: &M,
    options: &ClusterOptions,
) -> Result<Vec<Point>, PlannerError> {
    if points.is_empty() {
        return Err(PlannerError::EmptyInput);
    }
    if k == 0 {
        return Err(PlannerError::InvalidZoneCount(k));
    }

    if k >= points.len() {
        debug!(points = points.len(), k, "one zone per point");
        for (index, point) in points.iter_mut().enumerate() {
            point.cluster = Some(index);
        }
        return Ok(points);
    }

    let locations: Vec<(f64, f64)> = points.iter().map(|p| (p.lat, p.lon)).collect();
    let assignments = assign_zones(&locations, k, metric, options);

    for (point, zone) in points.iter_mut().zip(assignments) {
        point.cluster = Some(zone);
    }

    Ok(points)
}

/// Run the bounded k-means loop and return one zone index per location.
///
/// Requires `0 < k < locations.len()`.
fn assign_zones<M: DistanceMetric>(
    locations: &[(f64, f64)],
    k: usize,
    metric: &M,
    options: &ClusterOptions,
) -> Vec<usize> {
    let mut centroids = seed_centroids(locations, k, options.seeding);
    let mut assignments: Vec<Option<usize>> = vec![None; locations.len()];
    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..options.max_iterations {
        iterations += 1;

        let changed = assign_to_nearest(locations, &centroids, metric, &mut assignments);
        if !changed && options.stop_on_convergence {
            converged = true;
            break;
        }

        update_centroids(locations, &assignments, &mut centroids);
        trace!(iteration = iterations, ?centroids, "centroids updated");
    }

    debug!(k, points = locations.len(), iterations, converged, "clustering finished");

    // A zero iteration bound never assigns; fall back to a single pass so
    // every point still ends up in a zone.
    if assignments.iter().any(Option::is_none) {
        assign_to_nearest(locations, &centroids, metric, &mut assignments);
    }

    assignments.into_iter().map(|zone| zone.unwrap_or(0)).collect()
}

fn seed_centroids(locations: &[(f64, f64)], k: usize, seeding: CentroidSeeding) -> Vec<Centroid> {
    match seeding {
        CentroidSeeding::FirstPoints => locations
            .iter()
            .take(k)
            .map(|&(lat, lon)| Centroid { lat, lon })
            .collect(),
    }
}

/// Move each location to its nearest centroid. Ties go to the lowest index.
///
/// Returns true if any assignment changed.
fn assign_to_nearest<M: DistanceMetric>(
    locations: &[(f64, f64)],
    centroids: &[Centroid],
    metric: &M,
    assignments: &mut [Option<usize>],
) -> bool {
    let mut changed = false;

    for (location, assigned) in locations.iter().zip(assignments.iter_mut()) {
        let mut best_zone = 0;
        let mut best_distance = f64::INFINITY;
        for (zone, centroid) in centroids.iter().enumerate() {
            let distance = metric.distance(*location, centroid.location());
            if distance < best_distance {
                best_distance = distance;
                best_zone = zone;
            }
        }

        if *assigned != Some(best_zone) {
            *assigned = Some(best_zone);
            changed = true;
        }
    }

    changed
}

/// Recompute centroids as mean lat/lon. Empty zones keep their centroid.
fn update_centroids(
    locations: &[(f64, f64)],
    assignments: &[Option<usize>],
    centroids: &mut [Centroid],
) {
    let mut sums = vec![(0.0, 0.0); centroids.len()];
    let mut counts = vec![0usize; centroids.len()];

    for (&(lat, lon), zone) in locations.iter().zip(assignments) {
        if let Some(zone) = *zone {
            sums[zone].0 += lat;
            sums[zone].1 += lon;
            counts[zone] += 1;
        }
    }

    for (zone, centroid) in centroids.iter_mut().enumerate() {
        if counts[zone] > 0 {
            let count = counts[zone] as f64;
            centroid.lat = sums[zone].0 / count;
            centroid.lon = sums[zone].1 / count;
        }
    }
}
