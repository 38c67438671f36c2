//! Stop sequencing with a nearest-neighbour tour.

use crate::point::Point;
use crate::traits::DistanceMetric;

/// Where a tour begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TourStart {
    /// Highest latitude first. Stands in for a depot; equal latitudes keep
    /// their input order.
    #[default]
    Northernmost,
}

/// Order `points` into a visiting sequence and number them from 1.
///
/// Greedy: always steps to the closest unvisited point, first one wins on
/// ties. No lookahead, so late legs can be long.
pub fn sequence<M: DistanceMetric>(points: Vec<Point>, metric: &M) -> Vec<Point> {
    sequence_from(points, TourStart::Northernmost, metric)
}

pub fn sequence_from<M: DistanceMetric>(
    mut points: Vec<Point>,
    start: TourStart,
    metric: &M,
) -> Vec<Point> {
    if points.len() <= 1 {
        for point in &mut points {
            point.order = Some(1);
        }
        return points;
    }

    match start {
        // Stable, so ties stay in input order.
        TourStart::Northernmost => {
            points.sort_by(|a, b| latitude_key(b.lat).total_cmp(&latitude_key(a.lat)))
        }
    }

    let mut unvisited = points;
    let mut path = Vec::with_capacity(unvisited.len());
    path.push(unvisited.remove(0));

    while let Some(last) = path.last() {
        if unvisited.is_empty() {
            break;
        }
        let best_idx = nearest(last, &unvisited, metric);
        path.push(unvisited.remove(best_idx));
    }

    for (position, point) in path.iter_mut().enumerate() {
        point.order = Some(position + 1);
    }

    path
}

/// Sort key for latitudes: `-0.0` equals `0.0` and NaN sorts last, so the
/// comparison stays a total order on unvalidated input.
fn latitude_key(lat: f64) -> f64 {
    if lat.is_nan() { f64::NEG_INFINITY } else { lat + 0.0 }
}

fn nearest<M: DistanceMetric>(from: &Point, candidates: &[Point], metric: &M) -> usize {
    let mut best_idx = 0;
    let mut best_distance = f64::INFINITY;
    for (i, candidate) in candidates.iter().enumerate() {
        let distance = metric.between(from, candidate);
        if distance < best_distance {
            best_distance = distance;
            best_idx = i;
        }
    }
    best_idx
}
