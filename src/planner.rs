//! Zone planner: clustering followed by per-zone sequencing.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::clustering::{cluster, ClusterOptions};
use crate::error::PlannerError;
use crate::haversine::Haversine;
use crate::point::{validate, Point, Route};
use crate::sequencer::sequence;
use crate::traits::DistanceMetric;

/// Suggested upper bound for zone pickers. Not enforced.
pub const RECOMMENDED_MAX_ZONES: usize = 6;

#[derive(Debug, Clone)]
pub struct PlannerOptions {
    pub clustering: ClusterOptions,
    /// Sequence zones on the rayon pool.
    pub parallel: bool,
    /// Minimum total point count before going parallel.
    pub parallel_threshold: usize,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            clustering: ClusterOptions::default(),
            parallel: true,
            parallel_threshold: 256,
        }
    }
}

/// Split `points` into at most `k` zones and order each zone's stops.
///
/// Routes come back sorted by zone index. Empty input yields no routes.
pub fn optimize<M>(
    points: Vec<Point>,
    k: usize,
    metric: &M,
    options: &PlannerOptions,
) -> Result<Vec<Route>, PlannerError>
where
    M: DistanceMetric + Sync,
{
    if points.is_empty() {
        return Ok(Vec::new());
    }
    if k == 0 {
        return Err(PlannerError::InvalidZoneCount(k));
    }
    validate(&points)?;

    let total = points.len();
    let clustered = cluster(points, k, metric, &options.clustering)?;
    let groups = group_by_zone(clustered);

    let parallel = options.parallel && total >= options.parallel_threshold && groups.len() > 1;
    debug!(zones = groups.len(), parallel, "sequencing zones");

    let routes: Vec<Route> = if parallel {
        groups
            .into_par_iter()
            .map(|(zone, stops)| Route::new(zone, sequence(stops, metric)))
            .collect()
    } else {
        groups
            .into_iter()
            .map(|(zone, stops)| Route::new(zone, sequence(stops, metric)))
            .collect()
    };

    info!(points = total, k, routes = routes.len(), "optimization finished");

    Ok(routes)
}

/// Group clustered points by zone in ascending zone order. Points keep
/// their encounter order within a group.
fn group_by_zone(points: Vec<Point>) -> Vec<(usize, Vec<Point>)> {
    let mut groups: BTreeMap<usize, Vec<Point>> = BTreeMap::new();
    for point in points {
        groups.entry(point.cluster.unwrap_or(0)).or_default().push(point);
    }
    groups.into_iter().collect()
}

/// Whether a planner currently has a run in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannerState {
    Idle,
    Computing,
}

/// Reusable planner bound to a metric and options.
///
/// Holds no data between runs; `state` only reports whether a call to
/// `optimize` is currently executing.
#[derive(Debug)]
pub struct Planner<M = Haversine> {
    metric: M,
    options: PlannerOptions,
    in_flight: AtomicUsize,
}

impl Default for Planner<Haversine> {
    fn default() -> Self {
        Self::new(Haversine, PlannerOptions::default())
    }
}

impl<M> Planner<M>
where
    M: DistanceMetric + Sync,
{
    pub fn new(metric: M, options: PlannerOptions) -> Self {
        Self {
            metric,
            options,
            in_flight: AtomicUsize::new(0),
        }
    }

    pub fn options(&self) -> &PlannerOptions {
        &self.options
    }

    pub fn state(&self) -> PlannerState {
        if self.in_flight.load(Ordering::Acquire) > 0 {
            PlannerState::Computing
        } else {
            PlannerState::Idle
        }
    }

    pub fn optimize(&self, points: Vec<Point>, k: usize) -> Result<Vec<Route>, PlannerError> {
        let _guard = InFlight::enter(&self.in_flight);
        optimize(points, k, &self.metric, &self.options)
    }
}

/// Marks a run as in flight until dropped, including on early return.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::AcqRel);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}
