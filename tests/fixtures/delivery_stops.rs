//! Delivery stops around Las Vegas and New York, grouped by area.
//!
//! Areas are tens of kilometres apart so any sensible zoning keeps them
//! separate.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zone_planner::Point;

/// A named stop with coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Stop {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Stop {
    pub const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self { name, lat, lon }
    }

    pub fn to_point(&self, id: impl Into<String>) -> Point {
        Point::new(id, self.name, self.lat, self.lon)
    }
}

pub const HENDERSON: &[Stop] = &[
    Stop::new("Green Valley Ranch", 36.0308, -115.0825),
    Stop::new("Sunset Station", 36.0614, -115.0631),
    Stop::new("Islander's Grill", 36.0335, -114.9856),
    Stop::new("Naga", 36.0138, -114.9929),
];

pub const NORTH_LAS_VEGAS: &[Stop] = &[
    Stop::new("Craig Ranch Park", 36.2575, -115.1614),
    Stop::new("Aliante", 36.2853, -115.1822),
    Stop::new("North Las Vegas Airport", 36.2107, -115.1944),
    Stop::new("Cheyenne Campus", 36.2178, -115.1251),
];

pub const SUMMERLIN: &[Stop] = &[
    Stop::new("Downtown Summerlin", 36.1500, -115.3310),
    Stop::new("Red Rock Casino", 36.1567, -115.3317),
    Stop::new("Angel Park", 36.1811, -115.2856),
    Stop::new("The Lakes", 36.1441, -115.2833),
];

/// Two tight pairs of stops in the New York area.
pub const MANHATTAN_PAIR: &[Stop] = &[
    Stop::new("Battery Park", 40.70, -74.00),
    Stop::new("Tribeca", 40.71, -74.01),
];

pub const PATERSON_PAIR: &[Stop] = &[
    Stop::new("Paterson Falls", 40.90, -74.20),
    Stop::new("Eastside Park", 40.91, -74.21),
];

/// Points from several areas, interleaved so each area is seen once before
/// any area repeats.
pub fn interleaved(areas: &[&[Stop]]) -> Vec<Point> {
    let longest = areas.iter().map(|a| a.len()).max().unwrap_or(0);
    let mut points = Vec::new();
    for i in 0..longest {
        for (area_idx, area) in areas.iter().enumerate() {
            if let Some(stop) = area.get(i) {
                points.push(stop.to_point(format!("a{}-{}", area_idx, i)));
            }
        }
    }
    points
}

/// Deterministic scatter of `n` points inside a lat/lon box.
pub fn scattered(n: usize, seed: u64, center: (f64, f64), spread_deg: f64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let half = spread_deg / 2.0;

    (0..n)
        .map(|i| {
            let lat = center.0 + rng.gen_range(-half..half);
            let lon = center.1 + rng.gen_range(-half..half);
            Point::new(format!("p{}", i), format!("Stop {}", i), lat, lon)
        })
        .collect()
}
