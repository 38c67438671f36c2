//! Navigation links for ordered routes.
//!
//! Builds Google Maps directions URLs. The service caps waypoints per link,
//! so long routes are split into consecutive legs that share their boundary
//! stop.

use std::fmt;

use reqwest::Url;

use crate::point::{Point, Route};

const DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/";

#[derive(Debug, Clone)]
pub struct LinkOptions {
    /// Stops per link including origin and destination.
    pub max_stops_per_link: usize,
    /// Value for the `travelmode` parameter.
    pub travel_mode: String,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            max_stops_per_link: 10,
            travel_mode: "driving".to_string(),
        }
    }
}

#[derive(Debug)]
pub enum LinkError {
    /// A segment needs at least an origin and a destination.
    InvalidSegmentSize(usize),
    /// URL assembly failed.
    Url(String),
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::InvalidSegmentSize(size) => {
                write!(f, "links need at least 2 stops each, got {}", size)
            }
            LinkError::Url(err) => write!(f, "cannot build link: {}", err),
        }
    }
}

impl std::error::Error for LinkError {}

/// Directions links covering every stop of `route` in order.
pub fn navigation_links(route: &Route, options: &LinkOptions) -> Result<Vec<Url>, LinkError> {
    let size = options.max_stops_per_link;
    if size < 2 {
        return Err(LinkError::InvalidSegmentSize(size));
    }

    let stops = route.stops();
    match stops.len() {
        0 => Ok(Vec::new()),
        1 => Ok(vec![directions_url(None, &[], &stops[0], options)?]),
        _ => segments(stops, size)
            .into_iter()
            .map(|segment| {
                let (origin, rest) = segment.split_first().ok_or(LinkError::InvalidSegmentSize(size))?;
                let (destination, waypoints) =
                    rest.split_last().ok_or(LinkError::InvalidSegmentSize(size))?;
                directions_url(Some(origin), waypoints, destination, options)
            })
            .collect(),
    }
}

/// Windows of at most `size` stops where each window starts on the previous
/// window's last stop.
fn segments(stops: &[Point], size: usize) -> Vec<&[Point]> {
    let mut out = Vec::new();
    let mut start = 0;
    while start + 1 < stops.len() {
        let end = (start + size).min(stops.len());
        out.push(&stops[start..end]);
        start = end - 1;
    }
    out
}

fn directions_url(
    origin: Option<&Point>,
    waypoints: &[Point],
    destination: &Point,
    options: &LinkOptions,
) -> Result<Url, LinkError> {
    let mut params: Vec<(&str, String)> = vec![("api", "1".to_string())];
    if let Some(origin) = origin {
        params.push(("origin", coordinate(origin)));
    }
    params.push(("destination", coordinate(destination)));
    if !waypoints.is_empty() {
        let joined = waypoints.iter().map(coordinate).collect::<Vec<_>>().join("|");
        params.push(("waypoints", joined));
    }
    params.push(("travelmode", options.travel_mode.clone()));

    Url::parse_with_params(DIRECTIONS_URL, &params).map_err(|err| LinkError::Url(err.to_string()))
}

fn coordinate(point: &Point) -> String {
    format!("{:.6},{:.6}", point.lat, point.lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route_of(n: usize) -> Route {
        let stops = (0..n)
            .map(|i| {
                let mut p = Point::new(format!("s{}", i), format!("Stop {}", i), 40.0 + i as f64 * 0.01, -74.0);
                p.cluster = Some(0);
                p.order = Some(i + 1);
                p
            })
            .collect();
        Route::new(0, stops)
    }

    fn query(url: &Url, key: &str) -> Option<String> {
        url.query_pairs().find(|(k, _)| k == key).map(|(_, v)| v.into_owned())
    }

    #[test]
    fn test_empty_route_has_no_links() {
        assert!(navigation_links(&route_of(0), &LinkOptions::default()).unwrap().is_empty());
    }

    #[test]
    fn test_single_stop_is_destination_only() {
        let links = navigation_links(&route_of(1), &LinkOptions::default()).unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(query(&links[0], "destination").as_deref(), Some("40.000000,-74.000000"));
        assert_eq!(query(&links[0], "origin"), None);
    }

    #[test]
    fn test_short_route_uses_one_link() {
        let links = navigation_links(&route_of(3), &LinkOptions::default()).unwrap();
        assert_eq!(links.len(), 1);
        let link = &links[0];
        assert_eq!(link.host_str(), Some("www.google.com"));
        assert_eq!(query(link, "api").as_deref(), Some("1"));
        assert_eq!(query(link, "origin").as_deref(), Some("40.000000,-74.000000"));
        assert_eq!(query(link, "waypoints").as_deref(), Some("40.010000,-74.000000"));
        assert_eq!(query(link, "destination").as_deref(), Some("40.020000,-74.000000"));
        assert_eq!(query(link, "travelmode").as_deref(), Some("driving"));
    }

    #[test]
    fn test_long_route_is_split_with_shared_boundary() {
        let options = LinkOptions {
            max_stops_per_link: 4,
            ..LinkOptions::default()
        };
        let route = route_of(7);
        let links = navigation_links(&route, &options).unwrap();

        // 0-3, 3-6
        assert_eq!(links.len(), 2);
        assert_eq!(query(&links[0], "destination"), query(&links[1], "origin"));
        assert_eq!(query(&links[1], "destination").as_deref(), Some("40.060000,-74.000000"));
    }

    #[test]
    fn test_segments_cover_every_stop() {
        let route = route_of(12);
        let windows = segments(route.stops(), 5);
        let mut covered: Vec<&str> = windows[0].iter().map(|p| p.id.as_str()).collect();
        for window in &windows[1..] {
            covered.extend(window.iter().skip(1).map(|p| p.id.as_str()));
        }
        let expected: Vec<&str> = route.stops().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(covered, expected);
        assert!(windows.iter().all(|w| w.len() <= 5 && w.len() >= 2));
    }

    #[test]
    fn test_rejects_tiny_segments() {
        let options = LinkOptions {
            max_stops_per_link: 1,
            ..LinkOptions::default()
        };
        assert!(matches!(
            navigation_links(&route_of(3), &options),
            Err(LinkError::InvalidSegmentSize(1))
        ));
    }
}
