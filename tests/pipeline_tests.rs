//! CSV in, navigation links out.

use zone_planner::input::read_points;
use zone_planner::links::{navigation_links, LinkOptions};
use zone_planner::{Planner, PlannerError};

const STOPS_CSV: &str = "\
id,name,latitude,longitude,address
a1,Battery Park,40.70,-74.00,State St
a2,Tribeca,40.71,-74.01,
b1,Paterson Falls,40.90,-74.20,McBride Ave
b2,Eastside Park,40.91,-74.21,
";

#[test]
fn csv_to_links() {
    let points = read_points(STOPS_CSV.as_bytes()).unwrap();
    let planner: Planner = Planner::default();
    let routes = planner.optimize(points, 2).unwrap();

    assert_eq!(routes.len(), 2);
    for route in &routes {
        let links = navigation_links(route, &LinkOptions::default()).unwrap();
        assert_eq!(links.len(), 1);

        let first = &route.stops()[0];
        let origin = links[0]
            .query_pairs()
            .find(|(k, _)| k == "origin")
            .map(|(_, v)| v.into_owned());
        assert_eq!(origin, Some(format!("{:.6},{:.6}", first.lat, first.lon)));
    }
}

#[test]
fn zero_zones_is_refused_before_any_work() {
    let points = read_points(STOPS_CSV.as_bytes()).unwrap();
    let planner: Planner = Planner::default();
    assert_eq!(planner.optimize(points, 0), Err(PlannerError::InvalidZoneCount(0)));
}
