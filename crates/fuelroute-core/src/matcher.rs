//! Route-to-station matching.
//!
//! Down-samples the route polyline, then checks each sampled point against
//! the station set with a haversine proximity test. Each station is matched
//! at most once, at the first sampled point (in travel order) that falls
//! within the radius, and annotated with that point's estimated
//! distance-along-route.

use std::collections::HashSet;

use crate::geo::haversine_miles;
use crate::{CandidateStop, CoreError, FuelStation, RoutePoint};

/// A station counts as "on the route" if it lies within this many miles of a
/// sampled route point.
pub const MATCH_RADIUS_MILES: f64 = 15.0;

/// Upper bound on sampled points per route; keeps proximity checks near
/// O(100 × stations) regardless of polyline density, at the cost of a
/// coarser distance-along-route estimate.
const MAX_SAMPLED_POINTS: usize = 100;

/// Matches stations against a route, returning candidates ordered by
/// distance from the start.
///
/// Stations without coordinates are skipped. An empty result is not an
/// error: infeasibility is the optimizer's call, not the matcher's.
///
/// The per-sample distance estimate assumes roughly uniform spacing of
/// polyline points; on routes with very uneven point density the
/// mile-markers drift accordingly.
///
/// # Errors
///
/// Returns [`CoreError::InvalidInput`] if the route is empty or the total
/// distance is not positive.
pub fn match_stations_along_route(
    route: &[RoutePoint],
    total_distance_miles: f64,
    stations: &[FuelStation],
) -> Result<Vec<CandidateStop>, CoreError> {
    if route.is_empty() {
        return Err(CoreError::InvalidInput(
            "route must contain at least one point".to_string(),
        ));
    }
    if total_distance_miles <= 0.0 {
        return Err(CoreError::InvalidInput(format!(
            "total route distance must be positive, got {total_distance_miles}"
        )));
    }

    // Check every ~1% of the route. A single-point route still yields one
    // sampled point (step defaults to 1).
    let step = (route.len() / MAX_SAMPLED_POINTS).max(1);
    let sampled: Vec<RoutePoint> = route.iter().copied().step_by(step).collect();
    let miles_per_step = total_distance_miles / sampled.len() as f64;

    // Matched-station tracking is scoped to this call.
    let mut matched: HashSet<i64> = HashSet::new();
    let mut candidates: Vec<CandidateStop> = Vec::new();

    for (index, point) in sampled.iter().enumerate() {
        let distance_from_start = index as f64 * miles_per_step;

        for station in stations {
            if matched.contains(&station.id) {
                continue;
            }
            let Some(coords) = station.coordinates() else {
                continue;
            };
            // First sampled point within radius wins, even if a later point
            // is closer.
            if haversine_miles(*point, coords) <= MATCH_RADIUS_MILES {
                candidates.push(CandidateStop {
                    station_id: station.id,
                    name: station.name.clone(),
                    city: station.city.clone(),
                    state: station.state.clone(),
                    distance_from_start,
                    price: station.price,
                });
                matched.insert(station.id);
            }
        }
    }

    candidates.sort_by(|a, b| a.distance_from_start.total_cmp(&b.distance_from_start));
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: i64, name: &str, price: f64, coords: Option<(f64, f64)>) -> FuelStation {
        FuelStation {
            id,
            opis_id: format!("opis-{id}"),
            name: name.to_string(),
            address: "1 Test Rd".to_string(),
            city: "Testville".to_string(),
            state: "TS".to_string(),
            price,
            latitude: coords.map(|c| c.0),
            longitude: coords.map(|c| c.1),
        }
    }

    /// A straight west-to-east route along the equator; one degree of
    /// longitude there is ~69 miles, so adjacent points are far apart.
    fn equator_route(points: usize) -> Vec<RoutePoint> {
        (0..points)
            .map(|i| RoutePoint {
                lat: 0.0,
                lon: i as f64,
            })
            .collect()
    }

    #[test]
    fn empty_route_is_rejected() {
        let result = match_stations_along_route(&[], 100.0, &[]);
        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn non_positive_distance_is_rejected() {
        let route = equator_route(2);
        assert!(matches!(
            match_stations_along_route(&route, 0.0, &[]),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(matches!(
            match_stations_along_route(&route, -5.0, &[]),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn empty_station_set_yields_empty_result() {
        let route = equator_route(10);
        let candidates = match_stations_along_route(&route, 620.0, &[]).expect("matcher ok");
        assert!(candidates.is_empty());
    }

    #[test]
    fn stations_without_coordinates_are_never_matched() {
        let route = equator_route(10);
        let stations = vec![
            station(1, "No Coords", 3.0, None),
            station(2, "On Route", 3.2, Some((0.0, 4.0))),
        ];
        let candidates =
            match_stations_along_route(&route, 620.0, &stations).expect("matcher ok");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].station_id, 2);
    }

    #[test]
    fn far_away_stations_are_excluded() {
        let route = equator_route(10);
        // ~20 degrees of latitude off the route, way past the 15-mile radius.
        let stations = vec![station(1, "Far", 2.5, Some((20.0, 4.0)))];
        let candidates =
            match_stations_along_route(&route, 620.0, &stations).expect("matcher ok");
        assert!(candidates.is_empty());
    }

    #[test]
    fn each_station_appears_at_most_once() {
        // A station near several consecutive route points must still match
        // only once, at the first point within radius.
        let route: Vec<RoutePoint> = (0..10)
            .map(|i| RoutePoint {
                lat: 0.0,
                lon: i as f64 * 0.05, // ~3.5 miles apart; many within radius
            })
            .collect();
        let stations = vec![station(7, "Clustered", 3.1, Some((0.0, 0.1)))];
        let candidates =
            match_stations_along_route(&route, 31.0, &stations).expect("matcher ok");
        assert_eq!(candidates.len(), 1);
        // First in-radius sampled point is index 0, so the candidate sits at
        // the route start rather than its nearest point.
        assert!((candidates[0].distance_from_start - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn output_is_sorted_by_distance_from_start() {
        let route = equator_route(100);
        // Listed out of route order on purpose.
        let stations = vec![
            station(1, "Late", 3.0, Some((0.0, 80.0))),
            station(2, "Early", 3.5, Some((0.0, 5.0))),
            station(3, "Middle", 2.9, Some((0.0, 40.0))),
        ];
        let candidates =
            match_stations_along_route(&route, 6_900.0, &stations).expect("matcher ok");
        assert_eq!(candidates.len(), 3);
        for pair in candidates.windows(2) {
            assert!(pair[0].distance_from_start <= pair[1].distance_from_start);
        }
        assert_eq!(candidates[0].station_id, 2);
        assert_eq!(candidates[2].station_id, 1);
    }

    #[test]
    fn single_point_route_still_samples_one_point() {
        let route = vec![RoutePoint { lat: 0.0, lon: 0.0 }];
        let stations = vec![station(1, "Origin", 3.0, Some((0.0, 0.05)))];
        let candidates =
            match_stations_along_route(&route, 1.0, &stations).expect("matcher ok");
        assert_eq!(candidates.len(), 1);
        assert!((candidates[0].distance_from_start - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn long_polylines_are_downsampled() {
        // 1000 points → step 10 → 100 samples. The station sits on a point
        // that survives sampling, so it must still match.
        let route: Vec<RoutePoint> = (0..1000)
            .map(|i| RoutePoint {
                lat: 0.0,
                lon: i as f64 * 0.01,
            })
            .collect();
        let stations = vec![station(1, "Sampled", 3.0, Some((0.0, 5.0)))];
        let candidates =
            match_stations_along_route(&route, 690.0, &stations).expect("matcher ok");
        assert_eq!(candidates.len(), 1);
    }
}
