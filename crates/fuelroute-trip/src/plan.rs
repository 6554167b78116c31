//! Trip composition: geocode both endpoints, fetch the route, match
//! stations against it, and run the fuel-stop optimizer.

use fuelroute_core::{
    matcher::match_stations_along_route, optimizer::optimize_fuel_stops, round2, FuelStation,
    FuelStop,
};
use serde::Serialize;

use crate::error::TripError;
use crate::geocode::GeocodingClient;
use crate::routing::RoutingClient;

/// The complete answer to "how do I drive from A to B and what do I pay for
/// fuel": route geometry for rendering, distance, cost, and the stop list.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    /// Encoded polyline, exactly as the routing provider returned it.
    pub route_geometry: String,
    pub total_distance_miles: f64,
    pub total_cost: f64,
    pub fuel_stops: Vec<FuelStop>,
}

/// Plans a trip between two place names.
///
/// `stations` is the fully materialized geocoded station set; loading it is
/// the caller's concern. `max_range` and `mpg` describe the vehicle.
///
/// # Errors
///
/// - [`TripError::InvalidInput`] if either place name is blank.
/// - [`TripError::GeocodeFailed`] if an endpoint cannot be resolved.
/// - [`TripError::RouteNotFound`] if no drivable route exists.
/// - [`TripError::RouteInfeasible`] if the station network cannot cover the
///   route with the given range.
/// - [`TripError::Http`] / [`TripError::Malformed`] on provider faults.
pub async fn plan_route(
    geocoder: &GeocodingClient,
    router: &RoutingClient,
    stations: &[FuelStation],
    start: &str,
    finish: &str,
    max_range: f64,
    mpg: f64,
) -> Result<RoutePlan, TripError> {
    let start = start.trim();
    let finish = finish.trim();
    if start.is_empty() || finish.is_empty() {
        return Err(TripError::InvalidInput(
            "both start and finish locations are required".to_string(),
        ));
    }

    let start_point = geocoder.resolve(start).await?;
    let finish_point = geocoder.resolve(finish).await?;

    let route = router.route(start_point, finish_point).await?;
    tracing::info!(
        distance_miles = route.distance_miles,
        points = route.points.len(),
        "route resolved"
    );

    let candidates = match_stations_along_route(&route.points, route.distance_miles, stations)?;
    tracing::debug!(candidates = candidates.len(), "stations matched along route");

    let plan = optimize_fuel_stops(&candidates, route.distance_miles, max_range, mpg)?;

    Ok(RoutePlan {
        route_geometry: route.geometry,
        total_distance_miles: round2(route.distance_miles),
        total_cost: round2(plan.total_cost),
        fuel_stops: plan.stops,
    })
}
