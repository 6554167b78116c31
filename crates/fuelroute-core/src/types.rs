use serde::{Deserialize, Serialize};

/// A fuel station record as loaded from the store.
///
/// `latitude`/`longitude` are `None` when geocoding failed at ingest time;
/// such stations are skipped by the matcher and never appear in a plan.
#[derive(Debug, Clone)]
pub struct FuelStation {
    pub id: i64,
    pub opis_id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    /// Retail price, currency per gallon. Always positive.
    pub price: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl FuelStation {
    /// Both coordinates, or `None` if either is missing.
    #[must_use]
    pub fn coordinates(&self) -> Option<RoutePoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(RoutePoint { lat, lon }),
            _ => None,
        }
    }
}

/// One vertex of a route polyline, in degrees. A route is a non-empty
/// sequence of these in travel order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub lat: f64,
    pub lon: f64,
}

/// A station matched against a route, annotated with its estimated
/// distance-along-route. Built once per matcher call and consumed by the
/// optimizer; at most one per distinct station.
#[derive(Debug, Clone)]
pub struct CandidateStop {
    pub station_id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    /// Estimated miles from the route start, derived from sampled-point index.
    pub distance_from_start: f64,
    pub price: f64,
}

/// One refueling stop in the final plan.
#[derive(Debug, Clone, Serialize)]
pub struct FuelStop {
    pub station_name: String,
    /// "City, ST" display label.
    pub location: String,
    pub gallons_purchased: f64,
    pub price_per_gallon: f64,
    pub cost_at_stop: f64,
    pub mile_marker: f64,
}

/// The optimizer's output: refueling stops in travel order plus total cost.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FuelPlan {
    pub stops: Vec<FuelStop>,
    pub total_cost: f64,
}
