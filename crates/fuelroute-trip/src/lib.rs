//! Trip planning over external providers: a Nominatim geocoding client, an
//! OSRM routing client with polyline geometry decoding, and the composition
//! that turns two place names plus a station set into a fuel plan.

mod error;
mod geocode;
mod plan;
mod routing;

pub use error::TripError;
pub use geocode::GeocodingClient;
pub use plan::{plan_route, RoutePlan};
pub use routing::{RouteSummary, RoutingClient};
