//! Great-circle geometry on lat/lon coordinates in degrees.

use crate::RoutePoint;

/// Mean Earth radius in miles, matching the constant used when station
/// proximity thresholds were calibrated.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Haversine distance between two points, in miles.
#[must_use]
pub fn haversine_miles(a: RoutePoint, b: RoutePoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    EARTH_RADIUS_MILES * 2.0 * h.sqrt().asin()
}
