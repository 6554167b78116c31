//! OSRM-compatible driving route client.

use std::time::Duration;

use fuelroute_core::RoutePoint;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::TripError;

const DEFAULT_BASE_URL: &str = "http://router.project-osrm.org/";
const METERS_TO_MILES: f64 = 0.000_621_371;

/// A driving route: total distance, the decoded polyline, and the original
/// encoded geometry (kept for the API payload so map clients can render it).
#[derive(Debug, Clone)]
pub struct RouteSummary {
    pub distance_miles: f64,
    pub points: Vec<RoutePoint>,
    pub geometry: String,
}

#[derive(Debug, Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    /// Meters.
    distance: f64,
    /// Encoded polyline (precision 5).
    geometry: String,
}

/// Client for an OSRM-compatible routing service.
pub struct RoutingClient {
    client: Client,
    base_url: Url,
}

impl RoutingClient {
    /// Creates a client pointed at the public OSRM demo server.
    ///
    /// # Errors
    ///
    /// Returns [`TripError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, TripError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`TripError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`TripError::Malformed`] if `base_url`
    /// does not parse.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, TripError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| TripError::Malformed {
            context: "OSRM base URL".to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Fetches the driving route between two coordinates.
    ///
    /// OSRM addresses coordinates longitude-first. The response geometry is
    /// requested as an encoded polyline (`overview=full`) and decoded here so
    /// downstream matching works on plain lat/lon points.
    ///
    /// # Errors
    ///
    /// - [`TripError::RouteNotFound`] if OSRM reports anything but `"Ok"` or
    ///   returns no routes.
    /// - [`TripError::Http`] on network failure, non-2xx status, or an
    ///   unparseable JSON body.
    /// - [`TripError::Malformed`] if the polyline geometry does not decode.
    pub async fn route(&self, start: RoutePoint, end: RoutePoint) -> Result<RouteSummary, TripError> {
        let path = format!(
            "route/v1/driving/{},{};{},{}",
            start.lon, start.lat, end.lon, end.lat
        );
        let mut url = self.base_url.join(&path).map_err(|e| TripError::Malformed {
            context: "OSRM base URL".to_string(),
            reason: e.to_string(),
        })?;
        url.query_pairs_mut()
            .append_pair("overview", "full")
            .append_pair("geometries", "polyline");

        let body: OsrmResponse = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if body.code != "Ok" {
            tracing::debug!(code = %body.code, "OSRM declined to route");
            return Err(TripError::RouteNotFound);
        }
        let Some(route) = body.routes.into_iter().next() else {
            return Err(TripError::RouteNotFound);
        };

        let line = polyline::decode_polyline(&route.geometry, 5).map_err(|e| {
            TripError::Malformed {
                context: "OSRM route geometry".to_string(),
                reason: e.to_string(),
            }
        })?;
        // geo-types convention: x is longitude, y is latitude.
        let points: Vec<RoutePoint> = line
            .coords()
            .map(|c| RoutePoint { lat: c.y, lon: c.x })
            .collect();

        Ok(RouteSummary {
            distance_miles: route.distance * METERS_TO_MILES,
            points,
            geometry: route.geometry,
        })
    }
}
