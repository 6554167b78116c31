//! Nominatim-compatible forward geocoding client.

use std::time::Duration;

use fuelroute_core::RoutePoint;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::TripError;

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org/";

/// One entry of a Nominatim search response. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

/// Client for a Nominatim-compatible geocoding service.
///
/// Use [`GeocodingClient::new`] for production or
/// [`GeocodingClient::with_base_url`] to point at a mock server in tests.
pub struct GeocodingClient {
    client: Client,
    base_url: Url,
}

impl GeocodingClient {
    /// Creates a client pointed at the public Nominatim instance.
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

        // Normalise: exactly one trailing slash so Url::join keeps the path.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| TripError::Malformed {
            context: "geocoder base URL".to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Resolves a free-form place name ("New York, NY") to coordinates via
    /// `/search?q=..&format=json&limit=1`.
    ///
    /// # Errors
    ///
    /// - [`TripError::GeocodeFailed`] if the service returns no results.
    /// - [`TripError::Http`] on network failure, non-2xx status, or a body
    ///   that is not valid JSON for the expected shape.
    /// - [`TripError::Malformed`] if a result's coordinates do not parse.
    pub async fn resolve(&self, place: &str) -> Result<RoutePoint, TripError> {
        let mut url = self.base_url.join("search").map_err(|e| TripError::Malformed {
            context: "geocoder base URL".to_string(),
            reason: e.to_string(),
        })?;
        url.query_pairs_mut()
            .append_pair("q", place)
            .append_pair("format", "json")
            .append_pair("limit", "1");

        let places: Vec<NominatimPlace> = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let Some(first) = places.into_iter().next() else {
            return Err(TripError::GeocodeFailed {
                query: place.to_string(),
            });
        };

        let parse = |field: &str, raw: &str| -> Result<f64, TripError> {
            raw.parse::<f64>().map_err(|e| TripError::Malformed {
                context: format!("geocoder result for '{place}'"),
                reason: format!("{field} '{raw}' is not a number: {e}"),
            })
        };

        Ok(RoutePoint {
            lat: parse("lat", &first.lat)?,
            lon: parse("lon", &first.lon)?,
        })
    }
}
