use fuelroute_core::CoreError;
use thiserror::Error;

/// Errors surfaced while planning a trip.
///
/// The client-facing variants carry messages suitable for direct display;
/// everything else is an internal fault callers should keep opaque.
#[derive(Debug, Error)]
pub enum TripError {
    /// The geocoding provider returned no result for a place name.
    #[error("could not geocode location: {query}")]
    GeocodeFailed { query: String },

    /// The routing provider found no drivable path between the coordinates.
    #[error("no drivable route found between the given locations")]
    RouteNotFound,

    /// The optimizer ran out of reachable stations; the mile-marker says
    /// where the trip becomes impossible.
    #[error("route impossible: no fuel station reachable past mile-marker {mile_marker}")]
    RouteInfeasible { mile_marker: f64 },

    /// Caller-supplied input failed validation (blank place name, etc.).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provider responded with data we could not make sense of.
    #[error("malformed response from {context}: {reason}")]
    Malformed { context: String, reason: String },
}

impl TripError {
    /// Whether the error is the caller's to fix (bad place names, impossible
    /// trips) as opposed to an internal/provider fault.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::GeocodeFailed { .. }
                | Self::RouteNotFound
                | Self::RouteInfeasible { .. }
                | Self::InvalidInput(_)
        )
    }
}

impl From<CoreError> for TripError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(msg) => Self::InvalidInput(msg),
            CoreError::RouteInfeasible { mile_marker } => Self::RouteInfeasible { mile_marker },
        }
    }
}
