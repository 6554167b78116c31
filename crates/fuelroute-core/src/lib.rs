//! Pure domain logic for the fuel-route planner: station/route types, the
//! great-circle distance helper, the route-to-station matcher, and the
//! range-constrained fuel-stop optimizer. No I/O happens in this crate.

pub mod app_config;
mod config;
pub mod geo;
pub mod matcher;
pub mod optimizer;
mod types;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use optimizer::round2;
pub use types::{CandidateStop, FuelPlan, FuelStation, FuelStop, RoutePoint};

/// Errors raised by the matcher and optimizer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A precondition violation (empty route, non-positive distance/range/mpg).
    /// Invalid inputs fail fast rather than producing silently wrong numbers.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No fuel station is reachable from the given mile-marker with the
    /// current tank. Recoverable: callers surface the mile-marker to the user.
    #[error("route impossible: no fuel station reachable past mile-marker {mile_marker}")]
    RouteInfeasible { mile_marker: f64 },
}

/// Errors raised while loading application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
