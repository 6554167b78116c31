//! Ad-hoc trip planning against the live providers, printed as JSON.

use fuelroute_core::{AppConfig, FuelStation};
use fuelroute_trip::{GeocodingClient, RoutingClient};
use sqlx::PgPool;

pub async fn run(pool: &PgPool, config: &AppConfig, start: &str, finish: &str) -> anyhow::Result<()> {
    let geocoder = GeocodingClient::with_base_url(
        config.http_timeout_secs,
        &config.user_agent,
        &config.geocoder_base_url,
    )?;
    let router = RoutingClient::with_base_url(
        config.http_timeout_secs,
        &config.user_agent,
        &config.osrm_base_url,
    )?;

    let stations: Vec<FuelStation> = fuelroute_db::list_geocoded_stations(pool)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    tracing::info!(stations = stations.len(), "loaded geocoded stations");

    let plan = fuelroute_trip::plan_route(
        &geocoder,
        &router,
        &stations,
        start,
        finish,
        config.max_range_miles,
        config.mpg,
    )
    .await?;

    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
