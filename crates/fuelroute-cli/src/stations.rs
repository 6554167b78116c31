//! Station ingest: parse the OPIS retail price CSV, geocode each new
//! station's city/state, and upsert the rows.
//!
//! Geocoding uses city + state rather than the full street address — coarser,
//! but far more reliable against Nominatim. A failed geocode is not fatal:
//! the station is stored without coordinates and the matcher skips it until a
//! later ingest fills them in.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use fuelroute_core::AppConfig;
use fuelroute_db::NewFuelStation;
use fuelroute_trip::GeocodingClient;
use serde::Deserialize;
use sqlx::PgPool;

/// One row of the OPIS price feed.
#[derive(Debug, Deserialize)]
struct StationRecord {
    #[serde(rename = "OPIS Truckstop ID")]
    opis_id: String,
    #[serde(rename = "Truckstop Name")]
    name: String,
    #[serde(rename = "Address")]
    address: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "Retail Price")]
    price: f64,
}

pub async fn load_stations(pool: &PgPool, config: &AppConfig, path: &Path) -> anyhow::Result<()> {
    let geocoder = GeocodingClient::with_base_url(
        config.http_timeout_secs,
        &config.user_agent,
        &config.geocoder_base_url,
    )?;

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open station CSV at {}", path.display()))?;

    tracing::info!(path = %path.display(), "parsing CSV and geocoding stations; this may take a while");

    let mut processed = 0u64;
    let mut skipped = 0u64;
    let mut ungeocodable = 0u64;

    for result in reader.deserialize() {
        let record: StationRecord = result.context("malformed CSV row")?;

        if fuelroute_db::station_exists(pool, &record.opis_id).await? {
            skipped += 1;
            continue;
        }

        let query = format!("{}, {}, USA", record.city, record.state);
        let coords = match geocoder.resolve(&query).await {
            Ok(point) => Some(point),
            Err(e) => {
                // Stored without coordinates; excluded from matching, not retried
                // during planning.
                tracing::debug!(opis_id = %record.opis_id, query = %query, error = %e, "geocode miss");
                ungeocodable += 1;
                None
            }
        };

        // Nominatim's usage policy: at most one request per second.
        tokio::time::sleep(Duration::from_millis(config.geocode_delay_ms)).await;

        fuelroute_db::upsert_station(
            pool,
            &NewFuelStation {
                opis_id: record.opis_id,
                name: record.name,
                address: record.address,
                city: record.city,
                state: record.state,
                price: record.price,
                latitude: coords.map(|p| p.lat),
                longitude: coords.map(|p| p.lon),
            },
        )
        .await?;

        processed += 1;
        if processed % 25 == 0 {
            tracing::info!(processed, "station ingest progress");
        }
    }

    let total = fuelroute_db::count_stations(pool).await?;
    tracing::info!(processed, skipped, ungeocodable, total, "station ingest complete");
    Ok(())
}
