//! Read operations for the `fuel_stations` table.

use sqlx::PgPool;

use super::types::FuelStationRow;

/// Load every station with known coordinates — the set the route matcher
/// works against. Stations whose geocoding failed are excluded here rather
/// than at match time.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn list_geocoded_stations(pool: &PgPool) -> Result<Vec<FuelStationRow>, sqlx::Error> {
    sqlx::query_as::<_, FuelStationRow>(
        "SELECT id, opis_id, name, address, city, state, price, \
                latitude, longitude, created_at, updated_at \
         FROM fuel_stations \
         WHERE latitude IS NOT NULL AND longitude IS NOT NULL \
         ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

/// Total station rows, geocoded or not.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn count_stations(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM fuel_stations")
        .fetch_one(pool)
        .await
}

/// Whether a station with this OPIS id has already been ingested.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn station_exists(pool: &PgPool, opis_id: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM fuel_stations WHERE opis_id = $1)",
    )
    .bind(opis_id)
    .fetch_one(pool)
    .await
}
