//! Write operations for the `fuel_stations` table.

use sqlx::PgPool;

use super::types::NewFuelStation;

/// Insert a station, or refresh the price and coordinates if the OPIS id is
/// already present. Returns the row id.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn upsert_station(pool: &PgPool, station: &NewFuelStation) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO fuel_stations \
             (opis_id, name, address, city, state, price, latitude, longitude) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
         ON CONFLICT (opis_id) DO UPDATE SET \
             name       = EXCLUDED.name, \
             address    = EXCLUDED.address, \
             city       = EXCLUDED.city, \
             state      = EXCLUDED.state, \
             price      = EXCLUDED.price, \
             latitude   = COALESCE(EXCLUDED.latitude, fuel_stations.latitude), \
             longitude  = COALESCE(EXCLUDED.longitude, fuel_stations.longitude), \
             updated_at = NOW() \
         RETURNING id",
    )
    .bind(&station.opis_id)
    .bind(&station.name)
    .bind(&station.address)
    .bind(&station.city)
    .bind(&station.state)
    .bind(station.price)
    .bind(station.latitude)
    .bind(station.longitude)
    .fetch_one(pool)
    .await
}
