//! Row types for the `fuel_stations` table.

use chrono::{DateTime, Utc};
use fuelroute_core::FuelStation;

/// Input record for inserting/upserting a fuel station during CSV ingest.
#[derive(Debug, Clone)]
pub struct NewFuelStation {
    pub opis_id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub price: f64,
    /// `None` when geocoding failed; the row is still stored and simply
    /// excluded from route matching.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// A row from the `fuel_stations` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FuelStationRow {
    pub id: i64,
    pub opis_id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub price: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FuelStationRow> for FuelStation {
    fn from(row: FuelStationRow) -> Self {
        Self {
            id: row.id,
            opis_id: row.opis_id,
            name: row.name,
            address: row.address,
            city: row.city,
            state: row.state,
            price: row.price,
            latitude: row.latitude,
            longitude: row.longitude,
        }
    }
}
