//! Queries and row types for the `fuel_stations` table.

pub mod read;
pub mod types;
pub mod write;
