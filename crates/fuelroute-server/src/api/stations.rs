//! Read-only station listing, a small window into the ingested store.

use axum::{extract::State, Extension, Json};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct StationListing {
    pub count: usize,
    pub stations: Vec<StationItem>,
}

#[derive(Debug, Serialize)]
pub(super) struct StationItem {
    pub opis_id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
}

pub(super) async fn list_stations(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<StationListing>>, ApiError> {
    let rows = fuelroute_db::list_geocoded_stations(&state.pool)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &fuelroute_db::DbError::from(e)))?;

    // Rows come from the geocoded-only query, so coordinates are present.
    let stations: Vec<StationItem> = rows
        .into_iter()
        .filter_map(|row| {
            let (Some(latitude), Some(longitude)) = (row.latitude, row.longitude) else {
                return None;
            };
            Some(StationItem {
                opis_id: row.opis_id,
                name: row.name,
                address: row.address,
                city: row.city,
                state: row.state,
                price: row.price,
                latitude,
                longitude,
            })
        })
        .collect();

    Ok(Json(ApiResponse {
        data: StationListing {
            count: stations.len(),
            stations,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_listing_carries_count_and_rows() {
        let listing = StationListing {
            count: 1,
            stations: vec![StationItem {
                opis_id: "1234".to_string(),
                name: "Pilot Travel Center".to_string(),
                address: "I-80 Exit 318".to_string(),
                city: "Big Springs".to_string(),
                state: "NE".to_string(),
                price: 3.29,
                latitude: 41.06,
                longitude: -102.07,
            }],
        };
        let json = serde_json::to_string(&listing).expect("serialize");
        assert!(json.contains("\"count\":1"));
        assert!(json.contains("\"opis_id\":\"1234\""));
        assert!(json.contains("\"state\":\"NE\""));
    }
}
