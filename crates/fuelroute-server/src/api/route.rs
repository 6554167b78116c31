//! The trip-planning endpoint: geocode both endpoints, route between them,
//! and plan fuel stops against the stored station set.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use fuelroute_core::FuelStation;
use fuelroute_trip::{RoutePlan, TripError};

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct RouteQuery {
    start: Option<String>,
    finish: Option<String>,
}

pub(super) async fn plan_trip(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<RouteQuery>,
) -> Result<Json<ApiResponse<RoutePlan>>, ApiError> {
    let (Some(start), Some(finish)) = (params.start, params.finish) else {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "both 'start' and 'finish' query parameters are required",
        ));
    };

    let rows = fuelroute_db::list_geocoded_stations(&state.pool)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &fuelroute_db::DbError::from(e)))?;
    let stations: Vec<FuelStation> = rows.into_iter().map(Into::into).collect();

    let plan = fuelroute_trip::plan_route(
        &state.geocoder,
        &state.router,
        &stations,
        &start,
        &finish,
        state.config.max_range_miles,
        state.config.mpg,
    )
    .await
    .map_err(|e| map_trip_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: plan,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// Client-facing trip failures keep their message (geocode misses, no route,
/// infeasible trips); anything else is logged and kept opaque.
fn map_trip_error(request_id: String, error: &TripError) -> ApiError {
    if error.is_client_error() {
        ApiError::new(request_id, "bad_request", error.to_string())
    } else {
        tracing::error!(error = %error, "trip planning failed");
        ApiError::new(request_id, "internal_error", "trip planning failed")
    }
}
