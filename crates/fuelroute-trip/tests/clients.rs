//! Integration tests for the geocoding/routing clients and the plan
//! composition, using wiremock HTTP mocks.

use fuelroute_core::{FuelStation, RoutePoint};
use fuelroute_trip::{plan_route, GeocodingClient, RoutingClient, TripError};
use geo_types::coord;
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn geocoder(base_url: &str) -> GeocodingClient {
    GeocodingClient::with_base_url(30, "fuelroute-tests", base_url)
        .expect("client construction should not fail")
}

fn router(base_url: &str) -> RoutingClient {
    RoutingClient::with_base_url(30, "fuelroute-tests", base_url)
        .expect("client construction should not fail")
}

/// Encoded polyline for an equator-hugging 5-point route, lon 0..8.
fn equator_geometry() -> String {
    let coords = vec![
        coord! { x: 0.0, y: 0.0 },
        coord! { x: 2.0, y: 0.0 },
        coord! { x: 4.0, y: 0.0 },
        coord! { x: 6.0, y: 0.0 },
        coord! { x: 8.0, y: 0.0 },
    ];
    polyline::encode_coordinates(coords, 5).expect("encoding static coords cannot fail")
}

fn station(id: i64, name: &str, price: f64, lat: f64, lon: f64) -> FuelStation {
    FuelStation {
        id,
        opis_id: format!("opis-{id}"),
        name: name.to_string(),
        address: "1 Interstate Way".to_string(),
        city: "Waypoint".to_string(),
        state: "EQ".to_string(),
        price,
        latitude: Some(lat),
        longitude: Some(lon),
    }
}

#[tokio::test]
async fn geocoder_resolves_the_first_result() {
    let server = MockServer::start().await;

    let body = serde_json::json!([
        { "lat": "40.7128", "lon": "-74.0060", "display_name": "New York" }
    ]);
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "New York, NY"))
        .and(query_param("format", "json"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let point = geocoder(&server.uri())
        .resolve("New York, NY")
        .await
        .expect("should resolve");
    assert!((point.lat - 40.7128).abs() < f64::EPSILON);
    assert!((point.lon - (-74.0060)).abs() < f64::EPSILON);
}

#[tokio::test]
async fn geocoder_reports_unknown_places() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let result = geocoder(&server.uri()).resolve("Atlantis").await;
    match result {
        Err(TripError::GeocodeFailed { query }) => assert_eq!(query, "Atlantis"),
        other => panic!("expected GeocodeFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn geocoder_rejects_unparseable_coordinates() {
    let server = MockServer::start().await;

    let body = serde_json::json!([{ "lat": "forty", "lon": "-74.0" }]);
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let result = geocoder(&server.uri()).resolve("New York, NY").await;
    assert!(matches!(result, Err(TripError::Malformed { .. })));
}

#[tokio::test]
async fn router_decodes_distance_and_geometry() {
    let server = MockServer::start().await;

    let geometry = equator_geometry();
    let body = serde_json::json!({
        "code": "Ok",
        "routes": [ { "distance": 1_287_477.0, "geometry": geometry } ]
    });
    Mock::given(method("GET"))
        .and(path_regex(r"^/route/v1/driving/.*"))
        .and(query_param("overview", "full"))
        .and(query_param("geometries", "polyline"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let summary = router(&server.uri())
        .route(
            RoutePoint { lat: 0.0, lon: 0.0 },
            RoutePoint { lat: 0.0, lon: 8.0 },
        )
        .await
        .expect("should route");

    assert!((summary.distance_miles - 800.0).abs() < 0.01);
    assert_eq!(summary.geometry, geometry);
    assert_eq!(summary.points.len(), 5);
    assert!((summary.points[0].lat - 0.0).abs() < 1e-5);
    assert!((summary.points[4].lon - 8.0).abs() < 1e-5);
}

#[tokio::test]
async fn router_maps_osrm_refusal_to_route_not_found() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "code": "NoRoute", "message": "Impossible route." });
    Mock::given(method("GET"))
        .and(path_regex(r"^/route/v1/driving/.*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let result = router(&server.uri())
        .route(
            RoutePoint { lat: 0.0, lon: 0.0 },
            RoutePoint { lat: 0.0, lon: 8.0 },
        )
        .await;
    assert!(matches!(result, Err(TripError::RouteNotFound)));
}

#[tokio::test]
async fn plan_route_composes_the_full_pipeline() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Start City"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!([{ "lat": "0.0", "lon": "0.0" }]),
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Finish City"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!([{ "lat": "0.0", "lon": "8.0" }]),
        ))
        .mount(&server)
        .await;

    let geometry = equator_geometry();
    Mock::given(method("GET"))
        .and(path_regex(r"^/route/v1/driving/.*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": "Ok",
            "routes": [ { "distance": 1_287_477.0, "geometry": geometry } ]
        })))
        .mount(&server)
        .await;

    // The 5 sampled points sit at mile-markers 0, 160, 320, 480, 640 on the
    // ~800-mile route. Stations sit exactly on the middle three points; the
    // cheapest one in the first tank window is at mile 320, after which the
    // remaining 480 miles fit in one tank.
    let stations = vec![
        station(1, "Nearside Fuel", 3.00, 0.0, 2.0),
        station(2, "Midway Fuel", 2.80, 0.0, 4.0),
        station(3, "Farside Fuel", 3.50, 0.0, 6.0),
    ];

    let plan = plan_route(
        &geocoder(&server.uri()),
        &router(&server.uri()),
        &stations,
        "Start City",
        "Finish City",
        500.0,
        10.0,
    )
    .await
    .expect("plan should succeed");

    assert_eq!(plan.route_geometry, geometry);
    assert!((plan.total_distance_miles - 800.0).abs() < 0.01);
    assert_eq!(plan.fuel_stops.len(), 1);
    assert_eq!(plan.fuel_stops[0].station_name, "Midway Fuel");
    assert!((plan.fuel_stops[0].mile_marker - 320.0).abs() < 0.01);
    assert!((plan.fuel_stops[0].gallons_purchased - 32.0).abs() < 0.01);
    assert!((plan.total_cost - 89.6).abs() < 0.01);
}

#[tokio::test]
async fn plan_route_surfaces_infeasibility_with_a_mile_marker() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!([{ "lat": "0.0", "lon": "0.0" }]),
        ))
        .mount(&server)
        .await;

    let geometry = equator_geometry();
    Mock::given(method("GET"))
        .and(path_regex(r"^/route/v1/driving/.*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": "Ok",
            "routes": [ { "distance": 1_287_477.0, "geometry": geometry } ]
        })))
        .mount(&server)
        .await;

    // No stations at all on an 800-mile route with a 500-mile tank.
    let result = plan_route(
        &geocoder(&server.uri()),
        &router(&server.uri()),
        &[],
        "Start City",
        "Finish City",
        500.0,
        10.0,
    )
    .await;

    match result {
        Err(TripError::RouteInfeasible { mile_marker }) => {
            assert!(mile_marker.abs() < f64::EPSILON, "gap starts at the origin");
        }
        other => panic!("expected RouteInfeasible, got {other:?}"),
    }
}
