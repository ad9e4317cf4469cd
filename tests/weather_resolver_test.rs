//! Integration tests for the weather resolver against a mock upstream.

mod common;

use common::{conditions_body, resolver_for};
use travel_checklist_backend::errors::ResolutionError;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_resolves_via_geocoded_coordinates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .and(query_param("q", "London"))
        .and(query_param("limit", "1"))
        .and(query_param("appid", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "lat": 51.5, "lon": -0.12, "name": "London", "country": "GB" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("lat", "51.5"))
        .and(query_param("lon", "-0.12"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(conditions_body("London", 8.0)))
        .expect(1)
        .mount(&server)
        .await;

    let report = resolver_for(&server.uri())
        .resolve("London")
        .await
        .expect("Resolution should succeed");

    assert_eq!(report.location_name, "London");
    assert_eq!(report.country_code.as_deref(), Some("GB"));
    assert_eq!(report.temperature_c, 8.0);
    assert_eq!(report.visibility_km, 9.0);
    assert_eq!(report.packing_advice.as_str(), "Pack warm clothes");
}

#[tokio::test]
async fn test_geocoded_state_appears_in_location_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "lat": 39.78, "lon": -89.64, "name": "Springfield", "country": "US", "state": "Illinois" }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(conditions_body("Springfield", 18.0)),
        )
        .mount(&server)
        .await;

    let report = resolver_for(&server.uri())
        .resolve("Springfield")
        .await
        .expect("Resolution should succeed");

    assert_eq!(report.location_name, "Springfield, Illinois");
}

#[tokio::test]
async fn test_empty_geocode_result_falls_back_to_name_lookup() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "London"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(conditions_body("London", 12.0)))
        .expect(1)
        .mount(&server)
        .await;

    let report = resolver_for(&server.uri())
        .resolve("London")
        .await
        .expect("Fallback should fully substitute for geocoding");

    assert_eq!(report.location_name, "London");
    assert_eq!(report.packing_advice.as_str(), "Pack layers for variable weather");
}

#[tokio::test]
async fn test_geocode_server_error_falls_back_to_name_lookup() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "London"))
        .respond_with(ResponseTemplate::new(200).set_body_json(conditions_body("London", 28.0)))
        .mount(&server)
        .await;

    let report = resolver_for(&server.uri())
        .resolve("London")
        .await
        .expect("Fallback should fully substitute for geocoding");

    assert_eq!(report.packing_advice.as_str(), "Pack light clothes");
}

#[tokio::test]
async fn test_coordinate_lookup_failure_falls_back_to_name_lookup() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "lat": 51.5, "lon": -0.12, "name": "London", "country": "GB" }
        ])))
        .mount(&server)
        .await;

    // Coordinate lookup breaks, name lookup works
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("lat", "51.5"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "London"))
        .respond_with(ResponseTemplate::new(200).set_body_json(conditions_body("London", 8.0)))
        .expect(1)
        .mount(&server)
        .await;

    let report = resolver_for(&server.uri())
        .resolve("London")
        .await
        .expect("Name lookup should rescue a failed coordinate lookup");

    assert_eq!(report.temperature_c, 8.0);
}

#[tokio::test]
async fn test_unknown_city_maps_to_city_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&server)
        .await;

    let result = resolver_for(&server.uri()).resolve("Nowhereville").await;

    assert!(matches!(result, Err(ResolutionError::CityNotFound)));
}

#[tokio::test]
async fn test_rejected_api_key_maps_to_upstream_auth() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key"
        })))
        .mount(&server)
        .await;

    let result = resolver_for(&server.uri()).resolve("London").await;

    assert!(matches!(result, Err(ResolutionError::UpstreamAuth)));
}

#[tokio::test]
async fn test_other_upstream_status_is_carried_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "cod": 429,
            "message": "rate limit exceeded"
        })))
        .mount(&server)
        .await;

    let result = resolver_for(&server.uri()).resolve("London").await;

    match result {
        Err(ResolutionError::Upstream { status, message }) => {
            assert_eq!(status, 429);
            assert_eq!(message, "rate limit exceeded");
        }
        other => panic!("Expected Upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_upstream_maps_to_unavailable() {
    // Grab a port that nothing is listening on anymore. A dropped
    // MockServer won't do: wiremock pools servers, so the port stays
    // live and answers 404 after the drop.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let uri = format!("http://{}", listener.local_addr().expect("Failed to get addr"));
    drop(listener);

    let result = resolver_for(&uri).resolve("London").await;

    assert!(matches!(result, Err(ResolutionError::Unavailable)));
}
