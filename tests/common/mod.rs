use travel_checklist_backend::config::WeatherConfig;
use travel_checklist_backend::services::WeatherResolver;

/// Build a resolver pointed at a mock upstream server
pub fn resolver_for(mock_uri: &str) -> WeatherResolver {
    WeatherResolver::new(WeatherConfig {
        api_key: "test-api-key".to_string(),
        geocode_base_url: format!("{}/geo/1.0", mock_uri),
        weather_base_url: format!("{}/data/2.5", mock_uri),
    })
    .expect("Failed to build resolver")
}

/// Standard current-conditions payload for mocks
pub fn conditions_body(city: &str, temp: f64) -> serde_json::Value {
    serde_json::json!({
        "name": city,
        "main": {
            "temp": temp,
            "feels_like": temp - 2.0,
            "humidity": 80,
            "pressure": 1010
        },
        "weather": [{ "description": "light rain" }],
        "wind": { "speed": 3.0 },
        "visibility": 9000,
        "sys": {
            "country": "GB",
            "sunrise": 1_700_000_000i64,
            "sunset": 1_700_030_000i64
        }
    })
}
