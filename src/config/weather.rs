use std::env;

use super::settings::ConfigError;

const DEFAULT_GEOCODE_BASE_URL: &str = "https://api.openweathermap.org/geo/1.0";
const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Configuration for the upstream weather provider
///
/// Passed explicitly into the weather resolver at construction so tests can
/// point it at a mock server.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub api_key: String,
    pub geocode_base_url: String,
    pub weather_base_url: String,
}

impl WeatherConfig {
    /// Load the weather provider configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key =
            env::var("WEATHER_API_KEY").map_err(|_| ConfigError::MissingVar("WEATHER_API_KEY"))?;

        let geocode_base_url = env::var("GEOCODE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_GEOCODE_BASE_URL.to_string());

        let weather_base_url = env::var("WEATHER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_WEATHER_BASE_URL.to_string());

        Ok(Self {
            api_key,
            geocode_base_url,
            weather_base_url,
        })
    }
}
