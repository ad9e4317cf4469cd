use std::time::Duration;

use chrono::{Local, TimeZone};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::config::WeatherConfig;
use crate::errors::ResolutionError;
use crate::types::internal::weather::{PackingAdvice, WeatherReport};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Resolves free-text city names into current weather with packing advice.
///
/// Resolution is a two-stage pipeline: geocode the query for coordinates,
/// then fetch conditions by coordinates. Any failure before a coordinate
/// report is built routes to a single fallback, fetching conditions by city
/// name directly. Only the fallback's failure is terminal.
///
/// Performs no retries and caches nothing; each call issues one or two
/// upstream requests.
pub struct WeatherResolver {
    client: Client,
    config: WeatherConfig,
}

/// One result from the geocoding endpoint
#[derive(Debug, Deserialize)]
struct GeocodedPlace {
    lat: f64,
    lon: f64,
    name: String,
    state: Option<String>,
}

/// Current conditions payload from the weather endpoint
#[derive(Debug, Deserialize)]
struct CurrentConditions {
    #[serde(default)]
    name: String,
    main: ConditionsMain,
    #[serde(default)]
    weather: Vec<ConditionSummary>,
    wind: Option<Wind>,
    /// Meters; absent for a few stations
    #[serde(default)]
    visibility: f64,
    #[serde(default)]
    sys: SysBlock,
}

#[derive(Debug, Deserialize)]
struct ConditionsMain {
    temp: f64,
    feels_like: f64,
    humidity: Option<f64>,
    pressure: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ConditionSummary {
    description: String,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct SysBlock {
    country: Option<String>,
    sunrise: Option<i64>,
    sunset: Option<i64>,
}

/// Error body the weather provider returns alongside non-2xx statuses
#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    message: Option<String>,
}

enum WeatherQuery<'a> {
    Coords { lat: f64, lon: f64 },
    Name(&'a str),
}

impl WeatherResolver {
    /// Create a resolver for the given provider configuration
    pub fn new(config: WeatherConfig) -> Result<Self, ResolutionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ResolutionError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Resolve current weather and packing advice for a city query
    pub async fn resolve(&self, city_query: &str) -> Result<WeatherReport, ResolutionError> {
        let city = city_query.trim();
        if city.is_empty() {
            return Err(ResolutionError::InvalidInput);
        }

        // Stage 1: geocode for coordinates, then fetch conditions by
        // coordinates. Failures here are recovered by the fallback below.
        if let Some(place) = self.geocode(city).await {
            let display_name = match &place.state {
                Some(state) => format!("{}, {}", place.name, state),
                None => place.name.clone(),
            };

            match self
                .current_conditions(WeatherQuery::Coords {
                    lat: place.lat,
                    lon: place.lon,
                })
                .await
            {
                Ok(conditions) => {
                    tracing::debug!(city, %display_name, "resolved weather via coordinates");
                    return Ok(build_report(display_name, conditions));
                }
                Err(e) => {
                    tracing::warn!(city, error = %e, "weather by coordinates failed, falling back to lookup by name");
                }
            }
        }

        // Stage 2 (fallback): fetch conditions by city name. Failures here
        // are terminal and carry the typed outcome.
        let conditions = self.current_conditions(WeatherQuery::Name(city)).await?;
        let display_name = if conditions.name.is_empty() {
            city.to_string()
        } else {
            conditions.name.clone()
        };
        tracing::debug!(city, %display_name, "resolved weather via name lookup");
        Ok(build_report(display_name, conditions))
    }

    /// Ask the geocoding endpoint for the best match of the query.
    ///
    /// Every failure mode (network, non-2xx, undecodable body, empty result
    /// set) collapses to `None`; the caller falls back to lookup by name.
    async fn geocode(&self, city: &str) -> Option<GeocodedPlace> {
        let url = format!("{}/direct", self.config.geocode_base_url);

        let response = match self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("limit", "1"),
                ("appid", self.config.api_key.as_str()),
            ])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(city, error = %e, "geocoding request failed");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(city, status = %response.status(), "geocoding returned an error status");
            return None;
        }

        let places: Vec<GeocodedPlace> = match response.json().await {
            Ok(places) => places,
            Err(e) => {
                tracing::warn!(city, error = %e, "failed to decode geocoding response");
                return None;
            }
        };

        if places.is_empty() {
            tracing::debug!(city, "geocoding returned no results");
        }
        places.into_iter().next()
    }

    /// Fetch current conditions, mapping failures into the error taxonomy
    async fn current_conditions(
        &self,
        query: WeatherQuery<'_>,
    ) -> Result<CurrentConditions, ResolutionError> {
        let url = format!("{}/weather", self.config.weather_base_url);

        let request = match query {
            WeatherQuery::Coords { lat, lon } => self
                .client
                .get(&url)
                .query(&[("lat", lat.to_string()), ("lon", lon.to_string())]),
            WeatherQuery::Name(city) => self.client.get(&url).query(&[("q", city)]),
        };

        let response = request
            .query(&[("units", "metric"), ("appid", self.config.api_key.as_str())])
            .send()
            .await
            // Errors out of send() mean no response was received
            .map_err(|_| ResolutionError::Unavailable)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<UpstreamErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| "Error fetching weather data".to_string());

            return Err(match status {
                StatusCode::NOT_FOUND => ResolutionError::CityNotFound,
                StatusCode::UNAUTHORIZED => ResolutionError::UpstreamAuth,
                _ => ResolutionError::Upstream {
                    status: status.as_u16(),
                    message,
                },
            });
        }

        response
            .json::<CurrentConditions>()
            .await
            .map_err(|e| ResolutionError::Internal(format!("Failed to decode weather response: {}", e)))
    }
}

/// Normalize an upstream conditions payload into a report
fn build_report(location_name: String, conditions: CurrentConditions) -> WeatherReport {
    let description = conditions
        .weather
        .first()
        .map(|w| w.description.clone())
        .unwrap_or_default();

    WeatherReport {
        location_name,
        country_code: conditions.sys.country,
        temperature_c: conditions.main.temp,
        feels_like_c: conditions.main.feels_like,
        description,
        humidity_pct: conditions.main.humidity,
        wind_speed_ms: conditions.wind.and_then(|w| w.speed),
        pressure_hpa: conditions.main.pressure,
        visibility_km: conditions.visibility / 1000.0,
        sunrise: conditions.sys.sunrise.map(format_local_time),
        sunset: conditions.sys.sunset.map(format_local_time),
        packing_advice: PackingAdvice::for_temperature(conditions.main.temp),
    }
}

/// Format upstream epoch seconds as a local time-of-day string
fn format_local_time(epoch_secs: i64) -> String {
    Local
        .timestamp_opt(epoch_secs, 0)
        .single()
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_default()
}
