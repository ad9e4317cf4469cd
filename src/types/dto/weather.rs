use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::internal::weather::WeatherReport;

/// Current weather conditions with packing advice
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
pub struct WeatherData {
    /// Resolved city name, with region/state when available
    pub city: String,

    /// ISO country code
    pub country: Option<String>,

    /// Current temperature in Celsius
    pub temperature: f64,

    /// Perceived temperature in Celsius
    pub feels_like: f64,

    /// Short description of current conditions
    pub weather_description: String,

    /// Relative humidity in percent
    pub humidity: Option<f64>,

    /// Wind speed in meters per second
    pub wind_speed: Option<f64>,

    /// Atmospheric pressure in hPa
    pub pressure: Option<f64>,

    /// Visibility in kilometers
    pub visibility: f64,

    /// Local sunrise time
    pub sunrise: Option<String>,

    /// Local sunset time
    pub sunset: Option<String>,

    /// Packing advice derived from the temperature
    pub packing_advice: String,
}

impl From<WeatherReport> for WeatherData {
    fn from(report: WeatherReport) -> Self {
        Self {
            city: report.location_name,
            country: report.country_code,
            temperature: report.temperature_c,
            feels_like: report.feels_like_c,
            weather_description: report.description,
            humidity: report.humidity_pct,
            wind_speed: report.wind_speed_ms,
            pressure: report.pressure_hpa,
            visibility: report.visibility_km,
            sunrise: report.sunrise,
            sunset: report.sunset,
            packing_advice: report.packing_advice.as_str().to_string(),
        }
    }
}

/// Response model for the weather endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct WeatherResponse {
    /// Whether the operation succeeded
    pub success: bool,

    /// The resolved weather report
    pub data: WeatherData,
}
