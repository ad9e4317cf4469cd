use std::fmt;

/// Packing advice derived from the destination's current temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackingAdvice {
    WarmClothes,
    LightClothes,
    Layers,
}

impl PackingAdvice {
    /// Classify a temperature in Celsius into packing advice.
    ///
    /// Below 10°C calls for warm clothes, above 25°C for light clothes,
    /// and anything in between (inclusive) for layers.
    pub fn for_temperature(temperature_c: f64) -> Self {
        if temperature_c < 10.0 {
            Self::WarmClothes
        } else if temperature_c > 25.0 {
            Self::LightClothes
        } else {
            Self::Layers
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WarmClothes => "Pack warm clothes",
            Self::LightClothes => "Pack light clothes",
            Self::Layers => "Pack layers for variable weather",
        }
    }
}

impl fmt::Display for PackingAdvice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current weather conditions for a resolved location.
///
/// Constructed fresh per request by the weather resolver; never cached or
/// persisted.
#[derive(Debug, Clone)]
pub struct WeatherReport {
    /// Resolved display name, `"{name}, {state}"` when a state was geocoded.
    pub location_name: String,
    pub country_code: Option<String>,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub description: String,
    pub humidity_pct: Option<f64>,
    pub wind_speed_ms: Option<f64>,
    pub pressure_hpa: Option<f64>,
    /// Upstream reports visibility in meters; stored here in kilometers.
    pub visibility_km: f64,
    /// Local time-of-day strings derived from upstream epoch seconds.
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
    pub packing_advice: PackingAdvice,
}
