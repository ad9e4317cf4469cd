use std::sync::Arc;

use poem_openapi::{param::Query, payload::Json, OpenApi, Tags};

use crate::api::BearerAuth;
use crate::errors::WeatherError;
use crate::services::{TokenService, WeatherResolver};
use crate::types::dto::weather::WeatherResponse;

/// Weather API endpoints
pub struct WeatherApi {
    resolver: Arc<WeatherResolver>,
    token_service: Arc<TokenService>,
}

impl WeatherApi {
    /// Create a new WeatherApi with the given resolver and TokenService
    pub fn new(resolver: Arc<WeatherResolver>, token_service: Arc<TokenService>) -> Self {
        Self {
            resolver,
            token_service,
        }
    }
}

/// API tags for weather endpoints
#[derive(Tags)]
enum WeatherTags {
    /// Destination weather endpoints
    Weather,
}

#[OpenApi]
impl WeatherApi {
    /// Get current weather and packing advice for a city
    #[oai(path = "/weather", method = "get", tag = "WeatherTags::Weather")]
    async fn get_weather(
        &self,
        auth: BearerAuth,
        /// Destination city to look up
        city: Query<Option<String>>,
    ) -> Result<Json<WeatherResponse>, WeatherError> {
        self.token_service.validate(&auth.0.token)?;

        let city = city.0.unwrap_or_default();
        if city.trim().is_empty() {
            return Err(WeatherError::bad_request("Please provide a city name"));
        }

        let report = self.resolver.resolve(&city).await?;

        Ok(Json(WeatherResponse {
            success: true,
            data: report.into(),
        }))
    }
}
