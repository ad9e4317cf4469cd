use poem_openapi::{payload::Json, ApiResponse};
use thiserror::Error;

use crate::errors::ErrorBody;
use crate::services::token_service::TokenError;

/// Typed outcome of a failed weather resolution.
///
/// Geocoding failures never produce one of these; they are recovered locally
/// by falling back to lookup by name. Only the terminal weather request maps
/// its failure into this taxonomy.
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// Empty or blank city query; no upstream call is made
    #[error("city query must not be empty")]
    InvalidInput,

    /// Upstream answered 404 for the requested city
    #[error("city not found")]
    CityNotFound,

    /// Upstream rejected the API key (401); a server-side fault, not the caller's
    #[error("weather provider rejected the API key")]
    UpstreamAuth,

    /// Upstream answered with any other non-2xx status
    #[error("weather provider returned status {status}: {message}")]
    Upstream { status: u16, message: String },

    /// No response was received at all (connect failure or timeout)
    #[error("weather provider unreachable")]
    Unavailable,

    /// Anything else, e.g. an undecodable success payload
    #[error("weather resolution failed: {0}")]
    Internal(String),
}

/// Weather endpoint error types
#[derive(ApiResponse, Debug)]
pub enum WeatherError {
    /// Missing or blank city parameter
    #[oai(status = 400)]
    BadRequest(Json<ErrorBody>),

    /// Invalid or expired JWT
    #[oai(status = 401)]
    Unauthorized(Json<ErrorBody>),

    /// City could not be found
    #[oai(status = 404)]
    CityNotFound(Json<ErrorBody>),

    /// Internal server error (includes upstream API key problems)
    #[oai(status = 500)]
    InternalError(Json<ErrorBody>),

    /// Upstream weather provider returned an unexpected error
    #[oai(status = 502)]
    UpstreamError(Json<ErrorBody>),

    /// Upstream weather provider could not be reached
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorBody>),
}

impl WeatherError {
    /// Create a BadRequest error with the given message
    pub fn bad_request(message: impl Into<String>) -> Self {
        WeatherError::BadRequest(Json(ErrorBody::new(message)))
    }

    /// Create an InternalError
    pub fn internal_error(message: impl Into<String>) -> Self {
        WeatherError::InternalError(Json(ErrorBody::new(message)))
    }
}

impl From<TokenError> for WeatherError {
    fn from(err: TokenError) -> Self {
        let message = match err {
            TokenError::Expired => "Token expired",
            TokenError::Invalid => "Invalid token",
            TokenError::Generation(_) => "Invalid token",
        };
        WeatherError::Unauthorized(Json(ErrorBody::new(message)))
    }
}

impl From<ResolutionError> for WeatherError {
    fn from(err: ResolutionError) -> Self {
        match err {
            ResolutionError::InvalidInput => {
                WeatherError::bad_request("Please provide a city name")
            }
            ResolutionError::CityNotFound => WeatherError::CityNotFound(Json(ErrorBody::new(
                "City not found. Please check spelling and try again.",
            ))),
            ResolutionError::UpstreamAuth => {
                WeatherError::internal_error("Weather API key is invalid or expired")
            }
            ResolutionError::Upstream { status, message } => WeatherError::UpstreamError(Json(
                ErrorBody::new(format!("Weather provider error ({}): {}", status, message)),
            )),
            ResolutionError::Unavailable => WeatherError::ServiceUnavailable(Json(ErrorBody::new(
                "Weather service unavailable. Please try again later.",
            ))),
            ResolutionError::Internal(message) => WeatherError::internal_error(message),
        }
    }
}
