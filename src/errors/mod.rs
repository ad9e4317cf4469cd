// Errors layer - API error responses and domain error types
pub mod auth;
pub mod items;
pub mod weather;

pub use auth::AuthError;
pub use items::ItemError;
pub use weather::{ResolutionError, WeatherError};

use poem_openapi::Object;

/// Standardized JSON error body returned by every endpoint
#[derive(Object, Debug)]
pub struct ErrorBody {
    /// Always false for errors
    pub success: bool,

    /// Human-readable error message
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
