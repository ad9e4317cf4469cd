use poem_openapi::Object;

/// Response model for the health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Current service status
    pub status: String,

    /// Timestamp of the check (ISO 8601 format)
    pub timestamp: String,
}
