// API layer - HTTP endpoints
pub mod auth;
pub mod health;
pub mod items;
pub mod weather;

pub use auth::AuthApi;
pub use health::HealthApi;
pub use items::TravelItemsApi;
pub use weather::WeatherApi;

use poem_openapi::{auth::Bearer, SecurityScheme};

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    key_name = "Authorization",
    key_in = "header",
    bearer_format = "JWT"
)]
pub struct BearerAuth(pub Bearer);
