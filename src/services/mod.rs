// Services layer - business logic
pub mod access_guard;
pub mod image_store;
pub mod token_service;
pub mod weather_resolver;

pub use access_guard::{ItemAccessError, ItemAccessGuard, ItemAction};
pub use image_store::ImageStore;
pub use token_service::{TokenError, TokenService};
pub use weather_resolver::WeatherResolver;
