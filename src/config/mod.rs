// Configuration layer - env-driven settings and logging setup
pub mod logging;
pub mod settings;
pub mod weather;

pub use logging::init_logging;
pub use settings::{AppSettings, ConfigError};
pub use weather::WeatherConfig;
