//! `Skycast` - single-provider weather lookup
//!
//! This library resolves a free-text place name to coordinates via the
//! Open-Meteo geocoding API, fetches current and hourly weather from the
//! Open-Meteo forecast API, and assembles a display-ready weather record.

pub mod api;
pub mod classify;
pub mod config;
pub mod error;
pub mod location_resolver;
pub mod models;
pub mod service;

// Re-export core types for public API
pub use api::{GeocodingResult, WeatherApiClient};
pub use classify::ClassifiedWeather;
pub use config::SkycastConfig;
pub use error::SkycastError;
pub use location_resolver::{LocationInput, LocationParser, LocationResolver};
pub use models::{DisplayRecord, GeoLocation, WeatherSnapshot};
pub use service::WeatherService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SkycastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
