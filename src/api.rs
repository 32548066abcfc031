//! Weather API client for Open-Meteo integration
//!
//! HTTP client functionality for the geocoding and forecast endpoints.
//! No API key is required; no retries are performed, a single failure
//! surfaces immediately to the caller.

use crate::config::SkycastConfig;
use crate::models::weather::HOURS_PER_DAY;
use crate::models::{GeoLocation, WeatherSnapshot};
use crate::{Result, SkycastError};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Weather API client for Open-Meteo
pub struct WeatherApiClient {
    /// HTTP client
    client: Client,
    /// Geocoding search endpoint
    geocoding_url: String,
    /// Forecast endpoint
    forecast_url: String,
}

impl WeatherApiClient {
    /// Create a new weather API client
    pub fn new(config: &SkycastConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.api.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("Skycast/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            geocoding_url: config.api.geocoding_url.clone(),
            forecast_url: config.api.forecast_url.clone(),
        })
    }

    /// Look up geocoding candidates for a place name
    ///
    /// Requests at most one result; the upstream ranking decides which.
    /// An empty vector means the provider knows no such place.
    pub async fn geocode(&self, name: &str) -> Result<Vec<GeocodingResult>> {
        let url = format!(
            "{}?name={}&count=1",
            self.geocoding_url,
            urlencoding::encode(name)
        );
        debug!("Geocoding request URL: {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;

        let geocoding: GeocodingResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse geocoding response for '{}': {}", name, e);
            SkycastError::malformed(format!("invalid geocoding response: {e}"))
        })?;

        let results = geocoding.results.unwrap_or_default();
        if results.is_empty() {
            warn!("No geocoding results for '{}'", name);
        } else {
            info!("Geocoded '{}' to {} result(s)", name, results.len());
        }

        Ok(results)
    }

    /// Fetch the current-instant weather plus the hourly humidity series
    ///
    /// The coordinates are passed through unvalidated; range checking is
    /// deferred to the upstream API. A response without a `current_weather`
    /// block is a malformed-response error even on HTTP 200, as is a humidity
    /// series shorter than 24 entries.
    pub async fn fetch_forecast(&self, lat: f64, lon: f64) -> Result<WeatherSnapshot> {
        let url = format!(
            "{}?latitude={}&longitude={}&current_weather=true&hourly=temperature_2m,relativehumidity_2m,windspeed_10m",
            self.forecast_url, lat, lon
        );
        debug!("Forecast request URL: {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;

        let forecast: ForecastResponse = response.json().await.map_err(|e| {
            warn!(
                "Failed to parse forecast response for {:.4},{:.4}: {}",
                lat, lon, e
            );
            SkycastError::malformed(format!("invalid forecast response: {e}"))
        })?;

        let current = forecast
            .current_weather
            .ok_or_else(|| SkycastError::malformed("response has no current_weather block"))?;

        let mut humidity = forecast
            .hourly
            .and_then(|h| h.relative_humidity)
            .ok_or_else(|| SkycastError::malformed("response has no hourly humidity series"))?;

        // The provider returns several days of hourly data; hours 0-23 of the
        // first day are all the assembler indexes into.
        if humidity.len() < HOURS_PER_DAY {
            return Err(SkycastError::malformed(format!(
                "humidity series has {} entries, expected at least {}",
                humidity.len(),
                HOURS_PER_DAY
            )));
        }
        humidity.truncate(HOURS_PER_DAY);

        info!(
            "Fetched current weather for {:.4},{:.4}: {}°C, code {}",
            lat, lon, current.temperature, current.weather_code
        );

        Ok(WeatherSnapshot {
            temperature_c: current.temperature,
            wind_speed: current.wind_speed,
            weather_code: current.weather_code,
            hourly_humidity: humidity,
        })
    }
}

/// Geocoding result from the Open-Meteo search endpoint
#[derive(Debug, Deserialize, Clone)]
pub struct GeocodingResult {
    /// Location name
    pub name: String,
    /// Latitude
    pub latitude: f64,
    /// Longitude
    pub longitude: f64,
    /// Country code
    pub country: Option<String>,
}

impl From<GeocodingResult> for GeoLocation {
    fn from(geocoding: GeocodingResult) -> Self {
        GeoLocation {
            latitude: geocoding.latitude,
            longitude: geocoding.longitude,
            name: geocoding.name,
            country: geocoding.country,
        }
    }
}

/// Geocoding response envelope; `results` may be absent entirely
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

/// Forecast response from the Open-Meteo forecast endpoint
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeather>,
    hourly: Option<HourlyData>,
}

/// Current-instant conditions block
#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    #[serde(rename = "windspeed")]
    wind_speed: f64,
    #[serde(rename = "weathercode")]
    weather_code: i32,
}

/// Hourly series block; only the humidity series is retained downstream
#[derive(Debug, Deserialize)]
struct HourlyData {
    #[serde(rename = "relativehumidity_2m")]
    relative_humidity: Option<Vec<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocoding_result_to_location() {
        let geocoding = GeocodingResult {
            name: "Paris".to_string(),
            latitude: 48.85,
            longitude: 2.35,
            country: Some("FR".to_string()),
        };

        let location: GeoLocation = geocoding.into();
        assert_eq!(location.name, "Paris");
        assert_eq!(location.latitude, 48.85);
        assert_eq!(location.longitude, 2.35);
        assert_eq!(location.country, Some("FR".to_string()));
    }

    #[test]
    fn test_geocoding_response_missing_results() {
        let parsed: GeocodingResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.results.is_none());

        let parsed: GeocodingResponse = serde_json::from_str(r#"{"results":[]}"#).unwrap();
        assert_eq!(parsed.results.unwrap().len(), 0);
    }

    #[test]
    fn test_forecast_response_field_names() {
        let json = r#"{
            "current_weather": {"temperature": 15.4, "windspeed": 12.0, "weathercode": 3},
            "hourly": {"relativehumidity_2m": [60.0, 61.0]}
        }"#;
        let parsed: ForecastResponse = serde_json::from_str(json).unwrap();
        let current = parsed.current_weather.unwrap();
        assert_eq!(current.temperature, 15.4);
        assert_eq!(current.wind_speed, 12.0);
        assert_eq!(current.weather_code, 3);
        assert_eq!(
            parsed.hourly.unwrap().relative_humidity.unwrap(),
            vec![60.0, 61.0]
        );
    }
}
