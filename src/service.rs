//! Weather lookup orchestration and snapshot assembly
//!
//! Ties the resolver, fetcher, and classifier together into the sequential
//! geocode-then-forecast chain and assembles the display-ready record.

use crate::classify::ClassifiedWeather;
use crate::config::SkycastConfig;
use crate::location_resolver::{LocationInput, LocationResolver};
use crate::models::{DisplayRecord, GeoLocation, WeatherSnapshot};
use crate::{Result, SkycastError, WeatherApiClient};
use chrono::{Local, Timelike};
use tracing::info;

/// Name shown when no location could be resolved for the coordinates
const UNKNOWN_CITY: &str = "Unknown City";
/// Country shown when no location could be resolved for the coordinates
const UNKNOWN_COUNTRY: &str = "Unknown";

/// Weather lookup service
///
/// Holds no per-request state; each lookup produces a fresh set of values.
pub struct WeatherService {
    api_client: WeatherApiClient,
}

impl WeatherService {
    /// Create a new weather service
    pub fn new(config: &SkycastConfig) -> Result<Self> {
        Ok(Self {
            api_client: WeatherApiClient::new(config)?,
        })
    }

    /// Look up weather for a location input
    ///
    /// A name is geocoded first; raw coordinates go straight to the forecast
    /// fetch and the record falls back to the unknown-location defaults.
    pub async fn lookup(&self, input: LocationInput) -> Result<DisplayRecord> {
        match input {
            LocationInput::Name(name) => self.lookup_city(&name).await,
            LocationInput::Coordinates(lat, lon) => self.lookup_coordinates(lat, lon).await,
        }
    }

    /// Look up weather for a free-text place name
    pub async fn lookup_city(&self, query: &str) -> Result<DisplayRecord> {
        let location = LocationResolver::resolve(&self.api_client, query).await?;
        info!(
            "Resolved '{}' to {} ({})",
            query,
            location.name,
            location.format_coordinates()
        );

        let snapshot = self
            .api_client
            .fetch_forecast(location.latitude, location.longitude)
            .await?;

        assemble(Some(location), &snapshot)
    }

    /// Look up weather for raw coordinates (e.g. from a location service)
    pub async fn lookup_coordinates(&self, lat: f64, lon: f64) -> Result<DisplayRecord> {
        let snapshot = self.api_client.fetch_forecast(lat, lon).await?;
        assemble(None, &snapshot)
    }
}

/// Assemble a display record from a snapshot and an optional location
///
/// The current-hour index is the local wall-clock hour at the moment of
/// assembly, not a timestamp from the API response.
pub fn assemble(location: Option<GeoLocation>, snapshot: &WeatherSnapshot) -> Result<DisplayRecord> {
    let current_hour = Local::now().hour() as usize;
    assemble_at(location, snapshot, current_hour)
}

/// Assemble a display record using an explicit hour index (0-23)
///
/// Split out from [`assemble`] so the hour is injectable in tests.
pub fn assemble_at(
    location: Option<GeoLocation>,
    snapshot: &WeatherSnapshot,
    hour: usize,
) -> Result<DisplayRecord> {
    let humidity = *snapshot.hourly_humidity.get(hour).ok_or_else(|| {
        SkycastError::malformed(format!(
            "hour index {} out of bounds for humidity series of length {}",
            hour,
            snapshot.hourly_humidity.len()
        ))
    })?;

    let classified = ClassifiedWeather::from_code(snapshot.weather_code);

    let (city, country) = match location {
        Some(loc) => (
            loc.name,
            loc.country.unwrap_or_else(|| UNKNOWN_COUNTRY.to_string()),
        ),
        None => (UNKNOWN_CITY.to_string(), UNKNOWN_COUNTRY.to_string()),
    };

    Ok(DisplayRecord {
        city,
        country,
        temperature_c: snapshot.temperature_c,
        // Feels-like is the current temperature by design, not an omission
        feels_like_c: snapshot.temperature_c,
        humidity,
        wind_speed: snapshot.wind_speed,
        weather_code: snapshot.weather_code,
        description: classified.description.to_string(),
        icon_key: classified.icon_key.to_string(),
        icon_url: classified.icon_url(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_c: 15.4,
            wind_speed: 12.0,
            weather_code: 3,
            hourly_humidity: (0..24).map(|h| 40.0 + h as f64).collect(),
        }
    }

    #[test]
    fn test_assemble_with_location() {
        let location =
            GeoLocation::with_country(48.85, 2.35, "Paris".to_string(), "FR".to_string());
        let record = assemble_at(Some(location), &snapshot(), 10).unwrap();

        assert_eq!(record.city, "Paris");
        assert_eq!(record.country, "FR");
        assert_eq!(record.temperature_rounded(), 15);
        assert_eq!(record.feels_like_c, record.temperature_c);
        assert_eq!(record.humidity, 50.0);
        assert_eq!(record.description, "Overcast");
        assert_eq!(record.icon_key, "04d");
        assert_eq!(
            record.icon_url,
            "https://openweathermap.org/img/wn/04d@2x.png"
        );
    }

    #[test]
    fn test_assemble_without_location_applies_defaults() {
        let record = assemble_at(None, &snapshot(), 0).unwrap();
        assert_eq!(record.city, "Unknown City");
        assert_eq!(record.country, "Unknown");
    }

    #[test]
    fn test_assemble_location_without_country() {
        let location = GeoLocation::new(48.85, 2.35, "Paris".to_string());
        let record = assemble_at(Some(location), &snapshot(), 0).unwrap();
        assert_eq!(record.city, "Paris");
        assert_eq!(record.country, "Unknown");
    }

    #[test]
    fn test_assemble_hour_selects_matching_humidity() {
        for hour in [0usize, 11, 23] {
            let record = assemble_at(None, &snapshot(), hour).unwrap();
            assert_eq!(record.humidity, 40.0 + hour as f64);
        }
    }

    #[test]
    fn test_assemble_out_of_bounds_hour_is_rejected() {
        let mut short = snapshot();
        short.hourly_humidity.truncate(12);
        let result = assemble_at(None, &short, 20);
        assert!(matches!(
            result,
            Err(SkycastError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_assemble_uses_local_hour_in_bounds() {
        // The wall-clock hour is always a valid index into a 24-entry series
        let record = assemble(None, &snapshot()).unwrap();
        assert!((40.0..=63.0).contains(&record.humidity));
    }
}
