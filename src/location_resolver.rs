//! Location Resolution Module
//!
//! Resolves location inputs (free-text place names or raw coordinates) into
//! structured [`GeoLocation`] objects via the geocoding API.

use crate::models::GeoLocation;
use crate::{Result, SkycastError, WeatherApiClient};
use tracing::debug;

/// Service for resolving location inputs
pub struct LocationResolver;

impl LocationResolver {
    /// Resolve a free-text place name to its best-match location
    ///
    /// The query must be non-empty after trimming; a blank query fails with
    /// `EmptyQuery` before any network call is made. Zero geocoding results
    /// yield `LocationNotFound`. The first (best-ranked) result wins; there
    /// is no local re-ranking.
    pub async fn resolve(api_client: &WeatherApiClient, query: &str) -> Result<GeoLocation> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SkycastError::EmptyQuery);
        }

        debug!("Geocoding location name: {}", query);

        let mut results = api_client.geocode(query).await?;
        if results.is_empty() {
            return Err(SkycastError::LocationNotFound {
                query: query.to_string(),
            });
        }

        let best = results.swap_remove(0);
        debug!(
            "Found location: {} ({:.4}, {:.4})",
            best.name, best.latitude, best.longitude
        );

        Ok(best.into())
    }
}

/// Types of location input
#[derive(Debug, Clone, PartialEq)]
pub enum LocationInput {
    /// Coordinates (latitude, longitude), e.g. from a platform location service
    Coordinates(f64, f64),
    /// Free-text place name to be geocoded
    Name(String),
}

/// Location input parsing utilities
pub struct LocationParser;

impl LocationParser {
    /// Parse raw input into a coordinate pair or a place name
    ///
    /// Input that does not parse as valid coordinates is treated as a name;
    /// the geocoding provider gets to decide what it means.
    pub fn parse(input: &str) -> Result<LocationInput> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SkycastError::EmptyQuery);
        }

        if let Some((lat, lon)) = Self::parse_coordinates(input) {
            return Ok(LocationInput::Coordinates(lat, lon));
        }

        Ok(LocationInput::Name(input.to_string()))
    }

    /// Parse coordinates from strings like "46.8182,8.2275" or "46.8182 8.2275"
    fn parse_coordinates(input: &str) -> Option<(f64, f64)> {
        let parts: Vec<&str> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();

        if parts.len() != 2 {
            return None;
        }

        let lat = parts[0].parse::<f64>().ok()?;
        let lon = parts[1].parse::<f64>().ok()?;

        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return None;
        }

        Some((lat, lon))
    }
}
