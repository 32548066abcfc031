//! Weather data models and display methods

use serde::{Deserialize, Serialize};

/// Number of hourly humidity entries a snapshot must carry (local hours 0-23)
pub const HOURS_PER_DAY: usize = 24;

/// Normalized but unclassified weather snapshot for one location
///
/// Invariant: `hourly_humidity` has exactly [`HOURS_PER_DAY`] entries
/// corresponding to local hours 0-23 of the forecast day. The fetch layer
/// rejects responses that cannot satisfy this.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// Current temperature in Celsius
    pub temperature_c: f64,
    /// Current wind speed in km/h (provider default unit)
    pub wind_speed: f64,
    /// Current WMO weather code
    pub weather_code: i32,
    /// Relative humidity (%) for hours 0-23 of the forecast day
    pub hourly_humidity: Vec<f64>,
}

/// Display-ready weather record handed to the presentation layer
///
/// Field names mirror the display slots: city, country, temperature,
/// humidity, wind speed, description, feels-like, icon.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DisplayRecord {
    /// City name, or "Unknown City" when no location was resolved
    pub city: String,
    /// Country code, or "Unknown" when no location was resolved
    pub country: String,
    /// Current temperature in Celsius
    pub temperature_c: f64,
    /// Feels-like temperature; identical to `temperature_c` by design
    pub feels_like_c: f64,
    /// Relative humidity (%) for the current local hour
    pub humidity: f64,
    /// Current wind speed in km/h
    pub wind_speed: f64,
    /// Current WMO weather code
    pub weather_code: i32,
    /// Human-readable weather description
    pub description: String,
    /// Icon key, e.g. "04d"
    pub icon_key: String,
    /// Full icon image URL
    pub icon_url: String,
}

/// Round half toward positive infinity: -15.5 displays as -15, not -16
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

impl DisplayRecord {
    /// Temperature rounded to the nearest whole degree, as displayed
    #[must_use]
    pub fn temperature_rounded(&self) -> i64 {
        round_half_up(self.temperature_c)
    }

    /// Feels-like temperature rounded to the nearest whole degree
    #[must_use]
    pub fn feels_like_rounded(&self) -> i64 {
        round_half_up(self.feels_like_c)
    }

    /// Humidity rounded to the nearest whole percent, as displayed
    #[must_use]
    pub fn humidity_rounded(&self) -> i64 {
        round_half_up(self.humidity)
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{}°C", self.temperature_rounded())
    }

    /// Format wind information
    #[must_use]
    pub fn format_wind(&self) -> String {
        format!("{} km/h", self.wind_speed)
    }
}
