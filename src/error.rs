//! Error types and handling for `Skycast`

use thiserror::Error;

/// Main error type for the `Skycast` library
///
/// Every failure mode of the lookup chain is a distinct variant so callers
/// can branch on the kind rather than parse messages. All errors are
/// non-fatal: a failed lookup discards the in-progress record and leaves
/// any previously displayed state untouched.
#[derive(Error, Debug)]
pub enum SkycastError {
    /// Query was empty (or whitespace-only) after trimming
    #[error("Query is empty")]
    EmptyQuery,

    /// Geocoding returned zero results for the query
    #[error("Location not found: {query}")]
    LocationNotFound { query: String },

    /// An outbound call failed at the transport level (or non-2xx status)
    #[error("Network error: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },

    /// Response received but required fields were missing or unusable
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    /// The external location capability was declined by the user
    #[error("Geolocation permission denied")]
    GeolocationDenied,

    /// No location capability is available on this platform
    #[error("Geolocation unavailable")]
    GeolocationUnavailable,

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl SkycastError {
    /// Create a new malformed-response error
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SkycastError::EmptyQuery => "Please enter a city name.".to_string(),
            SkycastError::LocationNotFound { .. } => {
                "City not found. Please try another city name.".to_string()
            }
            SkycastError::Network { .. } => {
                "Error fetching weather data. Please check your internet connection and try again."
                    .to_string()
            }
            SkycastError::MalformedResponse { .. } => {
                "Error fetching weather data. Please try again.".to_string()
            }
            SkycastError::GeolocationDenied => {
                "Error getting location: permission denied.".to_string()
            }
            SkycastError::GeolocationUnavailable => {
                "Geolocation is not supported on this system.".to_string()
            }
            SkycastError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let malformed_err = SkycastError::malformed("missing current_weather");
        assert!(matches!(
            malformed_err,
            SkycastError::MalformedResponse { .. }
        ));

        let config_err = SkycastError::config("bad base URL");
        assert!(matches!(config_err, SkycastError::Config { .. }));

        let not_found = SkycastError::LocationNotFound {
            query: "Atlantis".to_string(),
        };
        assert!(matches!(not_found, SkycastError::LocationNotFound { .. }));
    }

    #[test]
    fn test_user_messages() {
        assert!(
            SkycastError::EmptyQuery
                .user_message()
                .contains("city name")
        );

        let not_found = SkycastError::LocationNotFound {
            query: "Atlantis".to_string(),
        };
        assert!(not_found.user_message().contains("City not found"));

        let malformed = SkycastError::malformed("test");
        assert!(malformed.user_message().contains("try again"));

        assert!(
            SkycastError::GeolocationDenied
                .user_message()
                .contains("permission denied")
        );
    }

    #[test]
    fn test_display_includes_query() {
        let err = SkycastError::LocationNotFound {
            query: "Atlantis".to_string(),
        };
        assert_eq!(err.to_string(), "Location not found: Atlantis");
    }
}
