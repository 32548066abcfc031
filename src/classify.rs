//! WMO weather code classification
//!
//! Pure, total mappings from a WMO weather code to a human-readable
//! description and an icon key. No I/O, no clock dependency; every integer
//! input produces an output.

use serde::Serialize;

/// Base URL template for weather icons
const ICON_URL_BASE: &str = "https://openweathermap.org/img/wn";

/// Description and icon key derived from a WMO weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassifiedWeather {
    /// Human-readable description, e.g. "Overcast"
    pub description: &'static str,
    /// Icon key, e.g. "04d"
    pub icon_key: &'static str,
}

impl ClassifiedWeather {
    /// Classify a WMO weather code
    #[must_use]
    pub fn from_code(code: i32) -> Self {
        Self {
            description: describe(code),
            icon_key: icon_key(code),
        }
    }

    /// Full icon image URL for this classification
    #[must_use]
    pub fn icon_url(&self) -> String {
        format!("{ICON_URL_BASE}/{}@2x.png", self.icon_key)
    }
}

/// Convert a WMO weather code to a human-readable description
///
/// Exact table keyed by code; anything outside the table is "Unknown".
#[must_use]
pub fn describe(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Foggy",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        71 => "Slight snow",
        73 => "Moderate snow",
        75 => "Heavy snow",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        95 => "Thunderstorm",
        _ => "Unknown",
    }
}

/// Convert a WMO weather code to an icon key
///
/// The arms form a total partition of the integer domain; ranges are
/// inclusive and must not overlap.
#[must_use]
pub fn icon_key(code: i32) -> &'static str {
    match code {
        0 => "01d",          // Clear sky
        1 | 2 => "02d",      // Partly cloudy
        3 => "04d",          // Overcast
        45 | 48 => "50d",    // Fog
        51..=55 => "09d",    // Drizzle
        61..=65 => "10d",    // Rain
        71..=77 => "13d",    // Snow
        80..=82 => "09d",    // Rain showers
        95 => "11d",         // Thunderstorm
        _ => "50d",          // Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "Clear sky")]
    #[case(1, "Mainly clear")]
    #[case(2, "Partly cloudy")]
    #[case(3, "Overcast")]
    #[case(45, "Foggy")]
    #[case(48, "Depositing rime fog")]
    #[case(51, "Light drizzle")]
    #[case(53, "Moderate drizzle")]
    #[case(55, "Dense drizzle")]
    #[case(61, "Slight rain")]
    #[case(63, "Moderate rain")]
    #[case(65, "Heavy rain")]
    #[case(71, "Slight snow")]
    #[case(73, "Moderate snow")]
    #[case(75, "Heavy snow")]
    #[case(77, "Snow grains")]
    #[case(80, "Slight rain showers")]
    #[case(81, "Moderate rain showers")]
    #[case(82, "Violent rain showers")]
    #[case(95, "Thunderstorm")]
    fn test_describe_table(#[case] code: i32, #[case] expected: &str) {
        assert_eq!(describe(code), expected);
    }

    #[rstest]
    #[case(4)]
    #[case(52)] // gap inside the drizzle icon range
    #[case(96)]
    #[case(-1)]
    #[case(i32::MAX)]
    fn test_describe_unknown_codes(#[case] code: i32) {
        assert_eq!(describe(code), "Unknown");
    }

    // Boundary values around every icon group edge
    #[rstest]
    #[case(0, "01d")]
    #[case(1, "02d")]
    #[case(2, "02d")]
    #[case(3, "04d")]
    #[case(4, "50d")]
    #[case(44, "50d")]
    #[case(45, "50d")]
    #[case(48, "50d")]
    #[case(49, "50d")]
    #[case(50, "50d")]
    #[case(51, "09d")]
    #[case(55, "09d")]
    #[case(56, "50d")]
    #[case(60, "50d")]
    #[case(61, "10d")]
    #[case(65, "10d")]
    #[case(66, "50d")]
    #[case(70, "50d")]
    #[case(71, "13d")]
    #[case(77, "13d")]
    #[case(78, "50d")]
    #[case(79, "50d")]
    #[case(80, "09d")]
    #[case(82, "09d")]
    #[case(83, "50d")]
    #[case(94, "50d")]
    #[case(95, "11d")]
    #[case(96, "50d")]
    #[case(-5, "50d")]
    fn test_icon_key_partition(#[case] code: i32, #[case] expected: &str) {
        assert_eq!(icon_key(code), expected);
    }

    #[test]
    fn test_from_code() {
        let classified = ClassifiedWeather::from_code(3);
        assert_eq!(classified.description, "Overcast");
        assert_eq!(classified.icon_key, "04d");
    }

    #[test]
    fn test_icon_url() {
        let classified = ClassifiedWeather::from_code(0);
        assert_eq!(
            classified.icon_url(),
            "https://openweathermap.org/img/wn/01d@2x.png"
        );
    }

    #[test]
    fn test_classify_is_idempotent() {
        for code in [-1, 0, 3, 45, 55, 63, 77, 82, 95, 100] {
            assert_eq!(
                ClassifiedWeather::from_code(code),
                ClassifiedWeather::from_code(code)
            );
        }
    }
}
