//! The current-weather feed (OpenWeatherMap current-conditions shape).
//!
//! Only the temperature survives into the calendar header.  Anything that
//! goes wrong (missing credential, error payload) leaves the temperature
//! *absent*, never zero.

use std::env;
use std::fmt;

use serde::Deserialize;

/// Name of the environment variable holding the weather API key.
pub const API_KEY_VAR: &str = "OPENWEATHER_KEY";

/// Default city query for the weather endpoint.
pub const DEFAULT_CITY: &str = "Pelotas,BR";

/// A current temperature, in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperature(f64);

impl Temperature {
    /// Degrees Celsius, unrounded.
    pub fn celsius(&self) -> f64 {
        self.0
    }

    /// Degrees Celsius rounded to the whole degree the header displays.
    pub fn rounded(&self) -> i32 {
        self.0.round() as i32
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.rounded())
    }
}

/// Wire shape of the current-conditions response.  Everything but
/// `main.temp` is ignored; error payloads have no `main` block at all.
#[derive(Debug, Deserialize)]
struct RawWeather {
    main: Option<RawMain>,
}

#[derive(Debug, Deserialize)]
struct RawMain {
    temp: f64,
}

/// Extract the current temperature from a feed payload.
///
/// `None` on a malformed payload or when the `main` block is missing.
pub fn parse_current_temp(body: &str) -> Option<Temperature> {
    let raw: RawWeather = serde_json::from_str(body).ok()?;
    raw.main.map(|m| Temperature(m.temp))
}

/// URL of the current-conditions query (metric units, pt labels).
pub fn weather_endpoint(city: &str, api_key: &str) -> String {
    format!(
        "https://api.openweathermap.org/data/2.5/weather?q={city}&appid={api_key}&units=metric&lang=pt"
    )
}

/// Read the weather API key from the environment.
///
/// A missing or empty variable disables the temperature feature.
pub fn api_key_from_env() -> Option<String> {
    env::var(API_KEY_VAR).ok().filter(|key| !key.is_empty())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_current_conditions() {
        // Trimmed from a real response; only main.temp matters
        let body = r#"{
            "coord": {"lon": -52.3376, "lat": -31.7719},
            "weather": [{"id": 803, "main": "Clouds", "description": "nublado"}],
            "main": {"temp": 17.46, "feels_like": 17.3, "humidity": 82},
            "name": "Pelotas"
        }"#;
        let temp = parse_current_temp(body).unwrap();
        assert_eq!(temp.celsius(), 17.46);
        assert_eq!(temp.rounded(), 17);
        assert_eq!(temp.to_string(), "17°C");
    }

    #[test]
    fn rounds_to_the_displayed_degree() {
        let body = r#"{"main": {"temp": 17.5}}"#;
        assert_eq!(parse_current_temp(body).unwrap().to_string(), "18°C");
        let body = r#"{"main": {"temp": -2.4}}"#;
        assert_eq!(parse_current_temp(body).unwrap().to_string(), "-2°C");
    }

    #[test]
    fn error_payloads_have_no_temperature() {
        // OpenWeatherMap error responses carry no main block
        assert_eq!(
            parse_current_temp(r#"{"cod": 401, "message": "Invalid API key"}"#),
            None
        );
        assert_eq!(parse_current_temp(r#"{"main": {"humidity": 80}}"#), None);
        assert_eq!(parse_current_temp("not json"), None);
        assert_eq!(parse_current_temp(""), None);
    }

    #[test]
    fn endpoint_carries_city_key_and_units() {
        let url = weather_endpoint(DEFAULT_CITY, "abc123");
        assert_eq!(
            url,
            "https://api.openweathermap.org/data/2.5/weather?q=Pelotas,BR&appid=abc123&units=metric&lang=pt"
        );
    }

    #[test]
    fn api_key_lookup() {
        // nothing else in the test binary touches this variable
        env::remove_var(API_KEY_VAR);
        assert_eq!(api_key_from_env(), None);
        env::set_var(API_KEY_VAR, "");
        assert_eq!(api_key_from_env(), None);
        env::set_var(API_KEY_VAR, "abc123");
        assert_eq!(api_key_from_env(), Some("abc123".to_string()));
        env::remove_var(API_KEY_VAR);
    }
}
