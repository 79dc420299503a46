use serde::{Deserialize, Serialize};

/// Current conditions at a coordinate, fetched per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    /// °C
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: f64,
    /// m/s
    pub wind_speed: f64,
    /// Primary condition category, e.g. "Rain".
    pub weather: String,
    pub description: String,
    /// metres
    pub visibility: i64,
    /// ISO-8601, UTC
    pub timestamp: String,
}
