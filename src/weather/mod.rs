pub mod openweather;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::coordinate::Coordinate;
use crate::models::weather::WeatherSnapshot;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Weather API request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Weather API request failed with status {0}")]
    Status(reqwest::StatusCode),
    #[error("Weather API returned no conditions")]
    MissingConditions,
    #[error("invalid weather API url: {0}")]
    Url(#[from] url::ParseError),
}

/// Source of current conditions for a coordinate.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, at: Coordinate) -> Result<WeatherSnapshot, WeatherError>;
}
