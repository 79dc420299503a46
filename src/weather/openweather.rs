use std::time::Duration;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde::Deserialize;
use tracing::error;
use url::Url;

use crate::models::coordinate::Coordinate;
use crate::models::weather::WeatherSnapshot;
use crate::weather::{WeatherError, WeatherProvider};

/// OpenWeatherMap reports at most 10 km and omits the field in some regions.
const DEFAULT_VISIBILITY_M: i64 = 10_000;

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    main: MainReadings,
    wind: Wind,
    weather: Vec<Condition>,
    visibility: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
    feels_like: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    main: String,
    description: String,
}

impl CurrentWeather {
    fn into_snapshot(self, timestamp: String) -> Result<WeatherSnapshot, WeatherError> {
        let condition = self
            .weather
            .into_iter()
            .next()
            .ok_or(WeatherError::MissingConditions)?;

        Ok(WeatherSnapshot {
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            humidity: self.main.humidity,
            wind_speed: self.wind.speed,
            weather: condition.main,
            description: condition.description,
            visibility: self.visibility.unwrap_or(DEFAULT_VISIBILITY_M),
            timestamp,
        })
    }
}

pub struct OpenWeatherClient {
    http: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(endpoint: &str, api_key: String, timeout: Duration) -> Result<Self, WeatherError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(OpenWeatherClient {
            http,
            endpoint: Url::parse(endpoint)?,
            api_key,
        })
    }

    fn url_for(&self, at: Coordinate) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("lat", &at.latitude.to_string())
            .append_pair("lon", &at.longitude.to_string())
            .append_pair("appid", &self.api_key)
            .append_pair("units", "metric");
        url
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, at: Coordinate) -> Result<WeatherSnapshot, WeatherError> {
        let response = self.http.get(self.url_for(at)).send().await?;

        let status = response.status();
        if !status.is_success() {
            error!("weather API returned {} for {:?}", status, at);
            return Err(WeatherError::Status(status));
        }

        let body: CurrentWeather = response.json().await?;
        body.into_snapshot(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}
