use std::{env, path::PathBuf, str::FromStr, time::Duration};

use anyhow::{Context, Result, anyhow, bail};

use crate::models::coordinate::Coordinate;

pub const DEFAULT_HOTSPOT: Coordinate = Coordinate {
    latitude: 12.9716,
    longitude: 77.5946,
};

/// Reference point for the "from accident prone area" distance in hospital listings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HotspotSource {
    Fixed(Coordinate),
    /// Mean position of the loaded accidents.
    Centroid,
}

impl FromStr for HotspotSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("centroid") {
            return Ok(HotspotSource::Centroid);
        }

        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("expected \"lat,lng\" or \"centroid\", got {:?}", s))?;
        let lat: f64 = lat.trim().parse().context("invalid hotspot latitude")?;
        let lng: f64 = lng.trim().parse().context("invalid hotspot longitude")?;
        if !lat.is_finite() || !lng.is_finite() {
            bail!("hotspot coordinates must be finite");
        }
        Ok(HotspotSource::Fixed(Coordinate::new(lat, lng)))
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub accidents_csv: PathBuf,
    pub hospitals_csv: PathBuf,
    pub map_page: PathBuf,
    pub openweather_api_key: String,
    pub openweather_url: String,
    pub weather_timeout: Duration,
    pub hotspot: HotspotSource,
    pub alert_webhook_url: Option<String>,
}

fn parsed<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Into<anyhow::Error>,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(Into::<anyhow::Error>::into)
            .with_context(|| format!("invalid value for {}: {:?}", name, raw)),
        Err(_) => Ok(default),
    }
}

fn text(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: text("HOST", "0.0.0.0"),
            port: parsed("PORT", 3000)?,
            accidents_csv: text("ACCIDENTS_CSV", "Accidents Sample.csv").into(),
            hospitals_csv: text("HOSPITALS_CSV", "Hospitals.csv").into(),
            map_page: text("MAP_PAGE", "map.html").into(),
            openweather_api_key: env::var("OPENWEATHER_API_KEY")
                .context("OPENWEATHER_API_KEY must be set")?,
            openweather_url: text(
                "OPENWEATHER_URL",
                "https://api.openweathermap.org/data/2.5/weather",
            ),
            weather_timeout: Duration::from_secs(parsed("WEATHER_TIMEOUT_SECS", 10)?),
            hotspot: parsed("ACCIDENT_HOTSPOT", HotspotSource::Fixed(DEFAULT_HOTSPOT))?,
            alert_webhook_url: env::var("ALERT_WEBHOOK_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
        })
    }
}
