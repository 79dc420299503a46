use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::task;
use tracing::{info, warn};

use crate::alerts::AlertNotifier;
use crate::config::{Config, DEFAULT_HOTSPOT, HotspotSource};
use crate::models::accident::{AccidentRecord, centroid, load_accidents};
use crate::models::coordinate::Coordinate;
use crate::models::hospital::{HospitalRecord, load_hospitals};
use crate::weather::WeatherProvider;

/// Everything a request handler reads. Built once before the server binds and
/// never written afterwards.
pub struct AppState {
    pub accidents: Vec<AccidentRecord>,
    pub hospitals: Vec<HospitalRecord>,
    pub hotspot: Coordinate,
    pub weather: Arc<dyn WeatherProvider>,
    pub notifier: Arc<dyn AlertNotifier>,
}

impl AppState {
    pub fn new(
        accidents: Vec<AccidentRecord>,
        hospitals: Vec<HospitalRecord>,
        hotspot: HotspotSource,
        weather: Arc<dyn WeatherProvider>,
        notifier: Arc<dyn AlertNotifier>,
    ) -> Self {
        let hotspot = resolve_hotspot(hotspot, &accidents);
        AppState {
            accidents,
            hospitals,
            hotspot,
            weather,
            notifier,
        }
    }
}

pub fn resolve_hotspot(source: HotspotSource, accidents: &[AccidentRecord]) -> Coordinate {
    match source {
        HotspotSource::Fixed(at) => at,
        HotspotSource::Centroid => centroid(accidents).unwrap_or_else(|| {
            warn!("no accidents loaded, using default hotspot");
            DEFAULT_HOTSPOT
        }),
    }
}

/// Loads both datasets in parallel. Any failure aborts startup.
pub async fn load_datasets(config: &Config) -> Result<(Vec<AccidentRecord>, Vec<HospitalRecord>)> {
    let accidents_path = config.accidents_csv.clone();
    let hospitals_path = config.hospitals_csv.clone();

    let (accidents, hospitals) = tokio::try_join!(
        task::spawn_blocking(move || load_accidents(&accidents_path)),
        task::spawn_blocking(move || load_hospitals(&hospitals_path)),
    )
    .context("dataset loader panicked")?;

    let accidents = accidents.context("failed to load accidents")?;
    let hospitals = hospitals.context("failed to load hospitals")?;

    info!(
        "datasets ready: {} accidents, {} hospitals",
        accidents.len(),
        hospitals.len()
    );
    Ok((accidents, hospitals))
}
