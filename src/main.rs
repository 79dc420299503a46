mod alerts;
mod analysis;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod weather;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::alerts::{AlertNotifier, LogNotifier, WebhookNotifier};
use crate::config::Config;
use crate::routes::index::MapPage;
use crate::state::{AppState, load_datasets};
use crate::weather::openweather::OpenWeatherClient;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    dotenv().ok();

    let config = Config::from_env()?;

    // no requests are served until both datasets are in memory
    let (accidents, hospitals) = load_datasets(&config).await?;

    let weather = OpenWeatherClient::new(
        &config.openweather_url,
        config.openweather_api_key.clone(),
        config.weather_timeout,
    )
    .context("failed to build weather client")?;

    let notifier: Arc<dyn AlertNotifier> = match &config.alert_webhook_url {
        Some(url) => {
            info!("forwarding emergency alerts to {}", url);
            Arc::new(WebhookNotifier::new(url, config.weather_timeout)?)
        }
        None => Arc::new(LogNotifier),
    };

    let state = web::Data::new(AppState::new(
        accidents,
        hospitals,
        config.hotspot,
        Arc::new(weather),
        notifier,
    ));
    info!(
        "accident hotspot at ({}, {})",
        state.hotspot.latitude, state.hotspot.longitude
    );

    let map_page = web::Data::new(MapPage(config.map_page.clone()));

    info!("Server running on http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(state.clone())
            .app_data(map_page.clone())
            .configure(routes::init)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
