use crate::analysis::risk::analyze;
use crate::error::ApiError;
use crate::models::coordinate::Coordinate;
use crate::models::responses::WeatherReportResponse;
use crate::state::AppState;

pub async fn weather_report(
    state: &AppState,
    at: Coordinate,
) -> Result<WeatherReportResponse, ApiError> {
    let weather = state.weather.current(at).await?;
    let analysis = analyze(&state.accidents, &weather);

    Ok(WeatherReportResponse {
        success: true,
        weather,
        analysis,
    })
}
