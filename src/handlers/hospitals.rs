use crate::analysis::hospitals::find_nearby;
use crate::analysis::risk::analyze;
use crate::error::ApiError;
use crate::models::coordinate::Coordinate;
use crate::models::responses::NearbyHospitalsResponse;
use crate::state::AppState;

/// Nearby hospitals with the current weather and risk at `origin`.
pub async fn nearby_hospitals(
    state: &AppState,
    origin: Coordinate,
) -> Result<NearbyHospitalsResponse, ApiError> {
    let weather = state.weather.current(origin).await?;
    let weather_analysis = analyze(&state.accidents, &weather);
    let hospitals = find_nearby(&state.hospitals, origin, state.hotspot);

    Ok(NearbyHospitalsResponse {
        success: true,
        hospitals,
        user_location: origin.into(),
        weather,
        weather_analysis,
    })
}
