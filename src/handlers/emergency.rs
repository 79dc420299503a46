use tracing::info;

use crate::error::{ApiError, MISSING_EMERGENCY_FIELDS};
use crate::models::emergency::{EmergencyAlert, EmergencyRequest};
use crate::models::responses::EmergencyResponse;
use crate::state::AppState;

pub fn send_alert(state: &AppState, req: EmergencyRequest) -> Result<EmergencyResponse, ApiError> {
    let (Some(user_location), Some(hospital)) = (req.user_location, req.hospital) else {
        return Err(ApiError::bad_request(MISSING_EMERGENCY_FIELDS));
    };

    info!(
        "emergency requested at ({}, {}) for {}",
        user_location.lat, user_location.lng, hospital.name
    );

    let message = format!("Alert successfully sent to {}", hospital.name);
    state
        .notifier
        .notify(EmergencyAlert::new(user_location, hospital))?;

    Ok(EmergencyResponse {
        success: true,
        message,
    })
}
